#![allow(non_snake_case)]

use super::*;
use crate::ir::{EnumMemberDecl, FieldDecl};
use test_case::test_case;

#[test_case(Primitive::Uint8, "uint8_t")]
#[test_case(Primitive::Uint16, "uint16_t")]
#[test_case(Primitive::Uint32, "uint32_t")]
#[test_case(Primitive::Int8, "int8_t")]
#[test_case(Primitive::Int16, "int16_t")]
#[test_case(Primitive::Int32, "int32_t")]
#[test_case(Primitive::Float, "float_t")]
#[test_case(Primitive::Char, "int8_t")]
fn CppBackend___primitive_type___maps_correctly(primitive: Primitive, expected: &str) {
    assert_eq!(CppBackend.primitive_type(primitive), expected);
}

#[test]
fn CppBackend___render_enum___with_underlying_and_values() {
    let decl = EnumDecl {
        name: "DataType".into(),
        underlying: Some(Primitive::Uint8),
        members: vec![
            EnumMemberDecl {
                name: "Float32".into(),
                value: Some(0),
            },
            EnumMemberDecl {
                name: "Int32".into(),
                value: Some(1),
            },
        ],
    };

    let code = CppBackend.render_enum(&decl);

    assert_eq!(
        code,
        "enum DataType : uint8_t\n{\n\tFloat32 = 0,\n\tInt32 = 1,\n};\n"
    );
}

#[test]
fn CppBackend___render_enum___without_underlying_or_values() {
    let decl = EnumDecl {
        name: "Mode".into(),
        underlying: None,
        members: vec![EnumMemberDecl {
            name: "Idle".into(),
            value: None,
        }],
    };

    let code = CppBackend.render_enum(&decl);

    assert_eq!(code, "enum Mode\n{\n\tIdle,\n};\n");
}

#[test]
fn CppBackend___render_enum___negative_value() {
    let decl = EnumDecl {
        name: "Offset".into(),
        underlying: Some(Primitive::Int8),
        members: vec![EnumMemberDecl {
            name: "Back".into(),
            value: Some(-1),
        }],
    };

    assert!(CppBackend.render_enum(&decl).contains("\tBack = -1,\n"));
}

#[test]
fn CppBackend___render_struct___scalars_arrays_and_references() {
    let decl = StructDecl {
        name: "FieldRegistration".into(),
        fields: vec![
            FieldDecl {
                name: "fieldId".into(),
                ty: FieldType::Primitive(Primitive::Uint8),
                length: None,
            },
            FieldDecl {
                name: "fieldType".into(),
                ty: FieldType::Named("DataType".into()),
                length: None,
            },
            FieldDecl {
                name: "fieldName".into(),
                ty: FieldType::Primitive(Primitive::Char),
                length: Some(61),
            },
        ],
    };

    let code = CppBackend.render_struct(&decl);

    assert_eq!(
        code,
        "struct FieldRegistration\n{\n\tuint8_t fieldId;\n\tDataType fieldType;\n\tint8_t fieldName[61];\n};\n"
    );
}

#[test]
fn CppBackend___render_struct___empty___has_braces_only() {
    let decl = StructDecl {
        name: "Empty".into(),
        fields: vec![],
    };

    assert_eq!(CppBackend.render_struct(&decl), "struct Empty\n{\n};\n");
}

#[test]
fn CppBackend___frame___wraps_in_guard() {
    let framed = CppBackend.frame("NodeInfoRes", "struct NodeInfoRes\n{\n};\n");

    assert!(framed.contains("#ifndef NODEINFORES_H\n#define NODEINFORES_H\n\n"));
    assert!(framed.contains("#include <cstdint>\n\nstruct NodeInfoRes\n"));
    assert!(framed.ends_with("};\n\n#endif // NODEINFORES_H\n"));
}

#[test]
fn CppBackend___frame___guard_precedes_body() {
    let framed = CppBackend.frame("Status", "enum Status\n{\n};\n");

    let guard = framed.find("#ifndef STATUS_H").unwrap();
    let body = framed.find("enum Status").unwrap();
    let end = framed.find("#endif").unwrap();

    assert!(guard < body);
    assert!(body < end);
}
