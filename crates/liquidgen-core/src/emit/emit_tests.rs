#![allow(non_snake_case)]

use super::*;
use crate::backend::CppBackend;
use crate::schema::{EnumMember, Field};

fn member(name: &str, value: Option<i64>) -> EnumMember {
    EnumMember {
        name: name.into(),
        value,
    }
}

fn field(name: &str, type_name: &str, length: Option<u32>) -> Field {
    Field {
        name: name.into(),
        type_name: type_name.into(),
        length,
    }
}

fn enum_entry(name: &str, data_type: Option<&str>, values: Vec<EnumMember>) -> EnumEntry {
    EnumEntry {
        name: name.into(),
        data_type: data_type.map(str::to_string),
        values,
    }
}

// emit_enum tests

#[test]
fn emit_enum___uint8_unvalued___emits_underlying_and_ordered_members() {
    let entry = enum_entry(
        "parameter_set_status",
        Some("uint8"),
        vec![member("success", None), member("locked", None), member("invalid_value", None)],
    );

    let unit = emit_enum(&CppBackend, &entry).unwrap();

    assert_eq!(unit.type_name, "ParameterSetStatus");
    assert!(unit.code.contains(
        "enum ParameterSetStatus : uint8_t\n{\n\tSuccess,\n\tLocked,\n\tInvalidValue,\n};\n"
    ));
}

#[test]
fn emit_enum___all_valued___emits_values() {
    let entry = enum_entry(
        "data_type",
        Some("uint8"),
        vec![member("float32", Some(0)), member("int32", Some(1))],
    );

    let unit = emit_enum(&CppBackend, &entry).unwrap();

    assert!(unit.code.contains("\tFloat32 = 0,\n\tInt32 = 1,\n"));
}

#[test]
fn emit_enum___no_underlying_type___plain_enum() {
    let entry = enum_entry("mode", None, vec![member("idle", None)]);

    let unit = emit_enum(&CppBackend, &entry).unwrap();

    assert!(unit.code.contains("enum Mode\n{\n"));
}

#[test]
fn emit_enum___values_start_midway___accepted() {
    let entry = enum_entry(
        "level",
        None,
        vec![member("low", None), member("mid", Some(5)), member("high", Some(9))],
    );

    let unit = emit_enum(&CppBackend, &entry).unwrap();

    assert!(unit.code.contains("\tLow,\n\tMid = 5,\n\tHigh = 9,\n"));
}

#[test]
fn emit_enum___unvalued_after_valued___returns_missing_value() {
    let entry = enum_entry(
        "can_message_type",
        None,
        vec![member("first", None), member("second", Some(5)), member("third", None)],
    );

    let err = emit_enum(&CppBackend, &entry).unwrap_err();

    assert!(matches!(&err, GenerateError::MissingValue { enum_name } if enum_name == "CanMessageType"));
    assert!(err.to_string().contains("CanMessageType"));
}

#[test]
fn emit_enum___unknown_underlying_type___returns_invalid_data_type() {
    let entry = enum_entry("status", Some("uint64"), vec![member("ok", None)]);

    let err = emit_enum(&CppBackend, &entry).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidDataType { data_type, .. } if data_type == "uint64"));
}

#[test]
fn emit_enum___user_type_as_underlying___returns_invalid_data_type() {
    let entry = enum_entry("status", Some("data_type"), vec![]);

    assert!(emit_enum(&CppBackend, &entry).is_err());
}

#[test]
fn emit_enum___never_requires_types() {
    let entry = enum_entry("status", Some("int16"), vec![member("ok", Some(0))]);

    let unit = emit_enum(&CppBackend, &entry).unwrap();

    assert!(unit.required_types.is_empty());
    assert_eq!(unit.name, "status");
}

#[test]
fn emit_enum___frames_with_guard() {
    let entry = enum_entry("data_type", None, vec![]);

    let unit = emit_enum(&CppBackend, &entry).unwrap();

    assert!(unit.code.contains("#ifndef DATATYPE_H"));
    assert!(unit.code.contains("#include <cstdint>"));
}

// emit_struct tests

#[test]
fn emit_struct___primitive_field___uses_native_spelling() {
    let entry = StructEntry {
        name: "heartbeat".into(),
        fields: vec![field("counter", "uint16", None)],
    };

    let unit = emit_struct(&CppBackend, &entry);

    assert!(unit.code.contains("\tuint16_t counter;\n"));
    assert!(unit.required_types.is_empty());
}

#[test]
fn emit_struct___length___emits_fixed_array() {
    let entry = StructEntry {
        name: "payload".into(),
        fields: vec![field("data", "uint8", Some(4)), field("size", "uint8", None)],
    };

    let unit = emit_struct(&CppBackend, &entry);

    assert!(unit.code.contains("\tuint8_t data[4];\n"));
    assert!(unit.code.contains("\tuint8_t size;\n"));
}

#[test]
fn emit_struct___user_type___normalizes_and_records_original_name() {
    let entry = StructEntry {
        name: "field_registration".into(),
        fields: vec![
            field("field_type", "data_type", None),
            field("field_name", "char", Some(61)),
        ],
    };

    let unit = emit_struct(&CppBackend, &entry);

    assert_eq!(unit.type_name, "FieldRegistration");
    assert!(unit.code.contains("\tDataType fieldType;\n"));
    assert!(unit.code.contains("\tint8_t fieldName[61];\n"));
    assert_eq!(unit.required_types, vec!["data_type".to_string()]);
}

#[test]
fn emit_struct___repeated_reference___keeps_duplicates_in_order() {
    let entry = StructEntry {
        name: "pair".into(),
        fields: vec![
            field("left", "node", None),
            field("kind", "kind", None),
            field("right", "node", None),
        ],
    };

    let unit = emit_struct(&CppBackend, &entry);

    assert_eq!(unit.required_types, vec!["node", "kind", "node"]);
}

#[test]
fn emit_struct___array_of_user_type___emits_array_reference() {
    let entry = StructEntry {
        name: "group".into(),
        fields: vec![field("entries", "field_entry", Some(8))],
    };

    let unit = emit_struct(&CppBackend, &entry);

    assert!(unit.code.contains("\tFieldEntry entries[8];\n"));
}
