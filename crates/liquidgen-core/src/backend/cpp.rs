//! C++ header backend

use super::{Backend, Primitive};
use crate::ir::{EnumDecl, FieldType, StructDecl};
use std::fmt::Write;

/// Emits one `.h` file per type, guarded by `#ifndef NAME_H`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppBackend;

impl Backend for CppBackend {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        ".h"
    }

    fn primitive_type(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Uint8 => "uint8_t",
            Primitive::Uint16 => "uint16_t",
            Primitive::Uint32 => "uint32_t",
            Primitive::Int8 => "int8_t",
            Primitive::Int16 => "int16_t",
            Primitive::Int32 => "int32_t",
            Primitive::Float => "float_t",
            // Schema chars are raw bytes
            Primitive::Char => "int8_t",
        }
    }

    fn render_enum(&self, decl: &EnumDecl) -> String {
        let mut code = format!("enum {}", decl.name);
        if let Some(underlying) = decl.underlying {
            let _ = write!(code, " : {}", self.primitive_type(underlying));
        }
        code.push_str("\n{\n");

        for member in &decl.members {
            match member.value {
                Some(value) => {
                    let _ = writeln!(code, "\t{} = {},", member.name, value);
                }
                None => {
                    let _ = writeln!(code, "\t{},", member.name);
                }
            }
        }

        code.push_str("};\n");
        code
    }

    fn render_struct(&self, decl: &StructDecl) -> String {
        let mut code = format!("struct {}\n{{\n", decl.name);

        for field in &decl.fields {
            let ty = match &field.ty {
                FieldType::Primitive(p) => self.primitive_type(*p),
                FieldType::Named(name) => name.as_str(),
            };
            let _ = write!(code, "\t{} {}", ty, field.name);
            if let Some(length) = field.length {
                let _ = write!(code, "[{length}]");
            }
            code.push_str(";\n");
        }

        code.push_str("};\n");
        code
    }

    fn frame(&self, type_name: &str, body: &str) -> String {
        let guard_name = format!("{}_H", type_name.to_uppercase());
        let mut output = String::new();

        output.push_str("// Auto-generated by liquidgen\n");
        output.push_str("// DO NOT EDIT - regenerate with: liquidgen generate\n\n");
        let _ = writeln!(output, "#ifndef {guard_name}");
        let _ = writeln!(output, "#define {guard_name}\n");
        output.push_str("#include <cstdint>\n\n");
        output.push_str(body);
        output.push('\n');
        let _ = writeln!(output, "#endif // {guard_name}");

        output
    }
}

#[cfg(test)]
#[path = "cpp/cpp_tests.rs"]
mod cpp_tests;
