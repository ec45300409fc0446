//! Per-entry emitters.
//!
//! [`emit_enum`] and [`emit_struct`] turn one schema entry into an
//! [`EmittedUnit`]: the complete framed file text, plus the user-defined type
//! names a struct depends on. Emitters never touch the file system.

use crate::backend::{Backend, Primitive};
use crate::error::{GenerateError, GenerateResult};
use crate::ir::{EnumDecl, EnumMemberDecl, FieldDecl, FieldType, StructDecl};
use crate::naming::{NameRole, change_case};
use crate::schema::{EnumEntry, StructEntry};

/// Generated text for one schema entry, prior to being written.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedUnit {
    /// Name as declared in the schema.
    pub name: String,

    /// Normalized type identifier; also the output file stem.
    pub type_name: String,

    /// Complete file content.
    pub code: String,

    /// Declared names of non-primitive field types, in field order.
    /// Duplicates are kept. Always empty for enums.
    pub required_types: Vec<String>,
}

/// Emit one enum.
///
/// Fails immediately if the underlying type is not a primitive, or if a member
/// without a value follows a member that has one.
pub fn emit_enum(backend: &dyn Backend, entry: &EnumEntry) -> GenerateResult<EmittedUnit> {
    let type_name = change_case(&entry.name, NameRole::Type);

    let underlying = match entry.data_type.as_deref() {
        Some(data_type) => Some(Primitive::from_name(data_type).ok_or_else(|| {
            GenerateError::InvalidDataType {
                enum_name: type_name.clone(),
                data_type: data_type.to_string(),
            }
        })?),
        None => None,
    };

    let mut has_value = false;
    let mut members = Vec::with_capacity(entry.values.len());
    for member in &entry.values {
        match member.value {
            Some(_) => has_value = true,
            None if has_value => {
                return Err(GenerateError::MissingValue {
                    enum_name: type_name,
                });
            }
            None => {}
        }

        members.push(EnumMemberDecl {
            name: change_case(&member.name, NameRole::EnumMember),
            value: member.value,
        });
    }

    let decl = EnumDecl {
        name: type_name,
        underlying,
        members,
    };
    let code = backend.frame(&decl.name, &backend.render_enum(&decl));

    tracing::debug!(name = %entry.name, members = decl.members.len(), "emitted enum");

    Ok(EmittedUnit {
        name: entry.name.clone(),
        type_name: decl.name,
        code,
        required_types: Vec::new(),
    })
}

/// Emit one struct.
///
/// Field types that are not primitives are emitted as type references and
/// recorded in [`EmittedUnit::required_types`]; whether they exist is checked
/// later, once every entry has been emitted.
pub fn emit_struct(backend: &dyn Backend, entry: &StructEntry) -> EmittedUnit {
    let type_name = change_case(&entry.name, NameRole::Type);

    let mut required_types = Vec::new();
    let fields = entry
        .fields
        .iter()
        .map(|field| {
            let ty = match Primitive::from_name(&field.type_name) {
                Some(primitive) => FieldType::Primitive(primitive),
                None => {
                    required_types.push(field.type_name.clone());
                    FieldType::Named(change_case(&field.type_name, NameRole::Type))
                }
            };

            FieldDecl {
                name: change_case(&field.name, NameRole::StructMember),
                ty,
                length: field.length,
            }
        })
        .collect();

    let decl = StructDecl {
        name: type_name,
        fields,
    };
    let code = backend.frame(&decl.name, &backend.render_struct(&decl));

    tracing::debug!(
        name = %entry.name,
        fields = decl.fields.len(),
        requires = ?required_types,
        "emitted struct"
    );

    EmittedUnit {
        name: entry.name.clone(),
        type_name: decl.name,
        code,
        required_types,
    }
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
