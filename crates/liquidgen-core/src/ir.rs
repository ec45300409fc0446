//! Intermediate representation handed to backends.
//!
//! The emitters resolve schema entries into these declarations: names are
//! already normalized and primitive types already identified. A backend only
//! has to spell them.
//!
//! - [`EnumDecl`]: an enum with optional underlying primitive and ordered members
//! - [`StructDecl`]: a struct with ordered fields
//! - [`FieldType`]: primitive or reference to another declared type

use crate::backend::Primitive;

/// A resolved enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    /// PascalCase type name.
    pub name: String,

    /// Underlying storage type, if declared.
    pub underlying: Option<Primitive>,

    pub members: Vec<EnumMemberDecl>,
}

/// One enum member.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMemberDecl {
    /// PascalCase member name.
    pub name: String,

    pub value: Option<i64>,
}

/// A resolved struct declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    /// PascalCase type name.
    pub name: String,

    pub fields: Vec<FieldDecl>,
}

/// One struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// camelCase member name.
    pub name: String,

    pub ty: FieldType,

    /// Fixed array length, if the field is an array.
    pub length: Option<u32>,
}

/// Field type after primitive lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Primitive(Primitive),

    /// Reference to a user-declared enum or struct, by PascalCase name.
    Named(String),
}
