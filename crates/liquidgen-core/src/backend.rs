//! Target-language backends.
//!
//! A [`Backend`] owns everything language specific: primitive spellings, the
//! file extension, declaration syntax and include-guard framing. Emitters
//! only produce [`EnumDecl`]/[`StructDecl`] values and hand them over, so a new
//! target language is a new `Backend` implementation.

mod cpp;

pub use cpp::CppBackend;

use crate::error::{GenerateError, GenerateResult};
use crate::ir::{EnumDecl, StructDecl};

/// Abstract primitive types a schema may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Uint8,
    Uint16,
    Uint32,
    Int8,
    Int16,
    Int32,
    Float,
    Char,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 8] = [
        Primitive::Uint8,
        Primitive::Uint16,
        Primitive::Uint32,
        Primitive::Int8,
        Primitive::Int16,
        Primitive::Int32,
        Primitive::Float,
        Primitive::Char,
    ];

    /// Look up a primitive by its schema name.
    ///
    /// `None` means the name is not built in and must refer to a declared type.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The schema spelling of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Uint8 => "uint8",
            Primitive::Uint16 => "uint16",
            Primitive::Uint32 => "uint32",
            Primitive::Int8 => "int8",
            Primitive::Int16 => "int16",
            Primitive::Int32 => "int32",
            Primitive::Float => "float",
            Primitive::Char => "char",
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Language-specific spelling and framing of generated types.
pub trait Backend {
    /// Registry name, e.g. `cpp`.
    fn name(&self) -> &'static str;

    /// Extension of generated files, including the dot.
    fn file_extension(&self) -> &'static str;

    /// Native spelling of a primitive.
    fn primitive_type(&self, primitive: Primitive) -> &'static str;

    /// Render an enum declaration (without framing).
    fn render_enum(&self, decl: &EnumDecl) -> String;

    /// Render a struct declaration (without framing).
    fn render_struct(&self, decl: &StructDecl) -> String;

    /// Wrap a rendered declaration into a complete file body.
    fn frame(&self, type_name: &str, body: &str) -> String;

    /// Native spelling of a primitive given by schema name.
    fn lookup_primitive(&self, name: &str) -> Option<&'static str> {
        Primitive::from_name(name).map(|p| self.primitive_type(p))
    }
}

/// Resolve a backend by its registry name.
pub fn backend_for(name: &str) -> GenerateResult<Box<dyn Backend>> {
    match name {
        "cpp" | "c++" => Ok(Box::new(CppBackend)),
        other => Err(GenerateError::UnknownBackend(other.to_string())),
    }
}
