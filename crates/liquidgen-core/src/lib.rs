//! liquidgen-core - Schema-driven header generation
//!
//! This crate turns a declarative schema of enumerations and record types
//! into one header file per type:
//! - [`Schema`] for loading the YAML/TOML/JSON schema document
//! - [`naming`] for snake_case to PascalCase/camelCase normalization
//! - [`Backend`] for target-language spellings and framing ([`CppBackend`])
//! - [`emit_enum`] / [`emit_struct`] for per-entry emission
//! - [`generate`] for the emit-all, validate-all phase
//! - [`write_generated`] for clearing output directories and writing files
//!
//! # Pipeline
//!
//! ```text
//! schema document
//!     ↓
//!  [Schema::from_file]
//!     ↓
//!  [emit_enum] per enum   ─┐
//!  [emit_struct] per struct ┤→ type universe
//!     ↓                    ─┘
//!  [validate]  (nothing written yet)
//!     ↓
//!  [write_generated] → <enum_dir>/*.h, <struct_dir>/*.h
//! ```
//!
//! No file is touched unless every entry emits and every cross-reference
//! resolves.

mod backend;
mod config;
mod emit;
mod error;
mod ir;
pub mod naming;
mod output;
mod pipeline;
mod schema;

pub use backend::{Backend, CppBackend, Primitive, backend_for};
pub use config::GeneratorConfig;
pub use emit::{EmittedUnit, emit_enum, emit_struct};
pub use error::{GenerateError, GenerateResult};
pub use ir::{EnumDecl, EnumMemberDecl, FieldDecl, FieldType, StructDecl};
pub use naming::{NameRole, change_case};
pub use output::{WriteSummary, prepare_dir, write_generated, write_units};
pub use pipeline::{GeneratedSchema, check, generate, run};
pub use schema::{EnumEntry, EnumMember, Field, Schema, SchemaFormat, StructEntry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Backend, CppBackend, EmittedUnit, GenerateError, GenerateResult, GeneratedSchema,
        GeneratorConfig, NameRole, Schema,
    };
}
