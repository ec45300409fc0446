//! Error types for liquidgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Every variant aborts the run. Variants raised before the write phase
/// guarantee that no output directory was touched.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Reading the schema or writing output failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema document could not be parsed
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// Schema file extension is not one of yaml, yml, toml, json
    #[error("unsupported schema format: {0}")]
    UnsupportedFormat(String),

    /// Enum declares an underlying type that is not a primitive
    #[error("Invalid data type: {data_type} (in enum {enum_name})")]
    InvalidDataType {
        enum_name: String,
        data_type: String,
    },

    /// Enum member without a value follows a member with one
    #[error("not every value in {enum_name} has a value!")]
    MissingValue { enum_name: String },

    /// Struct field references a type that is neither primitive nor declared
    #[error("{type_name} is not defined! This type is required for {required_by}")]
    UndefinedType {
        type_name: String,
        required_by: String,
    },

    /// The same type name is declared more than once
    #[error("type {0} is declared more than once")]
    DuplicateType(String),

    /// Array field with a length of zero
    #[error("field {field} in {struct_name} has an invalid array length of 0")]
    InvalidLength { struct_name: String, field: String },

    /// No backend is registered under this name
    #[error("unknown backend: {0}")]
    UnknownBackend(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            GenerateError::Io { .. } => 1,
            GenerateError::Parse { .. } => 2,
            GenerateError::UnsupportedFormat(_) => 3,
            GenerateError::InvalidDataType { .. } => 4,
            GenerateError::MissingValue { .. } => 5,
            GenerateError::UndefinedType { .. } => 6,
            GenerateError::DuplicateType(_) => 7,
            GenerateError::InvalidLength { .. } => 8,
            GenerateError::UnknownBackend(_) => 9,
            GenerateError::Config(_) => 10,
        }
    }

    /// Whether this error was raised while validating the schema, as opposed
    /// to reading it or writing output
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GenerateError::InvalidDataType { .. }
                | GenerateError::MissingValue { .. }
                | GenerateError::UndefinedType { .. }
                | GenerateError::DuplicateType(_)
                | GenerateError::InvalidLength { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
