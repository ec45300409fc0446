//! Schema document model and loading

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root of a schema document.
///
/// Both sections are optional; a document without either yields an empty
/// generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "enum")]
    pub enums: Vec<EnumEntry>,

    #[serde(default, rename = "struct")]
    pub structs: Vec<StructEntry>,
}

/// One enumeration type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumEntry {
    pub name: String,

    /// Primitive name of the underlying storage type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default)]
    pub values: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// One record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructEntry {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    /// Primitive name or the name of a declared enum/struct
    #[serde(rename = "type")]
    pub type_name: String,

    /// Fixed array length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

/// Serialization format of a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Toml,
    Json,
}

impl SchemaFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> GenerateResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(SchemaFormat::Yaml),
            "toml" => Ok(SchemaFormat::Toml),
            "json" => Ok(SchemaFormat::Json),
            _ => Err(GenerateError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Schema {
    /// Load a schema from a file, choosing the parser by extension
    pub fn from_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let path = path.as_ref();
        let format = SchemaFormat::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;

        tracing::debug!(path = %path.display(), ?format, "loading schema");

        Self::from_str_with_format(&content, format).map_err(|err| match err {
            GenerateError::Parse { message, .. } => GenerateError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse a schema from text in the given format
    pub fn from_str_with_format(content: &str, format: SchemaFormat) -> GenerateResult<Self> {
        match format {
            SchemaFormat::Yaml => Self::from_yaml_str(content),
            SchemaFormat::Toml => Self::from_toml_str(content),
            SchemaFormat::Json => Self::from_json_str(content),
        }
    }

    /// Parse a YAML schema
    pub fn from_yaml_str(content: &str) -> GenerateResult<Self> {
        // An empty YAML document is a null, not an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| parse_error("<yaml>", e))
    }

    /// Parse a TOML schema (`[[enum]]` / `[[struct]]` tables)
    pub fn from_toml_str(content: &str) -> GenerateResult<Self> {
        toml::from_str(content).map_err(|e| parse_error("<toml>", e))
    }

    /// Parse a JSON schema
    pub fn from_json_str(content: &str) -> GenerateResult<Self> {
        serde_json::from_str(content).map_err(|e| parse_error("<json>", e))
    }

    /// Whether the document declares no types at all
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.structs.is_empty()
    }
}

fn parse_error(path: &str, err: impl std::fmt::Display) -> GenerateError {
    GenerateError::Parse {
        path: path.to_string(),
        message: err.to_string(),
    }
}
