//! Generator configuration

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to read the schema from and where generated headers go.
///
/// Every field has a default, so an empty `liquidgen.toml` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Schema document (YAML, TOML or JSON)
    #[serde(default = "default_schema")]
    pub schema: PathBuf,

    /// Directory containing both output directories
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Enum headers, relative to `output_root`
    ///
    /// Cleared on every run. Only files directly inside are removed.
    #[serde(default = "default_enum_dir")]
    pub enum_dir: PathBuf,

    /// Struct headers, relative to `output_root`
    #[serde(default = "default_struct_dir")]
    pub struct_dir: PathBuf,

    /// Backend registry name
    #[serde(default = "default_backend")]
    pub backend: String,
}

fn default_schema() -> PathBuf {
    PathBuf::from("./LiquidCAN.yaml")
}

fn default_output_root() -> PathBuf {
    PathBuf::from("./Cpp-Implementation")
}

fn default_enum_dir() -> PathBuf {
    PathBuf::from("Infrastructure")
}

fn default_struct_dir() -> PathBuf {
    PathBuf::from("Model")
}

fn default_backend() -> String {
    "cpp".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            output_root: default_output_root(),
            enum_dir: default_enum_dir(),
            struct_dir: default_struct_dir(),
            backend: default_backend(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> GenerateResult<Self> {
        toml::from_str(content).map_err(|e| GenerateError::Config(e.to_string()))
    }

    /// Full path of the enum output directory
    pub fn enum_output_dir(&self) -> PathBuf {
        self.output_root.join(&self.enum_dir)
    }

    /// Full path of the struct output directory
    pub fn struct_output_dir(&self) -> PathBuf {
        self.output_root.join(&self.struct_dir)
    }

    /// Reject configurations that would write both kinds into one directory
    ///
    /// Each directory is cleared before it is written, so sharing one would
    /// delete the enum headers when the struct directory is prepared.
    pub fn validate(&self) -> GenerateResult<()> {
        if self.enum_output_dir() == self.struct_output_dir() {
            return Err(GenerateError::Config(format!(
                "enum_dir and struct_dir both resolve to {}",
                self.enum_output_dir().display()
            )));
        }
        if self.backend.is_empty() {
            return Err(GenerateError::Config("backend cannot be empty".into()));
        }
        Ok(())
    }
}
