//! Configuration resolution: file first, then command-line overrides

use anyhow::{Context, Result};
use liquidgen_core::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Default configuration file, used when present and `--config` is not given
const DEFAULT_CONFIG_FILE: &str = "liquidgen.toml";

pub fn resolve(
    config_path: Option<&Path>,
    schema: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            GeneratorConfig::from_file(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load config: {DEFAULT_CONFIG_FILE}"))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(schema) = schema {
        config.schema = schema;
    }
    if let Some(output) = output {
        config.output_root = output;
    }

    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
