//! `liquidgen check`

use anyhow::{Context, Result};
use liquidgen_core::GeneratorConfig;

pub fn run(config: &GeneratorConfig) -> Result<()> {
    println!("Checking schema: {}", config.schema.display());

    let generated = liquidgen_core::check(config)
        .with_context(|| format!("Schema check failed for {}", config.schema.display()))?;

    println!(
        "Schema is valid: {} enum(s), {} struct(s)",
        generated.enums.len(),
        generated.structs.len()
    );

    Ok(())
}
