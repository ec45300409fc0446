//! `liquidgen generate`

use anyhow::{Context, Result};
use liquidgen_core::GeneratorConfig;

pub fn run(config: &GeneratorConfig) -> Result<()> {
    println!("Generating headers from: {}", config.schema.display());

    let summary = liquidgen_core::run(config)
        .with_context(|| format!("Generation failed for {}", config.schema.display()))?;

    println!(
        "Wrote {} enum header(s) to {}",
        summary.enum_files.len(),
        config.enum_output_dir().display()
    );
    println!(
        "Wrote {} struct header(s) to {}",
        summary.struct_files.len(),
        config.struct_output_dir().display()
    );

    Ok(())
}
