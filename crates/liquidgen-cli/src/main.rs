//! liquidgen CLI - Header generator for LiquidCAN schemas
//!
//! Commands:
//! - `liquidgen generate` - Generate headers (default when no command is given)
//! - `liquidgen check` - Validate the schema without writing anything

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod generate;
mod logging;
mod settings;

#[derive(Parser)]
#[command(name = "liquidgen")]
#[command(author, version, about = "Generate C++ headers from a LiquidCAN schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a liquidgen.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Schema document (default: ./LiquidCAN.yaml)
    #[arg(short, long, global = true)]
    schema: Option<PathBuf>,

    /// Root directory for generated headers (default: ./Cpp-Implementation)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Log every emitted unit
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one header per enum and struct
    ///
    /// Both output directories are cleared (files only, not subdirectories)
    /// before the new headers are written.
    Generate,

    /// Load and validate the schema without writing any files
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let config = settings::resolve(cli.config.as_deref(), cli.schema, cli.output)?;

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            generate::run(&config)?;
        }
        Commands::Check => {
            check::run(&config)?;
        }
    }

    Ok(())
}
