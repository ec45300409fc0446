//! Tracing subscriber set-up

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise the flags pick the default level.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "liquidgen={default_level},liquidgen_core={default_level}"
        ))
    });

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
