use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "nephele",
    "nephele_calendar",
    "nephele_disagg",
    "nephele_interp",
    "nephele_physics",
    "nephele_precip",
    "nephele_radiation",
];

/// Builds the default filter directives for a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing for the nephele crates.
///
/// `RUST_LOG` env var overrides `verbosity` if set.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!(e))
}
