// Anchor-patch - in-place replacement of anchor-delimited regions in text files

pub mod config;
pub mod error;
pub mod fsio;
pub mod patch;

pub use error::{AnchorKind, IoStage, PatchError, PatchResult};
pub use patch::{apply, PatchOutcome, PatchSpec, Region};

use anyhow::Result;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize tracing output for binary use.
///
/// Logs go to stderr so the success line on stdout stays parseable. The
/// level is taken from `RUST_LOG`, defaulting to `info`.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
