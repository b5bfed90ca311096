pub mod anchors;
pub mod splice;

pub use anchors::{locate, Region};
pub use splice::splice;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PatchResult;
use crate::fsio;

/// A single edit: which file, which anchor literals delimit the region, and
/// what replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchSpec {
    /// File to patch in place
    pub path: PathBuf,

    /// Literal marking the first byte of the region to remove
    pub start_anchor: String,

    /// Literal marking the first byte after the region; its text is kept
    pub end_anchor: String,

    /// New content of the region; empty deletes the region
    #[serde(default)]
    pub replacement: String,

    /// Write through a temp file and rename instead of overwriting directly
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

fn default_atomic() -> bool {
    true
}

impl PatchSpec {
    pub fn new(
        path: impl Into<PathBuf>,
        start_anchor: impl Into<String>,
        end_anchor: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            start_anchor: start_anchor.into(),
            end_anchor: end_anchor.into(),
            replacement: replacement.into(),
            atomic: true,
        }
    }
}

/// Accounting for a successful patch, for logging and CLI reporting.
#[derive(Debug, Clone, Copy)]
pub struct PatchOutcome {
    /// Byte span that was replaced
    pub region: Region,
    /// Size of the removed region in bytes
    pub bytes_removed: usize,
    /// Size of the replacement in bytes
    pub bytes_inserted: usize,
}

/// Runs the whole pipeline: read, locate, splice, write.
///
/// The write step only runs after a successful splice, so a missing anchor
/// leaves the file byte-identical to before the invocation. Read and write
/// both use UTF-8.
pub fn apply(spec: &PatchSpec) -> PatchResult<PatchOutcome> {
    let buffer = fsio::read_to_string(&spec.path)?;
    let region = anchors::locate(&buffer, &spec.start_anchor, &spec.end_anchor)?;
    let output = splice::splice(&buffer, region, &spec.replacement);

    if spec.atomic {
        fsio::write_string_atomic(&spec.path, &output)?;
    } else {
        fsio::write_string(&spec.path, &output)?;
    }

    info!(
        path = %spec.path.display(),
        removed = region.len(),
        inserted = spec.replacement.len(),
        "patched anchor-delimited region"
    );

    Ok(PatchOutcome {
        region,
        bytes_removed: region.len(),
        bytes_inserted: spec.replacement.len(),
    })
}
