use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::patch::PatchSpec;

/// Load a [`PatchSpec`] from a spec file.
///
/// The format is keyed on the file extension: `.json` parses as JSON,
/// anything else as TOML.
pub fn load_spec(path: impl AsRef<Path>) -> Result<PatchSpec> {
    let path = path.as_ref();
    debug!("Loading patch spec from: {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

    let spec = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON spec: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML spec: {}", path.display()))?
    };

    Ok(spec)
}
