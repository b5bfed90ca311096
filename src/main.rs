use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use anchor_patch::{config, patch, PatchSpec};

/// Replace the region between two anchor literals in a text file, in place.
///
/// The region runs from the first occurrence of the start anchor up to (but
/// not including) the first occurrence of the end anchor at or after it.
#[derive(Parser, Debug)]
#[command(name = "anchor-patch", version, about)]
struct Cli {
    /// Load the whole edit from a TOML or JSON spec file
    #[arg(long, conflicts_with_all = ["file", "start", "end", "replacement", "replacement_file"])]
    spec: Option<PathBuf>,

    /// File to patch in place
    #[arg(long, required_unless_present = "spec")]
    file: Option<PathBuf>,

    /// Literal marking the first byte of the region to replace
    #[arg(long, required_unless_present = "spec")]
    start: Option<String>,

    /// Literal marking the first byte after the region; its text is kept
    #[arg(long, required_unless_present = "spec")]
    end: Option<String>,

    /// Replacement text; empty deletes the region
    #[arg(long, default_value = "", conflicts_with = "replacement_file")]
    replacement: String,

    /// Read the replacement text from a file instead
    #[arg(long)]
    replacement_file: Option<PathBuf>,

    /// Overwrite the target directly instead of temp-file-and-rename
    #[arg(long)]
    no_atomic: bool,
}

fn main() -> Result<()> {
    anchor_patch::init_with_logger(true)?;

    let cli = Cli::parse();
    let spec = build_spec(cli)?;

    info!(
        "anchor-patch v{} patching {}",
        anchor_patch::version(),
        spec.path.display()
    );

    let outcome = patch::apply(&spec)
        .with_context(|| format!("Failed to patch {}", spec.path.display()))?;

    println!(
        "patched {}: -{} +{} bytes at offset {}",
        spec.path.display(),
        outcome.bytes_removed,
        outcome.bytes_inserted,
        outcome.region.start
    );

    Ok(())
}

fn build_spec(cli: Cli) -> Result<PatchSpec> {
    if let Some(spec_path) = cli.spec {
        let mut spec = config::load_spec(&spec_path)?;
        if cli.no_atomic {
            spec.atomic = false;
        }
        return Ok(spec);
    }

    let replacement = match cli.replacement_file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read replacement file: {}", path.display()))?,
        None => cli.replacement,
    };

    // clap enforces these unless --spec is given, which returned above.
    let (Some(file), Some(start), Some(end)) = (cli.file, cli.start, cli.end) else {
        bail!("either --spec or all of --file, --start and --end are required");
    };

    Ok(PatchSpec {
        path: file,
        start_anchor: start,
        end_anchor: end,
        replacement,
        atomic: !cli.no_atomic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_conflicts_with_inline_flags() {
        assert!(Cli::try_parse_from([
            "anchor-patch",
            "--spec",
            "edit.toml",
            "--replacement",
            "NEW"
        ])
        .is_err());

        assert!(Cli::try_parse_from([
            "anchor-patch",
            "--spec",
            "edit.toml",
            "--replacement-file",
            "new.txt"
        ])
        .is_err());

        assert!(Cli::try_parse_from(["anchor-patch", "--spec", "edit.toml", "--no-atomic"]).is_ok());
    }

    #[test]
    fn test_inline_flags_require_file_start_end() {
        assert!(Cli::try_parse_from(["anchor-patch", "--file", "a.txt", "--start", "s"]).is_err());

        let cli = Cli::try_parse_from([
            "anchor-patch",
            "--file",
            "a.txt",
            "--start",
            "s",
            "--end",
            "e",
        ])
        .unwrap();
        let spec = build_spec(cli).unwrap();
        assert_eq!(spec.replacement, "");
        assert!(spec.atomic);
    }
}

