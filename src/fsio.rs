use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{IoStage, PatchError, PatchResult};

/// Read a file's contents as a UTF-8 string.
///
/// The write side uses the same encoding, so content outside the patched
/// region round-trips byte-for-byte.
pub fn read_to_string(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(|e| PatchError::io_error(IoStage::Read, e, path))
}

/// Overwrite a file in place with string content.
pub fn write_string(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing to file: {}", path.display());

    fs::write(path, content).map_err(|e| PatchError::io_error(IoStage::Write, e, path))
}

/// Write string content through a temp file in the target's directory, then
/// rename it over the target. A failure part-way through leaves the original
/// file intact.
pub fn write_string_atomic(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing to file atomically: {}", path.display());

    // The temp file must live on the same filesystem as the target for the
    // rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| PatchError::io_error(IoStage::Write, e, path))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| PatchError::io_error(IoStage::Write, e, path))?;

    // The temp file is created with restrictive permissions; carry the
    // target's own mode over so the rename does not strip it. A target that
    // does not exist yet keeps the temp file's default mode.
    match fs::metadata(path) {
        Ok(metadata) => {
            fs::set_permissions(tmp.path(), metadata.permissions())
                .map_err(|e| PatchError::io_error(IoStage::Write, e, path))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(PatchError::io_error(IoStage::Write, e, path)),
    }

    tmp.persist(path)
        .map_err(|e| PatchError::io_error(IoStage::Write, e.error, path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_string(&file_path, "Hello, world!\n").unwrap();
        let content = read_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, world!\n");
    }

    #[test]
    fn test_atomic_write_replaces_contents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "old").unwrap();
        write_string_atomic(&file_path, "new").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");

        // No temp file is left behind in the directory.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("script.sh");

        fs::write(&file_path, "#!/bin/sh\necho old\n").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o755)).unwrap();

        write_string_atomic(&file_path, "#!/bin/sh\necho new\n").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "#!/bin/sh\necho new\n");
    }

    #[test]
    fn test_read_missing_file_reports_read_stage() {
        let dir = tempdir().unwrap();
        let result = read_to_string(dir.path().join("absent.txt"));
        assert!(matches!(
            result,
            Err(PatchError::Io {
                stage: IoStage::Read,
                ..
            })
        ));
    }
}
