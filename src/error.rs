use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Identifies which anchor a lookup failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Start,
    End,
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnchorKind::Start => write!(f, "start"),
            AnchorKind::End => write!(f, "end"),
        }
    }
}

/// Identifies which I/O stage of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
    Read,
    Write,
}

impl fmt::Display for IoStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoStage::Read => write!(f, "read"),
            IoStage::Write => write!(f, "write"),
        }
    }
}

/// Main error type for anchor-patch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("{which} anchor not found in file content")]
    AnchorNotFound { which: AnchorKind },

    #[error("{which} anchor must be a non-empty literal")]
    EmptyAnchor { which: AnchorKind },

    #[error("{stage} failed for {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
        stage: IoStage,
    },
}

impl PatchError {
    /// Create a new anchor-not-found error
    pub fn anchor_not_found(which: AnchorKind) -> Self {
        Self::AnchorNotFound { which }
    }

    /// Create a new empty-anchor error
    pub fn empty_anchor(which: AnchorKind) -> Self {
        Self::EmptyAnchor { which }
    }

    /// Create a new IO error with path and stage context
    pub fn io_error(stage: IoStage, err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
            stage,
        }
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;
