use tracing::debug;

use crate::error::{AnchorKind, PatchError, PatchResult};

/// Byte span of the region to replace: start anchor offset (inclusive) to
/// end anchor offset (exclusive). The end anchor's own text is not part of
/// the region and survives the patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Length of the region in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the region delimited by the two anchor literals.
///
/// The start anchor matches at its first occurrence in the buffer. The end
/// anchor is searched only at or after the start offset, so an end literal
/// that also appears earlier in the file never shortens the region. When an
/// anchor occurs more than once, the first match wins; picking anchors
/// unique enough to be unambiguous is the caller's responsibility.
pub fn locate(buffer: &str, start_anchor: &str, end_anchor: &str) -> PatchResult<Region> {
    if start_anchor.is_empty() {
        return Err(PatchError::empty_anchor(AnchorKind::Start));
    }
    if end_anchor.is_empty() {
        return Err(PatchError::empty_anchor(AnchorKind::End));
    }

    let start = buffer
        .find(start_anchor)
        .ok_or(PatchError::AnchorNotFound {
            which: AnchorKind::Start,
        })?;

    let end = buffer[start..]
        .find(end_anchor)
        .map(|offset| start + offset)
        .ok_or(PatchError::AnchorNotFound {
            which: AnchorKind::End,
        })?;

    debug!(start, end, "located anchor-delimited region");

    Ok(Region { start, end })
}
