use super::anchors::Region;

/// Builds the output buffer: prefix + replacement + suffix.
///
/// Bytes outside `[region.start, region.end)` are preserved exactly,
/// including whitespace and line endings. Pure function; offsets produced
/// by [`locate`](super::anchors::locate) on the same buffer are always
/// valid here.
pub fn splice(buffer: &str, region: Region, replacement: &str) -> String {
    debug_assert!(region.start <= region.end && region.end <= buffer.len());

    let mut output = String::with_capacity(buffer.len() - region.len() + replacement.len());
    output.push_str(&buffer[..region.start]);
    output.push_str(replacement);
    output.push_str(&buffer[region.end..]);
    output
}
