//! Caret positioning for single-line text.

/// Maps an x coordinate (relative to the content box) to a byte offset in
/// `text`, using a fixed per-char advance width.
///
/// The caret lands before the char whose cell contains `x`, or after the
/// last char when `x` is past the end. Offsets always fall on char
/// boundaries. A host with a real text layout engine substitutes its own
/// measurement; this fixed-advance metric is exact for monospace fonts and
/// a usable approximation otherwise.
pub fn byte_offset_for_x(text: &str, x: f32, advance: f32) -> usize {
    if advance <= 0.0 || x <= 0.0 {
        return 0;
    }

    // Index of the caret slot: round to the nearest cell edge so clicking
    // the right half of a char places the caret after it.
    let slot = (x / advance).round() as usize;

    text.char_indices()
        .nth(slot)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(text.len())
}
