//! Pure layout math shared by the controller and by hosts that want to precompute geometry.

use crate::ConfigError;

/// Uniform row height for `display_count` rows separated by `padding` inside a viewport of
/// `viewport_height`.
///
/// Rejects configurations that would produce a zero or negative height instead of handing
/// degenerate sizes to the host.
pub fn item_height(
    viewport_height: f32,
    display_count: usize,
    padding: f32,
) -> Result<f32, ConfigError> {
    if display_count == 0 {
        return Err(ConfigError::ZeroDisplayCount);
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(ConfigError::InvalidPadding(padding));
    }
    if !viewport_height.is_finite() || viewport_height < 0.0 {
        return Err(ConfigError::InvalidViewportHeight(viewport_height));
    }

    let gaps = (display_count - 1) as f32 * padding;
    let height = (viewport_height - gaps) / display_count as f32;
    if height > 0.0 && height.is_finite() {
        Ok(height)
    } else {
        Err(ConfigError::NonPositiveItemHeight {
            viewport_height,
            display_count,
            padding,
        })
    }
}

/// Total scrollable extent of `count` rows: `(count - 1) * padding + count * item_height`.
///
/// An empty dataset has no extent (the gap count does not go negative).
pub fn content_height(count: usize, item_height: f32, padding: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (count - 1) as f32 * padding + count as f32 * item_height
}

/// Maps an absolute scroll offset to the record bound to pool slot 0.
///
/// `ceil((scroll_offset_y - item_height) / (item_height + padding))`, clamped to
/// `[0, max(0, count - (display_count + 1))]`. The result depends only on its inputs, so large
/// jumps and repeated calls never drift.
pub fn window_start(
    scroll_offset_y: f32,
    item_height: f32,
    padding: f32,
    count: usize,
    display_count: usize,
) -> usize {
    let max = count.saturating_sub(display_count.saturating_add(1));
    let stride = item_height + padding;
    if max == 0 || !(stride > 0.0) {
        return 0;
    }

    let raw = ceil_to_i64((scroll_offset_y - item_height) / stride);
    if raw <= 0 {
        0
    } else {
        (raw as u64).min(max as u64) as usize
    }
}

/// Distance from the content top to the top of pool slot `slot` when slot 0 shows
/// `window_start`.
///
/// The row index is summed before scaling so the result rounds once. Past roughly 2^24 px of
/// content the host's `f32` coordinates can no longer place rows to the pixel.
pub fn slot_top(window_start: usize, slot: usize, item_height: f32, padding: f32) -> f32 {
    window_start.saturating_add(slot) as f32 * (item_height + padding)
}

// `f32::ceil` lives in std; this keeps the crate usable with `alloc` only. The `as` casts
// saturate, and NaN maps to 0.
fn ceil_to_i64(x: f32) -> i64 {
    if x.is_nan() {
        return 0;
    }
    let truncated = x as i64;
    if (truncated as f32) < x {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
