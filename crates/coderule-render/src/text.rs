//! Character-based padding helpers.

use coderule_model::LENGTH_MAX;

/// Padding width for a configured `length`, capped at [`LENGTH_MAX`].
pub fn slot_width(length: Option<u32>) -> usize {
    length.map_or(0, |length| length.min(LENGTH_MAX) as usize)
}

/// Left-pad `value` with `fill` up to `width` characters.
///
/// Values already at or over `width` are returned unchanged, never truncated.
pub fn pad_start(value: &str, width: usize, fill: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut out: String = std::iter::repeat_n(fill, width - len).collect();
    out.push_str(value);
    out
}

/// Right-pad `value` with `fill` up to `width` characters.
pub fn pad_end(value: &str, width: usize, fill: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut out = value.to_string();
    out.extend(std::iter::repeat_n(fill, width - len));
    out
}
