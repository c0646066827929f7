//! Coercion rules between string-valued settings and typed form fields.
//!
//! The wire format stores every value as a string. Which setting names are
//! read as numbers or characters is decided here and nowhere else.

use crate::form::LENGTH_MAX;

/// How a setting value is interpreted when decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Kept as-is.
    Text,
    /// Leading-integer parse; blank reads as zero.
    Integer,
    /// Exact unsigned decimal counter.
    Counter,
    /// Reduced to its last character.
    Character,
}

/// Setting names with a non-text interpretation. Anything else is text.
pub const SETTING_COERCIONS: &[(&str, Coercion)] = &[
    ("length", Coercion::Integer),
    ("start", Coercion::Integer),
    ("currentAutoNumber", Coercion::Counter),
    ("paddingCharactor", Coercion::Character),
];

pub fn coercion_for(name: &str) -> Coercion {
    SETTING_COERCIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(Coercion::Text, |(_, coercion)| *coercion)
}

/// A setting value after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercedValue {
    Text(String),
    Integer(i128),
    Counter(u128),
    Character(char),
    /// Blank character setting.
    Empty,
}

/// Coerce a raw setting value according to [`SETTING_COERCIONS`].
///
/// Returns `None` when the value cannot be read under its coercion, in which
/// case the caller keeps the raw text untouched.
pub fn coerce_setting(name: &str, raw: &str) -> Option<CoercedValue> {
    match coercion_for(name) {
        Coercion::Text => Some(CoercedValue::Text(raw.to_string())),
        Coercion::Integer => parse_leading_int(raw).map(CoercedValue::Integer),
        Coercion::Counter => parse_counter(raw).map(CoercedValue::Counter),
        Coercion::Character => Some(
            last_char(raw).map_or(CoercedValue::Empty, CoercedValue::Character),
        ),
    }
}

/// Parse the leading integer of `raw` the way a lenient web form does.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit (`"12px"` reads as 12, `"02"` as 2). A blank value reads as 0.
/// Returns `None` when no digits lead the value.
pub fn parse_leading_int(raw: &str) -> Option<i128> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Some(0);
    }
    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }
    // Overlong digit runs saturate instead of failing.
    let magnitude = digits.parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse an exact unsigned decimal counter (surrounding whitespace allowed).
pub fn parse_counter(raw: &str) -> Option<u128> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u128>().ok()
}

/// Final character of `raw`, if any.
pub fn last_char(raw: &str) -> Option<char> {
    raw.chars().last()
}

/// Normalise a length typed into an editor: blank, non-numeric and
/// non-positive input becomes 1, and anything wider than [`LENGTH_MAX`] is
/// capped.
pub fn coerce_length_input(raw: &str) -> u32 {
    parse_leading_int(raw.trim())
        .filter(|value| *value >= 1)
        .map_or(1, |value| {
            u32::try_from(value).map_or(LENGTH_MAX, |length| length.min(LENGTH_MAX))
        })
}

/// Normalise a counter start typed into an editor: blank, non-numeric and
/// non-positive input becomes 1.
pub fn coerce_start_input(raw: &str) -> u128 {
    parse_leading_int(raw.trim())
        .filter(|value| *value >= 1)
        .map_or(1, |value| u128::try_from(value).unwrap_or(1))
}

/// Normalise a padding character typed into an editor: only the last
/// character is kept and blank input falls back to `'0'`.
pub fn coerce_padding_input(raw: &str) -> char {
    last_char(raw).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_drives_coercion() {
        assert_eq!(coercion_for("length"), Coercion::Integer);
        assert_eq!(coercion_for("start"), Coercion::Integer);
        assert_eq!(coercion_for("paddingCharactor"), Coercion::Character);
        assert_eq!(coercion_for("currentAutoNumber"), Coercion::Counter);
        assert_eq!(coercion_for("content"), Coercion::Text);
    }

    #[test]
    fn leading_int_follows_lenient_parsing() {
        assert_eq!(parse_leading_int("02"), Some(2));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12px"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int(""), Some(0));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn counter_is_exact() {
        assert_eq!(
            parse_counter("123456789012345678901234567890"),
            Some(123_456_789_012_345_678_901_234_567_890)
        );
        assert_eq!(parse_counter("12.5"), None);
        assert_eq!(parse_counter(""), None);
    }

    #[test]
    fn padding_keeps_last_character() {
        assert_eq!(
            coerce_setting("paddingCharactor", "ab"),
            Some(CoercedValue::Character('b'))
        );
        assert_eq!(coerce_setting("paddingCharactor", ""), Some(CoercedValue::Empty));
        assert_eq!(coerce_padding_input("xyz"), 'z');
        assert_eq!(coerce_padding_input(""), '0');
    }

    #[test]
    fn editor_inputs_clamp_to_one() {
        assert_eq!(coerce_length_input(""), 1);
        assert_eq!(coerce_length_input("abc"), 1);
        assert_eq!(coerce_length_input("0"), 1);
        assert_eq!(coerce_length_input("-4"), 1);
        assert_eq!(coerce_length_input("6"), 6);
        assert_eq!(coerce_length_input("4000000000"), LENGTH_MAX);
        assert_eq!(coerce_length_input("99999999999999999999999"), LENGTH_MAX);
        assert_eq!(coerce_start_input("null"), 1);
        assert_eq!(coerce_start_input("25"), 25);
    }
}
