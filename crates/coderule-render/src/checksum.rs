//! CRC32 check digits.

use crate::text::pad_start;

/// Decimal CRC32 (IEEE) of `payload`, reduced to its last `length` digits and
/// left-padded with `padding` when the checksum has fewer digits than that.
pub fn checksum_digits(payload: &str, length: usize, padding: char) -> String {
    let digits = crc32fast::hash(payload.as_bytes()).to_string();
    let skip = digits.len().saturating_sub(length);
    pad_start(&digits[skip..], length, padding)
}
