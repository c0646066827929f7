//! Auto-increment preview arithmetic.
//!
//! Counters are exact unsigned integers. Adding the preview offset never goes
//! through floating point, so large counters do not drift. A negative offset
//! larger than the counter yields a signed value rather than clamping.

use coderule_model::AutoIncrementForm;
use std::fmt;

use crate::text::{pad_start, slot_width};

/// The value a counter would issue next: the larger of the configured start
/// and the externally supplied current number, each defaulting to 1.
pub fn effective_start(form: &AutoIncrementForm) -> u128 {
    let start = form.start.filter(|value| *value > 0).unwrap_or(1);
    let current = form.current_auto_number.filter(|value| *value > 0).unwrap_or(1);
    start.max(current)
}

/// A previewed counter value. Negative offsets may carry it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterValue {
    pub negative: bool,
    pub magnitude: u128,
}

impl CounterValue {
    pub fn positive(magnitude: u128) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }
}

impl fmt::Display for CounterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

/// `base + offset`, exact over the whole `i64` offset range.
///
/// Only the upper end saturates, at `u128::MAX`.
pub fn add_offset(base: u128, offset: i64) -> CounterValue {
    let step = u128::from(offset.unsigned_abs());
    if offset >= 0 {
        CounterValue::positive(base.saturating_add(step))
    } else if step <= base {
        CounterValue::positive(base - step)
    } else {
        CounterValue {
            negative: true,
            magnitude: step - base,
        }
    }
}

/// Render the previewed counter value, left-padded to the configured length.
///
/// Digits are never dropped: a value wider than `length` is returned whole.
/// A negative value keeps its sign and is padded as text, so `-4` in three
/// zero-padded digits reads `0-4`.
pub fn render_counter(form: &AutoIncrementForm, offset: i64) -> String {
    let value = add_offset(effective_start(form), offset).to_string();
    pad_start(
        &value,
        slot_width(form.length),
        form.padding_charactor.unwrap_or('0'),
    )
}
