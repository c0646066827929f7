//! Display labels for segment kinds.
//!
//! Display strings belong to a localization layer; the core only defines the
//! lookup seam and how a label is chosen for a segment.

use crate::coerce::parse_leading_int;
use crate::{Segment, SegmentKind};

/// Shown when a kind has no display string.
pub const MISSING_LABEL: &str = "-";

/// Display-string lookup keyed by segment kind.
pub trait KindLabels {
    fn label(&self, kind: SegmentKind) -> Option<&str>;

    /// Prompt appended to user-input labels, e.g. `"(4 digits)"`.
    fn digits_prompt(&self, digits: u32) -> String {
        format!("({digits} digits)")
    }
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl KindLabels for EnglishLabels {
    fn label(&self, kind: SegmentKind) -> Option<&str> {
        Some(match kind {
            SegmentKind::Literal => "Literal",
            SegmentKind::ParameterValue => "Parameter value",
            SegmentKind::Year => "Year",
            SegmentKind::Month => "Month",
            SegmentKind::DayOfMonth => "Day of month",
            SegmentKind::DayOfWeek => "Day of week",
            SegmentKind::DayOfYear => "Day of year",
            SegmentKind::WeekOfYear => "Week of year",
            SegmentKind::AutoIncrement => "Auto increment",
            SegmentKind::Checksum => "Checksum",
            SegmentKind::UserInput => "User input",
        })
    }
}

pub fn kind_label(kind: SegmentKind, labels: &dyn KindLabels) -> String {
    labels.label(kind).unwrap_or(MISSING_LABEL).to_string()
}

/// Label shown above a segment in a rule view.
///
/// User-input segments are labelled with their parameter name followed by a
/// digit-count prompt; everything else uses the kind label.
pub fn segment_label(segment: &Segment, labels: &dyn KindLabels) -> String {
    let Some(kind) = segment.known_kind() else {
        return MISSING_LABEL.to_string();
    };
    if kind == SegmentKind::UserInput {
        let name = segment.setting("parameterName").unwrap_or_default();
        let digits = segment
            .setting("length")
            .and_then(parse_leading_int)
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(0);
        let prompt = labels.digits_prompt(digits);
        if name.is_empty() {
            return format!("{}{prompt}", kind_label(kind, labels));
        }
        return format!("{name}{prompt}");
    }
    kind_label(kind, labels)
}
