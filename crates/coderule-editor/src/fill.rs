//! Filling in user-input values on a serialized rule.

use coderule_model::coerce::parse_leading_int;
use coderule_model::{Segment, SegmentKind};
use tracing::debug;

use crate::error::{EditError, Result};

/// Set the `userInputValue` of a user-input segment.
///
/// Values longer than the segment's `length` are refused. A segment without
/// a readable length accepts any value.
pub fn fill_user_input(segment: &Segment, value: &str) -> Result<Segment> {
    if segment.known_kind() != Some(SegmentKind::UserInput) {
        return Err(EditError::NotApplicable {
            field: "userInputValue",
            kind: segment
                .kind
                .as_ref()
                .map_or_else(|| "untyped".to_string(), ToString::to_string),
        });
    }
    let len = value.chars().count();
    let max = segment
        .setting("length")
        .and_then(parse_leading_int)
        .and_then(|length| usize::try_from(length).ok());
    if let Some(max) = max
        && len > max
    {
        return Err(EditError::UserInputTooLong { len, max });
    }
    debug!(len, "filled user input");
    Ok(segment.clone().with_setting("userInputValue", value))
}

/// Fill the user-input segment at `index` of a rule.
pub fn fill_user_input_at(segments: &[Segment], index: usize, value: &str) -> Result<Vec<Segment>> {
    let segment = segments.get(index).ok_or(EditError::IndexOutOfRange {
        index,
        len: segments.len(),
    })?;
    let filled = fill_user_input(segment, value)?;
    let mut next = segments.to_vec();
    next[index] = filled;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Segment {
        Segment::new(SegmentKind::UserInput)
            .with_setting("parameterName", "batch")
            .with_setting("length", "3")
    }

    #[test]
    fn fills_and_replaces_value() {
        let filled = fill_user_input(&batch(), "AB").unwrap();
        assert_eq!(filled.setting("userInputValue"), Some("AB"));
        let refilled = fill_user_input(&filled, "XYZ").unwrap();
        assert_eq!(refilled.setting("userInputValue"), Some("XYZ"));
        assert_eq!(
            refilled
                .settings
                .iter()
                .filter(|setting| setting.name == "userInputValue")
                .count(),
            1
        );
    }

    #[test]
    fn refuses_overlong_value() {
        assert_eq!(
            fill_user_input(&batch(), "ABCD"),
            Err(EditError::UserInputTooLong { len: 4, max: 3 })
        );
    }

    #[test]
    fn only_user_input_segments() {
        let literal = Segment::new(SegmentKind::Literal);
        assert!(matches!(
            fill_user_input(&literal, "A"),
            Err(EditError::NotApplicable { kind, .. }) if kind == "literal"
        ));
    }

    #[test]
    fn fills_by_index() {
        let rule = vec![Segment::new(SegmentKind::Literal), batch()];
        let filled = fill_user_input_at(&rule, 1, "7").unwrap();
        assert_eq!(filled[1].setting("userInputValue"), Some("7"));
        assert_eq!(
            fill_user_input_at(&rule, 2, "7"),
            Err(EditError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
