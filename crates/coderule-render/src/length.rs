//! Code length accounting.

use coderule_model::{FormBody, Segment, SegmentForm, decode};

use crate::content::parameter_placeholder;
use crate::text::slot_width;

/// Number of characters a form contributes to the generated code.
///
/// Literals count their content. Parameter values count the `${name}`
/// placeholder they render as, not their configured `length`. Every other
/// kind counts its configured `length` (capped like the rendered slot), or 0
/// when it is absent or zero.
pub fn code_length(form: &SegmentForm) -> usize {
    match &form.body {
        FormBody::Literal(literal) => literal
            .content
            .as_deref()
            .map_or(0, |content| content.chars().count()),
        FormBody::ParameterValue(parameter) => {
            parameter_placeholder(parameter.parameter_name.as_deref()).chars().count()
        }
        FormBody::Year(_)
        | FormBody::Month(_)
        | FormBody::DayOfMonth(_)
        | FormBody::DayOfWeek(_)
        | FormBody::DayOfYear(_)
        | FormBody::WeekOfYear(_)
        | FormBody::AutoIncrement(_)
        | FormBody::Checksum(_)
        | FormBody::UserInput(_) => slot_width(form.body.length()),
    }
}

/// [`code_length`] of a serialized segment; unknown kinds count zero.
pub fn segment_code_length(segment: &Segment) -> usize {
    if segment.known_kind().is_none() {
        return 0;
    }
    code_length(&decode(Some(segment)))
}

/// Total code length of a serialized rule. An empty rule has length 0.
pub fn total_length(segments: &[Segment]) -> usize {
    segments.iter().map(segment_code_length).sum()
}

/// Total code length of a list of forms.
pub fn forms_total_length(forms: &[SegmentForm]) -> usize {
    forms.iter().map(code_length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coderule_model::{SegmentKind, SegmentType};

    #[test]
    fn literal_counts_characters() {
        let segment = Segment::new(SegmentKind::Literal).with_setting("content", "SN-é");
        assert_eq!(segment_code_length(&segment), 4);
        assert_eq!(segment_code_length(&Segment::new(SegmentKind::Literal)), 0);
        // Characters outside the BMP count once, like the padding helpers.
        let astral = Segment::new(SegmentKind::Literal).with_setting("content", "A😀");
        assert_eq!(segment_code_length(&astral), 2);
    }

    #[test]
    fn parameter_value_counts_placeholder() {
        let segment = Segment::new(SegmentKind::ParameterValue)
            .with_setting("parameterName", "line")
            .with_setting("length", "2");
        assert_eq!(segment_code_length(&segment), "${line}".len());
    }

    #[test]
    fn configured_length_for_other_kinds() {
        let segment = Segment::new(SegmentKind::Month).with_setting("length", "2");
        assert_eq!(segment_code_length(&segment), 2);
        assert_eq!(segment_code_length(&Segment::new(SegmentKind::Month)), 0);
        let zero = Segment::new(SegmentKind::Checksum).with_setting("length", "0");
        assert_eq!(segment_code_length(&zero), 0);
        let huge = Segment::new(SegmentKind::UserInput).with_setting("length", "4000000000");
        assert_eq!(segment_code_length(&huge), coderule_model::LENGTH_MAX as usize);
    }

    #[test]
    fn unknown_kind_counts_zero() {
        let segment = Segment {
            kind: Some(SegmentType::Unknown("weekday".into())),
            ..Segment::default()
        }
        .with_setting("length", "5");
        assert_eq!(segment_code_length(&segment), 0);
    }

    #[test]
    fn empty_rule_has_zero_length() {
        assert_eq!(total_length(&[]), 0);
        assert_eq!(forms_total_length(&[]), 0);
    }
}
