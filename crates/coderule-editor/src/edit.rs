//! Field edits applied to a single form.
//!
//! Raw text from numeric inputs is normalised here, before validation ever
//! sees it: lengths and starts fall back to 1, padding keeps its last
//! character.

use coderule_model::coerce::{coerce_length_input, coerce_padding_input, coerce_start_input};
use coderule_model::{FormBody, ResetPeriod, SegmentForm, YearWidth};

use crate::error::{EditError, Result};

/// One change to a field of the focused form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Content(String),
    ParameterName(String),
    /// Raw length text.
    Length(String),
    YearWidth(YearWidth),
    Period(ResetPeriod),
    /// Raw padding text.
    Padding(String),
    /// Raw start text.
    Start(String),
    Algorithm(String),
    Note(String),
    UserInputValue(String),
}

impl FieldEdit {
    /// Wire name of the edited field.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::Content(_) => "content",
            FieldEdit::ParameterName(_) => "parameterName",
            FieldEdit::Length(_) | FieldEdit::YearWidth(_) => "length",
            FieldEdit::Period(_) => "period",
            FieldEdit::Padding(_) => "paddingCharactor",
            FieldEdit::Start(_) => "start",
            FieldEdit::Algorithm(_) => "algorithm",
            FieldEdit::Note(_) => "note",
            FieldEdit::UserInputValue(_) => "userInputValue",
        }
    }
}

/// Return a copy of `form` with `edit` applied.
pub fn apply_edit(
    form: &SegmentForm,
    edit: &FieldEdit,
    note_max_chars: usize,
) -> Result<SegmentForm> {
    let mut next = form.clone();
    let not_applicable = || EditError::NotApplicable {
        field: edit.field_name(),
        kind: form.kind().to_string(),
    };

    match (&mut next.body, edit) {
        (_, FieldEdit::Note(note)) => {
            let len = note.chars().count();
            if len > note_max_chars {
                return Err(EditError::NoteTooLong {
                    len,
                    max: note_max_chars,
                });
            }
            next.note = Some(note.clone());
        }
        (FormBody::Literal(literal), FieldEdit::Content(content)) => {
            literal.content = Some(content.clone());
        }
        (FormBody::ParameterValue(parameter), FieldEdit::ParameterName(name)) => {
            parameter.parameter_name = Some(name.clone());
        }
        (FormBody::UserInput(input), FieldEdit::ParameterName(name)) => {
            input.parameter_name = Some(name.clone());
        }
        (FormBody::UserInput(input), FieldEdit::Length(raw)) => {
            input.length = Some(coerce_length_input(raw));
        }
        (FormBody::UserInput(input), FieldEdit::UserInputValue(value)) => {
            let len = value.chars().count();
            if let Some(max) = input.length.map(|length| length as usize)
                && len > max
            {
                return Err(EditError::UserInputTooLong { len, max });
            }
            input.user_input_value = Some(value.clone());
        }
        (FormBody::Year(year), FieldEdit::YearWidth(width)) => {
            year.length = Some(width.digits());
        }
        (FormBody::AutoIncrement(counter), FieldEdit::Length(raw)) => {
            counter.length = Some(coerce_length_input(raw));
        }
        (FormBody::AutoIncrement(counter), FieldEdit::Period(period)) => {
            counter.period = Some(*period);
        }
        (FormBody::AutoIncrement(counter), FieldEdit::Padding(raw)) => {
            counter.padding_charactor = Some(coerce_padding_input(raw));
        }
        (FormBody::AutoIncrement(counter), FieldEdit::Start(raw)) => {
            counter.start = Some(coerce_start_input(raw));
        }
        (FormBody::Checksum(checksum), FieldEdit::Length(raw)) => {
            checksum.length = Some(coerce_length_input(raw));
        }
        (FormBody::Checksum(checksum), FieldEdit::Padding(raw)) => {
            checksum.padding_charactor = Some(coerce_padding_input(raw));
        }
        (FormBody::Checksum(checksum), FieldEdit::Algorithm(algorithm)) => {
            checksum.algorithm = Some(algorithm.clone());
        }
        _ => return Err(not_applicable()),
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coderule_model::{AutoIncrementForm, LENGTH_MAX, NOTE_MAX_CHARS, SegmentKind};

    fn counter() -> SegmentForm {
        SegmentForm::defaults(SegmentKind::AutoIncrement)
    }

    fn edit(form: &SegmentForm, change: &FieldEdit) -> Result<SegmentForm> {
        apply_edit(form, change, NOTE_MAX_CHARS)
    }

    fn counter_body(form: &SegmentForm) -> &AutoIncrementForm {
        match &form.body {
            FormBody::AutoIncrement(body) => body,
            other => panic!("expected autoIncrement, got {other:?}"),
        }
    }

    #[test]
    fn numeric_text_is_coerced() {
        let edited = edit(&counter(), &FieldEdit::Length(String::new())).unwrap();
        assert_eq!(counter_body(&edited).length, Some(1));
        let edited = edit(&counter(), &FieldEdit::Length("0".into())).unwrap();
        assert_eq!(counter_body(&edited).length, Some(1));
        let edited = edit(&counter(), &FieldEdit::Length("4000000000".into())).unwrap();
        assert_eq!(counter_body(&edited).length, Some(LENGTH_MAX));
        let edited = edit(&counter(), &FieldEdit::Start("12ab".into())).unwrap();
        assert_eq!(counter_body(&edited).start, Some(12));
        let edited = edit(&counter(), &FieldEdit::Padding("xy*".into())).unwrap();
        assert_eq!(counter_body(&edited).padding_charactor, Some('*'));
        let edited = edit(&counter(), &FieldEdit::Padding(String::new())).unwrap();
        assert_eq!(counter_body(&edited).padding_charactor, Some('0'));
    }

    #[test]
    fn foreign_fields_are_rejected() {
        let err = edit(&counter(), &FieldEdit::Content("A".into())).unwrap_err();
        assert_eq!(
            err,
            EditError::NotApplicable {
                field: "content",
                kind: "autoIncrement".into()
            }
        );
        let month = SegmentForm::defaults(SegmentKind::Month);
        assert!(edit(&month, &FieldEdit::Length("3".into())).is_err());
    }

    #[test]
    fn year_width_sets_length() {
        let year = SegmentForm::defaults(SegmentKind::Year);
        let edited = edit(&year, &FieldEdit::YearWidth(YearWidth::Full)).unwrap();
        assert_eq!(edited.body.length(), Some(4));
    }

    #[test]
    fn note_length_is_limited() {
        let form = SegmentForm::default_literal();
        let long = "n".repeat(NOTE_MAX_CHARS + 1);
        assert_eq!(
            edit(&form, &FieldEdit::Note(long)),
            Err(EditError::NoteTooLong {
                len: NOTE_MAX_CHARS + 1,
                max: NOTE_MAX_CHARS
            })
        );
        let edited = edit(&form, &FieldEdit::Note("lot prefix".into())).unwrap();
        assert_eq!(edited.note.as_deref(), Some("lot prefix"));
    }

    #[test]
    fn user_input_value_fits_length() {
        let input = edit(
            &SegmentForm::defaults(SegmentKind::UserInput),
            &FieldEdit::Length("3".into()),
        )
        .unwrap();
        assert!(edit(&input, &FieldEdit::UserInputValue("ABC".into())).is_ok());
        assert_eq!(
            edit(&input, &FieldEdit::UserInputValue("ABCD".into())),
            Err(EditError::UserInputTooLong { len: 4, max: 3 })
        );
    }
}
