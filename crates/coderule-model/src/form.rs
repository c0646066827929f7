//! Typed, in-memory segment forms used by editing logic.
//!
//! A form holds only the fields that belong to its kind. Fields absent from
//! the serialized settings stay `None`; decoding never fills in defaults.
//! Settings that do not belong to the kind, or whose value could not be read
//! under its coercion, are carried in [`SegmentForm::extra`] so they survive
//! a decode/encode cycle.

use crate::coerce::CoercedValue;
use crate::{ResetPeriod, SegmentKind, Setting};

/// Counter scope; the only scope a rule editor offers.
pub const DEFAULT_SCOPE: &str = "plant";

/// The checksum algorithm a rule editor offers.
pub const CRC32_ALGORITHM: &str = "CRC32";

/// Widest slot a padded segment may occupy.
pub const LENGTH_MAX: u32 = 255;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralForm {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterValueForm {
    pub parameter_name: Option<String>,
    /// Used for total-length bookkeeping by callers; never pads the placeholder.
    pub length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearForm {
    pub length: Option<u32>,
}

/// Month, day-of-month, day-of-week, day-of-year and week-of-year forms.
///
/// The user cannot configure these; `length` is injected by type-switch
/// defaults and only feeds length accounting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarForm {
    pub length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoIncrementForm {
    pub scope: Option<String>,
    pub period: Option<ResetPeriod>,
    pub length: Option<u32>,
    pub padding_charactor: Option<char>,
    pub start: Option<u128>,
    /// Supplied by the counter-issuing system, never edited by the user.
    pub current_auto_number: Option<u128>,
}

impl AutoIncrementForm {
    /// Largest start value that fits in `length` digits (`10^length - 1`).
    ///
    /// Saturates at `u128::MAX` for lengths beyond what `u128` can hold.
    pub fn max_start(length: u32) -> u128 {
        10u128
            .checked_pow(length)
            .map_or(u128::MAX, |bound| bound - 1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumForm {
    pub algorithm: Option<String>,
    pub length: Option<u32>,
    pub padding_charactor: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInputForm {
    pub parameter_name: Option<String>,
    pub length: Option<u32>,
    /// Only populated while a code's values are being filled in.
    pub user_input_value: Option<String>,
}

/// Kind-specific fields of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormBody {
    Literal(LiteralForm),
    ParameterValue(ParameterValueForm),
    Year(YearForm),
    Month(CalendarForm),
    DayOfMonth(CalendarForm),
    DayOfWeek(CalendarForm),
    DayOfYear(CalendarForm),
    WeekOfYear(CalendarForm),
    AutoIncrement(AutoIncrementForm),
    Checksum(ChecksumForm),
    UserInput(UserInputForm),
}

impl FormBody {
    pub fn kind(&self) -> SegmentKind {
        match self {
            FormBody::Literal(_) => SegmentKind::Literal,
            FormBody::ParameterValue(_) => SegmentKind::ParameterValue,
            FormBody::Year(_) => SegmentKind::Year,
            FormBody::Month(_) => SegmentKind::Month,
            FormBody::DayOfMonth(_) => SegmentKind::DayOfMonth,
            FormBody::DayOfWeek(_) => SegmentKind::DayOfWeek,
            FormBody::DayOfYear(_) => SegmentKind::DayOfYear,
            FormBody::WeekOfYear(_) => SegmentKind::WeekOfYear,
            FormBody::AutoIncrement(_) => SegmentKind::AutoIncrement,
            FormBody::Checksum(_) => SegmentKind::Checksum,
            FormBody::UserInput(_) => SegmentKind::UserInput,
        }
    }

    /// A body of `kind` with every field absent.
    pub fn empty(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Literal => FormBody::Literal(LiteralForm::default()),
            SegmentKind::ParameterValue => FormBody::ParameterValue(ParameterValueForm::default()),
            SegmentKind::Year => FormBody::Year(YearForm::default()),
            SegmentKind::Month => FormBody::Month(CalendarForm::default()),
            SegmentKind::DayOfMonth => FormBody::DayOfMonth(CalendarForm::default()),
            SegmentKind::DayOfWeek => FormBody::DayOfWeek(CalendarForm::default()),
            SegmentKind::DayOfYear => FormBody::DayOfYear(CalendarForm::default()),
            SegmentKind::WeekOfYear => FormBody::WeekOfYear(CalendarForm::default()),
            SegmentKind::AutoIncrement => FormBody::AutoIncrement(AutoIncrementForm::default()),
            SegmentKind::Checksum => FormBody::Checksum(ChecksumForm::default()),
            SegmentKind::UserInput => FormBody::UserInput(UserInputForm::default()),
        }
    }

    /// The field set a type switch resets a form to.
    pub fn defaults(kind: SegmentKind) -> Self {
        let calendar = |length: u32| CalendarForm {
            length: Some(length),
        };
        match kind {
            SegmentKind::AutoIncrement => FormBody::AutoIncrement(AutoIncrementForm {
                scope: Some(DEFAULT_SCOPE.to_string()),
                period: Some(ResetPeriod::Forever),
                length: Some(1),
                padding_charactor: Some('0'),
                start: Some(1),
                current_auto_number: None,
            }),
            SegmentKind::Checksum => FormBody::Checksum(ChecksumForm {
                algorithm: Some(CRC32_ALGORITHM.to_string()),
                length: Some(1),
                padding_charactor: Some('0'),
            }),
            SegmentKind::Literal => FormBody::Literal(LiteralForm {
                content: Some(String::new()),
            }),
            SegmentKind::ParameterValue => FormBody::ParameterValue(ParameterValueForm {
                parameter_name: Some(String::new()),
                length: Some(2),
            }),
            SegmentKind::Year => FormBody::Year(YearForm { length: Some(2) }),
            SegmentKind::Month => FormBody::Month(calendar(2)),
            SegmentKind::DayOfMonth => FormBody::DayOfMonth(calendar(2)),
            SegmentKind::DayOfWeek => FormBody::DayOfWeek(calendar(1)),
            SegmentKind::DayOfYear => FormBody::DayOfYear(calendar(3)),
            SegmentKind::WeekOfYear => FormBody::WeekOfYear(calendar(2)),
            SegmentKind::UserInput => FormBody::UserInput(UserInputForm {
                parameter_name: Some(String::new()),
                length: Some(1),
                user_input_value: None,
            }),
        }
    }

    /// The configured `length` field, for kinds that have one.
    pub fn length(&self) -> Option<u32> {
        match self {
            FormBody::Literal(_) => None,
            FormBody::ParameterValue(form) => form.length,
            FormBody::Year(form) => form.length,
            FormBody::Month(form)
            | FormBody::DayOfMonth(form)
            | FormBody::DayOfWeek(form)
            | FormBody::DayOfYear(form)
            | FormBody::WeekOfYear(form) => form.length,
            FormBody::AutoIncrement(form) => form.length,
            FormBody::Checksum(form) => form.length,
            FormBody::UserInput(form) => form.length,
        }
    }

    /// Store a coerced setting into the matching field.
    ///
    /// Returns `false` when the name does not belong to this kind or the value
    /// does not fit the field, leaving the body unchanged.
    pub fn assign(&mut self, name: &str, value: CoercedValue) -> bool {
        match (self, name, value) {
            (FormBody::Literal(form), "content", CoercedValue::Text(text)) => {
                form.content = Some(text);
            }
            (FormBody::ParameterValue(form), "parameterName", CoercedValue::Text(text)) => {
                form.parameter_name = Some(text);
            }
            (FormBody::UserInput(form), "parameterName", CoercedValue::Text(text)) => {
                form.parameter_name = Some(text);
            }
            (FormBody::UserInput(form), "userInputValue", CoercedValue::Text(text)) => {
                form.user_input_value = Some(text);
            }
            (body, "length", CoercedValue::Integer(value)) => {
                let Ok(length) = u32::try_from(value) else {
                    return false;
                };
                let Some(slot) = body.length_slot() else {
                    return false;
                };
                *slot = Some(length);
            }
            (FormBody::AutoIncrement(form), "scope", CoercedValue::Text(text)) => {
                form.scope = Some(text);
            }
            (FormBody::AutoIncrement(form), "period", CoercedValue::Text(text)) => {
                let Ok(period) = text.parse::<ResetPeriod>() else {
                    return false;
                };
                form.period = Some(period);
            }
            (FormBody::AutoIncrement(form), "start", CoercedValue::Integer(value)) => {
                let Ok(start) = u128::try_from(value) else {
                    return false;
                };
                form.start = Some(start);
            }
            (FormBody::AutoIncrement(form), "currentAutoNumber", CoercedValue::Counter(value)) => {
                form.current_auto_number = Some(value);
            }
            (FormBody::AutoIncrement(form), "paddingCharactor", CoercedValue::Character(ch)) => {
                form.padding_charactor = Some(ch);
            }
            (FormBody::Checksum(form), "paddingCharactor", CoercedValue::Character(ch)) => {
                form.padding_charactor = Some(ch);
            }
            (FormBody::Checksum(form), "algorithm", CoercedValue::Text(text)) => {
                form.algorithm = Some(text);
            }
            _ => return false,
        }
        true
    }

    /// Drop the field `name` maps to, if this kind has one.
    ///
    /// Returns whether a present value was removed.
    pub fn clear(&mut self, name: &str) -> bool {
        match (self, name) {
            (FormBody::Literal(form), "content") => form.content.take().is_some(),
            (FormBody::ParameterValue(form), "parameterName") => {
                form.parameter_name.take().is_some()
            }
            (FormBody::UserInput(form), "parameterName") => form.parameter_name.take().is_some(),
            (FormBody::UserInput(form), "userInputValue") => {
                form.user_input_value.take().is_some()
            }
            (body, "length") => body.length_slot().is_some_and(|slot| slot.take().is_some()),
            (FormBody::AutoIncrement(form), "scope") => form.scope.take().is_some(),
            (FormBody::AutoIncrement(form), "period") => form.period.take().is_some(),
            (FormBody::AutoIncrement(form), "start") => form.start.take().is_some(),
            (FormBody::AutoIncrement(form), "currentAutoNumber") => {
                form.current_auto_number.take().is_some()
            }
            (FormBody::AutoIncrement(form), "paddingCharactor") => {
                form.padding_charactor.take().is_some()
            }
            (FormBody::Checksum(form), "paddingCharactor") => {
                form.padding_charactor.take().is_some()
            }
            (FormBody::Checksum(form), "algorithm") => form.algorithm.take().is_some(),
            _ => false,
        }
    }

    fn length_slot(&mut self) -> Option<&mut Option<u32>> {
        match self {
            FormBody::Literal(_) => None,
            FormBody::ParameterValue(form) => Some(&mut form.length),
            FormBody::Year(form) => Some(&mut form.length),
            FormBody::Month(form)
            | FormBody::DayOfMonth(form)
            | FormBody::DayOfWeek(form)
            | FormBody::DayOfYear(form)
            | FormBody::WeekOfYear(form) => Some(&mut form.length),
            FormBody::AutoIncrement(form) => Some(&mut form.length),
            FormBody::Checksum(form) => Some(&mut form.length),
            FormBody::UserInput(form) => Some(&mut form.length),
        }
    }

    /// Present fields as stringified settings, in declaration order.
    pub fn settings(&self) -> Vec<Setting> {
        let mut out = Vec::new();
        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                out.push(Setting::new(name, value));
            }
        };
        let num = |value: Option<u32>| value.map(|v| v.to_string());
        let ch = |value: Option<char>| value.map(String::from);
        match self {
            FormBody::Literal(form) => push("content", form.content.clone()),
            FormBody::ParameterValue(form) => {
                push("parameterName", form.parameter_name.clone());
                push("length", num(form.length));
            }
            FormBody::Year(form) => push("length", num(form.length)),
            FormBody::Month(form)
            | FormBody::DayOfMonth(form)
            | FormBody::DayOfWeek(form)
            | FormBody::DayOfYear(form)
            | FormBody::WeekOfYear(form) => push("length", num(form.length)),
            FormBody::AutoIncrement(form) => {
                push("scope", form.scope.clone());
                push("period", form.period.map(|p| p.as_str().to_string()));
                push("length", num(form.length));
                push("paddingCharactor", ch(form.padding_charactor));
                push("start", form.start.map(|v| v.to_string()));
                push(
                    "currentAutoNumber",
                    form.current_auto_number.map(|v| v.to_string()),
                );
            }
            FormBody::Checksum(form) => {
                push("algorithm", form.algorithm.clone());
                push("length", num(form.length));
                push("paddingCharactor", ch(form.padding_charactor));
            }
            FormBody::UserInput(form) => {
                push("parameterName", form.parameter_name.clone());
                push("length", num(form.length));
                push("userInputValue", form.user_input_value.clone());
            }
        }
        out
    }
}

/// A typed segment form: note, kind-specific fields and leftover settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentForm {
    pub note: Option<String>,
    pub body: FormBody,
    /// Settings carried through unchanged; dropped by a type switch.
    pub extra: Vec<Setting>,
}

impl SegmentForm {
    pub fn new(body: FormBody) -> Self {
        Self {
            note: None,
            body,
            extra: Vec::new(),
        }
    }

    /// A fresh form of `kind` holding exactly that kind's default field set.
    pub fn defaults(kind: SegmentKind) -> Self {
        Self::new(FormBody::defaults(kind))
    }

    /// The placeholder literal used for missing or malformed segments.
    pub fn default_literal() -> Self {
        Self {
            note: Some(String::new()),
            body: FormBody::defaults(SegmentKind::Literal),
            extra: Vec::new(),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.body.kind()
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Default for SegmentForm {
    fn default() -> Self {
        Self::default_literal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_kind() {
        for kind in SegmentKind::ALL {
            assert_eq!(FormBody::defaults(kind).kind(), kind);
            assert_eq!(FormBody::empty(kind).kind(), kind);
        }
    }

    #[test]
    fn calendar_defaults_carry_fixed_width() {
        for kind in SegmentKind::ALL {
            if let Some(width) = kind.fixed_width() {
                assert_eq!(FormBody::defaults(kind).length(), Some(width));
            }
        }
    }

    #[test]
    fn assign_rejects_foreign_fields() {
        let mut body = FormBody::empty(SegmentKind::Literal);
        assert!(!body.assign("length", CoercedValue::Integer(3)));
        assert!(!body.assign("scope", CoercedValue::Text("plant".into())));
        assert!(body.assign("content", CoercedValue::Text("AB".into())));
        assert_eq!(
            body,
            FormBody::Literal(LiteralForm {
                content: Some("AB".into())
            })
        );
    }

    #[test]
    fn assign_rejects_negative_length_and_unknown_period() {
        let mut body = FormBody::empty(SegmentKind::AutoIncrement);
        assert!(!body.assign("length", CoercedValue::Integer(-1)));
        assert!(!body.assign("period", CoercedValue::Text("week".into())));
        assert!(body.assign("period", CoercedValue::Text("day".into())));
        assert_eq!(body.length(), None);
    }

    #[test]
    fn max_start_bounds() {
        assert_eq!(AutoIncrementForm::max_start(1), 9);
        assert_eq!(AutoIncrementForm::max_start(4), 9_999);
        assert_eq!(AutoIncrementForm::max_start(0), 0);
        assert_eq!(AutoIncrementForm::max_start(60), u128::MAX);
    }

    #[test]
    fn auto_increment_settings_in_declaration_order() {
        let names: Vec<String> = FormBody::defaults(SegmentKind::AutoIncrement)
            .settings()
            .into_iter()
            .map(|setting| setting.name)
            .collect();
        assert_eq!(
            names,
            ["scope", "period", "length", "paddingCharactor", "start"]
        );
    }
}
