//! Per-kind field rules.

use coderule_model::{
    AutoIncrementForm, ChecksumForm, FormBody, LENGTH_MAX, LiteralForm, ParameterValueForm,
    SegmentForm, UserInputForm,
};
use tracing::debug;

use crate::failure::{FieldFailure, FieldFailures};

/// Validate one form, returning the failing fields.
///
/// Year and the calendar kinds have no free fields and always pass.
pub fn validate(form: &SegmentForm) -> FieldFailures {
    let failures = match &form.body {
        FormBody::Literal(literal) => validate_literal(literal),
        FormBody::ParameterValue(parameter) => validate_parameter_value(parameter),
        FormBody::UserInput(input) => validate_user_input(input),
        FormBody::AutoIncrement(counter) => validate_auto_increment(counter),
        FormBody::Checksum(checksum) => validate_checksum(checksum),
        FormBody::Year(_)
        | FormBody::Month(_)
        | FormBody::DayOfMonth(_)
        | FormBody::DayOfWeek(_)
        | FormBody::DayOfYear(_)
        | FormBody::WeekOfYear(_) => FieldFailures::new(),
    };
    if !failures.is_empty() {
        debug!(
            kind = %form.kind(),
            fields = ?failures.keys().collect::<Vec<_>>(),
            "form failed validation"
        );
    }
    failures
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// A padded slot needs a length, and no wider than [`LENGTH_MAX`].
fn check_length(length: Option<u32>, failures: &mut FieldFailures) {
    match length {
        None => {
            failures.insert("length", FieldFailure::InvalidInput);
        }
        Some(length) if length > LENGTH_MAX => {
            failures.insert(
                "length",
                FieldFailure::MaximumExceeded {
                    max: u128::from(LENGTH_MAX),
                },
            );
        }
        Some(_) => {}
    }
}

fn validate_literal(form: &LiteralForm) -> FieldFailures {
    let mut failures = FieldFailures::new();
    if is_blank(form.content.as_deref()) {
        failures.insert("content", FieldFailure::ContentRequired);
    }
    failures
}

fn validate_parameter_value(form: &ParameterValueForm) -> FieldFailures {
    let mut failures = FieldFailures::new();
    if is_blank(form.parameter_name.as_deref()) {
        failures.insert("parameterName", FieldFailure::ParameterNameRequired);
    }
    failures
}

fn validate_user_input(form: &UserInputForm) -> FieldFailures {
    let mut failures = FieldFailures::new();
    check_length(form.length, &mut failures);
    if is_blank(form.parameter_name.as_deref()) {
        failures.insert("parameterName", FieldFailure::ParameterNameRequired);
    }
    failures
}

fn validate_auto_increment(form: &AutoIncrementForm) -> FieldFailures {
    let mut failures = FieldFailures::new();
    check_length(form.length, &mut failures);
    if form.period.is_none() {
        failures.insert("period", FieldFailure::DataRequired);
    }
    if form.padding_charactor.is_none() {
        failures.insert("paddingCharactor", FieldFailure::DataRequired);
    }
    // A missing or zero length bounds the start at one digit.
    let digits = form.length.filter(|length| *length > 0).unwrap_or(1);
    let max = AutoIncrementForm::max_start(digits);
    if form.start.is_some_and(|start| start > max) {
        failures.insert("start", FieldFailure::MaximumExceeded { max });
    }
    failures
}

fn validate_checksum(form: &ChecksumForm) -> FieldFailures {
    let mut failures = FieldFailures::new();
    check_length(form.length, &mut failures);
    if form.padding_charactor.is_none() {
        failures.insert("paddingCharactor", FieldFailure::DataRequired);
    }
    if is_blank(form.algorithm.as_deref()) {
        failures.insert("algorithm", FieldFailure::DataRequired);
    }
    failures
}
