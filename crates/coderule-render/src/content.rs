//! Preview content of a single form.

use chrono::{Datelike, NaiveDate};
use coderule_model::{ChecksumForm, FormBody, SegmentForm, UserInputForm, YearForm};

use crate::counter::render_counter;
use crate::options::PreviewOptions;
use crate::text::{pad_end, pad_start, slot_width};

/// Fill used by editable user-input previews.
pub const USER_INPUT_FILL: char = '_';

/// Character repeated by read-only user-input previews.
pub const USER_INPUT_MASK: char = 'X';

/// Fallback fill for checksum slots without a padding character.
pub const CHECKSUM_FALLBACK_FILL: char = ' ';

/// `${name}`, the text a parameter value renders as until it is resolved.
pub fn parameter_placeholder(name: Option<&str>) -> String {
    format!("${{{}}}", name.unwrap_or_default())
}

/// Render `form` against the calendar date `today`.
pub fn render_form(form: &SegmentForm, options: &PreviewOptions, today: NaiveDate) -> String {
    match &form.body {
        FormBody::Literal(literal) => literal.content.clone().unwrap_or_default(),
        FormBody::ParameterValue(parameter) => {
            parameter_placeholder(parameter.parameter_name.as_deref())
        }
        FormBody::Year(year) => render_year(year, today),
        FormBody::Month(_) => format!("{:02}", today.month()),
        FormBody::DayOfMonth(_) => format!("{:02}", today.day()),
        FormBody::DayOfWeek(_) => today.weekday().num_days_from_sunday().to_string(),
        FormBody::DayOfYear(_) => format!("{:03}", today.ordinal()),
        FormBody::WeekOfYear(_) => format!("{:02}", today.iso_week().week()),
        FormBody::AutoIncrement(counter) => {
            render_counter(counter, options.auto_increment_offset)
        }
        FormBody::Checksum(checksum) => render_checksum_placeholder(checksum),
        FormBody::UserInput(input) => render_user_input(input, options.editable_text),
    }
}

fn render_year(form: &YearForm, today: NaiveDate) -> String {
    if form.length == Some(2) {
        today.format("%y").to_string()
    } else {
        today.format("%Y").to_string()
    }
}

fn render_checksum_placeholder(form: &ChecksumForm) -> String {
    let width = slot_width(form.length);
    pad_start(
        "",
        width,
        form.padding_charactor.unwrap_or(CHECKSUM_FALLBACK_FILL),
    )
}

fn render_user_input(form: &UserInputForm, editable: bool) -> String {
    let width = slot_width(form.length);
    if editable {
        let value = form.user_input_value.as_deref().unwrap_or_default();
        pad_end(value, width, USER_INPUT_FILL)
    } else {
        std::iter::repeat_n(USER_INPUT_MASK, width).collect()
    }
}
