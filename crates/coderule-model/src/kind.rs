//! Type-safe enumerations for code rule segments.
//!
//! The wire format carries these as camelCase strings (`"dayOfMonth"`,
//! `"autoIncrement"`, ...). Every capability that dispatches on the kind
//! (length, rendering, validation, defaults) matches exhaustively on
//! [`SegmentKind`] or on the typed form body, so adding a kind forces all of
//! them to be updated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// One of the eleven segment kinds a code rule can be composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    /// Fixed text emitted verbatim.
    Literal,
    /// Caller-supplied parameter, rendered as a `${name}` placeholder.
    ParameterValue,
    /// Calendar year, two or four digits.
    Year,
    /// Calendar month, `01`-`12`.
    Month,
    /// Day of the month, `01`-`31`.
    DayOfMonth,
    /// Day of the week, single digit.
    DayOfWeek,
    /// Ordinal day of the year, three digits.
    DayOfYear,
    /// ISO week number, two digits.
    WeekOfYear,
    /// Incrementing counter.
    AutoIncrement,
    /// Checksum slot, filled by the issuing system.
    Checksum,
    /// Free-form text typed by the user when a code is issued.
    UserInput,
}

impl SegmentKind {
    /// All kinds in the order an editor offers them.
    pub const ALL: [SegmentKind; 11] = [
        SegmentKind::Literal,
        SegmentKind::ParameterValue,
        SegmentKind::Year,
        SegmentKind::Month,
        SegmentKind::DayOfMonth,
        SegmentKind::DayOfWeek,
        SegmentKind::DayOfYear,
        SegmentKind::WeekOfYear,
        SegmentKind::AutoIncrement,
        SegmentKind::Checksum,
        SegmentKind::UserInput,
    ];

    /// Returns the wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Literal => "literal",
            SegmentKind::ParameterValue => "parameterValue",
            SegmentKind::Year => "year",
            SegmentKind::Month => "month",
            SegmentKind::DayOfMonth => "dayOfMonth",
            SegmentKind::DayOfWeek => "dayOfWeek",
            SegmentKind::DayOfYear => "dayOfYear",
            SegmentKind::WeekOfYear => "weekOfYear",
            SegmentKind::AutoIncrement => "autoIncrement",
            SegmentKind::Checksum => "checksum",
            SegmentKind::UserInput => "userInput",
        }
    }

    /// Width of calendar kinds whose width the user cannot configure.
    ///
    /// Returns `None` for kinds whose width comes from their settings.
    pub fn fixed_width(&self) -> Option<u32> {
        match self {
            SegmentKind::Month | SegmentKind::DayOfMonth | SegmentKind::WeekOfYear => Some(2),
            SegmentKind::DayOfWeek => Some(1),
            SegmentKind::DayOfYear => Some(3),
            SegmentKind::Literal
            | SegmentKind::ParameterValue
            | SegmentKind::Year
            | SegmentKind::AutoIncrement
            | SegmentKind::Checksum
            | SegmentKind::UserInput => None,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SegmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

/// Kinds offered by a type selector, minus the excluded ones.
pub fn selectable_kinds(excluded: &[SegmentKind]) -> Vec<SegmentKind> {
    SegmentKind::ALL
        .into_iter()
        .filter(|kind| !excluded.contains(kind))
        .collect()
}

/// When an auto-increment counter starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetPeriod {
    #[default]
    Forever,
    Day,
    Month,
    Year,
}

impl ResetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetPeriod::Forever => "forever",
            ResetPeriod::Day => "day",
            ResetPeriod::Month => "month",
            ResetPeriod::Year => "year",
        }
    }
}

impl fmt::Display for ResetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResetPeriod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "forever" => Ok(ResetPeriod::Forever),
            "day" => Ok(ResetPeriod::Day),
            "month" => Ok(ResetPeriod::Month),
            "year" => Ok(ResetPeriod::Year),
            other => Err(ModelError::UnknownPeriod(other.to_string())),
        }
    }
}

/// Year segment width; the editor only offers these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearWidth {
    /// `YY`
    Short,
    /// `YYYY`
    Full,
}

impl YearWidth {
    pub fn digits(&self) -> u32 {
        match self {
            YearWidth::Short => 2,
            YearWidth::Full => 4,
        }
    }
}

impl TryFrom<u32> for YearWidth {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(YearWidth::Short),
            4 => Ok(YearWidth::Full),
            other => Err(ModelError::UnsupportedYearWidth(other)),
        }
    }
}
