//! Serialized segments: the persisted exchange format of a code rule.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::SegmentKind;

/// Maximum length of a segment note.
pub const NOTE_MAX_CHARS: usize = 30;

/// One `{name, value}` pair of a serialized segment.
///
/// Values are always held as strings. Numbers and booleans found on the wire
/// are stringified on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    #[serde(deserialize_with = "string_or_scalar")]
    pub value: String,
}

impl Setting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The `type` tag of a serialized segment.
///
/// Unknown tags are kept verbatim so a rule survives a read/write cycle even
/// when it contains kinds this crate does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentType {
    Known(SegmentKind),
    Unknown(String),
}

impl SegmentType {
    pub fn kind(&self) -> Option<SegmentKind> {
        match self {
            SegmentType::Known(kind) => Some(*kind),
            SegmentType::Unknown(_) => None,
        }
    }
}

impl From<SegmentKind> for SegmentType {
    fn from(kind: SegmentKind) -> Self {
        SegmentType::Known(kind)
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentType::Known(kind) => f.write_str(kind.as_str()),
            SegmentType::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// A serialized rule segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SegmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub settings: Vec<Setting>,
}

impl Segment {
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind: Some(SegmentType::Known(kind)),
            note: None,
            settings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Returns a copy with `name` set to `value`, replacing an existing entry
    /// in place or appending a new one.
    #[must_use]
    pub fn with_setting(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.settings.iter_mut().rev().find(|setting| setting.name == name) {
            Some(setting) => setting.value = value,
            None => self.settings.push(Setting::new(name, value)),
        }
        self
    }

    /// The segment kind, if the tag is present and recognised.
    pub fn known_kind(&self) -> Option<SegmentKind> {
        self.kind.as_ref().and_then(SegmentType::kind)
    }

    /// Last value recorded for `name`; later entries win like on decode.
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings
            .iter()
            .rev()
            .find(|setting| setting.name == name)
            .map(|setting| setting.value.as_str())
    }
}

/// An ordered list of segments; order is the emission order of the code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub segments: Vec<Segment>,
}

impl Rule {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

fn string_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireValue::deserialize(deserializer)? {
        WireValue::Text(value) => value,
        WireValue::Integer(value) => value.to_string(),
        WireValue::Unsigned(value) => value.to_string(),
        WireValue::Float(value) => value.to_string(),
        WireValue::Bool(value) => value.to_string(),
    })
}
