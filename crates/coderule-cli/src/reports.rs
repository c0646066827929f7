//! Data behind each command's output.
//!
//! Everything here is computed from a [`Rule`] without printing, so the
//! binary only decides between a table and JSON.

use coderule_editor::{EditorOptions, fill_user_input};
use coderule_model::{
    EnglishLabels, Rule, Segment, SegmentKind, decode_all, kind_label, segment_label,
};
use coderule_render::{Clock, PreviewOptions, Renderer, segment_code_length};
use coderule_validate::{FieldFailures, validate_rule};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindRow {
    pub kind: SegmentKind,
    pub label: String,
    /// Width of calendar kinds, which the user cannot configure.
    pub fixed_width: Option<u32>,
    /// Offered by the rule editor's type switch.
    pub in_rule_editor: bool,
}

pub fn kind_rows() -> Vec<KindRow> {
    let rule_editor = EditorOptions::default();
    SegmentKind::ALL
        .into_iter()
        .map(|kind| KindRow {
            kind,
            label: kind_label(kind, &EnglishLabels),
            fixed_width: kind.fixed_width(),
            in_rule_editor: rule_editor.allows(kind),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentLength {
    pub index: usize,
    /// Wire `type` tag, `-` when missing.
    pub kind: String,
    pub label: String,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthReport {
    pub total: usize,
    pub segments: Vec<SegmentLength>,
}

fn kind_tag(segment: &Segment) -> String {
    segment
        .kind
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

pub fn length_report(rule: &Rule) -> LengthReport {
    let segments: Vec<SegmentLength> = rule
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| SegmentLength {
            index,
            kind: kind_tag(segment),
            label: segment_label(segment, &EnglishLabels),
            length: segment_code_length(segment),
        })
        .collect();
    let total = segments.iter().map(|segment| segment.length).sum();
    LengthReport { total, segments }
}

/// Inputs of a preview run besides the rule itself.
#[derive(Debug, Clone, Default)]
pub struct PreviewRequest {
    pub options: PreviewOptions,
    /// Number of consecutive codes, each one counter step further.
    pub count: u32,
    /// Counter value supplied by the issuing system.
    pub current: Option<u128>,
    /// User input values by parameter name.
    pub fills: Vec<(String, String)>,
    pub with_checksum: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewReport {
    pub length: usize,
    pub codes: Vec<String>,
}

/// Apply the counter value and user input fills to a copy of the rule.
pub fn prepare_segments(rule: &Rule, request: &PreviewRequest) -> anyhow::Result<Vec<Segment>> {
    let mut segments = rule.segments.clone();
    for segment in &mut segments {
        match segment.known_kind() {
            Some(SegmentKind::AutoIncrement) => {
                if let Some(current) = request.current {
                    *segment = segment
                        .clone()
                        .with_setting("currentAutoNumber", current.to_string());
                }
            }
            Some(SegmentKind::UserInput) => {
                let name = segment.setting("parameterName").unwrap_or_default();
                if let Some((_, value)) = request.fills.iter().find(|(fill, _)| fill == name) {
                    *segment = fill_user_input(segment, value)?;
                }
            }
            _ => {}
        }
    }
    for (name, _) in &request.fills {
        let known = segments.iter().any(|segment| {
            segment.known_kind() == Some(SegmentKind::UserInput)
                && segment.setting("parameterName") == Some(name.as_str())
        });
        if !known {
            warn!(parameter = %name, "no user input segment with this parameter name");
        }
    }
    Ok(segments)
}

pub fn preview_report<C: Clock>(
    rule: &Rule,
    request: &PreviewRequest,
    renderer: &Renderer<C>,
) -> anyhow::Result<PreviewReport> {
    let segments = prepare_segments(rule, request)?;
    let codes = (0..request.count.max(1))
        .map(|step| {
            let offset = request
                .options
                .auto_increment_offset
                .saturating_add(i64::from(step));
            let options = request.options.with_auto_increment_offset(offset);
            if request.with_checksum {
                renderer.preview_with_checksums(&segments, &options)
            } else {
                renderer.preview_sequence(&segments, &options)
            }
        })
        .collect();
    debug!(count = request.count, "rendered preview codes");
    Ok(PreviewReport {
        length: coderule_render::total_length(&segments),
        codes,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentFailures {
    pub index: usize,
    pub kind: String,
    pub label: String,
    pub failures: FieldFailures,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub submittable: bool,
    pub failing: Vec<SegmentFailures>,
}

pub fn validation_outcome(rule: &Rule) -> ValidationOutcome {
    let report = validate_rule(&decode_all(&rule.segments));
    let failing = report
        .failing_indices()
        .map(|index| {
            let segment = &rule.segments[index];
            SegmentFailures {
                index,
                kind: kind_tag(segment),
                label: segment_label(segment, &EnglishLabels),
                failures: report.segments[index].clone(),
            }
        })
        .collect();
    ValidationOutcome {
        submittable: report.is_submittable(),
        failing,
    }
}
