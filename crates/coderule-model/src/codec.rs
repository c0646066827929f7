//! Mapping between serialized segments and typed forms.

use tracing::{debug, warn};

use crate::coerce::coerce_setting;
use crate::{FormBody, Segment, SegmentForm, SegmentType, Setting};

/// Decode a serialized segment into its typed form.
///
/// Settings are folded in order, later entries overriding earlier ones.
/// Absent settings stay absent; no defaults are applied. A missing segment,
/// a missing `type` tag or an unknown one yields the default literal form.
pub fn decode(segment: Option<&Segment>) -> SegmentForm {
    let Some(segment) = segment else {
        return SegmentForm::default_literal();
    };
    let kind = match &segment.kind {
        Some(SegmentType::Known(kind)) => *kind,
        Some(SegmentType::Unknown(raw)) => {
            warn!(segment_type = %raw, "unknown segment type, substituting literal");
            return SegmentForm::default_literal();
        }
        None => {
            warn!("segment without type, substituting literal");
            return SegmentForm::default_literal();
        }
    };

    let mut body = FormBody::empty(kind);
    let mut extra: Vec<Setting> = Vec::new();
    for setting in &segment.settings {
        if setting.name == "type" || setting.name == "note" {
            debug!(name = %setting.name, "ignoring reserved setting name");
            continue;
        }
        let taken = coerce_setting(&setting.name, &setting.value)
            .is_some_and(|value| body.assign(&setting.name, value));
        if !taken {
            if body.clear(&setting.name) {
                debug!(name = %setting.name, "unreadable setting overrides typed value");
            }
            debug!(
                kind = %kind,
                name = %setting.name,
                "keeping setting verbatim"
            );
            extra.retain(|kept| kept.name != setting.name);
            extra.push(setting.clone());
        } else {
            extra.retain(|kept| kept.name != setting.name);
        }
    }

    SegmentForm {
        note: segment.note.clone(),
        body,
        extra,
    }
}

/// Encode a typed form back into a serialized segment.
///
/// `type` and `note` are lifted out of the settings; every present field
/// becomes a stringified setting, followed by the carried-through extras that
/// a typed field does not already cover.
pub fn encode(form: &SegmentForm) -> Segment {
    let mut settings = form.body.settings();
    for setting in &form.extra {
        if setting.name == "type" || setting.name == "note" {
            continue;
        }
        if settings.iter().any(|typed| typed.name == setting.name) {
            continue;
        }
        settings.push(setting.clone());
    }
    Segment {
        kind: Some(SegmentType::Known(form.kind())),
        note: form.note.clone(),
        settings,
    }
}

/// Decode every segment of a rule, preserving order.
pub fn decode_all(segments: &[Segment]) -> Vec<SegmentForm> {
    segments.iter().map(|segment| decode(Some(segment))).collect()
}

/// Encode every form of a rule, preserving order.
pub fn encode_all(forms: &[SegmentForm]) -> Vec<Segment> {
    forms.iter().map(encode).collect()
}
