//! Whole-rule previews.
//!
//! The evaluation date is read once per preview so every calendar segment in
//! one code agrees on the day, even across midnight.

use coderule_model::{FormBody, Segment, SegmentForm, decode};
use tracing::trace;

use crate::checksum::checksum_digits;
use crate::clock::Clock;
use crate::content::{CHECKSUM_FALLBACK_FILL, render_form};
use crate::options::PreviewOptions;
use crate::renderer::Renderer;
use crate::text::slot_width;

impl<C: Clock> Renderer<C> {
    /// Concatenated preview of a serialized rule. An empty rule previews as "".
    pub fn preview_sequence(&self, segments: &[Segment], options: &PreviewOptions) -> String {
        let forms: Vec<SegmentForm> = known_forms(segments);
        self.preview_forms(&forms, options)
    }

    /// Concatenated preview of a list of forms.
    pub fn preview_forms(&self, forms: &[SegmentForm], options: &PreviewOptions) -> String {
        let today = self.clock.today();
        let out: String = forms
            .iter()
            .map(|form| render_form(form, options, today))
            .collect();
        trace!(segments = forms.len(), preview = %out, "rendered preview");
        out
    }

    /// Like [`preview_sequence`](Self::preview_sequence), but every checksum
    /// slot holds the CRC32 digits of the text rendered before it.
    pub fn preview_with_checksums(
        &self,
        segments: &[Segment],
        options: &PreviewOptions,
    ) -> String {
        let today = self.clock.today();
        let mut out = String::new();
        for form in known_forms(segments) {
            match &form.body {
                FormBody::Checksum(checksum) => {
                    let digits = checksum_digits(
                        &out,
                        slot_width(checksum.length),
                        checksum.padding_charactor.unwrap_or(CHECKSUM_FALLBACK_FILL),
                    );
                    out.push_str(&digits);
                }
                _ => out.push_str(&render_form(&form, options, today)),
            }
        }
        out
    }
}

/// Decoded forms of the segments whose kind is known; unknown kinds
/// contribute nothing to a preview.
fn known_forms(segments: &[Segment]) -> Vec<SegmentForm> {
    segments
        .iter()
        .filter(|segment| segment.known_kind().is_some() || segment.kind.is_none())
        .map(|segment| decode(Some(segment)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use coderule_model::{SegmentKind, SegmentType};

    fn renderer() -> Renderer<FixedClock> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        Renderer::with_clock(FixedClock::new(date))
    }

    fn rule() -> Vec<Segment> {
        vec![
            Segment::new(SegmentKind::Literal).with_setting("content", "SN"),
            Segment::new(SegmentKind::Year).with_setting("length", "2"),
            Segment::new(SegmentKind::Month).with_setting("length", "2"),
            Segment::new(SegmentKind::AutoIncrement)
                .with_setting("length", "4")
                .with_setting("paddingCharactor", "0")
                .with_setting("start", "1"),
        ]
    }

    #[test]
    fn empty_rule_previews_empty() {
        assert_eq!(renderer().preview_sequence(&[], &PreviewOptions::default()), "");
    }

    #[test]
    fn concatenates_in_order() {
        let options = PreviewOptions::default();
        assert_eq!(renderer().preview_sequence(&rule(), &options), "SN24030001");
        let next = options.with_auto_increment_offset(1);
        assert_eq!(renderer().preview_sequence(&rule(), &next), "SN24030002");
    }

    #[test]
    fn unknown_segments_are_skipped() {
        let mut segments = rule();
        segments.insert(
            1,
            Segment {
                kind: Some(SegmentType::Unknown("shift".into())),
                ..Segment::default()
            },
        );
        assert_eq!(
            renderer().preview_sequence(&segments, &PreviewOptions::default()),
            "SN24030001"
        );
    }

    #[test]
    fn checksum_digits_cover_preceding_text() {
        let segments = vec![
            Segment::new(SegmentKind::Literal).with_setting("content", "123456789"),
            Segment::new(SegmentKind::Checksum)
                .with_setting("length", "4")
                .with_setting("paddingCharactor", "0"),
        ];
        let options = PreviewOptions::default();
        assert_eq!(
            renderer().preview_sequence(&segments, &options),
            "1234567890000"
        );
        assert_eq!(
            renderer().preview_with_checksums(&segments, &options),
            "1234567890262"
        );
    }
}
