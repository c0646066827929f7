//! The clock-bound renderer.

use coderule_model::{Segment, SegmentForm, decode};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::content::render_form;
use crate::options::PreviewOptions;

/// Renders forms and segments, reading calendar fields from its clock.
#[derive(Debug, Clone, Default)]
pub struct Renderer<C = SystemClock> {
    pub(crate) clock: C,
}

impl Renderer<SystemClock> {
    /// A renderer on the local wall clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Renderer<C> {
    /// A renderer on `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Preview text of one form.
    pub fn render(&self, form: &SegmentForm, options: &PreviewOptions) -> String {
        render_form(form, options, self.clock.today())
    }

    /// Preview text of one serialized segment.
    ///
    /// Segments of an unknown kind render as an empty string.
    pub fn render_segment(&self, segment: &Segment, options: &PreviewOptions) -> String {
        if segment.known_kind().is_none() {
            debug!(kind = ?segment.kind, "skipping segment of unknown kind");
            return String::new();
        }
        self.render(&decode(Some(segment)), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use coderule_model::{SegmentKind, SegmentType};

    fn renderer() -> Renderer<FixedClock> {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        Renderer::with_clock(FixedClock::new(date))
    }

    #[test]
    fn renders_against_injected_clock() {
        let options = PreviewOptions::default();
        let year = Segment::new(SegmentKind::Year).with_setting("length", "4");
        assert_eq!(renderer().render_segment(&year, &options), "2025");
        let day = Segment::new(SegmentKind::DayOfYear).with_setting("length", "3");
        assert_eq!(renderer().render_segment(&day, &options), "365");
    }

    #[test]
    fn unknown_kind_renders_empty() {
        let segment = Segment {
            kind: Some(SegmentType::Unknown("shift".into())),
            ..Segment::default()
        }
        .with_setting("content", "A");
        assert_eq!(
            renderer().render_segment(&segment, &PreviewOptions::default()),
            ""
        );
    }

    #[test]
    fn missing_kind_renders_default_literal() {
        assert_eq!(
            renderer().render_segment(&Segment::default(), &PreviewOptions::default()),
            ""
        );
    }
}
