//! Property tests for length accounting and counter previews.

use chrono::NaiveDate;
use coderule_model::{AutoIncrementForm, FormBody, Segment, SegmentForm, SegmentKind};
use coderule_render::text::pad_start;
use coderule_render::{
    FixedClock, PreviewOptions, Renderer, segment_code_length, total_length,
};
use proptest::prelude::*;

fn renderer() -> Renderer<FixedClock> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    Renderer::with_clock(FixedClock::new(date))
}

fn segment() -> impl Strategy<Value = Segment> {
    let kind = proptest::sample::select(SegmentKind::ALL.to_vec());
    (kind, "[a-zA-Z0-9]{0,8}", 0u32..12).prop_map(|(kind, text, length)| {
        Segment::new(kind)
            .with_setting("content", text.clone())
            .with_setting("parameterName", text)
            .with_setting("length", length.to_string())
    })
}

fn counter(start: u64, current: Option<u64>, length: u32) -> SegmentForm {
    SegmentForm::new(FormBody::AutoIncrement(AutoIncrementForm {
        length: Some(length),
        padding_charactor: Some('0'),
        start: Some(u128::from(start)),
        current_auto_number: current.map(u128::from),
        ..AutoIncrementForm::default()
    }))
}

proptest! {
    #[test]
    fn total_is_sum_of_parts(segments in proptest::collection::vec(segment(), 0..10)) {
        let parts: usize = segments.iter().map(segment_code_length).sum();
        prop_assert_eq!(total_length(&segments), parts);
    }

    #[test]
    fn counter_preview_is_max_plus_offset(
        start in 1u64..1_000_000,
        current in proptest::option::of(1u64..1_000_000),
        offset in -2_000_000i64..1_000,
        length in 1u32..10,
    ) {
        let form = counter(start, current, length);
        let options = PreviewOptions::new().with_auto_increment_offset(offset);
        let text = renderer().render(&form, &options);

        let expected = i128::from(start.max(current.unwrap_or(1))) + i128::from(offset);
        prop_assert_eq!(&text, &pad_start(&expected.to_string(), length as usize, '0'));

        let next = renderer().render(&form, &options.with_auto_increment_offset(offset + 1));
        prop_assert_eq!(next, pad_start(&(expected + 1).to_string(), length as usize, '0'));
        let previous = renderer().render(&form, &options.with_auto_increment_offset(offset - 1));
        prop_assert_ne!(text, previous);
    }

    #[test]
    fn counter_never_drops_digits(start in 1u64..u64::MAX, length in 0u32..4) {
        let text = renderer().render(&counter(start, None, length), &PreviewOptions::default());
        prop_assert!(text.ends_with(&start.to_string()));
        prop_assert!(text.len() >= start.to_string().len());
    }
}
