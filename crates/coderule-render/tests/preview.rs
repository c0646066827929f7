//! Rule previews read from the wire format.

use chrono::NaiveDate;
use coderule_model::Rule;
use coderule_render::{FixedClock, PreviewOptions, Renderer, total_length};
use insta::assert_snapshot;

const RULE: &str = r##"{
  "segments": [
    { "type": "literal", "note": "prefix", "settings": [{ "name": "content", "value": "WO-" }] },
    { "type": "year", "settings": [{ "name": "length", "value": 4 }] },
    { "type": "weekOfYear", "settings": [{ "name": "length", "value": "2" }] },
    { "type": "dayOfWeek", "settings": [{ "name": "length", "value": "1" }] },
    { "type": "parameterValue", "settings": [{ "name": "parameterName", "value": "line" }, { "name": "length", "value": "2" }] },
    { "type": "userInput", "settings": [{ "name": "parameterName", "value": "batch" }, { "name": "length", "value": "3" }, { "name": "userInputValue", "value": "7" }] },
    { "type": "autoIncrement", "settings": [
        { "name": "scope", "value": "plant" },
        { "name": "period", "value": "year" },
        { "name": "length", "value": "5" },
        { "name": "paddingCharactor", "value": "0" },
        { "name": "start", "value": "10" },
        { "name": "currentAutoNumber", "value": "42" }
    ] },
    { "type": "checksum", "settings": [{ "name": "algorithm", "value": "CRC32" }, { "name": "length", "value": "2" }, { "name": "paddingCharactor", "value": "#" }] }
  ]
}"##;

fn rule() -> Rule {
    serde_json::from_str(RULE).unwrap()
}

fn renderer() -> Renderer<FixedClock> {
    // A Friday in ISO week 1 of 2021.
    let date = NaiveDate::from_ymd_opt(2021, 1, 8).unwrap();
    Renderer::with_clock(FixedClock::new(date))
}

#[test]
fn preview_masks_user_input() {
    let preview = renderer().preview_sequence(&rule().segments, &PreviewOptions::default());
    assert_snapshot!(preview, @"WO-2021015${line}XXX00042##");
}

#[test]
fn editable_preview_shows_filled_value() {
    let options = PreviewOptions::new()
        .with_editable_text(true)
        .with_auto_increment_offset(3);
    let preview = renderer().preview_sequence(&rule().segments, &options);
    assert_snapshot!(preview, @"WO-2021015${line}7__00045##");
}

#[test]
fn length_counts_placeholder_text() {
    // 3 + 4 + 2 + 1 + len("${line}") + 3 + 5 + 2
    assert_eq!(total_length(&rule().segments), 27);
}

#[test]
fn iso_week_crosses_year_boundary() {
    let rule: Rule = serde_json::from_str(
        r#"{"segments":[{"type":"weekOfYear","settings":[{"name":"length","value":"2"}]}]}"#,
    )
    .unwrap();
    let new_year = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let renderer = Renderer::with_clock(FixedClock::new(new_year));
    assert_eq!(
        renderer.preview_sequence(&rule.segments, &PreviewOptions::default()),
        "53"
    );
}
