//! Editing sessions over serialized rules.

use coderule_editor::{Commit, EditorOptions, EditorState, FieldEdit};
use coderule_model::{FormBody, ResetPeriod, Rule, SegmentForm, SegmentKind, encode};
use insta::assert_snapshot;
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = SegmentKind> {
    proptest::sample::select(SegmentKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn type_switch_yields_exact_defaults(from in kind(), to in kind()) {
        let options = EditorOptions::single_segment();
        let state = EditorState::new(options)
            .insert()
            .change_type(from)
            .unwrap()
            .edit(&FieldEdit::Note("before".into()))
            .unwrap()
            .change_type(to)
            .unwrap();
        let form = state.focused_form().unwrap();
        prop_assert_eq!(form, &SegmentForm::defaults(to));
        prop_assert_eq!(
            encode(form).settings,
            FormBody::defaults(to).settings()
        );
    }

    #[test]
    fn move_keeps_relative_order(len in 1usize..8, from in 0usize..8, to in 0usize..8) {
        prop_assume!(from < len && to < len);
        let mut state = EditorState::new(EditorOptions::default());
        for index in 0..len {
            state = state
                .insert()
                .edit(&FieldEdit::Content(index.to_string()))
                .unwrap();
        }
        let moved = state.move_segment(from, to);

        let mut expected: Vec<String> = (0..len).map(|index| index.to_string()).collect();
        let item = expected.remove(from);
        expected.insert(to, item);

        let actual: Vec<String> = moved
            .forms()
            .iter()
            .map(|form| match &form.body {
                FormBody::Literal(literal) => literal.content.clone().unwrap_or_default(),
                _ => String::new(),
            })
            .collect();
        prop_assert_eq!(actual, expected);
        if from != to {
            prop_assert_eq!(moved.focus(), to);
        }
    }
}

#[test]
fn edit_session_commits_normalized_rule() {
    let rule: Rule = serde_json::from_str(
        r#"{"segments":[
            {"type":"literal","note":"prefix","settings":[{"name":"content","value":"PO"}]},
            {"type":"autoIncrement","settings":[
                {"name":"scope","value":"plant"},
                {"name":"period","value":"forever"},
                {"name":"length","value":"03"},
                {"name":"paddingCharactor","value":"0"},
                {"name":"start","value":"1"}
            ]}
        ]}"#,
    )
    .unwrap();

    let state = EditorState::from_segments(&rule.segments, EditorOptions::default());
    assert!(!state.is_modified());

    let state = state
        .focus_on(1)
        .edit(&FieldEdit::Period(ResetPeriod::Month))
        .unwrap()
        .edit(&FieldEdit::Start("1000".into()))
        .unwrap();

    let Commit::Rejected { state, report } = state.commit() else {
        panic!("start above 999 must be rejected");
    };
    assert_eq!(
        report.failures_at(1).map(|failures| failures["start"].to_string()),
        Some("maximum value 999 must not be exceeded".to_string())
    );

    let state = state.edit(&FieldEdit::Length("4".into())).unwrap();
    let Commit::Accepted { state, segments } = state.commit() else {
        panic!("corrected rule must commit");
    };
    assert!(!state.is_modified());
    assert!(state.failures_at(1).is_none());
    assert_snapshot!(
        serde_json::to_string(&Rule::new(segments)).unwrap(),
        @r#"{"segments":[{"type":"literal","note":"prefix","settings":[{"name":"content","value":"PO"}]},{"type":"autoIncrement","settings":[{"name":"scope","value":"plant"},{"name":"period","value":"month"},{"name":"length","value":"4"},{"name":"paddingCharactor","value":"0"},{"name":"start","value":"1000"}]}]}"#
    );
}
