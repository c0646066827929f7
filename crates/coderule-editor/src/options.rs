//! Editor configuration.

use coderule_model::{NOTE_MAX_CHARS, SegmentKind, selectable_kinds};

/// Options for an [`EditorState`](crate::EditorState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Kinds a type switch may not select.
    pub excluded_kinds: Vec<SegmentKind>,
    /// Longest accepted note, in characters.
    pub note_max_chars: usize,
}

impl Default for EditorOptions {
    /// The rule editor: user input is filled in per code, not part of a rule.
    fn default() -> Self {
        Self {
            excluded_kinds: vec![SegmentKind::UserInput],
            note_max_chars: NOTE_MAX_CHARS,
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single-segment editor, which offers every kind.
    pub fn single_segment() -> Self {
        Self {
            excluded_kinds: Vec::new(),
            note_max_chars: NOTE_MAX_CHARS,
        }
    }

    #[must_use]
    pub fn with_excluded_kinds(mut self, kinds: impl IntoIterator<Item = SegmentKind>) -> Self {
        self.excluded_kinds = kinds.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_note_max_chars(mut self, max: usize) -> Self {
        self.note_max_chars = max;
        self
    }

    pub fn allows(&self, kind: SegmentKind) -> bool {
        !self.excluded_kinds.contains(&kind)
    }

    /// Kinds offered by the type switch, in catalog order.
    pub fn selectable_kinds(&self) -> Vec<SegmentKind> {
        selectable_kinds(&self.excluded_kinds)
    }
}
