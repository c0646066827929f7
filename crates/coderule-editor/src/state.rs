//! The segment-list editor state machine.
//!
//! Every operation takes the current state by reference and returns the next
//! state; nothing is mutated in place. Structural operations ignore
//! out-of-range indices instead of failing.

use coderule_model::{Segment, SegmentForm, SegmentKind, decode_all, encode_all};
use coderule_validate::{FieldFailures, RuleReport, validate_rule};
use tracing::debug;

use crate::edit::{FieldEdit, apply_edit};
use crate::error::{EditError, Result};
use crate::options::EditorOptions;

/// Whether the forms carry edits that have not been committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditStatus {
    #[default]
    Clean,
    Modified,
}

/// Result of [`EditorState::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Every form passed validation. `segments` is the encoded rule to hand
    /// to the caller; `state` is clean.
    Accepted {
        state: EditorState,
        segments: Vec<Segment>,
    },
    /// At least one form failed. `state` keeps its forms and status and
    /// carries the failure maps.
    Rejected {
        state: EditorState,
        report: RuleReport,
    },
}

impl Commit {
    pub fn state(&self) -> &EditorState {
        match self {
            Commit::Accepted { state, .. } | Commit::Rejected { state, .. } => state,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Commit::Accepted { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    forms: Vec<SegmentForm>,
    focus: usize,
    status: EditStatus,
    /// Failure maps from the last commit, aligned with `forms`.
    failures: Vec<FieldFailures>,
    options: EditorOptions,
}

impl EditorState {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Open an editor on a serialized rule. Focus starts on the first segment.
    pub fn from_segments(segments: &[Segment], options: EditorOptions) -> Self {
        let forms = decode_all(segments);
        let failures = vec![FieldFailures::new(); forms.len()];
        Self {
            forms,
            focus: 0,
            status: EditStatus::Clean,
            failures,
            options,
        }
    }

    pub fn forms(&self) -> &[SegmentForm] {
        &self.forms
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_form(&self) -> Option<&SegmentForm> {
        self.forms.get(self.focus)
    }

    pub fn status(&self) -> EditStatus {
        self.status
    }

    pub fn is_modified(&self) -> bool {
        self.status == EditStatus::Modified
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Failures recorded for segment `index` by the last commit.
    pub fn failures_at(&self, index: usize) -> Option<&FieldFailures> {
        self.failures.get(index).filter(|failures| !failures.is_empty())
    }

    fn modified(mut self) -> Self {
        self.status = EditStatus::Modified;
        self
    }

    /// Select segment `index`. Selection alone is not an edit.
    #[must_use]
    pub fn focus_on(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < self.forms.len() {
            next.focus = index;
        } else {
            debug!(index, len = self.forms.len(), "focus index out of range");
        }
        next
    }

    /// Append an empty literal and focus it.
    #[must_use]
    pub fn insert(&self) -> Self {
        let mut next = self.clone();
        next.forms.push(SegmentForm::defaults(SegmentKind::Literal));
        next.failures.push(FieldFailures::new());
        next.focus = next.forms.len() - 1;
        debug!(len = next.forms.len(), "inserted literal segment");
        next.modified()
    }

    /// Delete segment `index`, moving focus back by one when it sat at or
    /// after the removed slot.
    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        if index >= self.forms.len() {
            debug!(index, len = self.forms.len(), "remove index out of range");
            return self.clone();
        }
        let mut next = self.clone();
        next.forms.remove(index);
        next.failures.remove(index);
        if next.focus >= index {
            next.focus = next.focus.saturating_sub(1);
        }
        debug!(index, len = next.forms.len(), "removed segment");
        next.modified()
    }

    /// Move the segment at `from` so it lands at `to`, keeping the relative
    /// order of every other segment. Focus follows the moved segment.
    #[must_use]
    pub fn move_segment(&self, from: usize, to: usize) -> Self {
        let len = self.forms.len();
        if from == to || from >= len || to >= len {
            debug!(from, to, len, "move ignored");
            return self.clone();
        }
        let mut next = self.clone();
        let form = next.forms.remove(from);
        next.forms.insert(to, form);
        let failures = next.failures.remove(from);
        next.failures.insert(to, failures);
        next.focus = to;
        debug!(from, to, "moved segment");
        next.modified()
    }

    /// Replace the focused form with the default field set of `kind`.
    ///
    /// Nothing of the previous form survives, including its note.
    pub fn change_type(&self, kind: SegmentKind) -> Result<Self> {
        if !self.options.allows(kind) {
            return Err(EditError::ExcludedKind(kind));
        }
        let Some(slot) = self.forms.get(self.focus) else {
            debug!(%kind, "type change without a focused segment");
            return Ok(self.clone());
        };
        debug!(from = %slot.kind(), to = %kind, index = self.focus, "changed segment type");
        let mut next = self.clone();
        next.forms[self.focus] = SegmentForm::defaults(kind);
        next.failures[self.focus] = FieldFailures::new();
        Ok(next.modified())
    }

    /// Apply a field edit to the focused form.
    pub fn edit(&self, edit: &FieldEdit) -> Result<Self> {
        let form = self
            .forms
            .get(self.focus)
            .ok_or(EditError::IndexOutOfRange {
                index: self.focus,
                len: self.forms.len(),
            })?;
        let edited = apply_edit(form, edit, self.options.note_max_chars)?;
        let mut next = self.clone();
        next.forms[self.focus] = edited;
        Ok(next.modified())
    }

    /// Validate every form and, when all pass, encode the rule for the caller.
    pub fn commit(&self) -> Commit {
        let report = validate_rule(&self.forms);
        let mut next = self.clone();
        next.failures.clone_from(&report.segments);
        if report.is_submittable() {
            next.status = EditStatus::Clean;
            let segments = encode_all(&self.forms);
            debug!(segments = segments.len(), "rule committed");
            Commit::Accepted {
                state: next,
                segments,
            }
        } else {
            debug!(
                failures = report.failure_count(),
                "commit rejected by validation"
            );
            Commit::Rejected {
                state: next,
                report,
            }
        }
    }
}
