//! Rule-level validation.

use coderule_model::SegmentForm;
use serde::Serialize;

use crate::failure::FieldFailures;
use crate::validator::validate;

/// Validation outcome of a whole rule, one failure map per segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    pub segments: Vec<FieldFailures>,
}

impl RuleReport {
    /// A rule may be committed only when no segment has a failing field.
    pub fn is_submittable(&self) -> bool {
        self.segments.iter().all(FieldFailures::is_empty)
    }

    pub fn failure_count(&self) -> usize {
        self.segments.iter().map(FieldFailures::len).sum()
    }

    /// Failure map of segment `index`, if it has any failures.
    pub fn failures_at(&self, index: usize) -> Option<&FieldFailures> {
        self.segments.get(index).filter(|failures| !failures.is_empty())
    }

    /// Indices of the segments that failed, in rule order.
    pub fn failing_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, failures)| !failures.is_empty())
            .map(|(index, _)| index)
    }
}

/// Validate every form of a rule, keeping segment order.
pub fn validate_rule(forms: &[SegmentForm]) -> RuleReport {
    RuleReport {
        segments: forms.iter().map(validate).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coderule_model::SegmentKind;

    #[test]
    fn empty_rule_is_submittable() {
        let report = validate_rule(&[]);
        assert!(report.is_submittable());
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn reports_failing_positions() {
        let forms = vec![
            SegmentForm::defaults(SegmentKind::Month),
            SegmentForm::default_literal(),
            SegmentForm::defaults(SegmentKind::Checksum),
            SegmentForm::defaults(SegmentKind::ParameterValue),
        ];
        let report = validate_rule(&forms);
        assert!(!report.is_submittable());
        assert_eq!(report.failing_indices().collect::<Vec<_>>(), [1, 3]);
        assert!(report.failures_at(0).is_none());
        assert!(report.failures_at(1).is_some_and(|f| f.contains_key("content")));
        assert_eq!(report.failure_count(), 2);
    }
}
