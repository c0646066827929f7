//! Reading rule files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use coderule_model::{Rule, Segment};
use serde::Deserialize;
use tracing::info;

/// Accepted top-level shapes of a rule file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RuleFile {
    Bare(Vec<Segment>),
    Wrapped(Rule),
}

impl From<RuleFile> for Rule {
    fn from(file: RuleFile) -> Self {
        match file {
            RuleFile::Bare(segments) => Rule::new(segments),
            RuleFile::Wrapped(rule) => rule,
        }
    }
}

/// Parse rule JSON: a bare segment array or `{"segments": [...]}`.
pub fn parse_rule(text: &str) -> Result<Rule> {
    let file: RuleFile = serde_json::from_str(text)
        .context("rule must be a JSON array of segments or an object with `segments`")?;
    Ok(file.into())
}

pub fn load_rule(path: &Path) -> Result<Rule> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read rule file {}", path.display()))?;
    let rule = parse_rule(&text).with_context(|| format!("parse rule file {}", path.display()))?;
    info!(path = %path.display(), segments = rule.segments.len(), "loaded rule");
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coderule_model::SegmentKind;

    #[test]
    fn accepts_both_shapes() {
        let bare = parse_rule(r#"[{"type":"month"}]"#).unwrap();
        let wrapped = parse_rule(r#"{"segments":[{"type":"month"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.segments[0].known_kind(), Some(SegmentKind::Month));
    }

    #[test]
    fn rejects_other_json() {
        let err = parse_rule(r#""literal""#).unwrap_err();
        assert!(err.to_string().contains("JSON array of segments"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_rule(Path::new("/nonexistent/rule.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rule.json"));
    }
}
