//! Syntax labels supplied from outside the editing core.
//!
//! The core never computes labels; it only reads them while laying out the
//! view. A label file is a JSON object mapping character offsets to label
//! names, e.g. `{"0": "keyword", "4": "string"}`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Category of a labeled character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    String,
    Number,
    Keyword,
    Comment,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::String, Label::Number, Label::Keyword, Label::Comment];

    pub fn name(&self) -> &'static str {
        match self {
            Label::String => "string",
            Label::Number => "number",
            Label::Keyword => "keyword",
            Label::Comment => "comment",
        }
    }
}

/// Read-only map from character offset to label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labeling {
    labels: HashMap<usize, Label>,
}

impl Labeling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: usize) -> Option<Label> {
        self.labels.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Parse a JSON label map
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid label map")
    }

    /// Load a JSON label map from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read labels from {}", path.display()))?;
        let labeling = Self::from_json(&content)?;
        tracing::debug!("Loaded {} labels from {}", labeling.len(), path.display());
        Ok(labeling)
    }
}

impl FromIterator<(usize, Label)> for Labeling {
    fn from_iter<T: IntoIterator<Item = (usize, Label)>>(iter: T) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let labeling = Labeling::from_json(r#"{"0": "keyword", "7": "number"}"#).unwrap();
        assert_eq!(labeling.get(0), Some(Label::Keyword));
        assert_eq!(labeling.get(7), Some(Label::Number));
        assert_eq!(labeling.get(3), None);
        assert_eq!(labeling.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_unknown_label() {
        assert!(Labeling::from_json(r#"{"0": "banana"}"#).is_err());
    }

    #[test]
    fn test_from_iter() {
        let labeling: Labeling = [(1, Label::Comment), (2, Label::String)].into_iter().collect();
        assert_eq!(labeling.get(1), Some(Label::Comment));
        assert_eq!(Label::Comment.name(), "comment");
    }
}
