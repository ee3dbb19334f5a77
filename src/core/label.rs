use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier drawn from the closed taxonomy label set ("comuna 5", "caba",
/// "lanus", ...). Opaque: the taxonomy data defines the valid values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalLabel(String);

impl CanonicalLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Outcome of classifying one free-text answer.
///
/// Unmatchable input is an expected result, not an error: rows are never
/// dropped, they are labeled with the `otro` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Confident match to a taxonomy label
    Label(CanonicalLabel),
    /// Null/empty input, or best score below cutoff
    Unclassified,
}

/// Literal token the sentinel renders as in output rows.
pub const UNCLASSIFIED_TOKEN: &str = "otro";

impl Classification {
    /// Output-row rendering: the label text, or `"otro"`.
    pub fn as_str(&self) -> &str {
        match self {
            Classification::Label(label) => label.as_str(),
            Classification::Unclassified => UNCLASSIFIED_TOKEN,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self, Classification::Unclassified)
    }

    pub fn label(&self) -> Option<&CanonicalLabel> {
        match self {
            Classification::Label(label) => Some(label),
            Classification::Unclassified => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
