use thiserror::Error;

use crate::core::CanonicalLabel;

/// Main error type for the classifier.
///
/// Every variant is a configuration error surfaced while loading a taxonomy
/// or building an alias index. Classification itself never fails: input that
/// cannot be matched resolves to the `otro` sentinel, not to an error.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// JSON errors while loading a taxonomy artifact
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while reading a taxonomy file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Taxonomy with no entries at all
    #[error("taxonomy has no entries")]
    EmptyTaxonomy,

    /// A canonical label declared without a single alias
    #[error("label '{0}' has no aliases")]
    NoAliases(CanonicalLabel),

    /// An alias that is empty once normalized (blank or punctuation-only)
    #[error("alias '{alias}' under label '{label}' normalizes to an empty string")]
    BlankAlias { label: CanonicalLabel, alias: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ClassifierError>;
