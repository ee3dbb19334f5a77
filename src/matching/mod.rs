pub mod jaro;
pub mod token_set;

pub use jaro::JaroWinklerScorer;
pub use token_set::TokenSetScorer;

/// Trait for pairwise similarity scoring implementations.
///
/// Scores live in the closed range [0.0, 100.0]; both sides are expected to
/// be normalized text.
pub trait Scorer: Send + Sync {
    /// Similarity between query and candidate (0-100, higher is closer)
    fn score(&self, query: &str, candidate: &str) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}
