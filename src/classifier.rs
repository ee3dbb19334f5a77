use rayon::prelude::*;
use std::sync::Arc;

use crate::core::{Classification, Taxonomy};
use crate::error::Result;
use crate::index::AliasIndex;
use crate::matching::{Scorer, TokenSetScorer};
use crate::normalize::normalize_opt;

/// Reference cutoff for the combined capital + suburban taxonomy.
pub const METRO_CUTOFF: f64 = 89.0;

/// Reference cutoff for the suburban-only candidate scope.
pub const SUBURBAN_CUTOFF: f64 = 80.0;

/// Main classification orchestrator.
///
/// Owns an immutable [`AliasIndex`] built once from a taxonomy, plus the
/// scorer used against every candidate alias. Classification is a pure
/// function of (text, index, cutoff): the classifier holds no mutable state
/// and can be shared across threads freely.
pub struct Classifier {
    index: Arc<AliasIndex>,
    scorer: Arc<dyn Scorer>,
}

impl Classifier {
    /// Build a classifier with the default token-set scorer.
    pub fn new(taxonomy: &Taxonomy) -> Result<Self> {
        Self::with_scorer(taxonomy, Arc::new(TokenSetScorer::new()))
    }

    /// Build a classifier with a caller-supplied scorer.
    pub fn with_scorer(taxonomy: &Taxonomy, scorer: Arc<dyn Scorer>) -> Result<Self> {
        let index = Arc::new(AliasIndex::build(taxonomy)?);
        tracing::debug!(
            aliases = index.len(),
            scorer = scorer.name(),
            "classifier ready"
        );
        Ok(Self { index, scorer })
    }

    /// The compiled alias index.
    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    /// Classify one free-text answer.
    ///
    /// `None`, empty, and all-whitespace input short-circuit to
    /// [`Classification::Unclassified`]. Otherwise the text is normalized
    /// (already-normalized input is fine, normalization is idempotent) and
    /// scored against every alias; the best-scoring alias wins if its score
    /// reaches `cutoff`. Ties go to the alias declared earliest in the
    /// taxonomy, so repeated runs always produce the same label.
    pub fn classify(&self, text: Option<&str>, cutoff: f64) -> Classification {
        // missing answers pass through as None; blank and punctuation-only
        // answers normalize to the empty string
        let query = match normalize_opt(text) {
            Some(q) if !q.is_empty() => q,
            _ => return Classification::Unclassified,
        };

        let mut best: Option<(&str, f64)> = None;
        for alias in self.index.aliases() {
            let alias = alias.as_str();
            let score = self.scorer.score(&query, alias);
            match best {
                // strictly-greater keeps the earliest-declared alias on ties
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((alias, score)),
            }
        }

        let (alias, score) = match best {
            Some(found) => found,
            None => return Classification::Unclassified,
        };

        if score < cutoff {
            tracing::debug!(%query, %alias, score, cutoff, "best match below cutoff");
            return Classification::Unclassified;
        }

        match self.index.resolve(alias) {
            Some(label) => {
                tracing::debug!(%query, %alias, score, label = %label, "classified");
                Classification::Label(label.clone())
            }
            // every entry of the alias sequence has a mapping by construction
            None => Classification::Unclassified,
        }
    }

    /// Classify a batch of answers in parallel.
    ///
    /// Rows are independent, so this is a plain data-parallel map over the
    /// shared read-only index; output order matches input order.
    pub fn classify_batch(&self, texts: &[Option<&str>], cutoff: f64) -> Vec<Classification> {
        texts
            .par_iter()
            .map(|text| self.classify(*text, cutoff))
            .collect()
    }
}
