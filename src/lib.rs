//! # barrio-match
//!
//! Residence free-text classifier for Buenos Aires metro survey data:
//! - Closed taxonomy: 15 CABA comunas, a "caba" catch-all, ~30 GBA partidos
//! - Deterministic normalization (case, accents, punctuation, whitespace)
//! - Token-set fuzzy matching with a per-call score cutoff
//! - First-registration-wins alias collision policy
//! - Unmatchable answers resolve to the "otro" sentinel, never to an error
//!
//! ## Example Usage
//!
//! ```rust
//! use barrio_match::{Classifier, Taxonomy, METRO_CUTOFF};
//!
//! fn main() -> anyhow::Result<()> {
//!     let taxonomy = Taxonomy::metropolitan()?;
//!     let classifier = Classifier::new(&taxonomy)?;
//!
//!     let result = classifier.classify(Some("vivo en Villa Pueyrredón"), METRO_CUTOFF);
//!     println!("classified as: {}", result);
//!     assert_eq!(result.as_str(), "comuna 12");
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod core;
pub mod error;
pub mod index;
pub mod matching;
pub mod normalize;

// Re-export primary types
pub use classifier::{Classifier, METRO_CUTOFF, SUBURBAN_CUTOFF};
pub use core::{CanonicalLabel, Classification, Taxonomy, TaxonomyEntry, Zone, UNCLASSIFIED_TOKEN};
pub use error::{ClassifierError, Result};
pub use index::AliasIndex;
pub use matching::{JaroWinklerScorer, Scorer, TokenSetScorer};
pub use normalize::{normalize, normalize_opt};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
