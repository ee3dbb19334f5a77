//! Alias index: the taxonomy compiled into matchable form.

use std::collections::HashMap;

use crate::core::{CanonicalLabel, Taxonomy};
use crate::error::{ClassifierError, Result};
use crate::normalize::normalize;

/// Derived, immutable lookup structure built once from a [`Taxonomy`].
///
/// Holds the ordered sequence of unique normalized aliases (first-seen order
/// across the whole taxonomy traversal) and the reverse map from normalized
/// alias to canonical label.
///
/// Collision policy: when two raw aliases normalize to the same string —
/// whether under one label or two — only the first registration is kept and
/// later ones are dropped silently. "gerli" is declared under both
/// "avellaneda" and "lanus"; it always resolves to "avellaneda" because
/// avellaneda is declared first.
#[derive(Debug, Clone)]
pub struct AliasIndex {
    alias_sequence: Vec<String>,
    alias_to_label: HashMap<String, CanonicalLabel>,
}

impl AliasIndex {
    /// Compile a taxonomy into an index.
    ///
    /// Fails fast on configuration errors: a label with an empty alias list,
    /// or an alias that normalizes to an empty string. Neither is ever
    /// deferred to classification time.
    pub fn build(taxonomy: &Taxonomy) -> Result<Self> {
        let mut alias_sequence = Vec::new();
        let mut alias_to_label: HashMap<String, CanonicalLabel> = HashMap::new();

        for entry in taxonomy.iter() {
            if entry.aliases.is_empty() {
                return Err(ClassifierError::NoAliases(entry.label.clone()));
            }
            for raw in &entry.aliases {
                let normalized = normalize(raw);
                if normalized.is_empty() {
                    return Err(ClassifierError::BlankAlias {
                        label: entry.label.clone(),
                        alias: raw.clone(),
                    });
                }
                if !alias_to_label.contains_key(&normalized) {
                    alias_sequence.push(normalized.clone());
                    alias_to_label.insert(normalized, entry.label.clone());
                } else {
                    tracing::debug!(
                        alias = %normalized,
                        label = %entry.label,
                        "duplicate normalized alias dropped (first registration wins)"
                    );
                }
            }
        }

        tracing::debug!(aliases = alias_sequence.len(), "alias index built");

        Ok(Self {
            alias_sequence,
            alias_to_label,
        })
    }

    /// Unique normalized aliases, in first-seen taxonomy order. This order is
    /// the fuzzy-match tie-break order.
    pub fn aliases(&self) -> &[String] {
        &self.alias_sequence
    }

    /// Resolve a normalized alias to its canonical label.
    pub fn resolve(&self, normalized_alias: &str) -> Option<&CanonicalLabel> {
        self.alias_to_label.get(normalized_alias)
    }

    pub fn len(&self) -> usize {
        self.alias_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_sequence.is_empty()
    }
}
