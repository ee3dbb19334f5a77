use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::CanonicalLabel;
use crate::error::{ClassifierError, Result};

/// Embedded reference data: CABA comunas plus GBA partidos, in declaration
/// order. Declaration order is load-bearing — it drives duplicate-alias
/// shadowing and fuzzy-match tie-breaking downstream.
const METROPOLITAN_TAXONOMY_JSON: &str = include_str!("../../data/taxonomy.json");

/// Administrative zone of a taxonomy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Capital district (comunas + the "caba" catch-all)
    Caba,
    /// Greater Buenos Aires suburban partidos
    Gba,
}

/// One canonical label with its known spelling variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub label: CanonicalLabel,
    pub zone: Zone,
    pub aliases: Vec<String>,
}

/// Ordered mapping from canonical label to alias list.
///
/// This is static configuration, loaded once at startup and passed around
/// explicitly. It is a swappable data artifact: operators add aliases or
/// labels by editing JSON, never the matching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// The built-in reference taxonomy for the Buenos Aires metro area.
    pub fn metropolitan() -> Result<Self> {
        Self::from_json_str(METROPOLITAN_TAXONOMY_JSON)
    }

    /// Parse a taxonomy from a JSON string.
    ///
    /// Expected shape: an array of `{"label", "zone", "aliases"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let taxonomy: Taxonomy = serde_json::from_str(json)?;
        taxonomy.check_non_empty()?;
        Ok(taxonomy)
    }

    /// Load a taxonomy from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let taxonomy: Taxonomy = serde_json::from_reader(BufReader::new(file))?;
        taxonomy.check_non_empty()?;
        Ok(taxonomy)
    }

    /// Build a taxonomy directly from entries (mainly for tests and callers
    /// with their own data source).
    pub fn from_entries(entries: Vec<TaxonomyEntry>) -> Result<Self> {
        let taxonomy = Self { entries };
        taxonomy.check_non_empty()?;
        Ok(taxonomy)
    }

    /// Sub-taxonomy containing only the suburban (GBA) entries, preserving
    /// declaration order. This is the looser-cutoff candidate scope.
    pub fn suburban(&self) -> Result<Self> {
        Self::from_entries(
            self.entries
                .iter()
                .filter(|e| e.zone == Zone::Gba)
                .cloned()
                .collect(),
        )
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_non_empty(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(ClassifierError::EmptyTaxonomy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metropolitan_loads() {
        let taxonomy = Taxonomy::metropolitan().unwrap();
        // 1 catch-all + 15 comunas + 24 partidos
        assert_eq!(taxonomy.len(), 40);
        assert_eq!(taxonomy.entries()[0].label.as_str(), "caba");
        assert_eq!(taxonomy.entries()[0].zone, Zone::Caba);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let taxonomy = Taxonomy::metropolitan().unwrap();
        let labels: Vec<&str> = taxonomy.iter().map(|e| e.label.as_str()).collect();
        let avellaneda = labels.iter().position(|l| *l == "avellaneda").unwrap();
        let lanus = labels.iter().position(|l| *l == "lanus").unwrap();
        assert!(avellaneda < lanus);
        assert_eq!(labels[1], "comuna 1");
        assert_eq!(labels[16], "avellaneda");
    }

    #[test]
    fn test_suburban_scope_drops_capital() {
        let taxonomy = Taxonomy::metropolitan().unwrap();
        let suburban = taxonomy.suburban().unwrap();
        assert_eq!(suburban.len(), 24);
        assert!(suburban.iter().all(|e| e.zone == Zone::Gba));
        assert_eq!(suburban.entries()[0].label.as_str(), "avellaneda");
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        let err = Taxonomy::from_json_str("[]").unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyTaxonomy));
        let err = Taxonomy::from_entries(Vec::new()).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyTaxonomy));
    }

    #[test]
    fn test_bad_json_rejected() {
        let err = Taxonomy::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ClassifierError::Json(_)));
    }
}
