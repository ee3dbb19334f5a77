pub mod label;
pub mod taxonomy;

pub use label::{CanonicalLabel, Classification, UNCLASSIFIED_TOKEN};
pub use taxonomy::{Taxonomy, TaxonomyEntry, Zone};
