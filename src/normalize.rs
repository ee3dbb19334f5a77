//! Deterministic text canonicalization.
//!
//! Alias matching depends on byte-for-byte equality of normalized forms, so
//! the same pipeline is applied to taxonomy aliases at index-build time and
//! to survey answers at classification time.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text for matching.
///
/// Steps, in order:
/// 1. lowercase
/// 2. NFD decomposition, dropping combining marks ("ñ" → "n", "í" → "i")
/// 3. periods become spaces ("c.a.b.a." → "c a b a")
/// 4. whitespace runs collapse to single spaces, ends trimmed
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let spaced = stripped.replace('.', " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `Option`-aware variant: a missing value passes through as `None`.
pub fn normalize_opt(text: Option<&str>) -> Option<String> {
    text.map(normalize)
}
