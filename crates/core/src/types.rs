use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical stress marker, placed immediately after the stressed vowel.
pub const STRESS_MARKER: char = '+';

/// Mapping from a bare wordform to its accent variants and the lemma each
/// variant came from. Ordered maps keep iteration (and therefore output)
/// reproducible.
pub type VariantMap = BTreeMap<String, BTreeMap<String, String>>;

/// One parsed dictionary line: the lemma and its surviving accent forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub lemma: String,
    /// (bare wordform, accent variant) pairs after canonicalization.
    pub forms: Vec<(String, String)>,
}

/// A wordform with more than one valid accent variant, queued for
/// disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomonymGroup {
    pub wordform: String,
    /// Accent variants in lexicographic order, each with its source lemma.
    pub variants: Vec<(String, String)>,
}

/// Disambiguated output of the classifier and resolver stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDictionary {
    /// Wordform -> disambiguation key -> accent variant.
    pub homonyms: BTreeMap<String, BTreeMap<String, String>>,
    /// Accent variants of unambiguous wordforms; sorted and deduplicated
    /// at serialization time.
    pub simple: Vec<String>,
}

/// The serialized artifact: `[homonyms, simple_wordforms]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccentDictionary(
    pub BTreeMap<String, BTreeMap<String, String>>,
    pub Vec<String>,
);

/// Fatal dictionary build failures.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("file `{file}`, line {line}: incorrect entry: {reason}")]
    MalformedEntry {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("`{file}`: the accents dictionary cannot be loaded from this file")]
    EmptyDictionary { file: String },
}
