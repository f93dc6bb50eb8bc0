//! Morphology capability interface.
//!
//! The resolver consumes morphological analysis through this trait so
//! that backends can be swapped and tests can supply canned parses. An
//! instance is always passed in explicitly; nothing in the pipeline holds
//! a process-wide analyzer.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One ranked parse candidate for a wordform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphParse {
    /// Normal (citation) form proposed by the analyzer.
    pub normal_form: String,
    /// Source-specific morphological tag.
    pub tag: String,
    /// True when the parse comes from the analyzer's dictionary rather
    /// than a heuristic guesser.
    pub dictionary_backed: bool,
    /// Full paradigm surface forms; populated only for dictionary-backed
    /// parses.
    #[serde(default)]
    pub lexeme: Vec<String>,
}

/// Morphology backend: ranked parses plus canonical-tagset conversion.
pub trait Morphology: Send + Sync {
    /// Backend name for display/diagnostics.
    fn name(&self) -> &str;

    /// Ranked parse candidates for a bare wordform, best first.
    fn analyze(&self, wordform: &str) -> Result<Vec<MorphParse>>;

    /// Canonical-tagset (UD 2.0) rendering of a source-specific tag.
    fn convert_tag(&self, tag: &str) -> Result<String>;
}
