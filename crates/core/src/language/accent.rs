//! Accent-notation canonicalization.
//!
//! Source dictionaries mark stress with an apostrophe after the stressed
//! vowel and occasionally mark explicit non-stress with a backtick. The
//! canonical notation uses `+` after the stressed vowel; `ё` is inherently
//! stressed and receives an implicit marker.

use crate::types::STRESS_MARKER;

use super::alphabet::vowel_count;

/// Canonicalize one accent-marked form.
///
/// Apostrophes become the canonical marker, backticks are dropped, and the
/// form is lowercased. A form without any marker gets one inserted after
/// `ё` when present. Returns `None` when the form still carries no marker
/// yet has more than one vowel — such forms are ambiguous about their
/// stress and are dropped from the accent set rather than failing the
/// whole line.
pub fn canonicalize(form: &str) -> Option<String> {
    let mut canonical = form
        .chars()
        .filter(|c| *c != '`')
        .map(|c| if c == '\'' { STRESS_MARKER } else { c })
        .collect::<String>()
        .to_lowercase();

    if !canonical.contains(STRESS_MARKER) {
        if let Some(idx) = canonical.find('ё') {
            canonical.insert(idx + 'ё'.len_utf8(), STRESS_MARKER);
        }
    }

    if canonical.contains(STRESS_MARKER) || vowel_count(&canonical) < 2 {
        Some(canonical)
    } else {
        None
    }
}

/// Remove the canonical marker, recovering the bare wordform.
pub fn strip_marker(variant: &str) -> String {
    variant.chars().filter(|c| *c != STRESS_MARKER).collect()
}
