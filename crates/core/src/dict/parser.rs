//! Accent-notation line parser and `VariantMap` aggregation.
//!
//! Source format: one entry per line, `lemma#variant1,variant2,...`,
//! stress marked with `'` after the stressed vowel, optional `` ` `` for
//! an explicitly unstressed vowel. Blank lines are skipped; anything else
//! malformed aborts the whole build.

use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::language::accent;
use crate::language::alphabet::{is_source_word, strip_accents};
use crate::types::{DictError, ParsedLine, VariantMap};

/// Rejection reason for a single source line, without file context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LineError(pub String);

/// Parse one raw line.
///
/// Returns `Ok(None)` for blank lines. Forms that reduce to the lemma are
/// required to exist; forms that carry no usable stress mark are dropped
/// silently (see [`accent::canonicalize`]), which can legitimately leave
/// `forms` empty.
pub fn parse_line(line: &str) -> Result<Option<ParsedLine>, LineError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = trimmed.split('#').collect();
    if parts.len() != 2 {
        return Err(LineError("expected exactly one `#` separator".to_string()));
    }

    let lemma = parts[0].trim().to_lowercase();
    if lemma.is_empty() {
        return Err(LineError("empty lemma".to_string()));
    }
    if !is_source_word(&lemma) {
        return Err(LineError(format!("lemma `{}` is not a Russian word", lemma)));
    }

    let mut raw_forms: Vec<&str> = Vec::new();
    for token in parts[1].split(',') {
        let token = token.trim();
        if !token.is_empty() && !raw_forms.contains(&token) {
            raw_forms.push(token);
        }
    }
    if raw_forms.is_empty() {
        return Err(LineError("no wordforms listed".to_string()));
    }
    if !raw_forms.iter().any(|f| strip_accents(f) == lemma) {
        return Err(LineError(format!(
            "lemma `{}` does not appear among its own wordforms",
            lemma
        )));
    }

    let mut forms = Vec::new();
    for raw in raw_forms {
        let wordform = strip_accents(raw).to_lowercase();
        if !is_source_word(&wordform) {
            return Err(LineError(format!(
                "wordform `{}` is not a Russian word",
                wordform
            )));
        }
        if let Some(variant) = accent::canonicalize(raw) {
            forms.push((wordform, variant));
        }
    }

    Ok(Some(ParsedLine { lemma, forms }))
}

/// First-writer-wins fold of one parsed line into the map.
pub fn merge_line(map: &mut VariantMap, entry: &ParsedLine) {
    for (wordform, variant) in &entry.forms {
        map.entry(wordform.clone())
            .or_default()
            .entry(variant.clone())
            .or_insert_with(|| entry.lemma.clone());
    }
}

/// Load and aggregate a source dictionary file into a `VariantMap`.
///
/// Input is decoded lossily (stray non-UTF-8 bytes are replaced rather
/// than fatal). The first malformed line aborts with
/// [`DictError::MalformedEntry`]; a file yielding no entries at all is
/// [`DictError::EmptyDictionary`].
pub fn load_variant_map(path: &Path) -> Result<VariantMap> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read source dictionary {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let file = path.display().to_string();

    let mut map = VariantMap::new();
    for (idx, line) in text.lines().enumerate() {
        let parsed = parse_line(line).map_err(|e| DictError::MalformedEntry {
            file: file.clone(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        if let Some(entry) = parsed {
            merge_line(&mut map, &entry);
        }
    }

    if map.is_empty() {
        return Err(DictError::EmptyDictionary { file }.into());
    }
    log::info!("`{}`: loaded {} wordform(s)", file, map.len());
    Ok(map)
}
