//! Final dictionary assembly and JSON output.
//!
//! The artifact is a 2-element array `[homonyms, simple_wordforms]`
//! pretty-printed with 4-space indentation, sorted keys, and non-ASCII
//! characters kept literal, so repeated builds are byte-identical.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::{AccentDictionary, ResolvedDictionary};

/// Merge resolver output into the serializable artifact.
///
/// The simple list is sorted and deduplicated here; homonym groups are
/// ordered maps already.
pub fn build_dictionary(resolved: ResolvedDictionary) -> AccentDictionary {
    let ResolvedDictionary {
        homonyms,
        mut simple,
    } = resolved;
    simple.sort_unstable();
    simple.dedup();
    AccentDictionary(homonyms, simple)
}

/// Pretty-print with 4-space indentation, keeping non-ASCII literal.
pub fn to_json_string(value: &impl Serialize) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).context("serializer produced invalid UTF-8")
}

/// Write the dictionary to `path` atomically (temp file + rename).
pub fn write_dictionary(dictionary: &AccentDictionary, path: &Path) -> Result<()> {
    write_json(dictionary, path)?;
    log::info!("`{}`: dictionary has been saved into this file", path.display());
    Ok(())
}

/// Serialize `value` to `path` via a temp file in the same directory.
pub(crate) fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let json = to_json_string(value)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    std::fs::write(tmp.path(), json.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| anyhow::anyhow!("failed to save {}: {}", path.display(), e))?;
    Ok(())
}
