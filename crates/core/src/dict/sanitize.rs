//! One-off maintenance pass over a serialized dictionary file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use super::serialize::write_json;

/// Sort and deduplicate the second element of a `[homonyms, simple]`
/// array in place.
pub fn sanitize_value(value: &mut Value) -> Result<()> {
    let Some(items) = value.as_array_mut() else {
        bail!("expected a JSON array");
    };
    if items.len() != 2 {
        bail!("expected a 2-element array, got {} element(s)", items.len());
    }
    let Some(simple) = items[1].as_array() else {
        bail!("expected the second element to be an array");
    };

    let mut wordforms = Vec::with_capacity(simple.len());
    for item in simple {
        match item.as_str() {
            Some(s) => wordforms.push(s.to_string()),
            None => bail!("expected the second element to contain only strings"),
        }
    }
    wordforms.sort_unstable();
    wordforms.dedup();
    items[1] = Value::from(wordforms);
    Ok(())
}

/// Rewrite a dictionary file in place: simple-wordform list deduplicated
/// and sorted, output pretty-printed with sorted keys.
pub fn sanitize_file(path: &Path) -> Result<()> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let mut value: Value = serde_json::from_str(&data)
        .with_context(|| format!("`{}` is not valid JSON", path.display()))?;

    sanitize_value(&mut value)
        .with_context(|| format!("`{}` is not a dictionary file", path.display()))?;

    write_json(&value, path)?;
    log::info!("`{}`: sanitized in place", path.display());
    Ok(())
}
