//! pymorphy2 bridge backend.
//!
//! The analyzer and the tagset converter are Python libraries, so this
//! backend runs them out of process: a small embedded script answers one
//! query per invocation with JSON on stdout. Availability is probed up
//! front so a missing interpreter fails with an actionable message
//! instead of mid-build.

use std::process::Command;

use anyhow::{bail, Context, Result};

use super::analyzer::{MorphParse, Morphology};

/// One-shot query script: pymorphy2 parses or opencorpora-int -> ud20
/// tag conversion, JSON on stdout.
const BRIDGE_SCRIPT: &str = r#"
import json
import sys

mode = sys.argv[1]
query = sys.argv[2]

if mode == "analyze":
    import pymorphy2
    morph = pymorphy2.MorphAnalyzer()
    out = []
    for p in morph.parse(query):
        dictionary = str(p.methods_stack[0][0]) == "<DictionaryAnalyzer>"
        out.append({
            "normal_form": p.normal_form,
            "tag": str(p.tag),
            "dictionary_backed": dictionary,
            "lexeme": [it.word for it in p.lexeme] if dictionary else [],
        })
    json.dump(out, sys.stdout, ensure_ascii=False)
elif mode == "convert":
    from russian_tagsets import converters
    to_ud20 = converters.converter("opencorpora-int", "ud20")
    json.dump(to_ud20(query), sys.stdout, ensure_ascii=False)
else:
    raise SystemExit(f"unknown mode: {mode}")
"#;

/// Out-of-process pymorphy2 + russian-tagsets backend.
pub struct PymorphyBridge {
    python: String,
}

impl PymorphyBridge {
    pub fn new() -> Self {
        Self::with_python("python3")
    }

    /// Use a specific Python interpreter.
    pub fn with_python(python: &str) -> Self {
        Self {
            python: python.to_string(),
        }
    }

    fn run(&self, mode: &str, query: &str) -> Result<String> {
        let output = Command::new(&self.python)
            .args(["-c", BRIDGE_SCRIPT, mode, query])
            .output()
            .with_context(|| format!("failed to spawn {}", self.python))?;
        if !output.status.success() {
            bail!(
                "pymorphy bridge failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for PymorphyBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Morphology for PymorphyBridge {
    fn name(&self) -> &str {
        "pymorphy"
    }

    fn analyze(&self, wordform: &str) -> Result<Vec<MorphParse>> {
        let stdout = self.run("analyze", wordform)?;
        serde_json::from_str(&stdout).context("invalid JSON from pymorphy bridge")
    }

    fn convert_tag(&self, tag: &str) -> Result<String> {
        let stdout = self.run("convert", tag)?;
        serde_json::from_str(&stdout).context("invalid JSON from pymorphy bridge")
    }
}

/// Check that the interpreter can import pymorphy2 and russian_tagsets.
pub fn pymorphy_available(python: &str) -> bool {
    Command::new(python)
        .args(["-c", "import pymorphy2, russian_tagsets"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
