//! Dictionary pipeline stages: parse, classify, resolve, serialize.

pub mod classify;
pub mod parser;
pub mod resolve;
pub mod sanitize;
pub mod serialize;

use crate::morph::analyzer::Morphology;
use crate::types::{ResolvedDictionary, VariantMap};

/// Run classification and resolution over an aggregated variant map.
///
/// Unambiguous wordforms go straight to the simple list; each homonym
/// group is resolved independently, with collapsed groups re-routed to
/// the simple list. Group order never affects the result.
pub fn disambiguate(map: &VariantMap, morph: &dyn Morphology) -> ResolvedDictionary {
    let partition = classify::partition(map);
    log::debug!(
        "{} simple wordform(s), {} candidate homonym group(s)",
        partition.simple.len(),
        partition.groups.len()
    );

    let mut out = ResolvedDictionary {
        homonyms: Default::default(),
        simple: partition.simple,
    };
    for group in &partition.groups {
        match resolve::resolve_group(group, morph) {
            resolve::Resolution::Keys(keys) => {
                out.homonyms.insert(group.wordform.clone(), keys);
            }
            resolve::Resolution::Collapse(variant) => out.simple.push(variant),
        }
    }
    log::info!("{} homonym group(s) kept", out.homonyms.len());
    out
}
