//! Partition aggregated wordforms by accent ambiguity.

use crate::types::{HomonymGroup, VariantMap};

/// Classifier output: unambiguous accent variants plus the homonym
/// worklist.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub simple: Vec<String>,
    pub groups: Vec<HomonymGroup>,
}

/// Split the variant map into simple wordforms and homonym groups.
///
/// A wordform with a single accent variant contributes that variant (not
/// the bare wordform) to the simple list; two or more variants become a
/// group, variants kept in lexicographic order with their lemmas.
pub fn partition(map: &VariantMap) -> Partition {
    let mut out = Partition::default();
    for (wordform, variants) in map {
        if variants.len() > 1 {
            out.groups.push(HomonymGroup {
                wordform: wordform.clone(),
                variants: variants
                    .iter()
                    .map(|(v, l)| (v.clone(), l.clone()))
                    .collect(),
            });
        } else if let Some((variant, _)) = variants.iter().next() {
            out.simple.push(variant.clone());
        }
    }
    out
}
