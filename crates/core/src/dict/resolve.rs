//! Homonym disambiguation.
//!
//! Every group is classified once by the shape of its lemma/variant
//! relation, then dispatched to a resolution strategy. Keys are either
//! canonical morphological tags (with `"(n)"` suffixes on collision) or
//! zero-padded positional ordinals over the sorted variant order. Every
//! variant of every group receives exactly one key, and identical
//! analyzer output always yields identical keys.

use std::collections::BTreeMap;

use crate::morph::analyzer::{MorphParse, Morphology};
use crate::types::HomonymGroup;

/// Shape of a homonym group's lemma/variant relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// One distinct lemma per accent variant.
    Bijective,
    /// Single shared lemma whose paradigm realizes the wordform in
    /// exactly one slot; the listed ambiguity is spurious.
    SharedLemmaCollapsible,
    /// Single shared lemma with true grammatical syncretism, or no
    /// dictionary-backed parse to check against.
    SharedLemmaAmbiguous,
    /// Neither bijective nor single-lemma.
    Mixed,
}

/// Outcome of resolving one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Disambiguation keys, one per accent variant.
    Keys(BTreeMap<String, String>),
    /// Spurious group: only this variant survives, on the simple list.
    Collapse(String),
}

/// Classify a group by the multiset of lemmas attached to its variants.
///
/// The shared-lemma split consults the analyzer: the paradigm of the
/// lemma's best parse decides whether the group collapses. Analyzer
/// failures demote to the ambiguous branch, never abort.
pub fn classify_group(group: &HomonymGroup, morph: &dyn Morphology) -> GroupKind {
    let mut lemmas: Vec<&str> = group.variants.iter().map(|(_, l)| l.as_str()).collect();
    lemmas.sort_unstable();
    lemmas.dedup();

    if lemmas.len() == group.variants.len() {
        return GroupKind::Bijective;
    }
    if lemmas.len() != 1 {
        return GroupKind::Mixed;
    }

    let best = match morph.analyze(lemmas[0]) {
        Ok(parses) => parses.into_iter().next(),
        Err(e) => {
            log::warn!("analysis of lemma `{}` failed: {:#}", lemmas[0], e);
            None
        }
    };
    match best {
        Some(parse) if parse.dictionary_backed => {
            let slots = parse
                .lexeme
                .iter()
                .filter(|w| **w == group.wordform)
                .count();
            if slots == 1 {
                GroupKind::SharedLemmaCollapsible
            } else {
                GroupKind::SharedLemmaAmbiguous
            }
        }
        _ => GroupKind::SharedLemmaAmbiguous,
    }
}

/// Assign a disambiguation key to every variant of `group`.
pub fn resolve_group(group: &HomonymGroup, morph: &dyn Morphology) -> Resolution {
    match classify_group(group, morph) {
        GroupKind::Bijective => Resolution::Keys(resolve_bijective(group, morph)),
        GroupKind::SharedLemmaCollapsible => {
            log::debug!("collapsing spurious group `{}`", group.wordform);
            Resolution::Collapse(group.variants[0].0.clone())
        }
        GroupKind::SharedLemmaAmbiguous | GroupKind::Mixed => {
            Resolution::Keys(ordinal_keys(group))
        }
    }
}

/// Per-variant morphological keys for a bijective group.
///
/// The wordform is analyzed once; each variant picks the parse matching
/// its lemma. A dictionary-backed pick becomes a canonical tag key;
/// anything else falls back to the variant's positional ordinal.
fn resolve_bijective(group: &HomonymGroup, morph: &dyn Morphology) -> BTreeMap<String, String> {
    let parses = match morph.analyze(&group.wordform) {
        Ok(parses) => parses,
        Err(e) => {
            log::warn!("analysis of `{}` failed: {:#}", group.wordform, e);
            Vec::new()
        }
    };

    let width = digit_width(group.variants.len());
    let mut keys = BTreeMap::new();
    for (index, (variant, lemma)) in group.variants.iter().enumerate() {
        let key = match best_parse(&parses, lemma) {
            Some(parse) if parse.dictionary_backed => match morph.convert_tag(&parse.tag) {
                Ok(tag) => dedup_key(&keys, tag),
                Err(e) => {
                    log::warn!("tag conversion of `{}` failed: {:#}", parse.tag, e);
                    ordinal_key(index, width)
                }
            },
            _ => ordinal_key(index, width),
        };
        keys.insert(key, variant.clone());
    }
    keys
}

/// First parse whose normal form equals `lemma` exactly; otherwise the
/// earliest-ranked candidate maximizing prefix-containment similarity
/// (`min(len)` over the pair, counted in characters, where one string is
/// a prefix of the other). Equal scores keep the earlier candidate.
fn best_parse<'a>(parses: &'a [MorphParse], lemma: &str) -> Option<&'a MorphParse> {
    if let Some(exact) = parses.iter().find(|p| p.normal_form == lemma) {
        return Some(exact);
    }

    let lemma_len = lemma.chars().count();
    let mut best: Option<&MorphParse> = None;
    let mut best_similarity = 0;
    for parse in parses {
        if parse.normal_form.starts_with(lemma) || lemma.starts_with(&parse.normal_form) {
            let similarity = lemma_len.min(parse.normal_form.chars().count());
            if similarity > best_similarity {
                best = Some(parse);
                best_similarity = similarity;
            }
        }
    }
    best
}

/// Append `"(n)"`, n >= 2, until the key is unused within the group.
fn dedup_key(keys: &BTreeMap<String, String>, tag: String) -> String {
    if !keys.contains_key(&tag) {
        return tag;
    }
    let mut counter = 2usize;
    loop {
        let candidate = format!("{}({})", tag, counter);
        if !keys.contains_key(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Positional keys for the whole group, over sorted variant order.
fn ordinal_keys(group: &HomonymGroup) -> BTreeMap<String, String> {
    let width = digit_width(group.variants.len());
    group
        .variants
        .iter()
        .enumerate()
        .map(|(index, (variant, _))| (ordinal_key(index, width), variant.clone()))
        .collect()
}

/// Digit width of the group size, for zero-padded ordinals.
fn digit_width(n: usize) -> usize {
    n.to_string().len()
}

/// 1-based zero-padded positional key.
fn ordinal_key(index: usize, width: usize) -> String {
    format!("{:0>width$}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::collections::HashMap;

    /// Canned analyzer: fixed parses per query, tag table for conversion.
    #[derive(Default)]
    struct CannedMorph {
        parses: HashMap<String, Vec<MorphParse>>,
        tags: HashMap<String, String>,
    }

    impl CannedMorph {
        fn with_parses(parses: &[(&str, Vec<MorphParse>)]) -> Self {
            Self {
                parses: parses
                    .iter()
                    .map(|(w, p)| (w.to_string(), p.clone()))
                    .collect(),
                tags: HashMap::new(),
            }
        }

        fn tag(mut self, from: &str, to: &str) -> Self {
            self.tags.insert(from.to_string(), to.to_string());
            self
        }
    }

    impl Morphology for CannedMorph {
        fn name(&self) -> &str {
            "canned"
        }
        fn analyze(&self, wordform: &str) -> Result<Vec<MorphParse>> {
            Ok(self.parses.get(wordform).cloned().unwrap_or_default())
        }
        fn convert_tag(&self, tag: &str) -> Result<String> {
            Ok(self.tags.get(tag).cloned().unwrap_or_else(|| tag.to_string()))
        }
    }

    fn parse(normal: &str, tag: &str, dictionary: bool, lexeme: &[&str]) -> MorphParse {
        MorphParse {
            normal_form: normal.to_string(),
            tag: tag.to_string(),
            dictionary_backed: dictionary,
            lexeme: lexeme.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn group(wordform: &str, variants: &[(&str, &str)]) -> HomonymGroup {
        HomonymGroup {
            wordform: wordform.to_string(),
            variants: variants
                .iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_classify_bijective() {
        let g = group("стоит", &[("сто+ит", "стоить"), ("стои+т", "стоять")]);
        assert_eq!(classify_group(&g, &CannedMorph::default()), GroupKind::Bijective);
    }

    #[test]
    fn test_classify_mixed() {
        let g = group(
            "форм",
            &[("фо+рм", "форма"), ("фор+м", "форма"), ("форм+", "формы")],
        );
        assert_eq!(classify_group(&g, &CannedMorph::default()), GroupKind::Mixed);
    }

    #[test]
    fn test_classify_shared_lemma_collapsible() {
        let morph = CannedMorph::with_parses(&[(
            "замок",
            vec![parse(
                "замок",
                "NOUN",
                true,
                &["замок", "замка", "замку"],
            )],
        )]);
        let g = group("замок", &[("за+мок", "замок"), ("замо+к", "замок")]);
        assert_eq!(classify_group(&g, &morph), GroupKind::SharedLemmaCollapsible);
    }

    #[test]
    fn test_classify_shared_lemma_syncretic() {
        // The paradigm hits the wordform twice (nominative and accusative).
        let morph = CannedMorph::with_parses(&[(
            "друг",
            vec![parse("друг", "NOUN", true, &["друг", "друг", "друзья"])],
        )]);
        let g = group("друг", &[("дру+г", "друг"), ("друзья+", "друг")]);
        assert_eq!(classify_group(&g, &morph), GroupKind::SharedLemmaAmbiguous);
    }

    #[test]
    fn test_classify_shared_lemma_heuristic_parse() {
        let morph = CannedMorph::with_parses(&[(
            "замок",
            vec![parse("замок", "NOUN", false, &[])],
        )]);
        let g = group("замок", &[("за+мок", "замок"), ("замо+к", "замок")]);
        assert_eq!(classify_group(&g, &morph), GroupKind::SharedLemmaAmbiguous);
    }

    #[test]
    fn test_classify_shared_lemma_no_parses() {
        let g = group("замок", &[("за+мок", "замок"), ("замо+к", "замок")]);
        assert_eq!(
            classify_group(&g, &CannedMorph::default()),
            GroupKind::SharedLemmaAmbiguous
        );
    }

    #[test]
    fn test_bijective_tag_keys() {
        let morph = CannedMorph::with_parses(&[(
            "стоит",
            vec![
                parse("стоить", "VERB,cost", true, &[]),
                parse("стоять", "VERB,stand", true, &[]),
            ],
        )])
        .tag("VERB,cost", "VERB Cost")
        .tag("VERB,stand", "VERB Stand");

        let g = group("стоит", &[("сто+ит", "стоить"), ("стои+т", "стоять")]);
        match resolve_group(&g, &morph) {
            Resolution::Keys(keys) => {
                assert_eq!(keys.len(), 2);
                assert_eq!(keys["VERB Cost"], "сто+ит");
                assert_eq!(keys["VERB Stand"], "стои+т");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_bijective_tag_collision_gets_suffix() {
        let morph = CannedMorph::with_parses(&[(
            "пара",
            vec![
                parse("пар", "NOUN,a", true, &[]),
                parse("пара", "NOUN,b", true, &[]),
            ],
        )])
        .tag("NOUN,a", "NOUN")
        .tag("NOUN,b", "NOUN");

        let g = group("пара", &[("па+ра", "пар"), ("пара+", "пара")]);
        match resolve_group(&g, &morph) {
            Resolution::Keys(keys) => {
                assert_eq!(keys["NOUN"], "па+ра");
                assert_eq!(keys["NOUN(2)"], "пара+");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_bijective_prefix_containment_fallback() {
        // No parse normalizes to either lemma exactly; the scan keeps the
        // candidate with the longest prefix containment.
        let morph = CannedMorph::with_parses(&[(
            "мыло",
            vec![
                parse("мы", "A", true, &[]),
                parse("мыл", "B", true, &[]),
                parse("мычать", "C", true, &[]),
            ],
        )])
        .tag("B", "VERB Past");

        let g = group("мыло", &[("мы+ло", "мыло"), ("мыло+", "мылон")]);
        match resolve_group(&g, &morph) {
            Resolution::Keys(keys) => {
                // Lemma `мыло`: best containment is `мыл` (min length 3
                // beats `мы` at 2), a tag key.
                assert_eq!(keys["VERB Past"], "мы+ло");
                // Lemma `мылон`: `мыл` is its longest containment too, so
                // the same tag comes back and takes the collision suffix.
                assert_eq!(keys["VERB Past(2)"], "мыло+");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_bijective_heuristic_match_falls_back_to_ordinal() {
        let morph = CannedMorph::with_parses(&[(
            "стоит",
            vec![
                parse("стоить", "VERB,cost", true, &[]),
                parse("стоять", "VERB,stand", false, &[]),
            ],
        )])
        .tag("VERB,cost", "VERB Cost");

        let g = group("стоит", &[("сто+ит", "стоить"), ("стои+т", "стоять")]);
        match resolve_group(&g, &morph) {
            Resolution::Keys(keys) => {
                assert_eq!(keys["VERB Cost"], "сто+ит");
                assert_eq!(keys["2"], "стои+т");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_bijective_no_parses_all_ordinals() {
        let g = group("стоит", &[("сто+ит", "стоить"), ("стои+т", "стоять")]);
        match resolve_group(&g, &CannedMorph::default()) {
            Resolution::Keys(keys) => {
                assert_eq!(keys["1"], "сто+ит");
                assert_eq!(keys["2"], "стои+т");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_shared_lemma_collapse_keeps_first_sorted_variant() {
        let morph = CannedMorph::with_parses(&[(
            "замок",
            vec![parse("замок", "NOUN", true, &["замок", "замка"])],
        )]);
        let g = group("замок", &[("за+мок", "замок"), ("замо+к", "замок")]);
        assert_eq!(
            resolve_group(&g, &morph),
            Resolution::Collapse("за+мок".to_string())
        );
    }

    #[test]
    fn test_shared_lemma_syncretism_gets_ordinals() {
        let morph = CannedMorph::with_parses(&[(
            "друг",
            vec![parse("друг", "NOUN", true, &["друг", "друг"])],
        )]);
        let g = group("друг", &[("дру+г", "друг"), ("друзья+", "друг")]);
        match resolve_group(&g, &morph) {
            Resolution::Keys(keys) => {
                assert_eq!(keys["1"], "дру+г");
                assert_eq!(keys["2"], "друзья+");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_mixed_gets_ordinals() {
        let g = group(
            "слов",
            &[("с+лов", "слов"), ("сло+в", "слово"), ("слов+", "слово")],
        );
        match resolve_group(&g, &CannedMorph::default()) {
            Resolution::Keys(keys) => {
                assert_eq!(keys.len(), 3);
                assert_eq!(keys["1"], "с+лов");
                assert_eq!(keys["2"], "сло+в");
                assert_eq!(keys["3"], "слов+");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_ordinal_keys_zero_padded_and_increasing() {
        let variants: Vec<(String, String)> = (0..12)
            .map(|i| (format!("в{:02}+", i), format!("л{}", i)))
            .collect();
        let g = HomonymGroup {
            wordform: "в".to_string(),
            variants,
        };
        let keys = ordinal_keys(&g);
        assert_eq!(keys.len(), 12);
        assert!(keys.contains_key("01"));
        assert!(keys.contains_key("12"));
        let ordered: Vec<&String> = keys.keys().collect();
        let mut sorted = ordered.clone();
        sorted.sort();
        assert_eq!(ordered, sorted);
    }

    #[test]
    fn test_key_count_equals_variant_count() {
        for n in [2usize, 3, 10, 11] {
            let variants: Vec<(String, String)> = (0..n)
                .map(|i| (format!("ф{:02}+", i), format!("л{}", i)))
                .collect();
            let g = HomonymGroup {
                wordform: "ф".to_string(),
                variants,
            };
            match resolve_group(&g, &CannedMorph::default()) {
                Resolution::Keys(keys) => assert_eq!(keys.len(), n),
                other => panic!("unexpected resolution: {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolution_deterministic() {
        let morph = CannedMorph::with_parses(&[(
            "стоит",
            vec![
                parse("стоить", "VERB,cost", true, &[]),
                parse("стоять", "VERB,stand", true, &[]),
            ],
        )]);
        let g = group("стоит", &[("сто+ит", "стоить"), ("стои+т", "стоять")]);
        assert_eq!(resolve_group(&g, &morph), resolve_group(&g, &morph));
    }
}
