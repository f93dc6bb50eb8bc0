//! Batch text normalization for downstream phonetic processing.
//!
//! Running text is lowercased and segmented into phonetic phrases
//! separated by `<sil>` markers (sentence punctuation, standalone dashes
//! and newlines all become silence). A [`Preprocessor`] then pairs every
//! word with a morphological tag from a batch [`PhraseTagger`].

use anyhow::{Context, Result};
use regex::Regex;

/// Silence marker separating phonetic phrases.
pub const SIL: &str = "<sil>";

/// Tag attached to silence markers.
pub const SIL_TAG: &str = "SIL _";

lazy_static::lazy_static! {
    /// Sentence punctuation runs.
    static ref PUNCT: Regex = Regex::new(r"[.,?!();:]+").unwrap();

    /// Standalone dashes and newlines.
    static ref DASH: Regex = Regex::new(" [–-] |\n").unwrap();

    /// Collapsible whitespace.
    static ref MULTISPACE: Regex = Regex::new(r"\s{2,}").unwrap();

    /// Special-symbol runs at a word boundary (the leading non-word
    /// character, if any, is kept via the capture group).
    static ref SPECIALS: Regex =
        Regex::new(r#"(^|\W)[\\/@#~¬`£€$%^&*–_=+'"|«»-]+"#).unwrap();
}

/// Normalize running text into a flat token stream with `<sil>` markers.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let step = PUNCT.replace_all(&lowered, " <sil>");
    let step = DASH.replace_all(&step, " <sil> ");
    let step = MULTISPACE.replace_all(&step, " ");
    let step = SPECIALS.replace_all(&step, "$1");
    step.trim()
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// One tagged word from the batch tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    /// Part of speech, e.g. "NOUN".
    pub pos: String,
    /// Feature string, e.g. "Case=Nom|Number=Sing".
    pub tag: String,
}

/// Batch morphological tagger for plain sentences.
///
/// One call per batch; `rows[i]` must contain one entry per word of
/// `sentences[i]`.
pub trait PhraseTagger {
    fn tag_sentences(&self, sentences: &[Vec<String>]) -> Result<Vec<Vec<TaggedWord>>>;
}

/// Pairs normalized words with morphological tags, preserving phonetic
/// phrase boundaries as `("<sil>", "SIL _")` rows.
pub struct Preprocessor<T: PhraseTagger> {
    tagger: T,
}

impl<T: PhraseTagger> Preprocessor<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Normalize, tag, and re-segment `texts` into phonetic phrases.
    pub fn preprocess(&self, texts: &[String]) -> Result<Vec<Vec<(String, String)>>> {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| normalize(t)).collect();
        self.tag_tokens(&tokenized)
    }

    /// Pair pre-tokenized input (possibly containing `<sil>` markers) with
    /// tags. Phrases of one text are tagged as a single sentence so the
    /// tagger sees maximal context; the output re-inserts a silence row
    /// between phrases and at both ends.
    pub fn tag_tokens(&self, texts: &[Vec<String>]) -> Result<Vec<Vec<(String, String)>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut phrases_per_text: Vec<Vec<Vec<String>>> = Vec::new();
        let mut sentences: Vec<Vec<String>> = Vec::new();
        for text in texts {
            let joined = text.join(" ");
            let phrases: Vec<Vec<String>> = joined
                .split(SIL)
                .map(|p| p.split_whitespace().map(str::to_string).collect::<Vec<_>>())
                .filter(|p| !p.is_empty())
                .collect();
            if !phrases.is_empty() {
                sentences.push(phrases.iter().flatten().cloned().collect());
            }
            phrases_per_text.push(phrases);
        }

        let tagged = if sentences.is_empty() {
            Vec::new()
        } else {
            self.tagger.tag_sentences(&sentences)?
        };

        let mut out = Vec::new();
        let mut sentence_index = 0usize;
        for phrases in &phrases_per_text {
            let mut rows = vec![(SIL.to_string(), SIL_TAG.to_string())];
            if !phrases.is_empty() {
                let analysis = tagged
                    .get(sentence_index)
                    .context("tagger returned fewer sentences than submitted")?;
                let mut token_index = 0usize;
                for phrase in phrases {
                    for _ in phrase {
                        let word = analysis
                            .get(token_index)
                            .context("tagger returned fewer words than submitted")?;
                        rows.push((word.word.clone(), format!("{} {}", word.pos, word.tag)));
                        token_index += 1;
                    }
                    rows.push((SIL.to_string(), SIL_TAG.to_string()));
                }
                sentence_index += 1;
            }
            out.push(rows);
        }
        Ok(out)
    }
}
