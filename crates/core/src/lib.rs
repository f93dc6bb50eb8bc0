//! accentor-core — build a stress-annotated Russian pronunciation
//! dictionary from a raw accent wordlist.
//!
//! The pipeline is a strict forward flow: raw `lemma#form1,form2,...`
//! lines are parsed and aggregated into a [`types::VariantMap`], wordforms
//! are partitioned by accent ambiguity, ambiguous groups are
//! disambiguated against a morphological analyzer, and the merged
//! dictionary is written out as a two-element JSON array.

pub mod dict;
pub mod language;
pub mod morph;
pub mod types;
