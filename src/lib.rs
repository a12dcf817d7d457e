//! Deterministic two-stage TF-IDF passage retrieval.
//!
//! `passage-core` answers a free-text query with the most relevant sentence of
//! a plain-text corpus. Documents are ranked first by term-frequency-weighted
//! IDF over the whole corpus; the sentences of the best documents are then
//! ranked against a fresh IDF table of just those sentences, with query term
//! density breaking ties. Identical corpus and query always produce identical
//! output.

pub mod config;
pub mod corpus;
pub mod document;
pub mod index;
pub mod selection;
pub mod text;
pub mod types;
