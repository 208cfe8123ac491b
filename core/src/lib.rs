pub mod cleanup;
pub mod extraction;
pub mod models;
pub mod persist;
pub mod search;
pub mod stemming;

use serde::{Deserialize, Serialize};

pub type DocId = u32;

/// Documents in discovery order; `document_id` increases with position.
pub type Collection = Vec<Document>;

/// One segmented entry of the corpus.
///
/// `terms` is written once by the extractor and never touched again. Every
/// derived sequence lives in its own field so a pipeline stage can be rerun
/// without losing the source tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub document_id: DocId,
    pub title: String,
    pub raw_text: String,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub filtered_terms: Vec<String>,
    #[serde(default)]
    pub stemmed_terms: Vec<String>,
    #[serde(default)]
    pub filtered_stemmed_terms: Vec<String>,
}

impl Document {
    pub fn new(document_id: DocId, title: String, raw_text: String) -> Self {
        let terms = raw_text.split_whitespace().map(str::to_string).collect();
        Self { document_id, title, raw_text, terms, ..Self::default() }
    }
}
