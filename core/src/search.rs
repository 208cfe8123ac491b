use crate::models::RetrievalModel;
use crate::{DocId, Document};
use serde::{Deserialize, Serialize};

/// Which term field the document representation is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub stopword_filtering: bool,
    #[serde(default)]
    pub stemming: bool,
}

/// Score every document against `query`, in collection order.
pub fn score_collection<M: RetrievalModel>(
    model: &M,
    collection: &[Document],
    query: &str,
    options: SearchOptions,
) -> Vec<(DocId, f32)> {
    let query_rep = model.query_to_representation(query);
    collection
        .iter()
        .map(|doc| {
            let doc_rep = model.document_to_representation(doc, options.stopword_filtering, options.stemming);
            (doc.document_id, model.match_score(&doc_rep, &query_rep))
        })
        .collect()
}

/// Ids of the documents scoring above zero.
pub fn search<M: RetrievalModel>(model: &M, collection: &[Document], query: &str, options: SearchOptions) -> Vec<DocId> {
    let hits: Vec<DocId> = score_collection(model, collection, query, options)
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(doc_id, _)| doc_id)
        .collect();
    tracing::debug!(query, total_hits = hits.len(), num_docs = collection.len(), "evaluated query");
    hits
}
