use crate::Document;
use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// English Snowball stems of the lower-cased terms, in input order.
pub fn stem_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|t| STEMMER.stem(&t.as_ref().to_lowercase()).into_owned())
        .collect()
}

/// Fill `stemmed_terms` from `terms` and `filtered_stemmed_terms` from
/// `filtered_terms`. Run after `filter_collection` if filtered stems are wanted.
pub fn stem_collection(collection: &mut [Document]) {
    for document in collection.iter_mut() {
        document.stemmed_terms = stem_terms(&document.terms);
        document.filtered_stemmed_terms = stem_terms(&document.filtered_terms);
    }
    tracing::info!(num_docs = collection.len(), "stemmed collection");
}
