//! Retrieval models.
//!
//! Every model maps documents and queries into one representation type and
//! scores a pair of them; higher means more relevant. Models hold no mutable
//! state, so one instance can serve any number of threads.

use crate::search::{self, SearchOptions};
use crate::{DocId, Document};
use std::collections::HashSet;
use std::fmt;

pub trait RetrievalModel {
    type Representation;

    /// Pick the term field for the flags and convert it. Stemming only
    /// applies together with stop-word filtering.
    fn document_to_representation(
        &self,
        document: &Document,
        stopword_filtering: bool,
        stemming: bool,
    ) -> Self::Representation;

    /// Build a representation from the whitespace-separated query tokens.
    fn query_to_representation(&self, query: &str) -> Self::Representation;

    fn match_score(
        &self,
        document_representation: &Self::Representation,
        query_representation: &Self::Representation,
    ) -> f32;
}

/// Term field selected by the representation flags.
pub fn select_terms(document: &Document, stopword_filtering: bool, stemming: bool) -> &[String] {
    match (stopword_filtering, stemming) {
        (false, _) => &document.terms,
        (true, false) => &document.filtered_terms,
        (true, true) => &document.filtered_stemmed_terms,
    }
}

/// Boolean retrieval by scanning every document's term set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearBooleanModel;

impl LinearBooleanModel {
    pub fn new() -> Self { Self }
}

impl RetrievalModel for LinearBooleanModel {
    type Representation = HashSet<String>;

    fn document_to_representation(&self, document: &Document, stopword_filtering: bool, stemming: bool) -> HashSet<String> {
        select_terms(document, stopword_filtering, stemming).iter().cloned().collect()
    }

    fn query_to_representation(&self, query: &str) -> HashSet<String> {
        query.split_whitespace().map(str::to_string).collect()
    }

    /// 1.0 when every query term occurs in the document, 0.0 otherwise.
    fn match_score(&self, document_representation: &HashSet<String>, query_representation: &HashSet<String>) -> f32 {
        if query_representation.is_subset(document_representation) { 1.0 } else { 0.0 }
    }
}

impl fmt::Display for LinearBooleanModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ModelKind::LinearBoolean)
    }
}

macro_rules! unimplemented_model {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl RetrievalModel for $name {
            type Representation = ();

            fn document_to_representation(&self, _document: &Document, _stopword_filtering: bool, _stemming: bool) {
                unimplemented!("{} cannot represent documents yet", $kind)
            }

            fn query_to_representation(&self, _query: &str) {
                unimplemented!("{} cannot represent queries yet", $kind)
            }

            fn match_score(&self, _document_representation: &(), _query_representation: &()) -> f32 {
                unimplemented!("{} cannot match yet", $kind)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", $kind)
            }
        }
    };
}

unimplemented_model!(
    /// Boolean retrieval over an inverted list. Not implemented; every call panics.
    InvertedListBooleanModel,
    ModelKind::InvertedListBoolean
);
unimplemented_model!(
    /// Boolean retrieval over bit signatures. Not implemented; every call panics.
    SignatureBooleanModel,
    ModelKind::SignatureBoolean
);
unimplemented_model!(VectorSpaceModel, ModelKind::VectorSpace);
unimplemented_model!(FuzzySetModel, ModelKind::FuzzySet);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    LinearBoolean,
    InvertedListBoolean,
    SignatureBoolean,
    VectorSpace,
    FuzzySet,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        ModelKind::LinearBoolean,
        ModelKind::InvertedListBoolean,
        ModelKind::SignatureBoolean,
        ModelKind::VectorSpace,
        ModelKind::FuzzySet,
    ];

    pub fn is_implemented(self) -> bool {
        matches!(self, ModelKind::LinearBoolean)
    }

    /// Run `query` against `collection` with the model of this kind and return
    /// the ids of the matching documents. Panics for models that are not
    /// implemented.
    pub fn evaluate(self, collection: &[Document], query: &str, options: SearchOptions) -> Vec<DocId> {
        match self {
            ModelKind::LinearBoolean => search::search(&LinearBooleanModel, collection, query, options),
            ModelKind::InvertedListBoolean => search::search(&InvertedListBooleanModel, collection, query, options),
            ModelKind::SignatureBoolean => search::search(&SignatureBooleanModel, collection, query, options),
            ModelKind::VectorSpace => search::search(&VectorSpaceModel, collection, query, options),
            ModelKind::FuzzySet => search::search(&FuzzySetModel, collection, query, options),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::LinearBoolean => "Boolean Model (Linear)",
            ModelKind::InvertedListBoolean => "Boolean Model (Inverted List)",
            ModelKind::SignatureBoolean => "Boolean Model (Signatures)",
            ModelKind::VectorSpace => "Vector Space Model",
            ModelKind::FuzzySet => "Fuzzy Set Model",
        };
        f.write_str(name)
    }
}
