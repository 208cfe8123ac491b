use fabula_core::cleanup::{filter_collection, StopWords};
use fabula_core::extraction::parse_str;
use fabula_core::models::{
    InvertedListBooleanModel, LinearBooleanModel, ModelKind, RetrievalModel, VectorSpaceModel,
};
use fabula_core::search::{score_collection, search, SearchOptions};
use fabula_core::stemming::{stem_collection, stem_terms};
use fabula_core::Document;

fn fox_doc() -> Document {
    Document::new(0, "Fox".into(), "fox jumps dog fox".into())
}

#[test]
fn conjunctive_match() {
    let model = LinearBooleanModel::new();
    let doc_rep = model.document_to_representation(&fox_doc(), false, false);
    assert_eq!(doc_rep.len(), 3);

    let hit = model.query_to_representation("fox dog");
    let miss = model.query_to_representation("fox cat");
    assert_eq!(model.match_score(&doc_rep, &hit), 1.0);
    assert_eq!(model.match_score(&doc_rep, &miss), 0.0);
}

#[test]
fn empty_query_matches_everything() {
    let model = LinearBooleanModel;
    let doc_rep = model.document_to_representation(&fox_doc(), false, false);
    let q = model.query_to_representation("   ");
    assert_eq!(model.match_score(&doc_rep, &q), 1.0);
}

#[test]
fn matching_is_case_sensitive_on_raw_terms() {
    let model = LinearBooleanModel;
    let doc_rep = model.document_to_representation(&fox_doc(), false, false);
    assert_eq!(model.match_score(&doc_rep, &model.query_to_representation("Fox")), 0.0);
}

#[test]
fn flags_select_the_term_field() {
    let mut docs = parse_str("\n\nThe Fox\n\nThe Fox's tail, wagging.\n");
    let list: StopWords = ["the"].into_iter().collect();
    filter_collection(&mut docs, Some(&list));
    let model = LinearBooleanModel;

    let raw = model.document_to_representation(&docs[0], false, false);
    assert!(raw.contains("Fox's"));
    let filtered = model.document_to_representation(&docs[0], true, false);
    assert!(filtered.contains("Fox") && !filtered.contains("The"));
    // stems are not populated yet
    assert!(model.document_to_representation(&docs[0], true, true).is_empty());

    stem_collection(&mut docs);
    let stemmed = model.document_to_representation(&docs[0], true, true);
    assert!(stemmed.contains("wag"));
}

#[test]
fn search_returns_matching_ids_in_order() {
    let docs = vec![
        Document::new(0, "a".into(), "the fox and the crow".into()),
        Document::new(1, "b".into(), "the wolf and the lamb".into()),
        Document::new(2, "c".into(), "a crow and a fox".into()),
    ];
    let options = SearchOptions::default();
    assert_eq!(search(&LinearBooleanModel, &docs, "fox crow", options), vec![0, 2]);
    assert_eq!(ModelKind::LinearBoolean.evaluate(&docs, "lamb", options), vec![1]);

    let scores = score_collection(&LinearBooleanModel, &docs, "and", options);
    assert_eq!(scores, vec![(0, 1.0), (1, 1.0), (2, 1.0)]);
}

#[test]
fn stemmed_search_with_stemmed_query() {
    let mut docs = vec![Document::new(0, "a".into(), "The foxes were jumping".into())];
    filter_collection(&mut docs, None);
    stem_collection(&mut docs);
    let query = stem_terms(&["Jumped", "fox"]).join(" ");
    let options = SearchOptions { stopword_filtering: true, stemming: true };
    assert_eq!(search(&LinearBooleanModel, &docs, &query, options), vec![0]);
}

#[test]
fn options_read_from_json() {
    let options: SearchOptions = serde_json::from_str(r#"{"stopword_filtering": true}"#).unwrap();
    assert!(options.stopword_filtering);
    assert!(!options.stemming);
}

#[test]
fn concurrent_evaluation_shares_the_collection() {
    let docs: Vec<Document> = (0..50)
        .map(|i| Document::new(i, format!("{i}"), format!("fox number{i}")))
        .collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| search(&LinearBooleanModel, &docs, "fox", SearchOptions::default()).len()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 50);
        }
    });
}

#[test]
fn only_linear_boolean_is_implemented() {
    let implemented: Vec<ModelKind> = ModelKind::ALL.into_iter().filter(|k| k.is_implemented()).collect();
    assert_eq!(implemented, vec![ModelKind::LinearBoolean]);
    assert_eq!(ModelKind::SignatureBoolean.to_string(), "Boolean Model (Signatures)");
}

#[test]
#[should_panic(expected = "Boolean Model (Inverted List)")]
fn stub_model_panics() {
    InvertedListBooleanModel.query_to_representation("fox");
}

#[test]
#[should_panic(expected = "Vector Space Model")]
fn stub_kind_panics_even_on_empty_collection() {
    ModelKind::VectorSpace.evaluate(&[], "fox", SearchOptions::default());
}

#[test]
#[should_panic]
fn stub_match_panics() {
    VectorSpaceModel.match_score(&(), &());
}
