//! Symbol stripping and stop-word handling.

use crate::Document;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Share of distinct terms taken from each end of the frequency ranking.
pub const FREQUENCY_STOP_WORD_RATIO: f64 = 0.05;

lazy_static! {
    // ASCII punctuation: !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
    static ref SYMBOLS: Regex = Regex::new(r"[[:punct:]]").expect("valid regex");
}

/// Lower-cased words excluded from filtered term lists. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self { words.into_iter().collect() }
}

/// Remove ASCII punctuation. A possessive `'s` is dropped as a whole first.
pub fn strip_symbols(text: &str) -> String {
    let without_possessive = text.replace("'s", "");
    SYMBOLS.replace_all(&without_possessive, "").into_owned()
}

/// Case-insensitive lookup; the list itself is expected to be lower-case.
pub fn is_stop_word(term: &str, stop_words: &StopWords) -> bool {
    stop_words.contains(&term.to_lowercase())
}

/// Strip symbols from every term, then drop stop words when a list is given.
/// Original casing survives in the output.
pub fn filter_terms<S: AsRef<str>>(terms: &[S], stop_words: Option<&StopWords>) -> Vec<String> {
    let cleaned = terms.iter().map(|t| strip_symbols(t.as_ref()));
    match stop_words {
        Some(list) => cleaned.filter(|t| !is_stop_word(t, list)).collect(),
        None => cleaned.collect(),
    }
}

/// Rebuild `filtered_terms` for every document from its `terms`.
pub fn filter_collection(collection: &mut [Document], stop_words: Option<&StopWords>) {
    for document in collection.iter_mut() {
        document.filtered_terms = filter_terms(&document.terms, stop_words);
    }
    tracing::info!(
        num_docs = collection.len(),
        stop_words = stop_words.map_or(0, StopWords::len),
        "filtered collection"
    );
}

/// Read a stop-word file with one word per line.
pub fn load_stop_word_list<P: AsRef<Path>>(raw_file_path: P) -> Result<StopWords> {
    let path = raw_file_path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading stop-word list {}", path.display()))?;
    let words: StopWords = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    tracing::info!(path = %path.display(), count = words.len(), "loaded stop words");
    Ok(words)
}

/// Crouch-style stop words: the rarest and the most frequent distinct terms.
pub fn generate_stop_words_by_frequency(collection: &[Document]) -> Vec<String> {
    generate_stop_words_with_ratio(collection, FREQUENCY_STOP_WORD_RATIO)
}

/// Take `floor(distinct * ratio)` terms from each end of the ascending
/// frequency ranking, low end first. Counts run over lower-cased raw `terms`;
/// equal counts keep first-occurrence order.
pub fn generate_stop_words_with_ratio(collection: &[Document], ratio: f64) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    for document in collection {
        for term in &document.terms {
            let term = term.to_lowercase();
            match slot.get(&term) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    slot.insert(term.clone(), counts.len());
                    counts.push((term, 1));
                }
            }
        }
    }

    // stable: ties stay in first-occurrence order
    counts.sort_by_key(|(_, count)| *count);

    let distinct = counts.len();
    let k = ((distinct as f64) * ratio).floor() as usize;
    let k = k.min(distinct / 2);
    let mut stop_words: Vec<String> = counts[..k].iter().map(|(t, _)| t.clone()).collect();
    stop_words.extend(counts[distinct - k..].iter().map(|(t, _)| t.clone()));

    tracing::info!(distinct, selected = stop_words.len(), ratio, "generated stop words by frequency");
    stop_words
}
