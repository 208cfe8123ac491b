//! Recovers document boundaries from a flat corpus.
//!
//! A document opens on two blank lines followed by a non-blank title line and
//! closes on three consecutive blank lines. Body lines between the two markers
//! are trimmed, joined with single spaces and split into terms.

use crate::{Collection, DocId, Document};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

struct OpenDocument {
    title: String,
    body: Vec<String>,
}

impl OpenDocument {
    fn finish(self, document_id: DocId) -> Document {
        Document::new(document_id, self.title, self.body.join(" "))
    }
}

/// Segment a sequence of physical lines into documents.
///
/// Markers need at most two lines of lookahead; lines past the end count as
/// neither blank nor filled. A document still open when the input runs out is
/// kept if it has any body.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Collection {
    let blank = |i: usize| lines.get(i).is_some_and(|l| l.as_ref().trim().is_empty());
    let filled = |i: usize| lines.get(i).is_some_and(|l| !l.as_ref().trim().is_empty());

    let mut collection = Vec::new();
    let mut next_id: DocId = 0;
    let mut open: Option<OpenDocument> = None;
    let mut i = 0;

    while i < lines.len() {
        if open.is_none() {
            if blank(i) && blank(i + 1) && filled(i + 2) {
                let title = lines[i + 2].as_ref().trim().to_string();
                tracing::debug!(line = i + 2, %title, "document start");
                open = Some(OpenDocument { title, body: Vec::new() });
                i += 3;
                continue;
            }
        } else if blank(i) && blank(i + 1) && blank(i + 2) {
            // Only the first marker line is consumed; the other two may open the next entry.
            if let Some(doc) = open.take() {
                collection.push(doc.finish(next_id));
                next_id += 1;
            }
        } else if filled(i) {
            if let Some(doc) = open.as_mut() {
                doc.body.push(lines[i].as_ref().trim().to_string());
            }
        }
        i += 1;
    }

    if let Some(doc) = open {
        if !doc.body.is_empty() {
            collection.push(doc.finish(next_id));
        }
    }

    tracing::info!(num_docs = collection.len(), num_lines = lines.len(), "segmented corpus");
    collection
}

/// Segment an in-memory corpus.
pub fn parse_str(text: &str) -> Collection {
    let lines: Vec<&str> = text.lines().collect();
    parse(&lines)
}

/// Read a UTF-8 corpus file and segment it.
pub fn extract_collection<P: AsRef<Path>>(source_file_path: P) -> Result<Collection> {
    let path = source_file_path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading corpus {}", path.display()))?;
    Ok(parse_str(&text))
}
