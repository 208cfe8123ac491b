use crate::Collection;
use anyhow::{Context, Result};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Write the collection as a JSON array of document objects.
pub fn save_collection_as_json<P: AsRef<Path>>(collection: &Collection, file_path: P) -> Result<()> {
    let path = file_path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(f);
    serde_json::to_writer(&mut writer, collection)?;
    writer.flush()?;
    tracing::info!(num_docs = collection.len(), path = %path.display(), "saved collection");
    Ok(())
}

/// Load a collection saved by [`save_collection_as_json`].
///
/// A missing file is not an error: an empty collection comes back instead.
/// Derived term lists absent from the file load as empty.
pub fn load_collection_from_json<P: AsRef<Path>>(file_path: P) -> Result<Collection> {
    let path = file_path.as_ref();
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "no collection found, starting with an empty one");
            return Ok(Collection::new());
        }
        Err(e) => return Err(e).with_context(|| format!("opening {}", path.display())),
    };
    let collection: Collection = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing collection {}", path.display()))?;
    tracing::info!(num_docs = collection.len(), path = %path.display(), "loaded collection");
    Ok(collection)
}
