//! Corpus loading.
//!
//! A corpus file is TOML with one `[[documents]]` table per record:
//!
//! ```toml
//! [[documents]]
//! id = "pikachu-basics"
//! title = "Pikachu - The Electric Mouse Pokemon"
//! text = "..."
//! url = "https://pokemon.com/pikachu"   # optional
//!
//! [documents.metadata]                    # optional
//! type = "Electric"
//! ```

use std::path::Path;

use serde::Deserialize;

use docmcp_types::Document;

use crate::error::{StoreError, StoreResult};

pub(crate) const BUILTIN_CORPUS: &str = include_str!("../corpus/builtin.toml");

/// Origin reported in errors about the built-in corpus.
pub(crate) const BUILTIN_ORIGIN: &str = "<builtin>";

#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Parse corpus TOML. `origin` is only used in error messages.
pub fn parse_corpus(src: &str, origin: &Path) -> StoreResult<Vec<Document>> {
    let file: CorpusFile = toml::from_str(src).map_err(|e| StoreError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(file.documents)
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> StoreResult<Vec<Document>> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)?;
    let documents = parse_corpus(&src, path)?;
    tracing::info!(path = %path.display(), count = documents.len(), "loaded corpus");
    Ok(documents)
}

/// The sample corpus compiled into the binary, parsed but not yet checked for
/// duplicate ids.
pub fn builtin_documents() -> StoreResult<Vec<Document>> {
    parse_corpus(BUILTIN_CORPUS, Path::new(BUILTIN_ORIGIN))
}
