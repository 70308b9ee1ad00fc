//! Chunk records: the output shape handed to the embedding stage.
//!
//! ## Identity
//!
//! Every chunk gets an id of the form `<doc_uid>-<index>`:
//!
//! ```text
//! https://example.com/articles/1  ->  34a2eb68e11d-0
//!                                     34a2eb68e11d-1
//!                                     34a2eb68e11d-2
//! (no source-url)                 ->  unknown-0
//! ```
//!
//! `doc_uid` is the first 12 lowercase hex digits of the MD5 of the
//! source URL's UTF-8 bytes. The fingerprint is stable across runs, so
//! re-ingesting a document overwrites its previous vectors instead of
//! duplicating them. Documents without a URL share the `"unknown"`
//! sentinel — their chunks collide across such documents by design.
//!
//! ## The On-Disk Contract
//!
//! The embedding stage reads a single JSON array of
//! `{id, source, title, text}` objects, UTF-8, non-ASCII characters
//! preserved rather than `\u`-escaped. [`to_json`] and [`write_json`]
//! produce exactly that shape.

use serde::{Deserialize, Serialize};

use crate::{Document, Error, Result, TextSplitter};

/// Derive the stable 12-hex-char fingerprint for a document.
///
/// `None` (no `source-url` metadata) maps to the literal sentinel
/// `"unknown"`.
///
/// ```rust
/// use shards::doc_uid;
///
/// let uid = doc_uid(Some("https://example.com/articles/1"));
/// assert_eq!(uid.len(), 12);
/// assert_eq!(doc_uid(None), "unknown");
/// ```
#[must_use]
pub fn doc_uid(source_url: Option<&str>) -> String {
    match source_url {
        Some(url) => {
            let digest = md5::compute(url.as_bytes());
            format!("{digest:x}")[..12].to_string()
        }
        None => "unknown".to_string(),
    }
}

/// One chunk, ready for embedding and indexing.
///
/// Serializes to `{id, source, title, text}`; absent source or title
/// becomes JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// `<doc_uid>-<index>`, unique within a run.
    pub id: String,
    /// The document's source URL, if known.
    pub source: Option<String>,
    /// The document's title, if known.
    pub title: Option<String>,
    /// The chunk text.
    pub text: String,
}

/// Applies a splitter to documents and emits chunk records.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use shards::{CharCount, ChunkAssembler, Document, SplitterConfig, TextSplitter};
///
/// let config = SplitterConfig::new(100, 10, &["\n\n", "\n", " ", ""], 1).unwrap();
/// let splitter = TextSplitter::new(config, Arc::new(CharCount));
/// let assembler = ChunkAssembler::new(splitter);
///
/// let doc = Document::new("a small document", Default::default());
/// let records = assembler.assemble(&[doc]).unwrap();
/// assert_eq!(records[0].id, "unknown-0");
/// ```
#[derive(Debug)]
pub struct ChunkAssembler {
    splitter: TextSplitter,
}

impl ChunkAssembler {
    /// Create an assembler around a configured splitter.
    #[must_use]
    pub fn new(splitter: TextSplitter) -> Self {
        Self { splitter }
    }

    /// Chunk every document, in order, and emit one record per chunk.
    ///
    /// Chunk indices restart at 0 for each document. A document with
    /// empty content contributes zero records.
    ///
    /// # Errors
    ///
    /// A splitter failure aborts the run and comes back wrapped in
    /// [`Error::Document`] carrying the failing document's fingerprint.
    /// A failed document never contributes partial output.
    pub fn assemble(&self, documents: &[Document]) -> Result<Vec<ChunkRecord>> {
        let mut records = Vec::new();

        for doc in documents {
            let uid = doc_uid(doc.source_url());
            let chunks = self.splitter.split(&doc.content).map_err(|e| Error::Document {
                uid: uid.clone(),
                source: Box::new(e),
            })?;

            for (i, text) in chunks.into_iter().enumerate() {
                records.push(ChunkRecord {
                    id: format!("{uid}-{i}"),
                    source: doc.source_url().map(str::to_string),
                    title: doc.title().map(str::to_string),
                    text,
                });
            }
        }

        Ok(records)
    }
}

/// Serialize records as the on-disk JSON array, non-ASCII preserved.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if serialization fails.
pub fn to_json(records: &[ChunkRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Write records as the on-disk JSON array to `writer`.
///
/// # Errors
///
/// Returns [`Error::Serialize`] on serialization or I/O failure.
pub fn write_json<W: std::io::Write>(writer: W, records: &[ChunkRecord]) -> Result<()> {
    Ok(serde_json::to_writer(writer, records)?)
}
