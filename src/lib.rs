//! # shards
//!
//! Document chunking for retrieval-augmented generation (RAG) ingestion.
//!
//! ## The Problem
//!
//! Before a document can be searched semantically it has to be embedded,
//! and embedding models have token limits. Documents don't fit. You need
//! to split them into pieces ("chunks") small enough to embed, stable
//! enough to re-index, and traceable back to their source.
//!
//! Three constraints make this more than `text.split()`:
//!
//! - **The budget is in tokens, not characters.** "Size" is whatever the
//!   embedding model counts, so the splitter delegates all measurement
//!   to a pluggable length oracle.
//! - **Chunks need shared context.** A fact straddling a chunk boundary
//!   is invisible to retrieval unless adjacent chunks overlap.
//! - **Identity must be stable.** Re-ingesting the same document must
//!   produce the same chunk ids, so the new vectors overwrite the old
//!   ones instead of accumulating next to them.
//!
//! ## The Pipeline
//!
//! ```text
//! (text, metadata) pairs           extraction, out of scope
//!         │
//!         ▼
//!   load_documents                 whitespace normalization
//!         │
//!         ▼
//!   TextSplitter ◄── LengthOracle  budgeted splitting with overlap
//!         │
//!         ▼
//!   ChunkAssembler                 stable ids: <doc_uid>-<index>
//!         │
//!         ▼
//!   [{id, source, title, text}]    JSON array for the embedding stage
//! ```
//!
//! Everything is pure and local: no network, no shared mutable state,
//! no state between runs. Documents are independent, so callers may
//! process them in parallel and concatenate in input order without
//! changing the output.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//! use shards::{
//!     load_documents, to_json, CharCount, ChunkAssembler, SplitterConfig,
//!     TextSplitter, SOURCE_URL_KEY, TITLE_KEY,
//! };
//!
//! // Extraction hands us (text, metadata) pairs
//! let mut meta = BTreeMap::new();
//! meta.insert(SOURCE_URL_KEY.to_string(), "https://example.com/a".to_string());
//! meta.insert(TITLE_KEY.to_string(), "Article A".to_string());
//! let items = vec![("The   extracted\n\narticle body".to_string(), meta)];
//!
//! let documents = load_documents(items);
//!
//! let config = SplitterConfig::default(); // 500-unit chunks, 20-char overlap
//! let splitter = TextSplitter::new(config, Arc::new(CharCount));
//! let assembler = ChunkAssembler::new(splitter);
//!
//! let records = assembler.assemble(&documents).unwrap();
//! let json = to_json(&records).unwrap();
//! assert!(json.starts_with('['));
//! ```
//!
//! ## Token-Based Budgets
//!
//! With the `tiktoken` feature, budget chunks by cl100k_base BPE tokens
//! instead of characters:
//!
//! ```rust,ignore
//! use shards::TiktokenOracle;
//!
//! let oracle = Arc::new(TiktokenOracle::cl100k()?);
//! let splitter = TextSplitter::new(SplitterConfig::default(), oracle);
//! ```
//!
//! The core has no compile-time tokenizer dependency by default; any
//! [`LengthOracle`] implementation plugs in.

mod config;
mod document;
mod error;
mod oracle;
mod record;
mod splitter;

pub use config::{ConfigError, SplitterConfig};
pub use document::{load_documents, Document, SOURCE_URL_KEY, TITLE_KEY};
pub use error::{Error, Result};
pub use oracle::{CharCount, LengthOracle};
pub use record::{doc_uid, to_json, write_json, ChunkAssembler, ChunkRecord};
pub use splitter::TextSplitter;

#[cfg(feature = "tiktoken")]
pub use oracle::TiktokenOracle;
