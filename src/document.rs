//! Documents and the loader that normalizes extracted text.
//!
//! Extraction (HTML fetch, tag stripping) happens upstream; this module
//! receives already-extracted plain text plus a small string-to-string
//! metadata map, and normalizes the text for splitting:
//!
//! ```text
//! "Title\n\n  Body   text\twith\n newlines"
//!                 ↓ collapse whitespace runs
//! "Title Body text with newlines"
//! ```
//!
//! Collapsing matters because extracted HTML is full of indentation and
//! blank lines that would otherwise dominate separator matching. Note
//! that collapsing removes `"\n\n"` and `"\n"` from the text entirely —
//! with the default separator hierarchy, loaded documents split on
//! spaces. The coarser separators still apply to text that skips the
//! loader.
//!
//! Metadata is passed through verbatim. Two keys are meaningful
//! downstream: [`SOURCE_URL_KEY`] (stable external identity, the input
//! to the document fingerprint) and [`TITLE_KEY`] (human-readable
//! label).

use std::collections::BTreeMap;

/// Metadata key carrying a document's stable external identifier.
pub const SOURCE_URL_KEY: &str = "source-url";

/// Metadata key carrying a document's human-readable title.
pub const TITLE_KEY: &str = "title";

/// An extracted document: normalized text plus metadata.
///
/// Immutable once loaded; the assembler consumes it without mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Whitespace-normalized text content.
    pub content: String,
    /// String-to-string metadata, passed through from extraction.
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// Create a document from already-normalized content.
    #[must_use]
    pub fn new(content: impl Into<String>, metadata: BTreeMap<String, String>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// The document's stable external identifier, if extraction found one.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.metadata.get(SOURCE_URL_KEY).map(String::as_str)
    }

    /// The document's title, if extraction found one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(TITLE_KEY).map(String::as_str)
    }

    /// The document's title, or `fallback` when extraction found none
    /// (callers typically pass a file name).
    #[must_use]
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title().unwrap_or(fallback)
    }
}

/// Convert extracted `(text, metadata)` pairs into documents.
///
/// Each text has every run of whitespace collapsed to a single space;
/// metadata is preserved verbatim. Output order follows input order.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use shards::{load_documents, SOURCE_URL_KEY};
///
/// let mut meta = BTreeMap::new();
/// meta.insert(SOURCE_URL_KEY.to_string(), "https://example.com/a".to_string());
///
/// let docs = load_documents(vec![("Some\n\n  extracted   text".to_string(), meta)]);
/// assert_eq!(docs[0].content, "Some extracted text");
/// assert_eq!(docs[0].source_url(), Some("https://example.com/a"));
/// ```
pub fn load_documents<I>(items: I) -> Vec<Document>
where
    I: IntoIterator<Item = (String, BTreeMap<String, String>)>,
{
    items
        .into_iter()
        .map(|(text, metadata)| Document::new(collapse_whitespace(&text), metadata))
        .collect()
}

/// Collapse every run of whitespace (spaces, tabs, newlines) to a single
/// space. Leading and trailing runs become one space each — no trimming.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
