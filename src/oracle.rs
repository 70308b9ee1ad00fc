//! The length oracle: a pluggable cost function for the size budget.
//!
//! ## Why "Length" Is Pluggable
//!
//! The splitter budgets chunks against a size limit, but "size" depends
//! on what happens downstream. An embedding model cares about tokens,
//! not characters:
//!
//! ```text
//! "internationalization"  -> 20 characters, but 4 BPE tokens
//! "a b c d e f g h i j"   -> 19 characters, but 10 tokens
//! ```
//!
//! Budgeting in characters when the real limit is tokens either wastes
//! context capacity or overflows the model. So the splitter never counts
//! anything itself — it asks an oracle.
//!
//! ## Contract
//!
//! - Deterministic: the same text always yields the same length.
//! - Side-effect free: no caching visible to callers, no I/O required.
//! - Fallible: an oracle backed by an external tokenizer may fail, and
//!   that failure propagates — a budget decision cannot be made without
//!   a length, so the splitter never swallows it.
//!
//! ## Implementations
//!
//! - [`CharCount`]: counts Unicode scalar values. Dependency-free,
//!   infallible, useful for tests and rough budgeting.
//! - `TiktokenOracle` (feature `tiktoken`): counts cl100k_base BPE
//!   tokens, matching the budgets of OpenAI-style embedding models.

use crate::Result;

/// A pluggable cost function mapping text to a non-negative length.
///
/// Injected into [`TextSplitter`](crate::TextSplitter) at construction
/// time; the core has no compile-time dependency on any tokenizer.
///
/// ```rust
/// use shards::{CharCount, LengthOracle};
///
/// let oracle = CharCount;
/// assert_eq!(oracle.length("hello").unwrap(), 5);
/// assert_eq!(oracle.length("日本語").unwrap(), 3); // chars, not bytes
/// ```
pub trait LengthOracle: Send + Sync {
    /// Compute the length of `text` in this oracle's units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthComputation`](crate::Error::LengthComputation)
    /// if the text cannot be measured.
    fn length(&self, text: &str) -> Result<usize>;
}

/// A character-counting oracle.
///
/// Counts Unicode scalar values, not bytes, so multi-byte characters
/// cost 1 each. Infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl LengthOracle for CharCount {
    fn length(&self, text: &str) -> Result<usize> {
        Ok(text.chars().count())
    }
}

/// A BPE token-counting oracle backed by tiktoken's cl100k_base encoding.
///
/// This is the encoding the reference ingestion pipeline budgets with;
/// use it when chunk sizes must match previously indexed content.
/// Special-token text is encoded as ordinary text, never as control
/// tokens.
#[cfg(feature = "tiktoken")]
pub struct TiktokenOracle {
    bpe: tiktoken_rs::CoreBPE,
}

#[cfg(feature = "tiktoken")]
impl TiktokenOracle {
    /// Load the cl100k_base encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenizerInit`](crate::Error::TokenizerInit) if
    /// the encoding tables cannot be loaded.
    pub fn cl100k() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| crate::Error::TokenizerInit(e.to_string()))?;
        Ok(Self { bpe })
    }
}

#[cfg(feature = "tiktoken")]
impl LengthOracle for TiktokenOracle {
    fn length(&self, text: &str) -> Result<usize> {
        Ok(self.bpe.encode_ordinary(text).len())
    }
}

#[cfg(feature = "tiktoken")]
impl std::fmt::Debug for TiktokenOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiktokenOracle")
            .field("encoding", &"cl100k_base")
            .finish()
    }
}
