//! Budgeted text splitting with separator hierarchy and overlap.
//!
//! ## The Algorithm
//!
//! Given separators `["\n\n", "\n", " ", ""]` and a budget of 500:
//!
//! ```text
//! 1. Whole text fits the budget? Return it as the only chunk.
//! 2. Try each separator in order; the FIRST one that divides the
//!    text into more than one piece wins. "" divides into characters.
//! 3. Greedily pack pieces left to right: keep appending " piece" to
//!    the accumulator while the oracle says the result fits the budget;
//!    otherwise close the accumulator and start over from this piece.
//! 4. Append to each chunk (except the last) a prefix of the next
//!    chunk, sliced by character index, for cross-boundary context.
//! 5. Drop chunks with fewer words than the configured minimum.
//! ```
//!
//! ## Contractual Quirks
//!
//! Chunk boundaries must be reproducible across runs and must match
//! content that was indexed by earlier runs, so two oddities of this
//! algorithm are deliberate and load-bearing:
//!
//! - **Character overlap vs. token budget.** The size budget is measured
//!   by the length oracle (usually tokens), but the overlap prefix is
//!   sliced by character index: `overlap_start = max(chars(current) -
//!   chunk_overlap, 0)` characters of the next chunk. Callers that need
//!   token-exact overlap cannot get it from this splitter.
//! - **No re-splitting of oversized pieces.** Only the first separator
//!   that divides the text is ever applied. A piece that still exceeds
//!   the budget after that split is kept whole rather than split again
//!   with a finer separator.
//!
//! Note also that splitting consumes the separator: pieces are rejoined
//! with single spaces, so a paragraph split on `"\n\n"` comes back
//! space-joined, and the first packed chunk carries a leading space.

use std::sync::Arc;

use crate::{LengthOracle, Result, SplitterConfig};

/// Splits text into budgeted, overlapping chunks.
///
/// A pure function of its inputs: no state survives between calls, and
/// the same text with the same config and oracle always produces the
/// same chunks.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use shards::{CharCount, SplitterConfig, TextSplitter};
///
/// let config = SplitterConfig::new(20, 5, &["\n\n", "\n", " ", ""], 1).unwrap();
/// let splitter = TextSplitter::new(config, Arc::new(CharCount));
///
/// let chunks = splitter.split("a short text").unwrap();
/// assert_eq!(chunks, vec!["a short text"]); // fits the budget, untouched
/// ```
pub struct TextSplitter {
    config: SplitterConfig,
    oracle: Arc<dyn LengthOracle>,
}

impl TextSplitter {
    /// Create a splitter from a validated config and a length oracle.
    #[must_use]
    pub fn new(config: SplitterConfig, oracle: Arc<dyn LengthOracle>) -> Self {
        Self { config, oracle }
    }

    /// The configuration this splitter runs with.
    #[must_use]
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `text` into chunks.
    ///
    /// Empty input yields an empty sequence. Text that fits the budget
    /// is returned whole. Otherwise the text is divided at the first
    /// working separator, greedily packed, overlapped, and filtered.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::LengthComputation`](crate::Error::LengthComputation)
    /// from the oracle; pure string manipulation has no other failure mode.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(vec![]);
        }

        if self.oracle.length(text)? <= self.config.chunk_size() {
            return Ok(vec![text.to_string()]);
        }

        let pieces = match self.divide(text) {
            Some(pieces) => pieces,
            // Unsplittable by the configured separators
            None => return Ok(vec![text.to_string()]),
        };

        let packed = self.pack(&pieces)?;
        Ok(self.overlap_and_filter(&packed))
    }

    /// Divide `text` at the first separator that yields more than one
    /// piece. Returns `None` if no separator divides the text.
    fn divide(&self, text: &str) -> Option<Vec<String>> {
        for sep in self.config.separators() {
            let pieces: Vec<String> = if sep.is_empty() {
                text.chars().map(String::from).collect()
            } else {
                text.split(sep.as_str()).map(str::to_string).collect()
            };
            if pieces.len() > 1 {
                return Some(pieces);
            }
        }
        None
    }

    /// Single left-to-right greedy pass. Pieces are never reordered,
    /// and a piece that alone exceeds the budget still becomes the
    /// start of the next chunk, kept whole.
    fn pack(&self, pieces: &[String]) -> Result<Vec<String>> {
        let mut packed = Vec::new();
        let mut current = String::new();

        for piece in pieces {
            let candidate = format!("{current} {piece}");
            if self.oracle.length(&candidate)? <= self.config.chunk_size() {
                current = candidate;
            } else {
                if !current.is_empty() {
                    packed.push(std::mem::take(&mut current));
                }
                current = piece.clone();
            }
        }

        if !current.is_empty() {
            packed.push(current);
        }

        Ok(packed)
    }

    /// Append the character-sliced prefix of each following chunk, then
    /// drop chunks below the minimum word count.
    fn overlap_and_filter(&self, packed: &[String]) -> Vec<String> {
        let mut chunks = Vec::with_capacity(packed.len());

        for (i, chunk) in packed.iter().enumerate() {
            let mut chunk = chunk.clone();
            if let Some(next) = packed.get(i + 1) {
                let overlap_start = chunk
                    .chars()
                    .count()
                    .saturating_sub(self.config.chunk_overlap());
                let prefix: String = next.chars().take(overlap_start).collect();
                chunk = format!("{chunk} {prefix}");
            }
            if chunk.split_whitespace().count() >= self.config.minimum_chunk_size() {
                chunks.push(chunk);
            }
        }

        chunks
    }
}

impl std::fmt::Debug for TextSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSplitter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
