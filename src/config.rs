//! Splitter configuration.
//!
//! ## The Knobs
//!
//! Four values control how a document is split:
//!
//! - `chunk_size`: the budget per chunk, measured by the length oracle
//!   (tokens, characters — whatever the oracle counts).
//! - `chunk_overlap`: how much trailing context each chunk shares with
//!   the next, measured in characters (see the splitter docs for why the
//!   units differ).
//! - `separators`: the split-point hierarchy, most specific first. The
//!   first separator that actually divides the text wins; the empty
//!   string is the everything-splits fallback.
//! - `minimum_chunk_size`: chunks with fewer whitespace-delimited words
//!   than this are dropped as noise.
//!
//! ## Validation
//!
//! Invalid combinations are rejected at construction time, never
//! mid-run. A splitter that has a config cannot fail on configuration.
//!
//! ```text
//! chunk_overlap >= chunk_size  -> rejected (overlap would swallow the chunk)
//! chunk_size == 0              -> rejected (nothing fits)
//! separators == []             -> rejected (no way to split)
//! ```

/// Validated configuration for [`TextSplitter`](crate::TextSplitter).
///
/// # Examples
///
/// ```rust
/// use shards::SplitterConfig;
///
/// let config = SplitterConfig::new(500, 20, &["\n\n", "\n", " ", ""], 5).unwrap();
/// assert_eq!(config.chunk_size(), 500);
/// assert_eq!(config.chunk_overlap(), 20);
///
/// // Overlap must be strictly smaller than the chunk budget
/// assert!(SplitterConfig::new(100, 100, &[" "], 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    minimum_chunk_size: usize,
}

impl SplitterConfig {
    /// Create a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Budget per chunk in oracle units
    /// * `chunk_overlap` - Characters of shared context between adjacent chunks
    /// * `separators` - Split-point hierarchy, tried in order
    /// * `minimum_chunk_size` - Minimum word count for a chunk to survive
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `chunk_size == 0`, if
    /// `chunk_overlap >= chunk_size`, or if `separators` is empty.
    pub fn new(
        chunk_size: usize,
        chunk_overlap: usize,
        separators: &[&str],
        minimum_chunk_size: usize,
    ) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(ConfigError::OverlapExceedsSize {
                size: chunk_size,
                overlap: chunk_overlap,
            });
        }
        if separators.is_empty() {
            return Err(ConfigError::NoSeparators);
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: separators.iter().map(|&s| s.to_string()).collect(),
            minimum_chunk_size,
        })
    }

    /// Replace the minimum word count. No invariant ties it to the
    /// other knobs, so this cannot fail.
    #[must_use]
    pub fn with_minimum_chunk_size(mut self, minimum_chunk_size: usize) -> Self {
        self.minimum_chunk_size = minimum_chunk_size;
        self
    }

    /// The per-chunk budget in oracle units.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Characters of shared context between adjacent chunks.
    #[must_use]
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// The separator hierarchy, most specific first.
    #[must_use]
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Minimum whitespace-delimited word count for a chunk to survive.
    #[must_use]
    pub fn minimum_chunk_size(&self) -> usize {
        self.minimum_chunk_size
    }
}

impl Default for SplitterConfig {
    /// The reference ingestion pipeline's settings: 500-unit chunks,
    /// 20 characters of overlap, paragraph/line/word/character
    /// separators, 5-word minimum.
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 20,
            separators: ["\n\n", "\n", " ", ""]
                .iter()
                .map(|&s| s.to_string())
                .collect(),
            minimum_chunk_size: 5,
        }
    }
}

/// Error rejecting an invalid splitter configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Chunk size must be > 0.
    #[error("chunk size must be > 0")]
    ZeroChunkSize,

    /// Overlap must be strictly smaller than the chunk size.
    #[error("overlap {overlap} must be < chunk size {size}")]
    OverlapExceedsSize {
        /// The configured chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// At least one separator is required.
    #[error("separator list must not be empty")]
    NoSeparators,
}
