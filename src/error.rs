//! Error types for shards.

/// Errors that can occur while chunking documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The length oracle could not compute a size for a piece of text.
    ///
    /// Fatal for the document being processed: a budget decision cannot
    /// be made without a length, so this is never caught internally.
    #[error("length computation failed: {0}")]
    LengthComputation(String),

    /// A tokenizer-backed oracle failed to initialize.
    #[error("tokenizer initialization failed: {0}")]
    TokenizerInit(String),

    /// Processing a document failed; carries the document fingerprint
    /// so the caller can tell which input is at fault.
    #[error("failed to process document {uid}")]
    Document {
        /// Fingerprint of the failing document (see [`crate::doc_uid`]).
        uid: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Serializing chunk records to JSON failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for shards operations.
pub type Result<T> = std::result::Result<T, Error>;
