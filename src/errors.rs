use thiserror::Error;

/// Errors produced while extracting transactions or touching the category store
#[derive(Error, Debug)]
pub enum StatementError {
    /// A required request field was missing or blank
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// The text source failed or could not be read
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Text was read, but no line qualified as a transaction
    #[error("No transactions found in document")]
    NoTransactionsFound,

    /// The document format is not supported (or its feature is disabled)
    #[error("Unsupported document format")]
    UnsupportedFormat,

    /// The builder was called with neither content nor a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Reading the document from disk failed
    #[error("Failed to read document: {0}")]
    ReadContentFailed(#[source] std::io::Error),

    // ── Category store ─────────────────────────────────────────────────────────

    /// The persisted mapping could not be read or written
    #[error("Category store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    /// The persisted mapping is not a valid string-to-string JSON object
    #[error("Category store is corrupt: {0}")]
    StoreFormat(#[from] serde_json::Error),
}

/// Convenience alias for results carrying [`StatementError`]
pub type StatementResult<T> = Result<T, StatementError>;
