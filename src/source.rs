//! Text sources: the seam between a binary document and the line parser.

use crate::errors::{StatementError, StatementResult};

/// Page separator emitted by text-layer extractors.
pub const PAGE_BREAK: char = '\u{000C}';

/// Something that can turn a document into per-page text.
///
/// Implementations report any failure as [`StatementError::ExtractionFailed`];
/// the pipeline never sees a partially read document.
pub trait PageSource {
    fn pages(&self) -> StatementResult<Vec<String>>;
}

/// Already-extracted text, one string per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    pages: Vec<String>,
}

impl TextDocument {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Split raw text into pages on form feeds.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split(PAGE_BREAK))
    }

    pub fn from_utf8(bytes: &[u8]) -> StatementResult<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| StatementError::ExtractionFailed(format!("document is not UTF-8 text: {e}")))?;
        Ok(Self::from_text(text))
    }
}

impl PageSource for TextDocument {
    fn pages(&self) -> StatementResult<Vec<String>> {
        Ok(self.pages.clone())
    }
}

/// PDF text layer, read with `pdf-extract`.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone)]
pub struct PdfDocument {
    bytes: Vec<u8>,
}

#[cfg(feature = "pdf")]
impl PdfDocument {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }
}

#[cfg(feature = "pdf")]
impl PageSource for PdfDocument {
    fn pages(&self) -> StatementResult<Vec<String>> {
        let text = pdf_extract::extract_text_from_mem(&self.bytes)
            .map_err(|e| StatementError::ExtractionFailed(format!("failed to read PDF text: {e}")))?;
        Ok(text.split(PAGE_BREAK).map(str::to_string).collect())
    }
}

pub fn looks_like_pdf(content: &[u8]) -> bool {
    content.starts_with(b"%PDF-")
}
