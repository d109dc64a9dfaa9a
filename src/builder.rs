use std::fs;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{StatementError, StatementResult},
    parsers::prelude::*,
    source::{PageSource, TextDocument, looks_like_pdf},
    types::TransactionRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "pdf")]
    Pdf,
}

impl DocumentFormat {
    fn source(&self, content: &[u8]) -> StatementResult<Box<dyn PageSource>> {
        match self {
            DocumentFormat::Text => Ok(Box::new(TextDocument::from_utf8(content)?)),
            #[cfg(feature = "pdf")]
            DocumentFormat::Pdf => Ok(Box::new(crate::source::PdfDocument::new(content))),
            #[cfg(not(feature = "pdf"))]
            DocumentFormat::Pdf => Err(StatementError::UnsupportedFormat),
        }
    }

    fn detect(filename: Option<&str>, content: Option<&[u8]>) -> StatementResult<Self> {
        if let Some(content) = content {
            if looks_like_pdf(content) {
                return Ok(DocumentFormat::Pdf);
            }
        }

        if let Some(filename) = filename {
            if let Some((_, ext)) = filename.rsplit_once('.') {
                match ext.to_lowercase().as_str() {
                    "pdf" => return Ok(DocumentFormat::Pdf),
                    "txt" | "text" => return Ok(DocumentFormat::Text),
                    _ => {}
                }
            }
        }

        if let Some(content) = content {
            if std::str::from_utf8(content).is_ok() {
                return Ok(DocumentFormat::Text);
            }
        }

        Err(StatementError::UnsupportedFormat)
    }
}

/// Run the extraction pipeline over every page of `source`, in order.
///
/// Fails with [`StatementError::NoTransactionsFound`] when no line qualifies,
/// including documents made only of blank lines.
pub fn extract_transactions<S>(source: &S) -> StatementResult<Vec<TransactionRecord>>
where
    S: PageSource + ?Sized,
{
    let pages = source.pages()?;

    let mut records = Vec::new();
    let mut line_count = 0;
    for (index, page) in pages.iter().enumerate() {
        let lines = split_lines(page).count();
        let found = TextStatementParser::parse(page);
        debug!(
            "page {} yielded {} transactions from {} lines",
            index + 1,
            found.len(),
            lines
        );
        line_count += lines;
        records.extend(found);
    }

    if records.is_empty() {
        info!(
            "no transactions found ({} pages, {} non-blank lines)",
            pages.len(),
            line_count
        );
        return Err(StatementError::NoTransactionsFound);
    }

    info!(
        "extracted {} transactions from {} pages",
        records.len(),
        pages.len()
    );
    Ok(records)
}

#[derive(Default)]
pub struct ExtractorBuilder {
    content: Option<Vec<u8>>,
    filepath: Option<String>,
    format: Option<DocumentFormat>,
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.as_bytes().to_vec());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.content = Some(bytes.to_vec());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: DocumentFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn extract(self) -> StatementResult<Vec<TransactionRecord>> {
        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| {
                DocumentFormat::detect(self.filepath.as_deref(), self.content.as_deref())
            })?;

        let content = self.content.map(Ok).unwrap_or_else(|| {
            self.filepath
                .ok_or(StatementError::MissingContentAndFilepath)
                .and_then(|path| fs::read(path).map_err(StatementError::ReadContentFailed))
        })?;

        let source = format.source(&content)?;
        extract_transactions(source.as_ref())
    }
}
