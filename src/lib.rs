//! Extract transactions from bank statement text and remember their categories.
//!
//! ```rust,ignore
//! use statement_categorizer::{CategoryStore, ExtractorBuilder, StoreConfig};
//!
//! let transactions = ExtractorBuilder::new()
//!     .content(&statement_text)
//!     .extract()?;
//!
//! let store = CategoryStore::new(StoreConfig::from_env());
//! store.upsert(&transactions[0].description, "Shopping")?;
//! ```

mod builder;
mod types;

pub mod config;
pub mod errors;
pub mod parsers;
pub mod service;
pub mod source;
pub mod store;

pub use builder::{DocumentFormat, ExtractorBuilder, extract_transactions};
pub use config::StoreConfig;
pub use errors::{StatementError, StatementResult};
pub use parsers::prelude::*;
pub use service::{CategorizationService, Response};
pub use source::{PageSource, TextDocument};
#[cfg(feature = "pdf")]
pub use source::PdfDocument;
pub use store::{CategorizationMemory, CategoryStore, categorize, lookup};
pub use types::{
    CategorizedTransaction, EMPTY_DESCRIPTION, TransactionDate, TransactionRecord,
};
