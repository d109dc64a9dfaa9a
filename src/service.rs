//! Caller-facing operations with explicit success/error envelopes.
//!
//! Nothing here returns `Err`: every failure becomes
//! `{"status": "error", "message": ...}` so a transport layer can forward the
//! value as-is.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    builder::{ExtractorBuilder, extract_transactions},
    config::StoreConfig,
    errors::StatementResult,
    source::PageSource,
    store::{CategorizationMemory, CategoryStore, categorize},
    types::{CategorizedTransaction, TransactionRecord},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response<T> {
    Success(T),
    Error { message: String },
}

impl<T> Response<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Response::Success(value) => Some(value),
            Response::Error { .. } => None,
        }
    }
}

impl<T> From<StatementResult<T>> for Response<T> {
    fn from(result: StatementResult<T>) -> Self {
        match result {
            Ok(value) => Response::Success(value),
            Err(e) => {
                warn!("request failed: {e}");
                Response::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTransactions {
    pub total_transactions: usize,
    pub transactions: Vec<TransactionRecord>,
}

impl From<Vec<TransactionRecord>> for ExtractedTransactions {
    fn from(transactions: Vec<TransactionRecord>) -> Self {
        Self {
            total_transactions: transactions.len(),
            transactions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saved {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    pub memory: CategorizationMemory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransactions {
    pub transactions: Vec<CategorizedTransaction>,
}

pub struct CategorizationService {
    store: CategoryStore,
}

impl CategorizationService {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            store: CategoryStore::new(config),
        }
    }

    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    pub fn extract_transactions(&self, document: ExtractorBuilder) -> Response<ExtractedTransactions> {
        Response::from(document.extract().map(ExtractedTransactions::from))
    }

    pub fn extract_transactions_from(
        &self,
        source: &dyn PageSource,
    ) -> Response<ExtractedTransactions> {
        Response::from(extract_transactions(source).map(ExtractedTransactions::from))
    }

    pub fn upsert_category(&self, description: &str, category: &str) -> Response<Saved> {
        Response::from(self.store.upsert(description, category).map(|_| Saved {}))
    }

    pub fn get_categories(&self) -> Response<Categories> {
        Response::from(self.store.read_all().map(|memory| Categories { memory }))
    }

    /// Extract a document and attach remembered categories to each record.
    pub fn categorized_transactions(
        &self,
        document: ExtractorBuilder,
    ) -> Response<CategorizedTransactions> {
        let result = document.extract().and_then(|records| {
            let memory = self.store.read_all()?;
            Ok(CategorizedTransactions {
                transactions: categorize(records, &memory),
            })
        });
        Response::from(result)
    }
}
