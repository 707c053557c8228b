// Tue Jan 13 2026 - Alex

use crate::avl::AvlError;
use crate::memory::BitAddress;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("Symbol redefined with different addresses! {name} at {existing} vs. {requested}")]
    Redefined {
        name: String,
        existing: BitAddress,
        requested: BitAddress,
    },
    #[error("Symbol not found: {0}")]
    NotFound(String),
    #[error("Symbol index error: {0}")]
    Index(#[from] AvlError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}
