use crate::domain::catalog::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Product {0} not found")]
    ItemNotFound(ItemId),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
