use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Farm2HomeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error(
        "Unknown category '{0}' (expected one of: {categories})",
        categories = crate::catalog::CATEGORIES.join(", ")
    )]
    UnknownCategory(String),

    #[error("Invalid registration: {0}")]
    Validation(FieldErrors),
}

pub type Result<T> = std::result::Result<T, Farm2HomeError>;
