use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate record id {0}")]
    DuplicateId(uuid::Uuid),
    #[error("no record with id {0}")]
    NotFound(uuid::Uuid),
}

pub type Result<T> = std::result::Result<T, StoreError>;
