use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
    #[error("unknown {what}: {value}")]
    UnknownValue { what: &'static str, value: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
