use thiserror::Error;

/// Errors emitted by the synthesis engine.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// A decimal-family cast token is missing its integer precision suffix.
    #[error("invalid cast '{0}': decimal casts require a precision suffix, e.g. `decimal:2`")]
    InvalidCastSpec(String),
    /// The schema reader failed.
    #[error(transparent)]
    Schema(#[from] tablesmith_core::Error),
}
