use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Credential hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Account not found")]
    NotFound,

    #[error("Account has no store-assigned id")]
    MissingId,
}

/// Failures raised by a document store implementation, kept separate from
/// the domain-level `NotFound` outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Operation(String),
}
