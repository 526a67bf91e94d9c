use thiserror::Error;

use crate::messages;
use crate::rest::RestError;

pub type Result<T, E = ZosFilesError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ZosFilesError {
    /// A required name was absent or empty. The message does not say which one.
    #[error("{}", messages::MISSING_DATASET_NAME)]
    MissingIdentifier,
    #[error("Failed to serialize request payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(transparent)]
    Rest(#[from] RestError),
}
