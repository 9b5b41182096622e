use thiserror::Error;

use crate::constants::DUPLICATE_LABEL_ERROR;

/// Failure reported by an issue or label store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Message as reported by the server, or the local description otherwise.
    pub fn message(&self) -> &str {
        match self {
            StoreError::Api { message, .. } => message,
            StoreError::Transport(msg) | StoreError::Decode(msg) | StoreError::NotFound(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateName,
    Other,
}

/// Maps a store failure onto the categories the coordinator reacts to.
pub type ErrorClassifier = fn(&StoreError) -> ErrorKind;

pub fn classify_store_error(err: &StoreError) -> ErrorKind {
    match err {
        StoreError::Api { message, .. } if message == DUPLICATE_LABEL_ERROR => ErrorKind::DuplicateName,
        _ => ErrorKind::Other,
    }
}
