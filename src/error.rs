use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("API key not found. Please run 'plane-labels auth' to configure.")]
    ApiKeyNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A store failure the user has already seen as a toast.
    #[error(transparent)]
    Reported(StoreError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl LabelError {
    /// Store failures that were already shown to the user become `Reported`.
    pub fn into_reported(self) -> Self {
        match self {
            LabelError::Store(err) => LabelError::Reported(err),
            other => other,
        }
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, LabelError::Reported(_))
    }
}

pub type LabelResult<T> = Result<T, LabelError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> LabelResult<T>;
    fn with_context<F>(self, f: F) -> LabelResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> LabelResult<T> {
        self.map_err(|e| LabelError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> LabelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LabelError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> LabelResult<T> {
        self.ok_or_else(|| LabelError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> LabelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| LabelError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! label_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::LabelError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::LabelError::$error_type(format!($fmt, $($arg)*))
    };
}
