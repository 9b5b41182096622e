//! Transient user-facing messages ("toasts").

pub mod console;
pub mod queue;

pub use console::ConsoleSink;
pub use queue::NotificationQueue;

use crate::constants::{ERROR_TITLE, SUCCESS_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: ERROR_TITLE.to_string(),
            message: message.into(),
        }
    }
}

/// Fire-and-forget notification channel.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
