// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod notify;
pub mod permissions;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::PlaneClient;
pub use config::{Config, get_api_key, load_config, save_config};
pub use coordinator::{LabelOperations, LabelTarget, Outcome};
pub use error::{LabelError, LabelResult};
pub use models::*;
pub use notify::{Notification, NotificationKind, NotificationSink};
pub use store::{ErrorKind, IssueStateAccessor, IssueStore, LabelStore, StoreError};
