pub mod issue;
pub mod label;

// Re-export commonly used types
pub use issue::{Issue, IssueContext, IssuePatch};
pub use label::{Label, LabelDraft};

use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by list endpoints.
#[derive(Debug, Deserialize, Serialize)]
pub struct Page<T> {
    pub results: Vec<T>,
}
