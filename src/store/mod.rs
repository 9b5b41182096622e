//! Boundaries to the issue and label stores.

pub mod error;

use async_trait::async_trait;

use crate::models::{Issue, IssuePatch, Label, LabelDraft};

pub use error::{classify_store_error, ErrorClassifier, ErrorKind, StoreError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutates persisted issues.
#[async_trait]
pub trait IssueStore: Send + Sync {
    async fn update_issue(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        patch: &IssuePatch,
    ) -> StoreResult<()>;
}

/// Creates and lists project labels.
#[async_trait]
pub trait LabelStore: Send + Sync {
    async fn create_label(
        &self,
        workspace_slug: &str,
        project_id: &str,
        draft: &LabelDraft,
    ) -> StoreResult<Label>;

    async fn list_labels(&self, workspace_slug: &str, project_id: &str) -> StoreResult<Vec<Label>>;
}

/// Resolves the current state of an issue.
///
/// `is_inbox` selects the inbox (intake) copy of the issue instead of the
/// regular project issue.
#[async_trait]
pub trait IssueStateAccessor: Send + Sync {
    async fn get_issue(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        is_inbox: bool,
    ) -> StoreResult<Option<Issue>>;
}
