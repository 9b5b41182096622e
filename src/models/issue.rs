use serde::{Deserialize, Serialize};

/// Addresses one issue: workspace slug, project and issue id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueContext {
    pub workspace_slug: String,
    pub project_id: String,
    pub issue_id: String,
}

impl IssueContext {
    pub fn new(
        workspace_slug: impl Into<String>,
        project_id: impl Into<String>,
        issue_id: impl Into<String>,
    ) -> Self {
        Self {
            workspace_slug: workspace_slug.into(),
            project_id: project_id.into(),
            issue_id: issue_id.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sequence_id: Option<u64>,
    #[serde(default)]
    pub project_id: Option<String>,
    /// Attached labels in display order.
    #[serde(default, alias = "labels")]
    pub label_ids: Vec<String>,
}

/// Partial issue update. Only `label_ids` is ever sent by this crate.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct IssuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
}

impl IssuePatch {
    pub fn with_labels(label_ids: Vec<String>) -> Self {
        Self { label_ids: Some(label_ids) }
    }
}
