use crate::coordinator::LabelOperations;
use crate::models::{IssueContext, IssuePatch};

use super::toggle_label;

/// Picker over the project's labels.
pub struct LabelSelect<'a> {
    context: &'a IssueContext,
    values: Vec<String>,
    operations: &'a LabelOperations,
}

impl<'a> LabelSelect<'a> {
    pub fn new(context: &'a IssueContext, values: Vec<String>, operations: &'a LabelOperations) -> Self {
        Self { context, values, operations }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_selected(&self, label_id: &str) -> bool {
        self.values.iter().any(|id| id == label_id)
    }

    pub async fn toggle(&mut self, label_id: &str) -> Vec<String> {
        let updated = toggle_label(&self.values, label_id);
        self.set(updated).await
    }

    /// Replace the whole selection. Duplicates are passed through as given.
    pub async fn set(&mut self, label_ids: Vec<String>) -> Vec<String> {
        self.operations
            .apply_label_set(
                &self.context.workspace_slug,
                &self.context.project_id,
                &self.context.issue_id,
                IssuePatch::with_labels(label_ids.clone()),
            )
            .await;
        self.values = label_ids.clone();
        label_ids
    }
}
