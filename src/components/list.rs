use crate::coordinator::LabelOperations;
use crate::error::{LabelError, LabelResult};
use crate::formatting::labels::resolve_labels;
use crate::models::{IssueContext, IssuePatch, Label};

use super::without_label;

/// Labels currently on the issue, each removable unless the view is disabled.
pub struct LabelList<'a> {
    context: &'a IssueContext,
    values: Vec<String>,
    operations: &'a LabelOperations,
    disabled: bool,
}

impl<'a> LabelList<'a> {
    pub fn new(
        context: &'a IssueContext,
        values: Vec<String>,
        operations: &'a LabelOperations,
        disabled: bool,
    ) -> Self {
        Self { context, values, operations, disabled }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn labels<'l>(&self, project_labels: &'l [Label]) -> Vec<&'l Label> {
        resolve_labels(&self.values, project_labels)
    }

    /// Detach one label and return the set that was requested.
    pub async fn remove(&mut self, label_id: &str) -> LabelResult<Vec<String>> {
        if self.disabled {
            return Err(LabelError::InvalidInput("Labels are read-only for this issue".to_string()));
        }

        let updated = without_label(&self.values, label_id);
        self.operations
            .apply_label_set(
                &self.context.workspace_slug,
                &self.context.project_id,
                &self.context.issue_id,
                IssuePatch::with_labels(updated.clone()),
            )
            .await;
        self.values = updated.clone();
        Ok(updated)
    }
}
