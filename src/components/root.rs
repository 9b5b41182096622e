use crate::coordinator::LabelOperations;
use crate::models::IssueContext;
use crate::permissions::{can_create_label, PermissionOracle};
use crate::store::{IssueStateAccessor, StoreResult};

use super::{LabelCreateForm, LabelList, LabelSelect};

/// Label section of one issue.
///
/// The list is always shown. The selector needs an editable issue, and the
/// create form additionally needs label-create permission in the project.
pub struct IssueLabel {
    context: IssueContext,
    disabled: bool,
    can_create_label: bool,
    values: Vec<String>,
    operations: LabelOperations,
}

impl IssueLabel {
    /// Resolve the issue's current labels and the actor's permissions.
    /// A draft target reads the inbox copy of the issue.
    pub async fn load(
        context: IssueContext,
        disabled: bool,
        operations: LabelOperations,
        accessor: &dyn IssueStateAccessor,
        permissions: &dyn PermissionOracle,
    ) -> StoreResult<Self> {
        let issue = accessor
            .get_issue(
                &context.workspace_slug,
                &context.project_id,
                &context.issue_id,
                operations.is_draft(),
            )
            .await?;

        Ok(Self {
            context,
            disabled,
            can_create_label: can_create_label(permissions),
            values: issue.map(|issue| issue.label_ids).unwrap_or_default(),
            operations,
        })
    }

    pub fn context(&self) -> &IssueContext {
        &self.context
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn operations(&self) -> &LabelOperations {
        &self.operations
    }

    pub fn list(&self) -> LabelList<'_> {
        LabelList::new(&self.context, self.values.clone(), &self.operations, self.disabled)
    }

    pub fn selector(&self) -> Option<LabelSelect<'_>> {
        if self.disabled {
            return None;
        }
        Some(LabelSelect::new(&self.context, self.values.clone(), &self.operations))
    }

    pub fn create_form(&self) -> Option<LabelCreateForm<'_>> {
        if self.disabled || !self.can_create_label {
            return None;
        }
        Some(LabelCreateForm::new(&self.context, self.values.clone(), &self.operations))
    }
}
