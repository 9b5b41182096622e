use crate::coordinator::LabelOperations;
use crate::error::{LabelError, LabelResult};
use crate::formatting::labels::is_hex_color;
use crate::models::{IssueContext, IssuePatch, Label, LabelDraft};

use super::with_label;

/// What the user typed into the create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelCreateInput {
    pub name: String,
    pub color: Option<String>,
}

impl LabelCreateInput {
    pub fn validate(&self) -> LabelResult<LabelDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LabelError::InvalidInput("Label title is required".to_string()));
        }

        let mut draft = LabelDraft::named(name);
        if let Some(color) = self.color.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            if !is_hex_color(color) {
                return Err(LabelError::InvalidInput(format!(
                    "Invalid color '{}', expected #rrggbb",
                    color
                )));
            }
            draft = draft.with_color(color);
        }
        Ok(draft)
    }
}

/// Inline form that creates a label and attaches it to the issue.
pub struct LabelCreateForm<'a> {
    context: &'a IssueContext,
    values: Vec<String>,
    operations: &'a LabelOperations,
    pub input: LabelCreateInput,
}

impl<'a> LabelCreateForm<'a> {
    pub fn new(context: &'a IssueContext, values: Vec<String>, operations: &'a LabelOperations) -> Self {
        Self {
            context,
            values,
            operations,
            input: LabelCreateInput::default(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Create the label, then attach it to the issue.
    ///
    /// The input is cleared only on success; a failed create leaves it in
    /// place for correction.
    pub async fn submit(&mut self) -> LabelResult<Label> {
        let draft = self.input.validate()?;
        let label = self
            .operations
            .create_label(&self.context.workspace_slug, &self.context.project_id, &draft)
            .await?;

        let updated = with_label(&self.values, &label.id);
        self.operations
            .apply_label_set(
                &self.context.workspace_slug,
                &self.context.project_id,
                &self.context.issue_id,
                IssuePatch::with_labels(updated.clone()),
            )
            .await;

        self.values = updated;
        self.input = LabelCreateInput::default();
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_name() {
        let input = LabelCreateInput { name: "  Bug ".to_string(), color: None };
        assert_eq!(input.validate().unwrap(), LabelDraft::named("Bug"));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = LabelCreateInput { name: "   ".to_string(), color: None };
        assert!(matches!(input.validate(), Err(LabelError::InvalidInput(_))));
    }

    #[test]
    fn validate_checks_color() {
        let input = LabelCreateInput {
            name: "Bug".to_string(),
            color: Some("red".to_string()),
        };
        assert!(input.validate().is_err());

        let input = LabelCreateInput {
            name: "Bug".to_string(),
            color: Some("#EF4444".to_string()),
        };
        assert_eq!(input.validate().unwrap().color.as_deref(), Some("#EF4444"));
    }
}
