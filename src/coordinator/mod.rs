//! Label operations shared by the label list, selector and create form.
//!
//! [`LabelOperations`] hides whether the issue is persisted or a draft and
//! turns every outcome into at most one notification. It keeps no issue or
//! label data itself, so building a fresh one per view is fine.

pub mod outcome;
pub mod target;

use std::sync::Arc;

use crate::logging::{log_debug, log_error};
use crate::models::{IssuePatch, Label, LabelDraft};
use crate::notify::NotificationSink;
use crate::store::{classify_store_error, ErrorClassifier, LabelStore, StoreResult};

pub use outcome::{create_outcome, update_outcome, Outcome};
pub use target::{LabelChangeReporter, LabelTarget};

#[derive(Clone)]
pub struct LabelOperations {
    target: LabelTarget,
    labels: Arc<dyn LabelStore>,
    sink: Arc<dyn NotificationSink>,
    classify: ErrorClassifier,
}

impl LabelOperations {
    pub fn new(target: LabelTarget, labels: Arc<dyn LabelStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            target,
            labels,
            sink,
            classify: classify_store_error,
        }
    }

    /// Swap the classifier used to tell duplicate-name failures apart.
    pub fn with_classifier(mut self, classify: ErrorClassifier) -> Self {
        self.classify = classify;
        self
    }

    pub fn is_draft(&self) -> bool {
        self.target.is_draft()
    }

    /// Assign `patch.label_ids` to the issue.
    ///
    /// Never fails from the caller's point of view: an update error is shown
    /// as a toast and dropped. The displayed set is not rolled back.
    pub async fn apply_label_set(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        patch: IssuePatch,
    ) {
        let outcome = self.execute_apply(workspace_slug, project_id, issue_id, patch).await;
        self.dispatch(outcome);
    }

    /// Create a label in the project and hand it back.
    ///
    /// Callers gate this on label-create permission. Failures are shown as a
    /// toast and then returned unchanged.
    pub async fn create_label(
        &self,
        workspace_slug: &str,
        project_id: &str,
        draft: &LabelDraft,
    ) -> StoreResult<Label> {
        let result = self.labels.create_label(workspace_slug, project_id, draft).await;
        match &result {
            Ok(label) => log_debug(&format!("Created label {} ({}) in project {}", label.name, label.id, project_id)),
            Err(err) => log_error(&format!(
                "Label creation for '{}' failed ({:?}): {}",
                draft.name,
                (self.classify)(err),
                err
            )),
        }

        let outcome = create_outcome(&result, self.is_draft(), self.classify);
        self.dispatch(outcome);
        result
    }

    async fn execute_apply(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        patch: IssuePatch,
    ) -> Outcome {
        match &self.target {
            LabelTarget::Draft(report) => {
                let label_ids = patch.label_ids.unwrap_or_default();
                log_debug(&format!("Reporting {} label(s) for draft issue {}", label_ids.len(), issue_id));
                (**report)(label_ids);
                Outcome::Silent
            }
            LabelTarget::Persisted(issues) => {
                log_debug(&format!("Updating labels of issue {} in project {}", issue_id, project_id));
                let result = issues.update_issue(workspace_slug, project_id, issue_id, &patch).await;
                if let Err(err) = &result {
                    log_error(&format!("Label update for issue {} failed: {}", issue_id, err));
                }
                update_outcome(&result)
            }
        }
    }

    fn dispatch(&self, outcome: Outcome) {
        if let Outcome::Notify(notification) = outcome {
            self.sink.notify(notification);
        }
    }
}
