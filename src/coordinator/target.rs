use std::fmt;
use std::sync::Arc;

use crate::store::IssueStore;

/// Receives the new label set of a draft issue.
pub type LabelChangeReporter = Arc<dyn Fn(Vec<String>) + Send + Sync>;

/// Where label changes for an issue go.
///
/// Persisted issues are patched through the issue store. Draft (inbox) issues
/// have no update endpoint yet, so the owning view gets the new set through a
/// callback and persists it later itself.
#[derive(Clone)]
pub enum LabelTarget {
    Persisted(Arc<dyn IssueStore>),
    Draft(LabelChangeReporter),
}

impl LabelTarget {
    pub fn draft<F>(report: F) -> Self
    where
        F: Fn(Vec<String>) + Send + Sync + 'static,
    {
        LabelTarget::Draft(Arc::new(report))
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, LabelTarget::Draft(_))
    }
}

impl fmt::Debug for LabelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelTarget::Persisted(_) => f.write_str("LabelTarget::Persisted"),
            LabelTarget::Draft(_) => f.write_str("LabelTarget::Draft"),
        }
    }
}
