use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::coordinator::{LabelOperations, LabelTarget};
use crate::models::{Issue, IssuePatch, Label, LabelDraft};
use crate::notify::NotificationQueue;
use crate::store::{IssueStateAccessor, IssueStore, LabelStore, StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCall {
    pub workspace_slug: String,
    pub project_id: String,
    pub issue_id: String,
    pub patch: IssuePatch,
}

#[derive(Default)]
pub struct RecordingIssueStore {
    pub calls: Mutex<Vec<UpdateCall>>,
    pub failure: Option<StoreError>,
}

impl RecordingIssueStore {
    pub fn failing(err: StoreError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(err),
        }
    }

    pub fn calls(&self) -> Vec<UpdateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueStore for RecordingIssueStore {
    async fn update_issue(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        patch: &IssuePatch,
    ) -> StoreResult<()> {
        self.calls.lock().unwrap().push(UpdateCall {
            workspace_slug: workspace_slug.to_string(),
            project_id: project_id.to_string(),
            issue_id: issue_id.to_string(),
            patch: patch.clone(),
        });
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct FakeLabelStore {
    pub created: Mutex<Vec<LabelDraft>>,
    pub failure: Option<StoreError>,
    pub existing: Vec<Label>,
}

impl FakeLabelStore {
    pub fn failing(err: StoreError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<LabelDraft> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl LabelStore for FakeLabelStore {
    async fn create_label(&self, _workspace_slug: &str, project_id: &str, draft: &LabelDraft) -> StoreResult<Label> {
        let mut created = self.created.lock().unwrap();
        created.push(draft.clone());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(Label {
            id: format!("new-{}", created.len()),
            name: draft.name.clone(),
            color: draft.color.clone(),
            description: draft.description.clone(),
            parent: draft.parent.clone(),
            project_id: Some(project_id.to_string()),
            sort_order: None,
        })
    }

    async fn list_labels(&self, _workspace_slug: &str, _project_id: &str) -> StoreResult<Vec<Label>> {
        Ok(self.existing.clone())
    }
}

#[derive(Default)]
pub struct FakeAccessor {
    pub issue: Option<Issue>,
    pub inbox_issue: Option<Issue>,
    pub requested_inbox: Mutex<Vec<bool>>,
}

#[async_trait]
impl IssueStateAccessor for FakeAccessor {
    async fn get_issue(
        &self,
        _workspace_slug: &str,
        _project_id: &str,
        _issue_id: &str,
        is_inbox: bool,
    ) -> StoreResult<Option<Issue>> {
        self.requested_inbox.lock().unwrap().push(is_inbox);
        Ok(if is_inbox { self.inbox_issue.clone() } else { self.issue.clone() })
    }
}

pub fn issue_with_labels(label_ids: &[&str]) -> Issue {
    Issue {
        id: "issue-1".to_string(),
        name: "Crash on save".to_string(),
        sequence_id: Some(42),
        project_id: Some("proj-1".to_string()),
        label_ids: label_ids.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Everything a coordinator test needs to observe.
pub struct Harness {
    pub operations: LabelOperations,
    pub issues: Arc<RecordingIssueStore>,
    pub labels: Arc<FakeLabelStore>,
    pub sink: Arc<NotificationQueue>,
    pub reported: Arc<Mutex<Vec<Vec<String>>>>,
}

impl Harness {
    pub fn persisted(issues: RecordingIssueStore, labels: FakeLabelStore) -> Self {
        let issues = Arc::new(issues);
        let labels = Arc::new(labels);
        let sink = Arc::new(NotificationQueue::new());
        let operations = LabelOperations::new(
            LabelTarget::Persisted(issues.clone()),
            labels.clone(),
            sink.clone(),
        );
        Self {
            operations,
            issues,
            labels,
            sink,
            reported: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn draft(labels: FakeLabelStore) -> Self {
        let issues = Arc::new(RecordingIssueStore::default());
        let labels = Arc::new(labels);
        let sink = Arc::new(NotificationQueue::new());
        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink_for_reports = reported.clone();
        let operations = LabelOperations::new(
            LabelTarget::draft(move |label_ids| sink_for_reports.lock().unwrap().push(label_ids)),
            labels.clone(),
            sink.clone(),
        );
        Self {
            operations,
            issues,
            labels,
            sink,
            reported,
        }
    }

    pub fn reported(&self) -> Vec<Vec<String>> {
        self.reported.lock().unwrap().clone()
    }
}
