use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LabelError, LabelResult};
use crate::models::{Issue, IssuePatch, Label, LabelDraft, Page};
use crate::store::{IssueStateAccessor, IssueStore, LabelStore, StoreError, StoreResult};

const API_KEY_HEADER: &str = "x-api-key";

/// REST client for a Plane-compatible API.
pub struct PlaneClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LabelsResponse {
    Page(Page<Label>),
    List(Vec<Label>),
}

#[derive(Debug, Deserialize)]
struct InboxIssue {
    #[serde(alias = "issue_detail")]
    issue: Issue,
}

impl PlaneClient {
    pub fn new(base_url: impl Into<String>, api_key: &str) -> LabelResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key)
                .map_err(|_| LabelError::ConfigError("Invalid API key format".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn project_url(&self, workspace_slug: &str, project_id: &str) -> String {
        format!(
            "{}/api/v1/workspaces/{}/projects/{}",
            self.base_url.trim_end_matches('/'),
            workspace_slug,
            project_id
        )
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> StoreResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: error_message(&body, status),
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn fetch_issue(&self, workspace_slug: &str, project_id: &str, issue_id: &str) -> StoreResult<Option<Issue>> {
        let url = format!("{}/issues/{}/", self.project_url(workspace_slug, project_id), issue_id);
        not_found_as_none(self.send(self.client.get(url)).await)
    }

    pub async fn fetch_inbox_issue(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
    ) -> StoreResult<Option<Issue>> {
        let url = format!("{}/inbox-issues/{}/", self.project_url(workspace_slug, project_id), issue_id);
        let inbox: Option<InboxIssue> = not_found_as_none(self.send(self.client.get(url)).await)?;
        Ok(inbox.map(|i| i.issue))
    }
}

/// Pull the server's message out of an error body.
///
/// Plane reports failures as `{"error": "..."}`, sometimes `{"detail": "..."}`.
pub fn error_message(body: &str, status: StatusCode) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    field("error")
        .or_else(|| field("detail"))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error: {}", status))
        })
}

fn not_found_as_none<T>(result: StoreResult<T>) -> StoreResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StoreError::Api { status: 404, .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

#[async_trait]
impl IssueStore for PlaneClient {
    async fn update_issue(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        patch: &IssuePatch,
    ) -> StoreResult<()> {
        let url = format!("{}/issues/{}/", self.project_url(workspace_slug, project_id), issue_id);
        let _: Value = self.send(self.client.patch(url).json(patch)).await?;
        Ok(())
    }
}

#[async_trait]
impl LabelStore for PlaneClient {
    async fn create_label(&self, workspace_slug: &str, project_id: &str, draft: &LabelDraft) -> StoreResult<Label> {
        let url = format!("{}/labels/", self.project_url(workspace_slug, project_id));
        self.send(self.client.post(url).json(draft)).await
    }

    async fn list_labels(&self, workspace_slug: &str, project_id: &str) -> StoreResult<Vec<Label>> {
        let url = format!("{}/labels/", self.project_url(workspace_slug, project_id));
        let labels = match self.send::<LabelsResponse>(self.client.get(url)).await? {
            LabelsResponse::Page(page) => page.results,
            LabelsResponse::List(list) => list,
        };
        Ok(labels)
    }
}

#[async_trait]
impl IssueStateAccessor for PlaneClient {
    async fn get_issue(
        &self,
        workspace_slug: &str,
        project_id: &str,
        issue_id: &str,
        is_inbox: bool,
    ) -> StoreResult<Option<Issue>> {
        if is_inbox {
            self.fetch_inbox_issue(workspace_slug, project_id, issue_id).await
        } else {
            self.fetch_issue(workspace_slug, project_id, issue_id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DUPLICATE_LABEL_ERROR;

    #[test]
    fn error_field_is_preferred() {
        let body = format!(r#"{{"error": "{}", "detail": "ignored"}}"#, DUPLICATE_LABEL_ERROR);
        assert_eq!(error_message(&body, StatusCode::BAD_REQUEST), DUPLICATE_LABEL_ERROR);
    }

    #[test]
    fn detail_then_status_fallback() {
        assert_eq!(
            error_message(r#"{"detail": "Not found."}"#, StatusCode::NOT_FOUND),
            "Not found."
        );
        assert_eq!(error_message("<html>", StatusCode::BAD_GATEWAY), "Bad Gateway");
    }

    #[test]
    fn project_url_trims_trailing_slash() {
        let client = PlaneClient::new("https://plane.example.com/", "key").unwrap();
        assert_eq!(
            client.project_url("acme", "p1"),
            "https://plane.example.com/api/v1/workspaces/acme/projects/p1"
        );
    }

    #[test]
    fn not_found_maps_to_none() {
        let missing: StoreResult<u8> = Err(StoreError::Api { status: 404, message: "Not found.".into() });
        assert_eq!(not_found_as_none(missing), Ok(None));

        let failed: StoreResult<u8> = Err(StoreError::Api { status: 500, message: "boom".into() });
        assert!(not_found_as_none(failed).is_err());
    }

    #[test]
    fn labels_response_accepts_page_or_list() {
        let page: LabelsResponse =
            serde_json::from_str(r#"{"results": [{"id": "a", "name": "Bug"}], "next_cursor": "x"}"#).unwrap();
        assert!(matches!(page, LabelsResponse::Page(p) if p.results.len() == 1));

        let list: LabelsResponse = serde_json::from_str(r##"[{"id": "a", "name": "Bug", "color": "#ff0000"}]"##).unwrap();
        assert!(matches!(list, LabelsResponse::List(l) if l[0].color.as_deref() == Some("#ff0000")));
    }
}
