use std::sync::Arc;

use clap::ArgMatches;
use colored::*;
use serde_json::json;

use crate::cli_context::CliContext;
use crate::client::PlaneClient;
use crate::components::{IssueLabel, LabelCreateInput};
use crate::coordinator::{LabelOperations, LabelTarget};
use crate::error::{ErrorContext, LabelError, LabelResult};
use crate::formatting::labels::{format_label_line, print_issue_labels, print_project_labels};
use crate::logging::log_info;
use crate::models::{IssueContext, Label};
use crate::notify::ConsoleSink;
use crate::store::{IssueStore, LabelStore};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

struct LabelSession {
    view: IssueLabel,
    client: Arc<PlaneClient>,
}

impl LabelSession {
    async fn project_labels(&self) -> LabelResult<Vec<Label>> {
        let context = self.view.context();
        Ok(self
            .client
            .list_labels(&context.workspace_slug, &context.project_id)
            .await?)
    }
}

async fn open_session(matches: &ArgMatches, disabled: bool) -> LabelResult<LabelSession> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let workspace_slug = context.workspace_slug(matches.get_one::<String>("workspace"))?;
    let project_id = context.project_id(matches.get_one::<String>("project"))?;
    let issue_id = matches
        .get_one::<String>("issue")
        .ok_or_else(|| LabelError::InvalidInput("Issue ID is required".to_string()))?;

    let target = if matches.get_flag("draft") {
        LabelTarget::draft(|label_ids| println!("{}", json!({ "label_ids": label_ids })))
    } else {
        LabelTarget::Persisted(client.clone() as Arc<dyn IssueStore>)
    };
    let operations = LabelOperations::new(target, client.clone(), Arc::new(ConsoleSink));

    let issue_context = IssueContext::new(workspace_slug, project_id, issue_id.clone());
    let view = IssueLabel::load(
        issue_context,
        disabled,
        operations,
        &*client,
        &context.permissions(),
    )
    .await
    .with_context(|| format!("Loading labels of issue {}", issue_id))?;

    Ok(LabelSession { view, client })
}

/// Match a label by id, or by name ignoring case.
pub fn find_label<'a>(labels: &'a [Label], value: &str) -> Option<&'a Label> {
    labels
        .iter()
        .find(|label| label.id == value)
        .or_else(|| labels.iter().find(|label| label.name.eq_ignore_ascii_case(value)))
}

fn lookup_label(labels: &[Label], value: &str) -> LabelResult<String> {
    find_label(labels, value)
        .map(|label| label.id.clone())
        .ok_or_else(|| LabelError::InvalidInput(format!("Label '{}' not found in project", value)))
}

fn box_err(e: LabelError) -> Box<dyn std::error::Error> {
    Box::new(e)
}

pub async fn handle_show(matches: &ArgMatches) -> CommandResult {
    handle_show_impl(matches).await.map_err(box_err)
}

async fn handle_show_impl(matches: &ArgMatches) -> LabelResult<()> {
    let session = open_session(matches, matches.get_flag("disabled")).await?;
    let labels = session.project_labels().await?;

    let list = session.view.list();
    println!("{}", "Labels".bold());
    println!("{}", format_label_line(&list.labels(&labels)));

    if session.view.selector().is_none() {
        println!("{}", "Read-only: labels cannot be changed.".dimmed());
    } else if session.view.create_form().is_none() {
        println!("{}", "You can attach existing labels but not create new ones.".dimmed());
    }
    Ok(())
}

pub async fn handle_set(matches: &ArgMatches) -> CommandResult {
    handle_set_impl(matches).await.map_err(box_err)
}

async fn handle_set_impl(matches: &ArgMatches) -> LabelResult<()> {
    let session = open_session(matches, false).await?;
    let labels = session.project_labels().await?;

    let requested = matches
        .get_many::<String>("labels")
        .map(|values| values.map(|v| lookup_label(&labels, v)).collect::<LabelResult<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();

    let mut selector = session
        .view
        .selector()
        .ok_or_else(|| LabelError::InvalidInput("Labels are read-only for this issue".to_string()))?;
    let updated = selector.set(requested).await;

    log_info(&format!("Set {} label(s) on {}", updated.len(), session.view.context().issue_id));
    print_issue_labels(&updated, &labels);
    Ok(())
}

pub async fn handle_add(matches: &ArgMatches) -> CommandResult {
    handle_add_impl(matches).await.map_err(box_err)
}

async fn handle_add_impl(matches: &ArgMatches) -> LabelResult<()> {
    let session = open_session(matches, false).await?;
    let labels = session.project_labels().await?;
    let value = matches
        .get_one::<String>("label")
        .ok_or_else(|| LabelError::InvalidInput("Label is required".to_string()))?;
    let label_id = lookup_label(&labels, value)?;

    let mut selector = session
        .view
        .selector()
        .ok_or_else(|| LabelError::InvalidInput("Labels are read-only for this issue".to_string()))?;

    if selector.is_selected(&label_id) {
        println!("{}", "Label already attached.".dimmed());
        return Ok(());
    }

    let updated = selector.toggle(&label_id).await;
    print_issue_labels(&updated, &labels);
    Ok(())
}

pub async fn handle_remove(matches: &ArgMatches) -> CommandResult {
    handle_remove_impl(matches).await.map_err(box_err)
}

async fn handle_remove_impl(matches: &ArgMatches) -> LabelResult<()> {
    let session = open_session(matches, false).await?;
    let labels = session.project_labels().await?;
    let value = matches
        .get_one::<String>("label")
        .ok_or_else(|| LabelError::InvalidInput("Label is required".to_string()))?;
    let label_id = lookup_label(&labels, value)?;

    let mut list = session.view.list();
    if !list.values().contains(&label_id) {
        println!("{}", "Label is not attached.".dimmed());
        return Ok(());
    }

    let updated = list.remove(&label_id).await?;
    print_issue_labels(&updated, &labels);
    Ok(())
}

pub async fn handle_create(matches: &ArgMatches) -> CommandResult {
    handle_create_impl(matches).await.map_err(box_err)
}

async fn handle_create_impl(matches: &ArgMatches) -> LabelResult<()> {
    let session = open_session(matches, false).await?;

    let mut form = session
        .view
        .create_form()
        .ok_or_else(|| LabelError::InvalidInput("Only project admins can create labels".to_string()))?;

    form.input = LabelCreateInput {
        name: matches.get_one::<String>("name").cloned().unwrap_or_default(),
        color: matches.get_one::<String>("color").cloned(),
    };

    // The coordinator has already toasted store failures.
    let label = form.submit().await.map_err(LabelError::into_reported)?;
    println!("{}: {}", "ID".bold(), label.id.bright_blue().bold());

    let labels = session.project_labels().await?;
    print_issue_labels(form.values(), &labels);
    Ok(())
}

pub async fn handle_list_labels(matches: &ArgMatches) -> CommandResult {
    handle_list_labels_impl(matches).await.map_err(box_err)
}

async fn handle_list_labels_impl(matches: &ArgMatches) -> LabelResult<()> {
    if matches.get_one::<String>("issue").is_some() {
        let session = open_session(matches, true).await?;
        let labels = session.project_labels().await?;
        print_project_labels(&labels, session.view.values());
        return Ok(());
    }

    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;
    let workspace_slug = context.workspace_slug(matches.get_one::<String>("workspace"))?;
    let project_id = context.project_id(matches.get_one::<String>("project"))?;

    let labels = client.list_labels(&workspace_slug, &project_id).await?;
    print_project_labels(&labels, &[]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: &str, name: &str) -> Label {
        Label {
            id: id.to_string(),
            name: name.to_string(),
            color: None,
            description: None,
            parent: None,
            project_id: None,
            sort_order: None,
        }
    }

    #[test]
    fn find_label_prefers_id_then_name() {
        let labels = vec![label("bug", "Feature"), label("f1", "Bug")];
        assert_eq!(find_label(&labels, "bug").unwrap().id, "bug");
        assert_eq!(find_label(&labels, "BUG").unwrap().id, "f1");
        assert!(find_label(&labels, "docs").is_none());
    }

    #[test]
    fn lookup_reports_missing_label() {
        let err = lookup_label(&[], "Bug").unwrap_err();
        assert!(matches!(err, LabelError::InvalidInput(msg) if msg.contains("Bug")));
    }
}
