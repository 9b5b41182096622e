use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::{load_config, save_config};
use crate::permissions::UserRole;
use crate::store::LabelStore;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        let mut context = CliContext::load()?;
        context.set_api_key(api_key.clone())?;
        println!("API key saved successfully!");

        // Test the API key against the configured project, if any
        let config = load_config();
        if let (Some(workspace), Some(project)) = (config.workspace_slug, config.default_project_id) {
            let client = context.verified_client()?;
            match client.list_labels(&workspace, &project).await {
                Ok(labels) => println!("{} Connected, {} label(s) in project", "✅".green(), labels.len()),
                Err(e) => println!("{} Failed to authenticate: {}", "❌".red(), e),
            }
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.api_key {
            Some(key) => println!("API Key: {}", mask_api_key(&key)),
            None => println!("No API key configured"),
        }
    } else {
        println!("Usage: plane-labels auth --api-key <KEY> or plane-labels auth --show");
    }
    Ok(())
}

/// First 8 and last 4 characters of a key. Short keys are not shown at all.
pub fn mask_api_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 12 {
        return "(set)".to_string();
    }

    let head: String = key.chars().take(8).collect();
    let tail: String = key.chars().skip(count - 4).collect();
    format!("{}...{}", head, tail)
}

/// Persist the default workspace, project and the actor's project role.
pub async fn handle_configure(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();

    if let Some(url) = matches.get_one::<String>("base-url") {
        config.base_url = Some(url.clone());
    }
    if let Some(workspace) = matches.get_one::<String>("workspace") {
        config.workspace_slug = Some(workspace.clone());
    }
    if let Some(project) = matches.get_one::<String>("project") {
        config.default_project_id = Some(project.clone());
    }
    if let Some(role) = matches.get_one::<String>("role") {
        config.role = UserRole::parse(role).ok_or_else(|| format!("Unknown role '{}'", role))?;
    }

    save_config(&config)?;
    println!("{}", "Configuration saved.".green());
    Ok(())
}
