use crate::client::PlaneClient;
use crate::config::{get_api_key, get_base_url, load_config, save_config, Config};
use crate::error::{LabelError, LabelResult};
use crate::permissions::RolePermissions;
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    api_key: Option<String>,
    base_url: String,
    config: Config,
    client: Option<Arc<PlaneClient>>,
}

impl CliContext {
    /// Load context from saved configuration
    pub fn load() -> LabelResult<Self> {
        Ok(Self {
            api_key: get_api_key().ok(),
            base_url: get_base_url(),
            config: load_config(),
            client: None,
        })
    }

    /// Get or create a client (requires API key)
    pub fn verified_client(&mut self) -> LabelResult<Arc<PlaneClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_key = self.api_key()?.clone();
        let client = Arc::new(PlaneClient::new(self.base_url.clone(), &api_key)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn api_key(&mut self) -> LabelResult<&String> {
        if self.api_key.is_none() {
            self.api_key = Some(get_api_key()?);
        }

        self.api_key.as_ref().ok_or(LabelError::ApiKeyNotFound)
    }

    /// Set and save a new API key
    pub fn set_api_key(&mut self, api_key: String) -> LabelResult<()> {
        self.config.api_key = Some(api_key.clone());
        save_config(&self.config)?;
        self.api_key = Some(api_key);
        self.client = None;
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Explicit value first, then the configured default.
    pub fn workspace_slug(&self, explicit: Option<&String>) -> LabelResult<String> {
        explicit
            .cloned()
            .or_else(|| self.config.workspace_slug.clone())
            .ok_or_else(|| LabelError::InvalidInput("No workspace given and none configured".to_string()))
    }

    pub fn project_id(&self, explicit: Option<&String>) -> LabelResult<String> {
        explicit
            .cloned()
            .or_else(|| self.config.default_project_id.clone())
            .ok_or_else(|| LabelError::InvalidInput("No project given and no default project configured".to_string()))
    }

    pub fn permissions(&self) -> RolePermissions {
        RolePermissions::project(self.config.role)
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    config: Option<Config>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            config: None,
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> LabelResult<CliContext> {
        let mut context = CliContext::load()?;
        if let Some(api_key) = self.api_key {
            context.api_key = Some(api_key);
        }
        if let Some(base_url) = self.base_url {
            context.base_url = base_url;
        }
        if let Some(config) = self.config {
            context.config = config;
        }
        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
