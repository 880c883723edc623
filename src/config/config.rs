use std::fmt;

use super::credentials::{resolve_token, CredentialHelper};
use super::settings::EnvSettings;
use crate::client::GitHubClient;
use crate::config_error;
use crate::constants::{ENV_PROJECT_ID, ENV_PROJECT_NUMBER, ENV_PROJECT_OWNER, ENV_WEBHOOK_URL};
use crate::error::NotifierResult;
use crate::logging::log_info;

/// Optional sender overrides for the webhook post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookIdentity {
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub channel: Option<String>,
}

/// Fully resolved, validated run configuration. Read-only once built.
#[derive(Clone)]
pub struct Config {
    token: String,
    project_id: String,
    project_owner: String,
    project_number: u64,
    view_number: u64,
    webhook_url: String,
    target_status: String,
    status_field_name: String,
    insecure_skip_verify: bool,
    api_url: String,
    web_url: String,
    identity: WebhookIdentity,
}

impl Config {
    /// Obtain the token, look the project id up if needed, then validate.
    pub async fn resolve(settings: EnvSettings, helper: &dyn CredentialHelper) -> NotifierResult<Self> {
        let token = resolve_token(settings.token.as_deref(), helper)?;

        let project_id = if settings.can_lookup_project() {
            log_info(&format!(
                "PROJECT_ID is not set. Looking up the id of {}/#{}...",
                settings.project_owner, settings.project_number
            ));
            let client = GitHubClient::new(&token, &settings.api_url)?;
            let id = client
                .find_project_id(&settings.project_owner, settings.project_number)
                .await?;
            log_info(&format!("Resolved project id: {}", id));
            id
        } else {
            settings.project_id.clone()
        };

        Self::build(settings, token, project_id)
    }

    /// The validation gate. Runs before any item fetch.
    pub fn build(settings: EnvSettings, token: String, project_id: String) -> NotifierResult<Self> {
        if token.trim().is_empty() {
            return Err(config_error!("GitHub token is empty"));
        }
        if project_id.is_empty() {
            if settings.project_owner.is_empty() || settings.project_number == 0 {
                return Err(config_error!(
                    "set {} or both {} and {}",
                    ENV_PROJECT_ID,
                    ENV_PROJECT_OWNER,
                    ENV_PROJECT_NUMBER
                ));
            }
            return Err(config_error!("project id could not be resolved"));
        }
        if settings.webhook_url.is_empty() {
            return Err(config_error!("{} is not set", ENV_WEBHOOK_URL));
        }

        Ok(Config {
            token,
            project_id,
            project_owner: settings.project_owner,
            project_number: settings.project_number,
            view_number: settings.view_number,
            webhook_url: settings.webhook_url,
            target_status: settings.target_status,
            status_field_name: settings.status_field_name,
            insecure_skip_verify: settings.insecure_skip_verify,
            api_url: settings.api_url,
            web_url: settings.web_url,
            identity: WebhookIdentity {
                username: settings.webhook_username,
                icon_emoji: settings.webhook_icon_emoji,
                channel: settings.webhook_channel,
            },
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn project_owner(&self) -> &str {
        &self.project_owner
    }

    pub fn project_number(&self) -> u64 {
        self.project_number
    }

    pub fn view_number(&self) -> u64 {
        self.view_number
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn target_status(&self) -> &str {
        &self.target_status
    }

    pub fn status_field_name(&self) -> &str {
        &self.status_field_name
    }

    pub fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }

    pub fn identity(&self) -> &WebhookIdentity {
        &self.identity
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("project_owner", &self.project_owner)
            .field("project_number", &self.project_number)
            .field("view_number", &self.view_number)
            .field("webhook_url", &self.webhook_url)
            .field("target_status", &self.target_status)
            .field("status_field_name", &self.status_field_name)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("api_url", &self.api_url)
            .field("web_url", &self.web_url)
            .field("identity", &self.identity)
            .finish()
    }
}
