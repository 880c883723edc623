use std::env;
use std::path::Path;

use crate::constants::*;
use crate::error::{NotifierError, NotifierResult};
use crate::logging::{log_info, log_warn};

/// Raw settings read from the environment, before the token is obtained
/// and the project id resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvSettings {
    pub token: Option<String>,
    pub project_id: String,
    pub project_owner: String,
    pub project_number: u64,
    pub view_number: u64,
    pub webhook_url: String,
    pub target_status: String,
    pub status_field_name: String,
    pub insecure_skip_verify: bool,
    pub api_url: String,
    pub web_url: String,
    pub webhook_username: Option<String>,
    pub webhook_icon_emoji: Option<String>,
    pub webhook_channel: Option<String>,
}

impl EnvSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        EnvSettings {
            token: get(ENV_GITHUB_TOKEN),
            project_id: get_or(ENV_PROJECT_ID, ""),
            project_owner: get_or(ENV_PROJECT_OWNER, ""),
            project_number: parse_number(ENV_PROJECT_NUMBER, get(ENV_PROJECT_NUMBER), 0),
            view_number: parse_number(ENV_PROJECT_VIEW_NUMBER, get(ENV_PROJECT_VIEW_NUMBER), DEFAULT_VIEW_NUMBER),
            webhook_url: get_or(ENV_WEBHOOK_URL, ""),
            target_status: get_or(ENV_TARGET_STATUS, DEFAULT_TARGET_STATUS),
            status_field_name: get_or(ENV_STATUS_FIELD_NAME, DEFAULT_STATUS_FIELD_NAME),
            insecure_skip_verify: get(ENV_INSECURE_SKIP_VERIFY)
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            api_url: get_or(ENV_GRAPHQL_URL, GITHUB_GRAPHQL_URL),
            web_url: get_or(ENV_WEB_URL, GITHUB_WEB_URL),
            webhook_username: get(ENV_WEBHOOK_USERNAME),
            webhook_icon_emoji: get(ENV_WEBHOOK_ICON_EMOJI),
            webhook_channel: get(ENV_WEBHOOK_CHANNEL),
        }
    }

    /// Whether the owner + number pair is enough to look the project id up.
    pub fn can_lookup_project(&self) -> bool {
        self.project_id.is_empty() && !self.project_owner.is_empty() && self.project_number > 0
    }
}

// Bad numbers fall back to the default instead of failing the run.
fn parse_number(key: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log_warn(&format!("{}={:?} is not a valid number, using {}", key, raw, default));
            default
        }),
    }
}

/// Load variables from a dotenv file. Without an explicit path a missing
/// `./.env` is only a warning; an explicit path must exist.
pub fn load_env_file(path: Option<&Path>) -> NotifierResult<()> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(NotifierError::Config(format!("env file {} does not exist", path.display())));
            }
            dotenvy::from_path(path)?;
            log_info(&format!("Loaded environment from {}", path.display()));
        }
        None => match dotenvy::dotenv() {
            Ok(path) => log_info(&format!("Loaded environment from {}", path.display())),
            Err(e) if e.not_found() => log_warn(".env file not found, using environment variables"),
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}
