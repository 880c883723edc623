use std::process::Command;

use crate::error::{NotifierError, NotifierResult};
use crate::logging::log_info;

/// An external source of a GitHub token, consulted when `GITHUB_TOKEN` is unset.
pub trait CredentialHelper: Send + Sync {
    fn describe(&self) -> String;
    fn fetch_token(&self) -> NotifierResult<String>;
}

/// Runs a command and takes its trimmed stdout as the token.
pub struct CommandHelper {
    program: String,
    args: Vec<String>,
}

impl CommandHelper {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `gh auth token`
    pub fn gh() -> Self {
        Self::new("gh", &["auth", "token"])
    }
}

impl CredentialHelper for CommandHelper {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn fetch_token(&self) -> NotifierResult<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                NotifierError::Credential(format!(
                    "failed to run '{}'; is it installed and authenticated? ({})",
                    self.describe(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifierError::Credential(format!(
                "'{}' exited with {}: {}",
                self.describe(),
                output.status,
                stderr.trim()
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(NotifierError::Credential(format!(
                "'{}' printed no token; run 'gh auth login' first",
                self.describe()
            )));
        }
        Ok(token)
    }
}

/// Prefer an explicit token, otherwise ask the helper.
pub fn resolve_token(explicit: Option<&str>, helper: &dyn CredentialHelper) -> NotifierResult<String> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        log_info("GitHub token: using GITHUB_TOKEN");
        return Ok(token.to_string());
    }

    log_info(&format!("GitHub token: running '{}'", helper.describe()));
    let token = helper.fetch_token()?;
    log_info(&format!("GitHub token: obtained from '{}'", helper.describe()));
    Ok(token)
}
