//! One run: fetch → filter → format → send.

use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::NotifierResult;
use crate::filtering::filter_by_status;
use crate::formatting::build_message;
use crate::logging::log_info;
use crate::models::NotificationMessage;
use crate::notify::WebhookNotifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Build the message but do not post it.
    pub dry_run: bool,
}

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    NothingToNotify,
    Notified(usize),
    DryRun(NotificationMessage),
}

pub async fn run(config: &Config, options: RunOptions) -> NotifierResult<RunOutcome> {
    let client = GitHubClient::new(config.token(), config.api_url())?;
    let items = client.fetch_project_items(config.project_id()).await?;
    log_info(&format!("Fetched {} project item(s)", items.len()));

    let matching = filter_by_status(items, config.target_status(), config.status_field_name());
    if matching.is_empty() {
        log_info(&format!(
            "No items with {} = \"{}\"",
            config.status_field_name(),
            config.target_status()
        ));
        return Ok(RunOutcome::NothingToNotify);
    }

    let message = build_message(config, &matching);
    if options.dry_run {
        return Ok(RunOutcome::DryRun(message));
    }

    let notifier = WebhookNotifier::new(config.webhook_url(), config.insecure_skip_verify())?;
    notifier.send(&message).await?;
    log_info(&format!(
        "Notified {} item(s) in status \"{}\"",
        matching.len(),
        config.target_status()
    ));

    Ok(RunOutcome::Notified(matching.len()))
}
