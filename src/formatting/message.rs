use super::items::{assignee_text, display_name};
use crate::config::Config;
use crate::constants::ATTACHMENT_COLOR;
use crate::models::{Attachment, NotificationMessage, ProjectItem};

/// Link to the project board, pointing at a specific view when `view > 1`.
pub fn project_url(web_url: &str, owner: &str, number: u64, view: u64) -> String {
    let base = web_url.trim_end_matches('/');
    if view > 1 {
        format!("{}/orgs/{}/projects/{}/views/{}", base, owner, number, view)
    } else {
        format!("{}/orgs/{}/projects/{}", base, owner, number)
    }
}

/// One item is named; several are counted.
pub fn summary_text(items: &[ProjectItem], project_url: &str) -> String {
    match items {
        [only] => format!(
            "📋 **{}** is waiting for review\n[Open the project]({})",
            display_name(only),
            project_url
        ),
        _ => format!(
            "📋 {} items are waiting for review\n[Open the project]({})",
            items.len(),
            project_url
        ),
    }
}

pub fn build_message(config: &Config, items: &[ProjectItem]) -> NotificationMessage {
    let url = project_url(
        config.web_url(),
        config.project_owner(),
        config.project_number(),
        config.view_number(),
    );

    let attachments = items
        .iter()
        .map(|item| Attachment {
            color: ATTACHMENT_COLOR.to_string(),
            title: display_name(item),
            text: format!("👤 {}", assignee_text(item)),
        })
        .collect();

    let identity = config.identity();
    NotificationMessage {
        text: summary_text(items, &url),
        username: identity.username.clone(),
        icon_emoji: identity.icon_emoji.clone(),
        channel: identity.channel.clone(),
        attachments,
    }
}
