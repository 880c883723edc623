use serde::Serialize;

/// Mattermost incoming-webhook payload.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct NotificationMessage {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Attachment {
    pub color: String,
    pub title: String,
    pub text: String,
}
