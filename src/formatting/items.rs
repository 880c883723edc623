use crate::constants::{TITLE_FIELD_NAME, UNASSIGNED, UNTITLED_ITEM};
use crate::models::ProjectItem;

/// Name shown for an item: the content title, else a "Title" field value,
/// else a fixed placeholder. Never empty.
pub fn display_name(item: &ProjectItem) -> String {
    if let Some(title) = item
        .content
        .as_ref()
        .and_then(|content| content.title())
        .filter(|title| !title.is_empty())
    {
        return title.to_string();
    }

    item.fields_named(TITLE_FIELD_NAME)
        .filter_map(|value| value.value())
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNTITLED_ITEM.to_string())
}

/// Assignee display names (login when no name is set), in API order.
pub fn assignee_names(item: &ProjectItem) -> Vec<String> {
    item.content
        .as_ref()
        .map(|content| content.assignees())
        .unwrap_or(&[])
        .iter()
        .map(|assignee| assignee.display().to_string())
        .collect()
}

/// Comma-joined assignees, or the unassigned marker.
pub fn assignee_text(item: &ProjectItem) -> String {
    let names = assignee_names(item);
    if names.is_empty() {
        UNASSIGNED.to_string()
    } else {
        names.join(", ")
    }
}
