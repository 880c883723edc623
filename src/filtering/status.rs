use crate::models::ProjectItem;

/// Whether any of the item's `status_field` values equals `target`.
pub fn has_status(item: &ProjectItem, target: &str, status_field: &str) -> bool {
    item.fields_named(status_field)
        .any(|value| value.value() == Some(target))
}

/// Keep items whose status field matches `target`, preserving order.
/// An empty result is a valid outcome, not an error.
pub fn filter_by_status(items: Vec<ProjectItem>, target: &str, status_field: &str) -> Vec<ProjectItem> {
    items
        .into_iter()
        .filter(|item| has_status(item, target, status_field))
        .collect()
}
