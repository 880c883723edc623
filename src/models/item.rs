use serde::{Deserialize, Serialize};

use super::Connection;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectItem {
    pub id: String,
    pub content: Option<ItemContent>,
    #[serde(rename = "fieldValues", default)]
    pub field_values: Connection<FieldValue>,
}

impl ProjectItem {
    /// Field values whose field is named `name`, in API order.
    pub fn fields_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldValue> + 'a {
        self.field_values
            .nodes
            .iter()
            .filter(move |value| value.field_name() == Some(name))
    }
}

/// What a project item points at. Items the token cannot see, or content
/// types outside the query's fragments, decode as `Other`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "__typename")]
pub enum ItemContent {
    Issue(ContentDetails),
    PullRequest(ContentDetails),
    DraftIssue(ContentDetails),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ContentDetails {
    pub title: Option<String>,
    pub url: Option<String>,
    pub assignees: Option<Connection<Assignee>>,
}

impl ItemContent {
    pub fn details(&self) -> Option<&ContentDetails> {
        match self {
            ItemContent::Issue(details)
            | ItemContent::PullRequest(details)
            | ItemContent::DraftIssue(details) => Some(details),
            ItemContent::Other => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.details().and_then(|d| d.title.as_deref())
    }

    pub fn url(&self) -> Option<&str> {
        self.details().and_then(|d| d.url.as_deref())
    }

    pub fn assignees(&self) -> &[Assignee] {
        self.details()
            .and_then(|d| d.assignees.as_ref())
            .map(|c| c.nodes.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Assignee {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
}

impl Assignee {
    /// Display name when set, otherwise the login.
    pub fn display(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FieldRef {
    #[serde(default)]
    pub name: String,
}

/// A custom field value on an item. Only single-select and text fields are
/// requested; every other field type decodes as `Other`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "__typename")]
pub enum FieldValue {
    #[serde(rename = "ProjectV2ItemFieldSingleSelectValue")]
    SingleSelect {
        field: Option<FieldRef>,
        name: Option<String>,
    },
    #[serde(rename = "ProjectV2ItemFieldTextValue")]
    Text {
        field: Option<FieldRef>,
        text: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl FieldValue {
    pub fn field_name(&self) -> Option<&str> {
        match self {
            FieldValue::SingleSelect { field, .. } | FieldValue::Text { field, .. } => {
                field.as_ref().map(|f| f.name.as_str())
            }
            FieldValue::Other => None,
        }
    }

    /// The populated representation: option name for single-select fields,
    /// the free text for text fields.
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldValue::SingleSelect { name, .. } => name.as_deref(),
            FieldValue::Text { text, .. } => text.as_deref(),
            FieldValue::Other => None,
        }
    }
}
