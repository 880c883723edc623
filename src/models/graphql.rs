use serde::Deserialize;

use super::{Connection, Project, ProjectItem};

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

// Project lookup data structures.
// The owner login may be a user or an organization; both are queried and at
// most one comes back non-null.
#[derive(Debug, Deserialize, Default)]
pub struct ProjectLookupData {
    pub user: Option<ProjectOwner>,
    pub organization: Option<ProjectOwner>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectOwner {
    #[serde(rename = "projectsV2")]
    pub projects: Connection<Project>,
}

impl ProjectLookupData {
    /// User projects first, then organization projects.
    pub fn into_projects(self) -> Vec<Project> {
        self.user
            .into_iter()
            .chain(self.organization)
            .flat_map(|owner| owner.projects.nodes)
            .collect()
    }
}

// Item fetch data structures
#[derive(Debug, Deserialize)]
pub struct ProjectItemsData {
    pub node: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    #[serde(default)]
    pub items: Connection<ProjectItem>,
}

impl ProjectItemsData {
    pub fn into_items(self) -> Vec<ProjectItem> {
        self.node.map(|node| node.items.nodes).unwrap_or_default()
    }
}
