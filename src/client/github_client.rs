use serde_json::json;

use super::graphql::GraphQLClient;
use crate::constants::{
    project_items_query, MAX_ASSIGNEES, MAX_FIELD_VALUES, MAX_ITEMS, MAX_PROJECTS, PROJECT_LOOKUP_QUERY,
};
use crate::error::{NotifierError, NotifierResult, TransportError};
use crate::logging::{log_info, log_warn};
use crate::models::*;

pub struct GitHubClient {
    graphql: GraphQLClient,
}

impl GitHubClient {
    pub fn new(token: &str, api_url: &str) -> NotifierResult<Self> {
        Ok(Self {
            graphql: GraphQLClient::new(token, api_url)?,
        })
    }

    /// Resolve `owner` + project `number` to the opaque ProjectV2 node id.
    ///
    /// The owner is queried as both a user and an organization. Partial
    /// GraphQL errors are tolerated as long as one branch returned data.
    pub async fn find_project_id(&self, owner: &str, number: u64) -> NotifierResult<String> {
        let variables = json!({
            "owner": owner,
            "first": MAX_PROJECTS,
        });

        let response: GraphQLResponse<ProjectLookupData> = self
            .graphql
            .execute(PROJECT_LOOKUP_QUERY, variables)
            .await
            .map_err(NotifierError::Lookup)?;

        let project = select_project(response, owner, number)?;
        log_info(&format!("Found project #{} - {}", project.number, project.title));
        Ok(project.id)
    }

    /// All items of the project, in API order. Only the first page is read.
    pub async fn fetch_project_items(&self, project_id: &str) -> NotifierResult<Vec<ProjectItem>> {
        let variables = json!({
            "projectId": project_id,
            "first": MAX_ITEMS,
            "fieldValues": MAX_FIELD_VALUES,
            "assignees": MAX_ASSIGNEES,
        });

        let data: ProjectItemsData = self
            .graphql
            .query(&project_items_query(), variables)
            .await
            .map_err(NotifierError::Fetch)?;

        let items = data.into_items();
        if items.len() as u32 >= MAX_ITEMS {
            log_warn(&format!(
                "Project returned {} items; anything past the first {} is not checked",
                items.len(),
                MAX_ITEMS
            ));
        }
        Ok(items)
    }
}

/// Apply the lookup policy to a decoded response.
pub fn select_project(
    response: GraphQLResponse<ProjectLookupData>,
    owner: &str,
    number: u64,
) -> NotifierResult<Project> {
    let first_error = response.first_error().map(str::to_string);
    if let Some(message) = &first_error {
        log_warn(&format!("GraphQL reported errors during project lookup, continuing: {}", message));
    }

    let data = response.data.unwrap_or_default();
    if let Some(user) = &data.user {
        log_info(&format!("User projects found: {}", user.projects.nodes.len()));
    }
    if let Some(org) = &data.organization {
        log_info(&format!("Organization projects found: {}", org.projects.nodes.len()));
    }

    let projects = data.into_projects();
    if let Some(project) = projects.iter().find(|p| p.number == number) {
        return Ok(project.clone());
    }

    if projects.is_empty() {
        return Err(match first_error {
            Some(message) => NotifierError::Lookup(TransportError::GraphQL(message)),
            None => NotifierError::NoProjects {
                owner: owner.to_string(),
            },
        });
    }

    log_info(&format!("Project #{} not found. Available projects:", number));
    for project in &projects {
        log_info(&format!("  #{} - {} (ID: {})", project.number, project.title, project.id));
    }

    Err(NotifierError::ProjectNotFound {
        owner: owner.to_string(),
        number,
    })
}
