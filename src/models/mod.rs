pub mod graphql;
pub mod item;
pub mod message;
pub mod project;

// Re-export commonly used types
pub use graphql::{GraphQLError, GraphQLResponse, ProjectItemsData, ProjectLookupData};
pub use item::{Assignee, ContentDetails, FieldRef, FieldValue, ItemContent, ProjectItem};
pub use message::{Attachment, NotificationMessage};
pub use project::Project;

// Connection type used by GraphQL pagination
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}
