pub mod github_client;
pub mod graphql;

pub use github_client::{select_project, GitHubClient};
pub use graphql::GraphQLClient;
