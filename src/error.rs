use thiserror::Error;

/// Failure talking to a remote endpoint (GraphQL API or webhook).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data in response")]
    MissingData,
}

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Could not obtain a GitHub token: {0}")]
    Credential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project lookup failed: {0}")]
    Lookup(#[source] TransportError),

    #[error("No projects could be read for owner '{owner}'")]
    NoProjects { owner: String },

    #[error("Project #{number} was not found for owner '{owner}'")]
    ProjectNotFound { owner: String, number: u64 },

    #[error("Failed to fetch project items: {0}")]
    Fetch(#[source] TransportError),

    #[error("Webhook delivery failed: {0}")]
    Delivery(#[source] TransportError),

    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifierError {
    /// Stable label used in the fatal log line.
    pub fn kind(&self) -> &'static str {
        match self {
            NotifierError::Credential(_) => "CredentialError",
            NotifierError::Config(_) => "ConfigError",
            NotifierError::Lookup(_) => "LookupError",
            NotifierError::NoProjects { .. } => "NoProjectsError",
            NotifierError::ProjectNotFound { .. } => "ProjectNotFoundError",
            NotifierError::Fetch(_) => "FetchError",
            NotifierError::Delivery(_) => "DeliveryError",
            NotifierError::EnvFile(_) => "ConfigError",
            NotifierError::Io(_) => "IoError",
        }
    }
}

pub type NotifierResult<T> = Result<T, NotifierError>;

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::NotifierError::Config($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NotifierError::Config(format!($fmt, $($arg)*))
    };
}
