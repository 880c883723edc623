pub mod config;
pub mod credentials;
pub mod settings;

pub use config::{Config, WebhookIdentity};
pub use credentials::{resolve_token, CommandHelper, CredentialHelper};
pub use settings::{load_env_file, EnvSettings};
