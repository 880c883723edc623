pub mod items;
pub mod message;
pub mod preview;

pub use items::{assignee_names, assignee_text, display_name};
pub use message::{build_message, project_url, summary_text};
pub use preview::print_preview;
