pub mod status;

pub use status::{filter_by_status, has_status};
