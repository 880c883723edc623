use serde::Deserialize;

/// A GitHub Projects (v2) board, as returned by the identifier lookup.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub number: u64,
    #[serde(default)]
    pub title: String,
}
