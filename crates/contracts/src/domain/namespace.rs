use serde::{Deserialize, Serialize};

/// Namespace as listed by the UI API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub description: String,
    /// Only present on the legacy (v1) namespace endpoint
    pub num_collections: Option<u64>,
}
