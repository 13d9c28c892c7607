use serde::{Deserialize, Serialize};

/// Pulp RBAC role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub pulp_href: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Built-in roles cannot be edited or deleted
    #[serde(default)]
    pub locked: bool,
    pub pulp_created: Option<String>,
}
