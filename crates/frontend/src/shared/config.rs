use serde::Deserialize;
use thiserror::Error;

use crate::shared::api_utils::{join_url, ui_path};
use crate::shared::params::PageWindowMapper;

/// Page size used when a page's parameters do not name one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub csrf: CsrfConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the API server; empty means same origin
    pub host: String,
    pub base_path: String,
    pub ui_api_version: String,
    /// Pulp content API, relative to `base_path`
    pub pulp_api_path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub header_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginationConfig {
    pub default_page_size: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid console config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("pagination.default_page_size must be at least 1")]
    ZeroPageSize,
}

/// Default configuration embedded in the bundle.
/// Deployment overrides are layered on top of it key by key.
const DEFAULT_CONFIG: &str = r#"
[api]
host = ""
base_path = "/api/automation-hub/"
ui_api_version = "v1"
pulp_api_path = "pulp/api/v3/"

[csrf]
cookie_name = "csrftoken"
header_name = "X-CSRFToken"

[pagination]
default_page_size = 10
"#;

impl ConsoleConfig {
    /// Parse a TOML document over the embedded defaults; keys it leaves out
    /// keep their default values
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut merged: toml::Table = DEFAULT_CONFIG.parse()?;
        let overrides: toml::Table = contents.parse()?;
        merge_tables(&mut merged, overrides);

        let config: ConsoleConfig = toml::Value::Table(merged).try_into()?;
        if config.pagination.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(config)
    }

    /// Root every resource path is joined onto
    pub fn api_base_url(&self) -> String {
        join_url(&self.api.host, &self.api.base_path)
    }

    pub fn ui_path(&self, url: &str) -> String {
        ui_path(&self.api.ui_api_version, url)
    }

    pub fn pulp_path(&self, url: &str) -> String {
        join_url(&self.api.pulp_api_path, url)
    }

    pub fn page_window_mapper(&self) -> PageWindowMapper {
        PageWindowMapper::new(self.pagination.default_page_size)
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(table) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, table);
                continue;
            }
            base.insert(key, toml::Value::Table(table));
        } else {
            base.insert(key, value);
        }
    }
}

/// Load the console configuration.
///
/// Uses `overrides` (the contents of a deployment's config file) when given,
/// otherwise the embedded defaults.
pub fn load_config(overrides: Option<&str>) -> Result<ConsoleConfig, ConfigError> {
    match overrides {
        Some(contents) => {
            log::info!("Loading console config from deployment overrides");
            ConsoleConfig::from_toml(contents)
        }
        None => {
            log::info!("Using default embedded configuration");
            ConsoleConfig::from_toml("")
        }
    }
}
