use std::rc::Rc;

use super::client::ListDataClient;
use super::csrf::CookieSource;
use super::transport::Transport;
use crate::shared::config::{load_config, ConfigError, ConsoleConfig};

/// Everything a page needs to talk to the API, passed in explicitly
#[derive(Clone)]
pub struct ApiContext {
    config: Rc<ConsoleConfig>,
    transport: Rc<dyn Transport>,
    cookies: Rc<dyn CookieSource>,
}

impl ApiContext {
    pub fn new(
        config: ConsoleConfig,
        transport: Rc<dyn Transport>,
        cookies: Rc<dyn CookieSource>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            transport,
            cookies,
        }
    }

    /// Context over the embedded config, with `overrides` (a deployment's
    /// TOML) layered on top when given
    pub fn load(
        overrides: Option<&str>,
        transport: Rc<dyn Transport>,
        cookies: Rc<dyn CookieSource>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(load_config(overrides)?, transport, cookies))
    }

    /// Context backed by `fetch` and `document.cookie`
    #[cfg(target_arch = "wasm32")]
    pub fn browser(overrides: Option<&str>) -> Result<Self, ConfigError> {
        use super::browser::{DocumentCookies, FetchTransport};
        Self::load(overrides, Rc::new(FetchTransport), Rc::new(DocumentCookies))
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn transport(&self) -> Rc<dyn Transport> {
        Rc::clone(&self.transport)
    }

    pub fn cookies(&self) -> Rc<dyn CookieSource> {
        Rc::clone(&self.cookies)
    }

    /// Client for `resource_path`, relative to the configured API root
    pub fn client<T>(&self, resource_path: impl Into<String>) -> ListDataClient<T> {
        ListDataClient::new(self, resource_path)
    }
}
