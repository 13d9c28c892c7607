//! Parameters of the repository management page
use std::rc::Rc;

use crate::shared::params::{Location, ParamStore, ParamValue, ParameterMap};

pub const INTEGER_KEYS: [&str; 2] = ["page", "page_size"];

pub const TAB_KEY: &str = "tab";

/// Repository picked for editing; kept in the link, never sent with list requests
pub const NON_API_KEYS: [&str; 1] = ["repository"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryTab {
    Local,
    Remote,
}

impl RepositoryTab {
    /// Anything but `remote` shows the local distributions
    pub fn from_params(params: &ParameterMap) -> Self {
        match params.get_text(TAB_KEY) {
            Some("remote") => RepositoryTab::Remote,
            _ => RepositoryTab::Local,
        }
    }

    /// UI API resource listed on this tab
    pub fn resource(&self) -> &'static str {
        match self {
            RepositoryTab::Local => "distributions/",
            RepositoryTab::Remote => "remotes/",
        }
    }
}

pub fn repository_list_store(location: Rc<dyn Location>) -> ParamStore {
    let defaults: ParameterMap = [
        ("page_size", ParamValue::from(10)),
        (TAB_KEY, ParamValue::from("local")),
    ]
    .into_iter()
    .collect();
    ParamStore::from_location(location, &INTEGER_KEYS)
        .with_non_api_keys(NON_API_KEYS)
        .with_defaults(defaults)
}
