use std::rc::Rc;

use crate::shared::params::{Location, ParamStore, ParamValue, ParameterMap};

pub const INTEGER_KEYS: [&str; 2] = ["page", "page_size"];

/// Kept in memory only: the tenant is chosen by the page, not by the link
pub const NON_URL_KEYS: [&str; 1] = ["tenant"];

/// Selects the visible tab on the namespace detail page
pub const TAB_KEY: &str = "tab";

pub fn namespace_list_store(location: Rc<dyn Location>) -> ParamStore {
    let defaults: ParameterMap = [
        ("page_size", ParamValue::from(24)),
        ("sort", ParamValue::from("name")),
    ]
    .into_iter()
    .collect();
    ParamStore::from_location(location, &INTEGER_KEYS)
        .with_non_url_keys(NON_URL_KEYS)
        .with_defaults(defaults)
}

pub fn namespace_detail_store(location: Rc<dyn Location>) -> ParamStore {
    let defaults: ParameterMap = [
        (TAB_KEY, ParamValue::from("collections")),
        ("page_size", ParamValue::from(10)),
    ]
    .into_iter()
    .collect();
    ParamStore::from_location(location, &INTEGER_KEYS)
        .with_non_api_keys([TAB_KEY])
        .with_defaults(defaults)
}
