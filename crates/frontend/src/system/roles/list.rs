//! Parameters of the role list page
use std::rc::Rc;

use crate::shared::params::filters::filter_is_set;
use crate::shared::params::{Location, ParamStore, ParamValue, ParameterMap};

pub const INTEGER_KEYS: [&str; 2] = ["page", "page_size"];

/// Not shown as filter chips
pub const IGNORED_FILTERS: [&str; 4] = ["page_size", "page", "sort", "ordering"];

/// Filters the user can set from the toolbar
pub const FILTER_KEYS: [&str; 2] = ["name__icontains", "locked"];

/// Only galaxy roles are listed unless the link says otherwise
pub fn role_list_store(location: Rc<dyn Location>) -> ParamStore {
    let defaults: ParameterMap = [
        ("page_size", ParamValue::from(10)),
        ("sort", ParamValue::from("name")),
        ("name__startswith", ParamValue::from("galaxy.")),
    ]
    .into_iter()
    .collect();
    ParamStore::from_location(location, &INTEGER_KEYS).with_defaults(defaults)
}

/// An empty page with no toolbar filter means there are no roles at all
pub fn is_filtered(params: &ParameterMap) -> bool {
    filter_is_set(params, &FILTER_KEYS)
}
