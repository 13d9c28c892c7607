//! Parameters of the user list page
use std::rc::Rc;

use crate::shared::params::filters::filter_is_set;
use crate::shared::params::{Location, ParamStore, ParamValue, ParameterMap};

pub const INTEGER_KEYS: [&str; 2] = ["page", "page_size"];

/// Not shown as filter chips
pub const IGNORED_FILTERS: [&str; 3] = ["page_size", "page", "sort"];

/// Toolbar filters; with none of them set an empty list means no users yet
pub const FILTER_KEYS: [&str; 4] = [
    "username__contains",
    "first_name__contains",
    "last_name__contains",
    "email__contains",
];

pub fn user_list_store(location: Rc<dyn Location>) -> ParamStore {
    let defaults: ParameterMap = [
        ("page_size", ParamValue::from(10)),
        ("sort", ParamValue::from("username")),
    ]
    .into_iter()
    .collect();
    ParamStore::from_location(location, &INTEGER_KEYS).with_defaults(defaults)
}

pub fn is_filtered(params: &ParameterMap) -> bool {
    filter_is_set(params, &FILTER_KEYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::params::filters::applied_filters;
    use crate::shared::params::sort::{sort_by, SORT_KEY};
    use crate::shared::params::MemoryLocation;

    #[test]
    fn test_defaults() {
        let store = user_list_store(Rc::new(MemoryLocation::new("")));
        assert_eq!(store.params().get_int("page_size"), Some(10));
        assert_eq!(store.params().get_text("sort"), Some("username"));
    }

    #[test]
    fn test_url_wins_over_defaults() {
        let store = user_list_store(Rc::new(MemoryLocation::new(
            "page_size=50&username__contains=adm",
        )));
        assert_eq!(store.params().get_int("page_size"), Some(50));
        let chips = applied_filters(store.params(), &IGNORED_FILTERS);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, "username__contains");
        assert!(is_filtered(store.params()));
    }

    #[test]
    fn test_paging_alone_is_not_a_filter() {
        let store = user_list_store(Rc::new(MemoryLocation::new("page=4&sort=-email")));
        assert!(!is_filtered(store.params()));
    }

    #[test]
    fn test_header_click_writes_url() {
        let location = MemoryLocation::new("page=3");
        let mut store = user_list_store(Rc::new(location.clone()));
        let update = sort_by(store.params(), SORT_KEY, "username");
        store.update(update);
        assert_eq!(location.query(), "page=1&page_size=10&sort=-username");
    }
}
