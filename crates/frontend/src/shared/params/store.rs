use std::fmt;
use std::rc::Rc;

use super::codec;
use super::filters;
use super::location::Location;
use super::sort::{self, SORT_KEY};
use super::value::{ParamUpdate, ParameterMap};

/// Parameters of one mounted page.
///
/// Keys listed in `non_url_keys` are kept in memory but never written to the
/// address bar; keys in `non_api_keys` drive client-side routing only and
/// are stripped by [`ParamStore::get_for_api`].
pub struct ParamStore {
    params: ParameterMap,
    non_url_keys: Vec<String>,
    non_api_keys: Vec<String>,
    sort_key: String,
    location: Rc<dyn Location>,
}

impl fmt::Debug for ParamStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamStore")
            .field("params", &self.params)
            .field("non_url_keys", &self.non_url_keys)
            .field("non_api_keys", &self.non_api_keys)
            .field("sort_key", &self.sort_key)
            .finish()
    }
}

impl ParamStore {
    pub fn new(params: ParameterMap, location: Rc<dyn Location>) -> Self {
        Self {
            params,
            non_url_keys: Vec::new(),
            non_api_keys: Vec::new(),
            sort_key: SORT_KEY.to_string(),
            location,
        }
    }

    /// Seed the store from the location's current query string
    pub fn from_location<S: AsRef<str>>(location: Rc<dyn Location>, integer_keys: &[S]) -> Self {
        let params = codec::parse(&location.query(), integer_keys);
        Self::new(params, location)
    }

    pub fn with_non_url_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_url_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_non_api_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_api_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Pulp endpoints sort by `ordering` rather than `sort`
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = key.into();
        self
    }

    /// Fill in keys the URL did not provide. The address bar is left as is.
    pub fn with_defaults(mut self, defaults: ParameterMap) -> Self {
        for (key, value) in defaults {
            if !self.params.contains_key(&key) {
                self.params.insert(key, value);
            }
        }
        self
    }

    pub fn params(&self) -> &ParameterMap {
        &self.params
    }

    /// What the address bar shows
    pub fn url_params(&self) -> ParameterMap {
        self.params.without(self.non_url_keys.as_slice())
    }

    /// What list requests are built from
    pub fn get_for_api(&self) -> ParameterMap {
        self.params.without(self.non_api_keys.as_slice())
    }

    pub fn query_string(&self) -> String {
        codec::serialize(&self.url_params())
    }

    pub fn update(&mut self, partial: ParamUpdate) {
        self.update_then(partial, |_| {});
    }

    /// Merge `partial`, rewrite the URL, commit, then call `on_complete`
    /// once with the committed parameters as list requests see them
    /// (non-API keys removed).
    pub fn update_then<F>(&mut self, partial: ParamUpdate, on_complete: F)
    where
        F: FnOnce(&ParameterMap),
    {
        let mut next = self.params.clone();
        next.apply(&partial);

        let query = codec::serialize(&next.without(self.non_url_keys.as_slice()));
        self.location.replace_query(&query);
        self.params = next;
        log::debug!("params updated, url query: {:?}", query);

        on_complete(&self.get_for_api());
    }

    /// Filter change: the result set changes, so the view goes back to page 1
    /// unless `partial` names a page itself
    pub fn update_filters(&mut self, partial: ParamUpdate) {
        self.update(partial.reset_page());
    }

    pub fn set_page(&mut self, page: i64) {
        self.update(ParamUpdate::page(page));
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.update(ParamUpdate::page_size(page_size));
    }

    /// Header click on `field`
    pub fn sort_by(&mut self, field: &str) {
        let update = sort::sort_by(&self.params, &self.sort_key, field);
        self.update(update);
    }

    pub fn remove_filter(&mut self, key: &str, value: &str) {
        let update = filters::remove_filter(&self.params, key, value);
        self.update(update);
    }

    pub fn clear_filters<S: AsRef<str>>(&mut self, ignored: &[S]) {
        let update = filters::clear_filters(&self.params, ignored);
        self.update(update);
    }
}
