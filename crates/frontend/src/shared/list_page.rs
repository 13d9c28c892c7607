//! Reactive glue for list pages: params in, rows out
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api::ListDataClient;
use crate::shared::list_state::ListState;
use crate::shared::params::{ParamStore, ParamUpdate, ParameterMap};

pub struct ListPage<T: 'static> {
    store: StoredValue<ParamStore, LocalStorage>,
    state: RwSignal<ListState<T>, LocalStorage>,
    client: ListDataClient<T>,
}

impl<T: 'static> Clone for ListPage<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            state: self.state,
            client: self.client.clone(),
        }
    }
}

impl<T: DeserializeOwned + 'static> ListPage<T> {
    pub fn new(store: ParamStore, client: ListDataClient<T>) -> Self {
        Self {
            store: StoredValue::new_local(store),
            state: RwSignal::new_local(ListState::new()),
            client,
        }
    }

    pub fn state(&self) -> RwSignal<ListState<T>, LocalStorage> {
        self.state
    }

    pub fn params(&self) -> ParameterMap {
        self.store.with_value(|s| s.params().clone())
    }

    /// Fetch the current page; an older in-flight answer is ignored when it lands
    pub fn load(&self) {
        let params = self.store.with_value(|s| s.get_for_api());
        self.fetch(params);
    }

    /// Apply `partial`; the reload starts from the store's completion callback
    pub fn update(&self, partial: ParamUpdate) {
        self.store.update_value(|store| {
            store.update_then(partial, |api_params| self.fetch(api_params.clone()));
        });
    }

    /// Filter/sort change; goes back to page 1
    pub fn update_filters(&self, partial: ParamUpdate) {
        self.update(partial.reset_page());
    }

    fn fetch(&self, params: ParameterMap) {
        let window = self.client.page_window(&params);
        let tag = self.state.try_update(|s| s.begin_load()).unwrap_or_default();

        let client = self.client.clone();
        let state = self.state;
        spawn_local(async move {
            let result = client.list(Some(&params)).await;
            state.update(|s| {
                s.apply(tag, result, window);
            });
        });
    }
}
