//! List envelopes returned by the hub REST API
//!
//! Two shapes are in use: the versioned UI API wraps rows in `data` and
//! reports the total under `meta.count`, while the content (pulp) endpoints
//! use `count`/`results`. Both collapse into [`ListResult`].

use serde::{Deserialize, Serialize};

/// One page of rows plus the server-side total for the current filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    /// Total matching rows, not the length of `items`
    pub total_count: u64,
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLinks {
    pub first: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Wire form of a list response
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Ui {
        meta: ListMeta,
        #[serde(default)]
        links: ListLinks,
        data: Vec<T>,
    },
    Pulp {
        count: u64,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
}

impl<T> From<ListResponse<T>> for ListResult<T> {
    fn from(response: ListResponse<T>) -> Self {
        match response {
            ListResponse::Ui { meta, data, .. } => ListResult {
                items: data,
                total_count: meta.count,
            },
            ListResponse::Pulp { count, results, .. } => ListResult {
                items: results,
                total_count: count,
            },
        }
    }
}
