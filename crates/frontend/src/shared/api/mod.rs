//! REST access for list and detail pages

pub mod client;
pub mod context;
pub mod csrf;
pub mod error;
pub mod sequence;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ListDataClient;
pub use context::ApiContext;
pub use csrf::{CookieJar, CookieSource};
pub use error::ApiError;
pub use sequence::RequestSequencer;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
