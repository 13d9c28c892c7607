//! Browser implementations of the transport, cookie and location seams

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use super::csrf::{find_cookie, CookieSource};
use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::shared::params::Location;

/// `fetch` via gloo-net
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

/// `document.cookie`
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        let document = window()?.document()?;
        let html: web_sys::HtmlDocument = document.dyn_into().ok()?;
        let raw = html.cookie().ok()?;
        find_cookie(&raw, name)
    }
}

/// The address bar; updates go through `history.replaceState`
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|s| s.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        let Some(w) = window() else {
            return;
        };
        // Only update URL if it actually changed
        if self.query() == query {
            return;
        }

        let location = w.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = if query.is_empty() {
            format!("{}{}", path, hash)
        } else {
            format!("{}?{}{}", path, query, hash)
        };

        match w.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                    log::warn!("replaceState failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("history unavailable: {:?}", e),
        }
    }
}
