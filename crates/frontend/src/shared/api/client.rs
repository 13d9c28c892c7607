//! Generic REST client bound to one resource path
//!
//! The API paginates with `offset`/`limit`, while pages keep `page`/`page_size`
//! in the URL because that is what people read and share. The mapping happens
//! here, right before a list request leaves.

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::rc::Rc;

use contracts::shared::pagination::{ListResponse, ListResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::context::ApiContext;
use super::csrf::CookieSource;
use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::shared::api_utils::{item_path, join_url, with_query};
use crate::shared::params::{codec, PageWindow, PageWindowMapper, ParameterMap};

/// Build a request. The anti-forgery header is only added when a token exists.
pub fn build_request(
    method: Method,
    url: String,
    body: Option<String>,
    csrf: Option<(&str, &str)>,
) -> HttpRequest {
    let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
    if body.is_some() {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }
    if let Some((header, token)) = csrf {
        headers.push((header.to_string(), token.to_string()));
    }
    HttpRequest {
        method,
        url,
        headers,
        body,
    }
}

pub struct ListDataClient<T> {
    base_url: String,
    resource_path: String,
    mapper: PageWindowMapper,
    csrf_cookie: String,
    csrf_header: String,
    transport: Rc<dyn Transport>,
    cookies: Rc<dyn CookieSource>,
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for ListDataClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            resource_path: self.resource_path.clone(),
            mapper: self.mapper,
            csrf_cookie: self.csrf_cookie.clone(),
            csrf_header: self.csrf_header.clone(),
            transport: Rc::clone(&self.transport),
            cookies: Rc::clone(&self.cookies),
            _item: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ListDataClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListDataClient")
            .field("base_url", &self.base_url)
            .field("resource_path", &self.resource_path)
            .finish()
    }
}

impl<T> ListDataClient<T> {
    pub fn new(ctx: &ApiContext, resource_path: impl Into<String>) -> Self {
        let config = ctx.config();
        Self {
            base_url: config.api_base_url(),
            resource_path: resource_path.into(),
            mapper: config.page_window_mapper(),
            csrf_cookie: config.csrf.cookie_name.clone(),
            csrf_header: config.csrf.header_name.clone(),
            transport: ctx.transport(),
            cookies: ctx.cookies(),
            _item: PhantomData,
        }
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Page window the client will request for `params`
    pub fn page_window(&self, params: &ParameterMap) -> PageWindow {
        self.mapper.window(params)
    }
}

impl<T: DeserializeOwned> ListDataClient<T> {
    pub async fn list(&self, params: Option<&ParameterMap>) -> Result<ListResult<T>, ApiError> {
        self.list_at(params, None).await
    }

    /// List from `path` instead of the bound resource path
    pub async fn list_at(
        &self,
        params: Option<&ParameterMap>,
        path: Option<&str>,
    ) -> Result<ListResult<T>, ApiError> {
        let query = match params {
            Some(params) => codec::serialize(&self.mapper.to_offset_limit(params)),
            None => codec::serialize(&self.mapper.to_offset_limit(&ParameterMap::new())),
        };
        let path = path.unwrap_or(&self.resource_path);
        let url = with_query(&join_url(&self.base_url, path), &query);

        let response = self.dispatch(Method::Get, url, None).await?;
        let envelope: ListResponse<T> = decode(&response)?;
        Ok(envelope.into())
    }

    /// `list`, abandoned as soon as `token` is cancelled
    pub async fn list_cancellable(
        &self,
        params: Option<&ParameterMap>,
        token: &CancellationToken,
    ) -> Result<ListResult<T>, ApiError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(ApiError::Cancelled),
            result = self.list(params) => result,
        }
    }

    pub async fn get(&self, id: impl Display) -> Result<T, ApiError> {
        let response = self.dispatch(Method::Get, self.item_url(id), None).await?;
        decode(&response)
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, &self.resource_path);
        let response = self.dispatch(Method::Post, url, Some(encode(data)?)).await?;
        decode(&response)
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<T, ApiError> {
        let response = self
            .dispatch(Method::Put, self.item_url(id), Some(encode(data)?))
            .await?;
        decode(&response)
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<T, ApiError> {
        let response = self
            .dispatch(Method::Patch, self.item_url(id), Some(encode(data)?))
            .await?;
        decode(&response)
    }

    pub async fn delete(&self, id: impl Display) -> Result<(), ApiError> {
        self.dispatch(Method::Delete, self.item_url(id), None).await?;
        Ok(())
    }

    fn item_url(&self, id: impl Display) -> String {
        join_url(&self.base_url, &item_path(&self.resource_path, id))
    }

    async fn dispatch(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        // read per request: the cookie may have rotated since the last call
        let token = self.cookies.cookie(&self.csrf_cookie);
        let csrf = token.as_deref().map(|t| (self.csrf_header.as_str(), t));
        let request = build_request(method, url, body, csrf);

        log::debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await?;

        if !response.ok() {
            log::warn!(
                "{} {} failed: {} {}",
                method.as_str(),
                self.resource_path,
                response.status,
                response.status_text
            );
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }
        Ok(response)
    }
}

fn encode<B: Serialize + ?Sized>(data: &B) -> Result<String, ApiError> {
    serde_json::to_string(data).map_err(ApiError::Encode)
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}
