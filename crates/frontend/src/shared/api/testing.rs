//! In-memory transport for client tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Records every request and answers from a queue (200 `{}` when empty)
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, status_text: &str, body: Value) {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                body: "{}".to_string(),
            }))
    }
}

/// Never answers; for cancellation tests
pub struct PendingTransport;

#[async_trait(?Send)]
impl Transport for PendingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        std::future::pending().await
    }
}
