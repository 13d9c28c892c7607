use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Key used for messages that do not belong to a form field
pub const NO_FIELD: &str = "__nofield";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx answer; `body` is kept for form error mapping
    #[error("{status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("failed to serialize request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    detail: Option<String>,
    title: Option<String>,
    source: Option<ErrorSource>,
}

#[derive(Deserialize)]
struct ErrorSource {
    parameter: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            ApiError::Http { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    /// Messages keyed by form field, for inline form errors.
    ///
    /// Server errors (5xx) and bodies without an `errors` list are reported
    /// under [`NO_FIELD`] with the status text.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let mut messages = BTreeMap::new();

        let (status, status_text, body) = match self {
            ApiError::Http {
                status,
                status_text,
                body,
            } => (*status, status_text, body),
            other => {
                messages.insert(NO_FIELD.to_string(), other.to_string());
                return messages;
            }
        };

        let entries = if status >= 500 {
            Vec::new()
        } else {
            serde_json::from_str::<ErrorBody>(body)
                .map(|b| b.errors)
                .unwrap_or_default()
        };

        for entry in entries {
            let Some(message) = entry.detail.or(entry.title) else {
                continue;
            };
            let field = entry
                .source
                .and_then(|s| s.parameter)
                .unwrap_or_else(|| NO_FIELD.to_string());
            messages.insert(field, message);
        }

        if messages.is_empty() {
            messages.insert(NO_FIELD.to_string(), status_text.clone());
        }
        messages
    }
}
