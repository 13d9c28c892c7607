//! Anti-forgery token lookup
//!
//! The server sets a `csrftoken` cookie and expects it back in the
//! `X-CSRFToken` header on every request. The cookie can rotate, so it is read
//! at dispatch time and never cached.

use std::cell::RefCell;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Finds `name` in a `document.cookie` style string (`a=1; b=2`)
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Cookie string held in memory, replaceable to simulate rotation
#[derive(Debug, Default)]
pub struct CookieJar {
    raw: RefCell<String>,
}

impl CookieJar {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(raw.into()),
        }
    }

    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.raw.borrow_mut() = raw.into();
    }
}

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<String> {
        find_cookie(&self.raw.borrow(), name)
    }
}
