//! Query string <-> [`ParameterMap`]
//!
//! Integer keys keep the last value that parses; anything else that repeats
//! becomes a list in the order it appeared.

use std::collections::BTreeMap;

use super::value::{ParamValue, ParameterMap};

/// Parse a query string (with or without the leading `?`).
///
/// Values of `integer_keys` that are not base-10 integers are dropped, as if
/// the key had not been given.
pub fn parse<S: AsRef<str>>(query: &str, integer_keys: &[S]) -> ParameterMap {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut texts: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut ints: BTreeMap<String, i64> = BTreeMap::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(raw_key);
        let value = decode(raw_value);
        if key.is_empty() || value.is_empty() {
            continue;
        }

        if integer_keys.iter().any(|k| k.as_ref() == key) {
            match value.trim().parse::<i64>() {
                Ok(n) => {
                    ints.insert(key, n);
                }
                Err(_) => log::debug!("ignoring non-integer value {:?} for {}", value, key),
            }
        } else {
            texts.entry(key).or_default().push(value);
        }
    }

    let mut params = ParameterMap::new();
    for (key, values) in texts {
        params.insert(key, values);
    }
    for (key, n) in ints {
        params.insert(key, n);
    }
    params
}

/// Render parameters as `key=value&...`, keys sorted, lists as repeated keys
pub fn serialize(params: &ParameterMap) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        if key.is_empty() {
            continue;
        }
        for item in value.to_strings() {
            if item.is_empty() {
                continue;
            }
            pairs.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&item)
            ));
        }
    }
    pairs.join("&")
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}
