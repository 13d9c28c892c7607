use std::collections::BTreeMap;
use std::fmt;

use super::page_window::{PAGE_KEY, PAGE_SIZE_KEY};

/// A single view parameter as it lives in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    /// Repeated key, in the order the values were given
    List(Vec<String>),
}

impl ParamValue {
    /// Canonical form of the value, or `None` when it means "unset".
    ///
    /// Empty strings are unset, empty strings inside a list are dropped, and a
    /// list that ends up with one element becomes plain text.
    pub fn normalize(self) -> Option<ParamValue> {
        match self {
            ParamValue::Text(text) if text.is_empty() => None,
            ParamValue::List(values) => {
                let mut values: Vec<String> =
                    values.into_iter().filter(|v| !v.is_empty()).collect();
                match values.len() {
                    0 => None,
                    1 => values.pop().map(ParamValue::Text),
                    _ => Some(ParamValue::List(values)),
                }
            }
            other => Some(other),
        }
    }

    /// Integer reading of the value; for lists the last element counts
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Text(text) => text.trim().parse().ok(),
            ParamValue::List(values) => values.last().and_then(|v| v.trim().parse().ok()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Values as they appear in a query string, in order
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            ParamValue::Text(text) => vec![text.clone()],
            ParamValue::Int(n) => vec![n.to_string()],
            ParamValue::List(values) => values.clone(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::List(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Current parameters of a page.
///
/// Every mutation goes through [`ParamValue::normalize`], so a key is either
/// absent or holds a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap(BTreeMap<String, ParamValue>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(ParamValue::as_int)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(ParamValue::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets `key`, or removes it when `value` normalizes to unset
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        match value.into().normalize() {
            Some(value) => {
                self.0.insert(key, value);
            }
            None => {
                self.0.remove(&key);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of the map without the given keys
    pub fn without<S: AsRef<str>>(&self, keys: &[S]) -> ParameterMap {
        let mut copy = self.clone();
        copy.0.retain(|k, _| !keys.iter().any(|skip| skip.as_ref() == k));
        copy
    }

    /// Merges a partial update; `None`/empty values delete their key
    pub fn apply(&mut self, update: &ParamUpdate) {
        for (key, value) in update.iter() {
            match value {
                Some(value) => self.insert(key, value.clone()),
                None => {
                    self.0.remove(key);
                }
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for ParameterMap {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Partial change to a [`ParameterMap`].
///
/// Entries are applied in order, so a later entry for the same key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamUpdate(Vec<(String, Option<ParamValue>)>);

impl ParamUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((key.into(), Some(value.into())));
        self
    }

    pub fn unset(mut self, key: impl Into<String>) -> Self {
        self.0.push((key.into(), None));
        self
    }

    /// Jump to a page, leaving everything else alone
    pub fn page(page: i64) -> Self {
        Self::new().set(PAGE_KEY, page)
    }

    /// New page size; the current page may no longer exist, so go back to 1
    pub fn page_size(page_size: i64) -> Self {
        Self::new().set(PAGE_SIZE_KEY, page_size).set(PAGE_KEY, 1)
    }

    /// Adds `page = 1` unless the update already picks a page
    pub fn reset_page(self) -> Self {
        if self.touches(PAGE_KEY) {
            self
        } else {
            self.set(PAGE_KEY, 1)
        }
    }

    pub fn touches(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
