//! Applied-filter chips shown above a list

use super::value::{ParamUpdate, ParamValue, ParameterMap};

/// Keys that are view settings rather than filters
pub const DEFAULT_IGNORED: [&str; 3] = ["page", "page_size", "sort"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilter {
    pub key: String,
    pub value: String,
}

/// One chip per value; repeated keys produce one chip per element
pub fn applied_filters<S: AsRef<str>>(params: &ParameterMap, ignored: &[S]) -> Vec<AppliedFilter> {
    params
        .iter()
        .filter(|(key, _)| !ignored.iter().any(|i| i.as_ref() == *key))
        .flat_map(|(key, value)| {
            value.to_strings().into_iter().map(move |value| AppliedFilter {
                key: key.to_string(),
                value,
            })
        })
        .collect()
}

/// Whether any of `keys` is set; tells "no results for this filter" apart
/// from "nothing here yet"
pub fn filter_is_set<S: AsRef<str>>(params: &ParameterMap, keys: &[S]) -> bool {
    keys.iter().any(|key| params.contains_key(key.as_ref()))
}

/// Drop one chip. The key goes away with its last value.
pub fn remove_filter(params: &ParameterMap, key: &str, value: &str) -> ParamUpdate {
    let remaining: Vec<String> = params
        .get(key)
        .map(ParamValue::to_strings)
        .unwrap_or_default()
        .into_iter()
        .filter(|v| v != value)
        .collect();
    ParamUpdate::new().set(key, remaining).reset_page()
}

/// Drop every chip, keeping the ignored keys
pub fn clear_filters<S: AsRef<str>>(params: &ParameterMap, ignored: &[S]) -> ParamUpdate {
    params
        .keys()
        .filter(|key| !ignored.iter().any(|i| i.as_ref() == *key))
        .fold(ParamUpdate::new(), |update, key| update.unset(key))
        .reset_page()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParameterMap {
        [
            ("page", ParamValue::from(3)),
            ("sort", ParamValue::from("name")),
            ("keywords", ParamValue::from("nginx")),
            ("tags", ParamValue::from(vec!["linux", "cloud"])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_applied_filters() {
        let chips = applied_filters(&sample(), &DEFAULT_IGNORED);
        let pairs: Vec<(&str, &str)> = chips.iter().map(|c| (c.key.as_str(), c.value.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("keywords", "nginx"), ("tags", "linux"), ("tags", "cloud")]
        );
    }

    #[test]
    fn test_remove_one_of_many() {
        let mut params = sample();
        params.apply(&remove_filter(&params, "tags", "linux"));
        assert_eq!(params.get_text("tags"), Some("cloud"));
        assert_eq!(params.get_int("page"), Some(1));
    }

    #[test]
    fn test_remove_last_value_drops_key() {
        let mut params = sample();
        params.apply(&remove_filter(&params, "keywords", "nginx"));
        assert!(!params.contains_key("keywords"));
    }

    #[test]
    fn test_clear_keeps_ignored() {
        let mut params = sample();
        params.apply(&clear_filters(&params, &DEFAULT_IGNORED));
        let expected: ParameterMap = [("page", ParamValue::from(1)), ("sort", ParamValue::from("name"))]
            .into_iter()
            .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_filter_is_set() {
        let params = sample();
        assert!(filter_is_set(&params, &["keywords", "namespace"]));
        assert!(!filter_is_set(&params, &["namespace", "username__contains"]));
        assert!(!filter_is_set(&params, &[] as &[&str]));
    }

    #[test]
    fn test_filter_is_set_ignores_view_settings() {
        // only paging and sorting present: nothing is filtered
        let params: ParameterMap = [("page", ParamValue::from(2)), ("sort", ParamValue::from("name"))]
            .into_iter()
            .collect();
        assert!(!filter_is_set(&params, &["name__icontains", "locked"]));
        assert!(applied_filters(&params, &DEFAULT_IGNORED).is_empty());
    }
}
