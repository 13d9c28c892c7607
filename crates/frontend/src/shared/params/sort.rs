use super::value::{ParamUpdate, ParameterMap};

/// Sort key used by the UI API; pulp endpoints call it `ordering`
pub const SORT_KEY: &str = "sort";

/// `name` sorts ascending, `-name` descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub descending: bool,
}

impl SortOrder {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (field, descending) = match raw.strip_prefix('-') {
            Some(field) => (field, true),
            None => (raw, false),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            descending,
        })
    }

    pub fn from_params(params: &ParameterMap, key: &str) -> Option<Self> {
        params.get_text(key).and_then(Self::parse)
    }

    pub fn as_param(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.clone()
        }
    }

    /// Clicking a header: same column flips, another column starts ascending
    pub fn toggled_for(current: Option<&SortOrder>, field: &str) -> SortOrder {
        match current {
            Some(order) if order.field == field => SortOrder {
                field: order.field.clone(),
                descending: !order.descending,
            },
            _ => SortOrder::ascending(field),
        }
    }

    /// Header indicator for `field`
    pub fn indicator(current: Option<&SortOrder>, field: &str) -> &'static str {
        match current {
            Some(order) if order.field == field => {
                if order.descending {
                    " ▼"
                } else {
                    " ▲"
                }
            }
            _ => " ⇅",
        }
    }
}

/// Update for a click on the `field` column header
pub fn sort_by(params: &ParameterMap, key: &str, field: &str) -> ParamUpdate {
    let current = SortOrder::from_params(params, key);
    let next = SortOrder::toggled_for(current.as_ref(), field);
    ParamUpdate::new().set(key, next.as_param()).reset_page()
}
