use contracts::shared::pagination::ListResult;

use crate::shared::api::{ApiError, RequestSequencer};
use crate::shared::params::PageWindow;

/// Render state of a list page
#[derive(Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_count: u64,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<ApiError>,
    sequencer: RequestSequencer,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_count: 0,
            is_loading: false,
            is_loaded: false,
            error: None,
            sequencer: RequestSequencer::new(),
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list as loading and hand out the tag for the new request
    pub fn begin_load(&mut self) -> u64 {
        self.is_loading = true;
        self.error = None;
        self.sequencer.next()
    }

    /// Commit the answer to request `tag`. Returns `false` (and changes
    /// nothing) when a newer request has been issued since.
    pub fn apply(
        &mut self,
        tag: u64,
        result: Result<ListResult<T>, ApiError>,
        window: PageWindow,
    ) -> bool {
        if !self.sequencer.is_latest(tag) {
            log::debug!(
                "dropping stale list response #{} (latest #{})",
                tag,
                self.sequencer.latest()
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(result) => {
                self.page_count = window.page_count(result.total_count);
                self.total_count = result.total_count;
                self.items = result.items;
                self.is_loaded = true;
            }
            // Cancelled: not an error, the previous rows stay on screen
            Err(ApiError::Cancelled) => {}
            Err(e) => {
                log::warn!("list load failed: {}", e);
                self.error = Some(e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[&str], total: u64) -> Result<ListResult<String>, ApiError> {
        Ok(ListResult {
            items: items.iter().map(|s| s.to_string()).collect(),
            total_count: total,
        })
    }

    #[test]
    fn test_apply_latest() {
        let mut state = ListState::new();
        let tag = state.begin_load();
        assert!(state.is_loading);

        assert!(state.apply(tag, page(&["a", "b"], 12), PageWindow::new(1, 10)));
        assert!(!state.is_loading);
        assert!(state.is_loaded);
        assert_eq!(state.items, vec!["a", "b"]);
        assert_eq!(state.total_count, 12);
        assert_eq!(state.page_count, 2);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ListState::new();
        let old = state.begin_load();
        let new = state.begin_load();

        assert!(state.apply(new, page(&["new"], 1), PageWindow::new(1, 10)));
        assert!(!state.apply(old, page(&["old"], 99), PageWindow::new(1, 10)));
        assert_eq!(state.items, vec!["new"]);
        assert_eq!(state.total_count, 1);
    }

    #[test]
    fn test_error_is_kept_for_the_view() {
        let mut state: ListState<String> = ListState::new();
        let tag = state.begin_load();
        state.apply(
            tag,
            Err(ApiError::Http {
                status: 500,
                status_text: "Internal Server Error".into(),
                body: String::new(),
            }),
            PageWindow::new(1, 10),
        );
        assert!(!state.is_loading);
        assert_eq!(state.error.as_ref().and_then(ApiError::status), Some(500));

        // the next load clears it
        state.begin_load();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_cancelled_keeps_previous_rows() {
        let mut state = ListState::new();
        let first = state.begin_load();
        state.apply(first, page(&["kept"], 1), PageWindow::new(1, 10));

        let second = state.begin_load();
        state.apply(second, Err(ApiError::Cancelled), PageWindow::new(1, 10));
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.items, vec!["kept"]);
    }
}
