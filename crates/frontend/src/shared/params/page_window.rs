use crate::shared::config::DEFAULT_PAGE_SIZE;

use super::value::ParameterMap;

pub const PAGE_KEY: &str = "page";
pub const PAGE_SIZE_KEY: &str = "page_size";
pub const OFFSET_KEY: &str = "offset";
pub const LIMIT_KEY: &str = "limit";

/// 1-based page and its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
}

impl PageWindow {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Number of pages needed for `total` rows (0 for an empty list)
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }

    pub fn is_last_page(&self, total: u64) -> bool {
        self.page >= self.page_count(total)
    }
}

/// Maps the page-oriented view parameters onto offset/limit for the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowMapper {
    default_page_size: u64,
}

impl Default for PageWindowMapper {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindowMapper {
    pub fn new(default_page_size: u64) -> Self {
        Self {
            default_page_size: default_page_size.max(1),
        }
    }

    pub fn default_page_size(&self) -> u64 {
        self.default_page_size
    }

    /// Reads `page` and `page_size`. Missing or unparsable values fall back to
    /// their defaults; a page below 1 is treated as page 1.
    pub fn window(&self, params: &ParameterMap) -> PageWindow {
        let page = params
            .get_int(PAGE_KEY)
            .and_then(|p| u64::try_from(p).ok())
            .unwrap_or(1);
        let page_size = params
            .get_int(PAGE_SIZE_KEY)
            .and_then(|s| u64::try_from(s).ok())
            .filter(|s| *s >= 1)
            .unwrap_or(self.default_page_size);
        PageWindow::new(page, page_size)
    }

    /// Copy of `params` with `page`/`page_size` replaced by `offset`/`limit`
    pub fn to_offset_limit(&self, params: &ParameterMap) -> ParameterMap {
        let window = self.window(params);
        let mut mapped = params.clone();
        mapped.remove(PAGE_KEY);
        mapped.remove(PAGE_SIZE_KEY);
        mapped.insert(OFFSET_KEY, window.offset());
        mapped.insert(LIMIT_KEY, window.limit());
        mapped
    }
}
