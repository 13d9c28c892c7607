//! View parameters for list pages
//!
//! The URL query string is the durable form of a page's filter, sort and
//! paging state. [`ParamStore`] keeps the in-memory copy and the address bar
//! in step, [`codec`] converts between the two, and [`PageWindowMapper`]
//! turns `page`/`page_size` into the `offset`/`limit` pair the API expects.

pub mod codec;
pub mod filters;
pub mod location;
pub mod page_window;
pub mod sort;
pub mod store;
mod value;

pub use location::{Location, MemoryLocation};
pub use page_window::{PageWindow, PageWindowMapper, LIMIT_KEY, OFFSET_KEY, PAGE_KEY, PAGE_SIZE_KEY};
pub use sort::SortOrder;
pub use store::ParamStore;
pub use value::{ParamUpdate, ParamValue, ParameterMap};
