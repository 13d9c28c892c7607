use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Where the shareable query string of the current page lives
pub trait Location {
    /// Current query string, without the leading `?`
    fn query(&self) -> String;

    /// Replace the query string without adding a history entry
    fn replace_query(&self, query: &str);
}

/// Query string held in memory; used off-browser and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    query: Rc<RefCell<String>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryLocation {
    pub fn new(query: impl Into<String>) -> Self {
        let query: String = query.into();
        Self {
            query: Rc::new(RefCell::new(query.trim_start_matches('?').to_string())),
            writes: Rc::new(Cell::new(0)),
        }
    }

    /// How many times the query has been replaced
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.query.borrow().clone()
    }

    fn replace_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.writes.set(self.writes.get() + 1);
    }
}
