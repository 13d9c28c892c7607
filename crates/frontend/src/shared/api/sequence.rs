use std::cell::Cell;

/// Tags list requests so a late answer to an older request can be dropped.
///
/// Responses may arrive out of order after a burst of filter changes; only
/// the one carrying the latest tag should reach the view.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        let tag = self.latest.get() + 1;
        self.latest.set(tag);
        tag
    }

    pub fn latest(&self) -> u64 {
        self.latest.get()
    }

    pub fn is_latest(&self, tag: u64) -> bool {
        tag == self.latest.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_tag_is_latest() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.next();
        let second = sequencer.next();
        assert!(second > first);
        assert!(!sequencer.is_latest(first));
        assert!(sequencer.is_latest(second));
        assert_eq!(sequencer.latest(), second);
    }
}
