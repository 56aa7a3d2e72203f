//! Fixed-capacity event log.

use std::collections::VecDeque;

/// Order in which a [`BoundedLog`] yields its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOrder {
    /// Most recent entry first (a feed that grows at the top).
    NewestFirst,
    /// Chronological (a transcript that grows at the bottom).
    OldestFirst,
}

/// Keeps at most `capacity` entries, evicting the oldest on overflow.
#[derive(Debug, Clone)]
pub struct BoundedLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
    order: LogOrder,
}

impl<T> BoundedLog<T> {
    /// Create an empty log. A zero capacity is raised to one.
    pub fn new(capacity: usize, order: LogOrder) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            order,
        }
    }

    /// Append an entry, returning the evicted one if the log was full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let len = self.entries.len();
        let newest_first = self.order == LogOrder::NewestFirst;
        (0..len).map(move |i| {
            if newest_first {
                &self.entries[len - 1 - i]
            } else {
                &self.entries[i]
            }
        })
    }

    /// Most recently pushed entry.
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn order(&self) -> LogOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_keeps_most_recent_newest_first() {
        let mut log = BoundedLog::new(4, LogOrder::NewestFirst);
        for i in 1..=5 {
            log.push(i);
        }

        assert_eq!(log.len(), 4);
        assert_eq!(log.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_overflow_keeps_most_recent_chronological() {
        let mut log = BoundedLog::new(4, LogOrder::OldestFirst);
        for i in 1..=5 {
            log.push(i);
        }

        assert_eq!(log.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_push_reports_eviction() {
        let mut log = BoundedLog::new(2, LogOrder::OldestFirst);
        assert_eq!(log.push('a'), None);
        assert_eq!(log.push('b'), None);
        assert_eq!(log.push('c'), Some('a'));
        assert_eq!(log.latest(), Some(&'c'));
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut log = BoundedLog::new(0, LogOrder::NewestFirst);
        log.push(1);
        log.push(2);
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_clear() {
        let mut log = BoundedLog::new(3, LogOrder::NewestFirst);
        log.push(1);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
    }
}
