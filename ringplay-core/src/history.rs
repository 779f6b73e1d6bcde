//! Recently played tracks
//!
//! A bounded stack: the newest record is on top and the oldest one is dropped
//! once the capacity is reached.

use std::collections::VecDeque;

use crate::entry::Entry;

/// Default number of records kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded play history (most recent = back)
#[derive(Debug, Clone)]
pub struct PlayHistory {
    records: VecDeque<Entry>,
    capacity: usize,
}

impl Default for PlayHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl PlayHistory {
    /// Create a history holding at most `capacity` records.
    ///
    /// A zero capacity keeps nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a record on top, evicting the oldest one when full
    pub fn push(&mut self, record: Entry) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() >= self.capacity {
            if let Some(evicted) = self.records.pop_front() {
                log::debug!("history: evicted {:?}", evicted.name);
            }
        }
        self.records.push_back(record);
    }

    /// Remove and return the most recent record
    pub fn pop(&mut self) -> Option<Entry> {
        self.records.pop_back()
    }

    /// Most recent record, without removing it
    pub fn peek(&self) -> Option<&Entry> {
        self.records.back()
    }

    /// Records, most recent first
    pub fn to_list(&self) -> Vec<Entry> {
        self.records.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
