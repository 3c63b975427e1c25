use std::collections::VecDeque;

use crate::advisor::verdict::FeasibilityVerdict;

pub const HISTORY_CAPACITY: usize = 5;

/// Most-recent-first list of verdicts, oldest evicted past capacity
#[derive(Debug, Clone)]
pub struct VerdictHistory {
    entries: VecDeque<FeasibilityVerdict>,
    capacity: usize,
}

impl Default for VerdictHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl VerdictHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, verdict: FeasibilityVerdict) {
        self.entries.push_front(verdict);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> Vec<FeasibilityVerdict> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
