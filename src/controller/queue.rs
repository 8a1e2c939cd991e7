use std::collections::VecDeque;

use crate::candidate::HunCandidate;

use super::core::DeferredAction;

/// One waiting candidate plus the actions to run when its turn comes.
pub(super) struct QueueEntry {
    pub candidate: HunCandidate,
    /// Never empty while the entry is queued; actions run in attachment order.
    pub actions: Vec<DeferredAction>,
}

/// FIFO of candidates waiting for the showing slot.
///
/// Keyed lookups are linear; avalanche bursts are small (tens of entries at
/// the very worst), so ordered `VecDeque` scanning beats keeping a parallel
/// index in sync.
#[derive(Default)]
pub(super) struct WaitQueue {
    entries: VecDeque<QueueEntry>,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Appends a brand-new entry at the tail.
    pub fn push_back(&mut self, candidate: HunCandidate, action: DeferredAction) {
        self.entries.push_back(QueueEntry {
            candidate,
            actions: vec![action],
        });
    }

    /// Removes and returns the head entry.
    pub fn pop_front(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    /// The head candidate, if any.
    pub fn front(&self) -> Option<&HunCandidate> {
        self.entries.front().map(|e| &e.candidate)
    }

    /// Looks up a waiting candidate by key.
    pub fn get(&self, key: &str) -> Option<&HunCandidate> {
        self.entries
            .iter()
            .find(|e| e.candidate.key() == key)
            .map(|e| &e.candidate)
    }

    /// Mutable lookup by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueueEntry> {
        self.entries.iter_mut().find(|e| e.candidate.key() == key)
    }

    /// Removes the entry with the given key, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<QueueEntry> {
        let idx = self.entries.iter().position(|e| e.candidate.key() == key)?;
        self.entries.remove(idx)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.candidate.key() == key)
    }

    /// Keys in FIFO order.
    pub fn keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.candidate.key().to_string())
            .collect()
    }

    /// Waiting candidates in FIFO order.
    pub fn candidates(&self) -> impl Iterator<Item = &HunCandidate> {
        self.entries.iter().map(|e| &e.candidate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry without running any actions; returns the dropped keys.
    pub fn clear(&mut self) -> Vec<String> {
        self.entries
            .drain(..)
            .map(|e| e.candidate.key().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> DeferredAction {
        Box::new(|| {})
    }

    #[test]
    fn test_fifo_order_preserved() {
        let mut q = WaitQueue::new();
        q.push_back(HunCandidate::new("a"), noop());
        q.push_back(HunCandidate::new("b"), noop());
        q.push_back(HunCandidate::new("c"), noop());
        assert_eq!(q.keys(), vec!["a", "b", "c"]);
        assert_eq!(q.front().unwrap().key(), "a");
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut q = WaitQueue::new();
        q.push_back(HunCandidate::new("a"), noop());
        q.push_back(HunCandidate::new("b"), noop());
        q.push_back(HunCandidate::new("c"), noop());
        let removed = q.remove("b").unwrap();
        assert_eq!(removed.candidate.key(), "b");
        assert_eq!(removed.actions.len(), 1);
        assert_eq!(q.keys(), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_returns_none() {
        let mut q = WaitQueue::new();
        q.push_back(HunCandidate::new("a"), noop());
        assert!(q.remove("zzz").is_none());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_clear_reports_dropped_keys() {
        let mut q = WaitQueue::new();
        q.push_back(HunCandidate::new("a"), noop());
        q.push_back(HunCandidate::new("b"), noop());
        assert_eq!(q.clear(), vec!["a", "b"]);
        assert!(q.is_empty());
    }
}
