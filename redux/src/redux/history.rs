// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::{VecDeque, vec_deque::Iter};

pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// Bounded list of the distinct states a store has gone through. A state that is equal
/// to the most recent entry is not recorded again. Once `max_size` is reached the oldest
/// entry is dropped.
#[derive(Debug, Clone)]
pub struct StateHistory<S> {
    entries: VecDeque<S>,
    max_size: usize,
}

impl<S> Default for StateHistory<S> {
    fn default() -> Self { Self::new(DEFAULT_MAX_HISTORY_SIZE) }
}

impl<S> StateHistory<S> {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn last(&self) -> Option<&S> { self.entries.back() }

    pub fn iter(&self) -> Iter<'_, S> { self.entries.iter() }
}

impl<S> StateHistory<S>
where
    S: PartialEq + Clone,
{
    /// Returns `true` if the state was recorded.
    pub fn push(&mut self, new_state: &S) -> bool {
        if self.max_size == 0 || self.last() == Some(new_state) {
            return false;
        }
        if self.entries.len() == self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(new_state.clone());
        true
    }
}

impl<'a, S> IntoIterator for &'a StateHistory<S> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_consecutive_duplicates_are_skipped() {
        let mut history = StateHistory::new(10);
        assert!(history.push(&1));
        assert!(!history.push(&1));
        assert!(history.push(&2));
        assert!(history.push(&1));

        let entries: Vec<i32> = history.iter().copied().collect();
        assert_eq!(entries, vec![1, 2, 1]);
    }

    #[test]
    fn test_oldest_entries_are_evicted() {
        let mut history = StateHistory::new(3);
        for it in 0..5 {
            history.push(&it);
        }

        let entries: Vec<i32> = (&history).into_iter().copied().collect();
        assert_eq!(entries, vec![2, 3, 4]);
        assert_eq!(history.last(), Some(&4));
    }

    #[test]
    fn test_zero_size_records_nothing() {
        let mut history = StateHistory::new(0);
        assert!(!history.push(&"a"));
        assert!(history.is_empty());
    }
}
