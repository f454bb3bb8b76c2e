// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display, slice::IterMut};

/// Handle returned when an item is added to a [`ListManager`]. Use it to remove the item
/// later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Ordered list of items, each tagged with a [`SubscriptionId`] that is never reused.
#[derive(Debug)]
pub struct ListManager<T> {
    items: Vec<(SubscriptionId, T)>,
    next_id: u64,
}

impl<T> Default for ListManager<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> ListManager<T> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, item: T) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.items.push((id, item));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> Option<T> {
        let index = self.items.iter().position(|(it, _)| *it == id)?;
        Some(self.items.remove(index).1)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn iter_mut(&mut self) -> IterMut<'_, (SubscriptionId, T)> { self.items.iter_mut() }
}
