// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::marker::PhantomData;

/// Something the [`crate::Store`] notifies after each dispatch.
///
/// Callbacks only receive values, never the store, so they can't dispatch while the
/// store is busy notifying. Collaborators that want to react by dispatching should do so
/// after [`crate::Store::dispatch`] returns.
pub trait Subscriber<S> {
    /// Returns `true` if the subscriber saw a new value and its callback ran.
    fn notify(&mut self, state: &S) -> bool;
}

/// Boxed [`Subscriber`], as stored by the [`crate::Store`].
pub type SubscriberItem<S> = Box<dyn Subscriber<S>>;

/// Runs `on_change` with the value produced by `selector`, but only when that value is
/// different from the last one it delivered. The very first notification always fires.
pub struct SelectSubscriber<S, T, Sel, F>
where
    Sel: Fn(&S) -> T,
    F: FnMut(&T),
{
    selector: Sel,
    on_change: F,
    last_value: Option<T>,
    _state: PhantomData<fn(&S)>,
}

impl<S, T, Sel, F> SelectSubscriber<S, T, Sel, F>
where
    T: PartialEq,
    Sel: Fn(&S) -> T,
    F: FnMut(&T),
{
    pub fn new(selector: Sel, on_change: F) -> Self {
        Self {
            selector,
            on_change,
            last_value: None,
            _state: PhantomData,
        }
    }
}

impl<S, T, Sel, F> Subscriber<S> for SelectSubscriber<S, T, Sel, F>
where
    T: PartialEq,
    Sel: Fn(&S) -> T,
    F: FnMut(&T),
{
    fn notify(&mut self, state: &S) -> bool {
        let value = (self.selector)(state);
        if self.last_value.as_ref() == Some(&value) {
            return false;
        }
        (self.on_change)(&value);
        self.last_value = Some(value);
        true
    }
}
