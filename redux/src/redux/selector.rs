// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Memoized selectors.
//!
//! A [`MemoizedSelector`] is made of two parts:
//! 1. An input function that pulls the pieces it needs out of the state. These should
//!    be cheap (copies of flags, clones of [`Arc`]s).
//! 2. A projector that derives the output from those inputs. This is the expensive part,
//!    and it only runs when the inputs differ from the previous call.
//!
//! Composing selectors is just a matter of calling other selectors from the input
//! function, and returning a tuple.
//!
//! ```
//! use apm_redux::create_selector;
//! use std::sync::Arc;
//!
//! struct State { items: Vec<i32>, show_odd: bool }
//!
//! let visible = create_selector(
//!     |state: &State| (state.items.clone(), state.show_odd),
//!     |(items, show_odd)| items.iter().copied().filter(|it| *show_odd || it % 2 == 0).collect::<Vec<_>>(),
//! );
//!
//! let state = State { items: vec![1, 2, 3, 4], show_odd: false };
//! let first = visible.select(&state);
//! let second = visible.select(&state);
//! assert_eq!(*first, vec![2, 4]);
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

use std::{cell::RefCell, fmt::Debug, sync::Arc};

/// Wraps an [`Arc`] so that it compares by address instead of by value. Use it in
/// selector inputs to get "same reference, same output" semantics without walking the
/// whole value.
#[derive(Debug)]
pub struct ByAddress<T>(pub Arc<T>);

impl<T> Clone for ByAddress<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl<T> std::ops::Deref for ByAddress<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target { &self.0 }
}

type InputFn<S, I> = Box<dyn Fn(&S) -> I>;
type ProjectorFn<I, O> = Box<dyn Fn(&I) -> O>;

pub struct MemoizedSelector<S, I, O> {
    input_fn: InputFn<S, I>,
    projector_fn: ProjectorFn<I, O>,
    cache: RefCell<Option<(I, Arc<O>)>>,
}

impl<S, I, O> Debug for MemoizedSelector<S, I, O>
where
    I: Debug,
    O: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoizedSelector")
            .field("cache", &self.cache.borrow())
            .finish_non_exhaustive()
    }
}

/// Convenience constructor for [`MemoizedSelector`].
pub fn create_selector<S, I, O>(
    input_fn: impl Fn(&S) -> I + 'static,
    projector_fn: impl Fn(&I) -> O + 'static,
) -> MemoizedSelector<S, I, O>
where
    I: PartialEq,
{
    MemoizedSelector::new(input_fn, projector_fn)
}

impl<S, I, O> MemoizedSelector<S, I, O>
where
    I: PartialEq,
{
    pub fn new(
        input_fn: impl Fn(&S) -> I + 'static,
        projector_fn: impl Fn(&I) -> O + 'static,
    ) -> Self {
        Self {
            input_fn: Box::new(input_fn),
            projector_fn: Box::new(projector_fn),
            cache: RefCell::new(None),
        }
    }

    /// Returns the cached output if the inputs haven't changed since the last call,
    /// otherwise runs the projector and caches the result.
    pub fn select(&self, state: &S) -> Arc<O> {
        let input = (self.input_fn)(state);

        if let Some((last_input, last_output)) = self.cache.borrow().as_ref()
            && *last_input == input
        {
            return last_output.clone();
        }

        let output = Arc::new((self.projector_fn)(&input));
        *self.cache.borrow_mut() = Some((input, output.clone()));
        output
    }

    /// Forget the cached value. The next [`Self::select`] runs the projector again.
    pub fn release(&self) { self.cache.borrow_mut().take(); }
}
