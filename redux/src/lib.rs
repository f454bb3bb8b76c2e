// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single threaded Redux store.
//!
//! 1. Reducers are pure functions `(Option<&S>, &A) -> S`. They run in sequence, inside
//!    [`Store::dispatch`], on the caller's thread. When no state exists yet they start
//!    from the slice default.
//! 2. Selectors project the state into view values. [`MemoizedSelector`] only recomputes
//!    when its inputs change, and hands out the same [`std::sync::Arc`] otherwise.
//! 3. Subscribers register a selector and a callback with [`Store::select`]. The callback
//!    fires right away, and then only when the selected value changes.
//! 4. Effects turn an action into an optional follow up action asynchronously. They never
//!    touch the state directly; [`dispatch_with_effects`] feeds their output back into the
//!    store.
//!
//! There is no global store. Create a [`Store`] and pass it by reference to whoever needs
//! it.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod redux;

// Re-export.
pub use redux::*;
