// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! State core of the product management demo.
//!
//! The state tree has two slices:
//! 1. [`user`]: whether the login page masks the user name, and the current user.
//! 2. [`products`]: the product list, the current product, the list filter, the "show
//!    product code" toggle, and the last error message.
//!
//! Everything flows in one direction. Page view models (see [`pages`]) dispatch
//! [`AppAction`]s into an [`AppStore`], the reducers compute the next [`AppState`], and
//! the pages read derived values back through selectors. Talking to the product service
//! happens in [`products::ProductEffects`], which answers with success or failure
//! actions.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod app_state;
pub mod cli;
pub mod log;
pub mod pages;
pub mod products;
pub mod user;

// Re-export.
pub use app_state::*;
pub use cli::*;
pub use log::*;
pub use pages::*;
pub use products::*;
pub use user::*;
