// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! View models for the pages of the app. They hold what a page would render, dispatch
//! actions when the user does something, and read everything else from the store
//! through selectors. Drawing them on screen is someone else's job.

// Attach sources.
pub mod form_validation;
pub mod login_page;
pub mod navigation;
pub mod product_edit_page;
pub mod product_list_page;

// Re-export.
pub use form_validation::*;
pub use login_page::*;
pub use navigation::*;
pub use product_edit_page::*;
pub use product_list_page::*;
