// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod effects;
pub mod history;
pub mod list_manager;
pub mod selector;
pub mod store;
pub mod subscriptions;
pub mod sync_reducers;

// Re-export.
pub use effects::*;
pub use history::*;
pub use list_manager::*;
pub use selector::*;
pub use store::*;
pub use subscriptions::*;
pub use sync_reducers::*;
