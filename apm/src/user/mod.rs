// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod user_actions;
pub mod user_reducer;
pub mod user_selectors;
pub mod user_state;

// Re-export.
pub use user_actions::*;
pub use user_reducer::*;
pub use user_selectors::*;
pub use user_state::*;
