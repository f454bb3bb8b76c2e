// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod product;
pub mod product_actions;
pub mod product_effects;
pub mod product_reducer;
pub mod product_selectors;
pub mod product_service;
pub mod product_state;

// Re-export.
pub use product::*;
pub use product_actions::*;
pub use product_effects::*;
pub use product_reducer::*;
pub use product_selectors::*;
pub use product_service::*;
pub use product_state::*;
