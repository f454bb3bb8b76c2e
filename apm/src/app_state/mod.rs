// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action_codec;
pub mod app_action;
pub mod app_state_impl;

// Re-export.
pub use action_codec::*;
pub use app_action::*;
pub use app_state_impl::*;
