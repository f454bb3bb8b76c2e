// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod demo;
pub mod render;
pub mod replay;
pub mod seed;

// Re-export.
pub use clap_config::*;
pub use demo::*;
pub use render::*;
pub use replay::*;
pub use seed::*;
