// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

/// Where a page wants the app to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Welcome,
    Products,
    Url(String),
}

impl Display for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Navigation::Welcome => write!(f, "/welcome"),
            Navigation::Products => write!(f, "/products"),
            Navigation::Url(url) => write!(f, "{url}"),
        }
    }
}
