// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Payload is the new value of [`crate::UserState::mask_user_name`].
    ToggleUserNameMask(bool),
}
