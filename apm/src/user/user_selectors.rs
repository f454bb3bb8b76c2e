// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{AppState, User, UserState};

#[must_use]
pub fn get_user_feature_state(state: &AppState) -> &Arc<UserState> { &state.user }

#[must_use]
pub fn get_mask_user_name(state: &AppState) -> bool {
    get_user_feature_state(state).mask_user_name
}

#[must_use]
pub fn get_current_user(state: &AppState) -> Option<User> {
    get_user_feature_state(state).current_user.clone()
}
