// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub user_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// The user slice. The default is the state the store starts out with: user name not
/// masked, nobody logged in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserState {
    pub mask_user_name: bool,
    pub current_user: Option<User>,
}
