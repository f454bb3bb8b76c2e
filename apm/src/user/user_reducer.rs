// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{AppAction, UserAction, UserState};

/// Reducer for the user slice.
///
/// - With no state, starts from [`UserState::default`].
/// - Actions this slice doesn't handle return the very same [`Arc`] that was passed in,
///   so subscribers can skip work with a pointer comparison.
#[must_use]
pub fn user_reducer(state: Option<&Arc<UserState>>, action: &AppAction) -> Arc<UserState> {
    let state = state.cloned().unwrap_or_default();
    match action {
        AppAction::User(UserAction::ToggleUserNameMask(mask_user_name)) => {
            Arc::new(UserState {
                mask_user_name: *mask_user_name,
                ..(*state).clone()
            })
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProductAction, User};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn toggle(mask: bool) -> AppAction {
        AppAction::User(UserAction::ToggleUserNameMask(mask))
    }

    fn logged_in_state() -> Arc<UserState> {
        Arc::new(UserState {
            mask_user_name: true,
            current_user: Some(User {
                id: 1,
                user_name: "admin".into(),
                is_admin: true,
            }),
        })
    }

    #[test]
    fn test_no_state_yields_default() {
        let state = user_reducer(None, &AppAction::Init);
        assert_eq!(
            *state,
            UserState {
                mask_user_name: false,
                current_user: None
            }
        );
    }

    #[test]
    fn test_toggle_from_initial_state() {
        let initial = user_reducer(None, &AppAction::Init);
        let state = user_reducer(Some(&initial), &toggle(true));
        assert_eq!(
            *state,
            UserState {
                mask_user_name: true,
                current_user: None
            }
        );
        // The input was not touched.
        assert!(!initial.mask_user_name);
    }

    #[test_case(true ; "mask")]
    #[test_case(false ; "unmask")]
    fn test_toggle_only_changes_the_mask(mask: bool) {
        let before = logged_in_state();
        let after = user_reducer(Some(&before), &toggle(mask));

        assert_eq!(after.mask_user_name, mask);
        assert_eq!(after.current_user, before.current_user);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let initial = user_reducer(None, &AppAction::Init);
        let once = user_reducer(Some(&initial), &toggle(true));
        let twice = user_reducer(Some(&once), &toggle(true));
        assert_eq!(once, twice);
    }

    #[test_case(AppAction::Unknown("UNKNOWN".into()) ; "unknown type")]
    #[test_case(AppAction::Init ; "init")]
    #[test_case(AppAction::Product(ProductAction::Load) ; "other slice")]
    fn test_unhandled_action_returns_same_arc(action: AppAction) {
        let before = logged_in_state();
        let after = user_reducer(Some(&before), &action);
        assert!(Arc::ptr_eq(&before, &after));
    }
}
