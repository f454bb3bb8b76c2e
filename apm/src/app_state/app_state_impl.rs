// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use apm_redux::Store;

use crate::{AppAction, ProductState, UserState, product_reducer, user_reducer};

/// The whole state tree. Each slice sits behind an [`Arc`], so an untouched slice keeps
/// its identity from one state to the next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub user: Arc<UserState>,
    pub products: Arc<ProductState>,
}

pub type AppStore = Store<Arc<AppState>, AppAction>;

/// Root reducer. Hands the action to every slice reducer, and returns the same
/// [`Arc<AppState>`] when none of them changed anything.
#[must_use]
pub fn app_reducer(state: Option<&Arc<AppState>>, action: &AppAction) -> Arc<AppState> {
    let user = user_reducer(state.map(|it| &it.user), action);
    let products = product_reducer(state.map(|it| &it.products), action);

    match state {
        Some(state)
            if Arc::ptr_eq(&state.user, &user) && Arc::ptr_eq(&state.products, &products) =>
        {
            state.clone()
        }
        _ => Arc::new(AppState { user, products }),
    }
}

#[must_use]
pub fn create_store() -> AppStore { Store::new(app_reducer) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProductAction, User, UserAction};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_store_starts_with_slice_defaults() {
        let store = create_store();
        assert_eq!(**store.state(), AppState::default());
        assert!(!store.state().user.mask_user_name);
        assert!(store.state().products.show_product_code);
    }

    #[test]
    fn test_toggle_user_name_mask_scenario() {
        let mut store = create_store();
        assert!(store.dispatch(&UserAction::ToggleUserNameMask(true).into()));

        let state = store.get_state();
        assert_eq!(
            *state.user,
            UserState {
                mask_user_name: true,
                current_user: None
            }
        );
    }

    #[test]
    fn test_unknown_action_keeps_identity_of_whole_tree() {
        let before = Arc::new(AppState {
            user: Arc::new(UserState {
                mask_user_name: true,
                current_user: Some(User {
                    id: 1,
                    user_name: "admin".into(),
                    is_admin: false,
                }),
            }),
            products: Arc::default(),
        });
        let after = app_reducer(Some(&before), &AppAction::Unknown("UNKNOWN".into()));
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_only_the_touched_slice_is_replaced() {
        let before = app_reducer(None, &AppAction::Init);
        let after = app_reducer(
            Some(&before),
            &ProductAction::ToggleProductCode(false).into(),
        );

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&before.user, &after.user));
        assert!(!Arc::ptr_eq(&before.products, &after.products));
    }

    #[test]
    fn test_unknown_action_does_not_bump_version() {
        let mut store = create_store();
        assert!(!store.dispatch(&AppAction::Unknown("UNKNOWN".into())));
        assert_eq!(store.version(), 0);
    }
}
