// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::Cell, rc::Rc, sync::Arc};

use apm_redux::SubscriptionId;

use crate::{AppState, AppStore, FormValidator, Navigation, UserAction, get_mask_user_name};

pub const LOGIN_PAGE_TITLE: &str = "Log In";
pub const LOGIN_FORM_INCOMPLETE_MESSAGE: &str = "Please enter a user name and password.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub user_name: String,
    pub password: String,
}

/// Logging in is somebody else's business. The page only hands the credentials over,
/// and asks where to go afterwards.
pub trait AuthService {
    fn login(&mut self, user_name: &str, password: &str);

    /// Page the user tried to reach before being sent to log in, if any.
    fn redirect_url(&self) -> Option<&str>;
}

/// Remembers who logged in. Doesn't check anything.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthService {
    pub current_user_name: Option<String>,
    pub redirect_url: Option<String>,
}

impl AuthService for InMemoryAuthService {
    fn login(&mut self, user_name: &str, _password: &str) {
        self.current_user_name = Some(user_name.to_string());
    }

    fn redirect_url(&self) -> Option<&str> { self.redirect_url.as_deref() }
}

#[derive(Debug)]
pub struct LoginPage {
    pub page_title: &'static str,
    pub error_message: Option<String>,
    mask_user_name: Rc<Cell<bool>>,
    subscription_id: SubscriptionId,
}

impl LoginPage {
    /// Subscribes to the "mask user name" flag. Call [`Self::close`] when the page goes
    /// away.
    pub fn open(store: &mut AppStore) -> Self {
        let mask_user_name = Rc::new(Cell::new(false));
        let mask_user_name_clone = mask_user_name.clone();
        let subscription_id = store.select(
            |state: &Arc<AppState>| get_mask_user_name(state),
            move |it: &bool| mask_user_name_clone.set(*it),
        );

        Self {
            page_title: LOGIN_PAGE_TITLE,
            error_message: None,
            mask_user_name,
            subscription_id,
        }
    }

    pub fn close(self, store: &mut AppStore) { store.unsubscribe(self.subscription_id); }

    #[must_use]
    pub fn mask_user_name(&self) -> bool { self.mask_user_name.get() }

    /// The "mask user name" checkbox was clicked.
    pub fn check_changed(&self, store: &mut AppStore, value: bool) {
        store.dispatch(&UserAction::ToggleUserNameMask(value).into());
    }

    #[must_use]
    pub fn cancel(&self) -> Navigation { Navigation::Welcome }

    /// Returns where to navigate to on success. On failure, sets
    /// [`Self::error_message`] and returns `None`.
    pub fn login(
        &mut self,
        form: &LoginForm,
        validator: &impl FormValidator<LoginForm>,
        auth_service: &mut impl AuthService,
    ) -> Option<Navigation> {
        if !validator.validate(form).is_valid() {
            self.error_message = Some(LOGIN_FORM_INCOMPLETE_MESSAGE.to_string());
            return None;
        }

        self.error_message = None;
        auth_service.login(&form.user_name, &form.password);

        // % is Display, ? is Debug.
        tracing::debug!(message = "🔑 logged in", user_name = %form.user_name);

        Some(match auth_service.redirect_url() {
            Some(url) => Navigation::Url(url.to_string()),
            None => Navigation::Products,
        })
    }
}
