// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use apm_redux::InitAction;

use crate::{ActionType, ProductAction, UserAction};

/// Every action the store understands. Each slice owns one variant, and only reacts to
/// that variant.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Dispatched once, by the store, to build the initial state.
    Init,
    User(UserAction),
    Product(ProductAction),
    /// An inbound action whose type string didn't match anything. Every reducer ignores
    /// it.
    Unknown(String),
}

impl InitAction for AppAction {
    fn init() -> Self { AppAction::Init }
}

impl From<UserAction> for AppAction {
    fn from(action: UserAction) -> Self { AppAction::User(action) }
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self { AppAction::Product(action) }
}

impl AppAction {
    /// `None` for [`AppAction::Unknown`].
    #[must_use]
    pub fn action_type(&self) -> Option<ActionType> {
        use ProductAction as P;
        Some(match self {
            AppAction::Init => ActionType::Init,
            AppAction::User(UserAction::ToggleUserNameMask(_)) => ActionType::ToggleUserNameMask,
            AppAction::Product(it) => match it {
                P::ToggleProductCode(_) => ActionType::ToggleProductCode,
                P::SetCurrentProduct(_) => ActionType::SetCurrentProduct,
                P::ClearCurrentProduct => ActionType::ClearCurrentProduct,
                P::InitializeCurrentProduct => ActionType::InitializeCurrentProduct,
                P::SetProductFilter(_) => ActionType::SetProductFilter,
                P::Load => ActionType::Load,
                P::LoadSuccess(_) => ActionType::LoadSuccess,
                P::LoadFail(_) => ActionType::LoadFail,
                P::UpdateProduct(_) => ActionType::UpdateProduct,
                P::UpdateProductSuccess(_) => ActionType::UpdateProductSuccess,
                P::UpdateProductFail(_) => ActionType::UpdateProductFail,
                P::CreateProduct(_) => ActionType::CreateProduct,
                P::CreateProductSuccess(_) => ActionType::CreateProductSuccess,
                P::CreateProductFail(_) => ActionType::CreateProductFail,
                P::DeleteProduct(_) => ActionType::DeleteProduct,
                P::DeleteProductSuccess(_) => ActionType::DeleteProductSuccess,
                P::DeleteProductFail(_) => ActionType::DeleteProductFail,
            },
            AppAction::Unknown(_) => return None,
        })
    }

    /// The wire name of this action, eg: `TOGGLE_USER_NAME_MASK`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            AppAction::Unknown(type_name) => type_name.as_str(),
            _ => self.action_type().map_or("", <&'static str>::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_names() {
        assert_eq!(
            AppAction::User(UserAction::ToggleUserNameMask(true)).type_name(),
            "TOGGLE_USER_NAME_MASK"
        );
        assert_eq!(
            AppAction::Product(ProductAction::DeleteProductSuccess(5)).type_name(),
            "DELETE_PRODUCT_SUCCESS"
        );
        assert_eq!(AppAction::Init.type_name(), "@@INIT");
        assert_eq!(AppAction::Unknown("FOO".into()).type_name(), "FOO");
    }
}
