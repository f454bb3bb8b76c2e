// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{AppAction, NEW_PRODUCT_ID, ProductAction, ProductState};

/// Reducer for the product slice. Same contract as [`crate::user_reducer`]: a missing
/// state starts from the default, and anything this slice doesn't change comes back as
/// the same [`Arc`].
#[must_use]
pub fn product_reducer(
    state: Option<&Arc<ProductState>>,
    action: &AppAction,
) -> Arc<ProductState> {
    let state = state.cloned().unwrap_or_default();
    let AppAction::Product(action) = action else {
        return state;
    };

    match action {
        ProductAction::ToggleProductCode(show_product_code) => {
            copy_with(&state, |it| it.show_product_code = *show_product_code)
        }
        ProductAction::SetCurrentProduct(product) => {
            copy_with(&state, |it| it.current_product_id = Some(product.id))
        }
        ProductAction::ClearCurrentProduct => {
            copy_with(&state, |it| it.current_product_id = None)
        }
        ProductAction::InitializeCurrentProduct => {
            copy_with(&state, |it| it.current_product_id = Some(NEW_PRODUCT_ID))
        }
        ProductAction::SetProductFilter(list_filter) => {
            copy_with(&state, |it| it.list_filter.clone_from(list_filter))
        }
        ProductAction::LoadSuccess(products) => copy_with(&state, |it| {
            it.products.clone_from(products);
            it.error.clear();
        }),
        ProductAction::LoadFail(error) => copy_with(&state, |it| {
            it.products.clear();
            it.error.clone_from(error);
        }),
        ProductAction::UpdateProductSuccess(updated) => copy_with(&state, |it| {
            for product in &mut it.products {
                if product.id == updated.id {
                    product.clone_from(updated);
                }
            }
            it.current_product_id = Some(updated.id);
            it.error.clear();
        }),
        ProductAction::CreateProductSuccess(created) => copy_with(&state, |it| {
            it.products.push(created.clone());
            it.current_product_id = Some(created.id);
            it.error.clear();
        }),
        ProductAction::DeleteProductSuccess(id) => copy_with(&state, |it| {
            it.products.retain(|product| product.id != *id);
            it.current_product_id = None;
            it.error.clear();
        }),
        ProductAction::UpdateProductFail(error)
        | ProductAction::CreateProductFail(error)
        | ProductAction::DeleteProductFail(error) => {
            copy_with(&state, |it| it.error.clone_from(error))
        }
        ProductAction::Load
        | ProductAction::UpdateProduct(_)
        | ProductAction::CreateProduct(_)
        | ProductAction::DeleteProduct(_) => state,
    }
}

/// Structural copy: `state` is left alone, `change` is applied to a clone.
fn copy_with(
    state: &ProductState,
    change: impl FnOnce(&mut ProductState),
) -> Arc<ProductState> {
    let mut next = state.clone();
    change(&mut next);
    Arc::new(next)
}
