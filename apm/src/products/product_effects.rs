// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use apm_redux::Effect;

use crate::{AppAction, ProductAction, ProductService};

/// Answers product requests (`Load`, `UpdateProduct`, `CreateProduct`, `DeleteProduct`)
/// by calling the [`ProductService`], and turns the outcome into a success or failure
/// action. Service errors end up as the error message of the failure action.
#[derive(Debug)]
pub struct ProductEffects<S: ProductService> {
    service: S,
}

impl<S: ProductService> ProductEffects<S> {
    pub fn new(service: S) -> Self { Self { service } }
}

impl<S: ProductService> Effect<AppAction> for ProductEffects<S> {
    async fn run(&self, action: &AppAction) -> Option<AppAction> {
        let AppAction::Product(action) = action else {
            return None;
        };

        let follow_up = match action {
            ProductAction::Load => match self.service.get_products().await {
                Ok(products) => ProductAction::LoadSuccess(products),
                Err(error) => ProductAction::LoadFail(error.to_string()),
            },
            ProductAction::UpdateProduct(product) => {
                match self.service.update_product(product.clone()).await {
                    Ok(product) => ProductAction::UpdateProductSuccess(product),
                    Err(error) => ProductAction::UpdateProductFail(error.to_string()),
                }
            }
            ProductAction::CreateProduct(product) => {
                match self.service.create_product(product.clone()).await {
                    Ok(product) => ProductAction::CreateProductSuccess(product),
                    Err(error) => ProductAction::CreateProductFail(error.to_string()),
                }
            }
            ProductAction::DeleteProduct(id) => match self.service.delete_product(*id).await {
                Ok(id) => ProductAction::DeleteProductSuccess(id),
                Err(error) => ProductAction::DeleteProductFail(error.to_string()),
            },
            _ => return None,
        };

        // % is Display, ? is Debug.
        tracing::debug!(message = "🛰️ product service answered", follow_up = ?follow_up);

        Some(follow_up.into())
    }
}
