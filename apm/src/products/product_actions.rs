// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Product;

/// Actions for the product slice.
///
/// The plain `Load`, `UpdateProduct`, `CreateProduct`, and `DeleteProduct` actions don't
/// change the state. They are requests that [`crate::ProductEffects`] turns into the
/// matching `*Success` or `*Fail` action once the service has answered.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    ToggleProductCode(bool),
    SetCurrentProduct(Product),
    ClearCurrentProduct,
    InitializeCurrentProduct,
    SetProductFilter(String),
    Load,
    LoadSuccess(Vec<Product>),
    LoadFail(String),
    UpdateProduct(Product),
    UpdateProductSuccess(Product),
    UpdateProductFail(String),
    CreateProduct(Product),
    CreateProductSuccess(Product),
    CreateProductFail(String),
    DeleteProduct(u32),
    DeleteProductSuccess(u32),
    DeleteProductFail(String),
}
