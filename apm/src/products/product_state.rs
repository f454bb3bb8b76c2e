// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Product;

/// The product slice.
///
/// `current_product_id`:
/// - `None`: nothing selected.
/// - `Some(0)`: a new product is being added (see [`crate::NEW_PRODUCT_ID`]).
/// - `Some(id)`: an existing product is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductState {
    pub show_product_code: bool,
    pub current_product_id: Option<u32>,
    pub products: Vec<Product>,
    pub list_filter: String,
    pub error: String,
}

impl Default for ProductState {
    fn default() -> Self {
        Self {
            show_product_code: true,
            current_product_id: None,
            products: vec![],
            list_filter: String::new(),
            error: String::new(),
        }
    }
}
