// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{
    AppAction, AppStore, CurrentProductSelector, FormValidator, Product, ProductAction,
    ValidationReport, get_error, select_current_product,
};

pub const ADD_PRODUCT_PAGE_TITLE: &str = "Add Product";
pub const PRODUCT_FORM_INVALID_MESSAGE: &str = "Please correct the validation errors.";

/// Editable copy of a product's fields. `dirty` flips to `true` as soon as something is
/// changed through [`Self::edit`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub product_name: String,
    pub product_code: String,
    pub star_rating: Option<f32>,
    pub description: String,
    pub dirty: bool,
}

impl ProductForm {
    /// Pristine form filled in from `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            product_code: product.product_code.clone(),
            star_rating: Some(product.star_rating),
            description: product.description.clone(),
            dirty: false,
        }
    }

    #[must_use]
    pub fn edit(mut self, change: impl FnOnce(&mut Self)) -> Self {
        change(&mut self);
        self.dirty = true;
        self
    }
}

/// The edit page doesn't subscribe. It polls: [`Self::refresh`] compares the store's
/// version stamp with the last one it saw, and only then looks at the selectors.
#[derive(Debug)]
pub struct ProductEditPage {
    pub page_title: String,
    pub product: Option<Product>,
    pub form: Option<ProductForm>,
    pub error_message: Option<String>,
    pub display_messages: ValidationReport,
    current_product_selector: CurrentProductSelector,
    last_seen_version: Option<u64>,
    last_seen_product: Option<Arc<Option<Product>>>,
}

impl Default for ProductEditPage {
    fn default() -> Self { Self::new() }
}

impl ProductEditPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_title: ADD_PRODUCT_PAGE_TITLE.to_string(),
            product: None,
            form: None,
            error_message: None,
            display_messages: ValidationReport::valid(),
            current_product_selector: select_current_product(),
            last_seen_version: None,
            last_seen_product: None,
        }
    }

    /// Pick up changes from the store. Returns `true` if the displayed product changed,
    /// in which case any edits in [`Self::form`] are replaced.
    pub fn refresh(&mut self, store: &AppStore) -> bool {
        if self.last_seen_version == Some(store.version()) {
            return false;
        }
        self.last_seen_version = Some(store.version());

        let error = get_error(store.state());
        self.error_message = (!error.is_empty()).then(|| error.to_string());

        let current_product = self.current_product_selector.select(store.state());
        let is_same = self
            .last_seen_product
            .as_ref()
            .is_some_and(|it| Arc::ptr_eq(it, &current_product) || it == &current_product);
        if is_same {
            return false;
        }

        self.display_product(current_product.as_ref().clone());
        self.last_seen_product = Some(current_product);
        true
    }

    /// Show `product`, and reset the form to its values.
    pub fn display_product(&mut self, product: Option<Product>) {
        self.form = product.as_ref().map(ProductForm::from_product);
        self.display_messages = ValidationReport::valid();
        if let Some(product) = &product {
            self.page_title = if product.is_new() {
                ADD_PRODUCT_PAGE_TITLE.to_string()
            } else {
                format!("Edit Product: {}", product.product_name)
            };
        }
        self.product = product;
    }

    /// Throw away any edits.
    pub fn cancel_edit(&mut self) { self.display_product(self.product.clone()); }

    /// Re-validate without saving, eg: when a field loses focus.
    pub fn blur(&mut self, validator: &impl FormValidator<ProductForm>) {
        if let Some(form) = &self.form {
            self.display_messages = validator.validate(form);
        }
    }

    /// Returns the action to dispatch, if any:
    /// - Invalid form: sets [`Self::error_message`], nothing to dispatch.
    /// - Untouched form: nothing to dispatch.
    /// - New product: [`ProductAction::CreateProduct`], otherwise
    ///   [`ProductAction::UpdateProduct`].
    pub fn save_product(
        &mut self,
        form: ProductForm,
        validator: &impl FormValidator<ProductForm>,
    ) -> Option<AppAction> {
        let report = validator.validate(&form);
        if !report.is_valid() {
            self.display_messages = report;
            self.error_message = Some(PRODUCT_FORM_INVALID_MESSAGE.to_string());
            self.form = Some(form);
            return None;
        }

        let product = self.product.as_ref()?;
        if !form.dirty {
            return None;
        }

        let product_to_save = Product {
            id: product.id,
            product_name: form.product_name.clone(),
            product_code: form.product_code.clone(),
            description: form.description.clone(),
            star_rating: form.star_rating.unwrap_or(product.star_rating),
        };
        self.form = Some(form);

        Some(
            if product_to_save.is_new() {
                ProductAction::CreateProduct(product_to_save)
            } else {
                ProductAction::UpdateProduct(product_to_save)
            }
            .into(),
        )
    }

    /// A saved product is only deleted if `confirm` says so. An unsaved one is just
    /// cleared.
    pub fn delete_product(&self, confirm: impl FnOnce(&Product) -> bool) -> Option<AppAction> {
        match &self.product {
            Some(product) if !product.is_new() => {
                confirm(product).then(|| ProductAction::DeleteProduct(product.id).into())
            }
            _ => Some(ProductAction::ClearCurrentProduct.into()),
        }
    }
}
