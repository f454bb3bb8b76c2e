// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Selectors for the product slice.
//!
//! The plain functions are cheap projections. The `select_*` functions build
//! [`MemoizedSelector`]s for derived values; each consumer owns its own instance, so
//! their caches don't fight each other.

use std::sync::Arc;

use apm_redux::{ByAddress, MemoizedSelector, create_selector};

use crate::{AppState, NEW_PRODUCT_ID, Product, ProductState};

#[must_use]
pub fn get_product_feature_state(state: &AppState) -> &Arc<ProductState> { &state.products }

#[must_use]
pub fn get_show_product_code(state: &AppState) -> bool {
    get_product_feature_state(state).show_product_code
}

#[must_use]
pub fn get_current_product_id(state: &AppState) -> Option<u32> {
    get_product_feature_state(state).current_product_id
}

#[must_use]
pub fn get_products(state: &AppState) -> &[Product] {
    &get_product_feature_state(state).products
}

#[must_use]
pub fn get_list_filter(state: &AppState) -> &str {
    &get_product_feature_state(state).list_filter
}

#[must_use]
pub fn get_error(state: &AppState) -> &str { &get_product_feature_state(state).error }

/// Resolve a current product id against the product list.
fn find_current_product(current_product_id: Option<u32>, products: &[Product]) -> Option<Product> {
    match current_product_id {
        None => None,
        Some(NEW_PRODUCT_ID) => Some(Product::new_unsaved()),
        Some(id) => products.iter().find(|it| it.id == id).cloned(),
    }
}

/// Case insensitive match of `list_filter` against the product name. An empty filter
/// keeps every product.
fn filter_products(products: &[Product], list_filter: &str) -> Vec<Product> {
    let list_filter = list_filter.trim().to_lowercase();
    products
        .iter()
        .filter(|it| {
            list_filter.is_empty() || it.product_name.to_lowercase().contains(&list_filter)
        })
        .cloned()
        .collect()
}

pub type CurrentProductSelector =
    MemoizedSelector<AppState, (Option<u32>, ByAddress<ProductState>), Option<Product>>;

/// The selected product. A new, unsaved product when the current id is
/// [`NEW_PRODUCT_ID`], and `None` when nothing is selected or the id is gone from the
/// list.
#[must_use]
pub fn select_current_product() -> CurrentProductSelector {
    create_selector(
        |state: &AppState| {
            (
                get_current_product_id(state),
                ByAddress(get_product_feature_state(state).clone()),
            )
        },
        |(current_product_id, product_state)| {
            find_current_product(*current_product_id, &product_state.products)
        },
    )
}

pub type FilteredProductsSelector =
    MemoizedSelector<AppState, (ByAddress<ProductState>, String), Vec<Product>>;

#[must_use]
pub fn select_filtered_products() -> FilteredProductsSelector {
    create_selector(
        |state: &AppState| {
            (
                ByAddress(get_product_feature_state(state).clone()),
                get_list_filter(state).to_string(),
            )
        },
        |(product_state, list_filter)| filter_products(&product_state.products, list_filter),
    )
}

/// One line of the product list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: u32,
    pub product_name: String,
    /// `None` when the product code column is hidden.
    pub product_code: Option<String>,
    pub star_rating: f32,
    pub is_selected: bool,
}

/// Everything the product list page needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListView {
    pub display_code: bool,
    pub list_filter: String,
    pub rows: Vec<ProductRow>,
    pub error: String,
}

type ProductListViewInput = (ByAddress<Vec<Product>>, bool, Option<u32>, String, String);

pub type ProductListViewSelector =
    MemoizedSelector<AppState, ProductListViewInput, ProductListView>;

/// Combines the filtered list, the "show product code" toggle, and the current product
/// id into display rows.
#[must_use]
pub fn select_product_list_view() -> ProductListViewSelector {
    let filtered_products = select_filtered_products();
    create_selector(
        move |state: &AppState| {
            (
                ByAddress(filtered_products.select(state)),
                get_show_product_code(state),
                get_current_product_id(state),
                get_list_filter(state).to_string(),
                get_error(state).to_string(),
            )
        },
        |(products, display_code, current_product_id, list_filter, error)| ProductListView {
            display_code: *display_code,
            list_filter: list_filter.clone(),
            rows: products
                .iter()
                .map(|it| ProductRow {
                    id: it.id,
                    product_name: it.product_name.clone(),
                    product_code: display_code.then(|| it.product_code.clone()),
                    star_rating: it.star_rating,
                    is_selected: *current_product_id == Some(it.id),
                })
                .collect(),
            error: error.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppAction, ProductAction, UserAction, app_reducer, demo_catalogue};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn reduce(state: &Arc<AppState>, action: impl Into<AppAction>) -> Arc<AppState> {
        app_reducer(Some(state), &action.into())
    }

    fn loaded_state() -> Arc<AppState> {
        let state = app_reducer(None, &AppAction::Init);
        reduce(&state, ProductAction::LoadSuccess(demo_catalogue()))
    }

    #[test]
    fn test_plain_selectors() {
        let state = reduce(&loaded_state(), ProductAction::LoadFail("boom".into()));
        assert!(get_show_product_code(&state));
        assert_eq!(get_current_product_id(&state), None);
        assert!(get_products(&state).is_empty());
        assert_eq!(get_error(&state), "boom");
        assert_eq!(get_list_filter(&state), "");
    }

    #[test]
    fn test_current_product_cases() {
        let selector = select_current_product();
        let state = loaded_state();
        assert_eq!(*selector.select(&state), None);

        let state = reduce(&state, ProductAction::InitializeCurrentProduct);
        assert_eq!(*selector.select(&state), Some(Product::new_unsaved()));

        let saw = demo_catalogue().into_iter().find(|it| it.id == 8);
        let state = reduce(&state, ProductAction::SetCurrentProduct(saw.clone().unwrap()));
        assert_eq!(*selector.select(&state), saw);

        // Selected id no longer in the list.
        let state = reduce(&state, ProductAction::LoadSuccess(vec![]));
        assert_eq!(*selector.select(&state), None);
    }

    #[test]
    fn test_current_product_is_stable_across_other_slices() {
        let selector = select_current_product();
        let state = reduce(&loaded_state(), ProductAction::InitializeCurrentProduct);
        let first = selector.select(&state);

        let state = reduce(&state, UserAction::ToggleUserNameMask(true));
        let second = selector.select(&state);

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test_case("", 5 ; "empty filter keeps everything")]
    #[test_case("  ", 5 ; "blank filter keeps everything")]
    #[test_case("GARDEN", 1 ; "case insensitive")]
    #[test_case("er", 2 ; "substring")]
    #[test_case("  saw ", 1 ; "surrounding whitespace is ignored")]
    #[test_case("wrench", 0 ; "no match")]
    fn test_filtered_products(list_filter: &str, expected_count: usize) {
        let selector = select_filtered_products();
        let state = reduce(
            &loaded_state(),
            ProductAction::SetProductFilter(list_filter.into()),
        );
        assert_eq!(selector.select(&state).len(), expected_count);
    }

    #[test]
    fn test_list_view_hides_code_column() {
        let selector = select_product_list_view();
        let state = loaded_state();

        let view = selector.select(&state);
        assert!(view.display_code);
        assert_eq!(view.rows[0].product_code.as_deref(), Some("GDN-0011"));

        let state = reduce(&state, ProductAction::ToggleProductCode(false));
        let view = selector.select(&state);
        assert!(!view.display_code);
        assert!(view.rows.iter().all(|it| it.product_code.is_none()));
    }

    #[test]
    fn test_list_view_marks_selection() {
        let selector = select_product_list_view();
        let hammer = demo_catalogue().into_iter().find(|it| it.id == 5).unwrap();
        let state = reduce(&loaded_state(), ProductAction::SetCurrentProduct(hammer));

        let selected: Vec<u32> = selector
            .select(&state)
            .rows
            .iter()
            .filter(|it| it.is_selected)
            .map(|it| it.id)
            .collect();
        assert_eq!(selected, vec![5]);
    }

    #[test]
    fn test_list_view_is_stable_when_nothing_relevant_changes() {
        let selector = select_product_list_view();
        let state = loaded_state();
        let first = selector.select(&state);
        let state = reduce(&state, UserAction::ToggleUserNameMask(true));
        let second = selector.select(&state);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
