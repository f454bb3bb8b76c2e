// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use apm_redux::{Effect, SubscriptionId, dispatch_with_effects};

use crate::{
    AppAction, AppState, AppStore, Product, ProductAction, ProductListView,
    select_product_list_view,
};

pub const PRODUCT_LIST_PAGE_TITLE: &str = "Products";

#[derive(Debug)]
pub struct ProductListPage {
    pub page_title: &'static str,
    view: Rc<RefCell<Arc<ProductListView>>>,
    subscription_id: SubscriptionId,
}

impl ProductListPage {
    /// Subscribes to the list view, then asks for the products to be loaded.
    pub async fn open(store: &mut AppStore, effects: &impl Effect<AppAction>) -> Self {
        let list_view_selector = select_product_list_view();
        let view = Rc::new(RefCell::new(list_view_selector.select(store.state())));
        let view_clone = view.clone();
        let subscription_id = store.select(
            move |state: &Arc<AppState>| list_view_selector.select(state),
            move |it: &Arc<ProductListView>| *view_clone.borrow_mut() = it.clone(),
        );

        dispatch_with_effects(store, effects, ProductAction::Load.into()).await;

        Self {
            page_title: PRODUCT_LIST_PAGE_TITLE,
            view,
            subscription_id,
        }
    }

    pub fn close(self, store: &mut AppStore) { store.unsubscribe(self.subscription_id); }

    /// Latest value delivered by the subscription.
    #[must_use]
    pub fn view(&self) -> Arc<ProductListView> { self.view.borrow().clone() }

    /// The "display product code" checkbox was clicked.
    pub fn check_changed(&self, store: &mut AppStore, value: bool) {
        store.dispatch(&ProductAction::ToggleProductCode(value).into());
    }

    pub fn filter_changed(&self, store: &mut AppStore, list_filter: &str) {
        store.dispatch(&ProductAction::SetProductFilter(list_filter.to_string()).into());
    }

    pub fn new_product(&self, store: &mut AppStore) {
        store.dispatch(&ProductAction::InitializeCurrentProduct.into());
    }

    pub fn product_selected(&self, store: &mut AppStore, product: &Product) {
        store.dispatch(&ProductAction::SetCurrentProduct(product.clone()).into());
    }
}
