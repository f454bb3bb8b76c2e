// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use apm_redux::{Effect, dispatch_with_effects};
use miette::IntoDiagnostic;

use crate::{
    AppAction, AppStore, InMemoryAuthService, LoginForm, LoginPage, ProductEditPage,
    ProductForm, ProductListPage, ValidationReport, get_products, render_product_list_view,
};

fn required_login_fields(form: &LoginForm) -> ValidationReport {
    let mut report = ValidationReport::valid();
    if form.user_name.trim().is_empty() {
        report = report.with_message("userName", "Please enter your user name.");
    }
    if form.password.trim().is_empty() {
        report = report.with_message("password", "Please enter your password.");
    }
    report
}

fn product_form_rules(form: &ProductForm) -> ValidationReport {
    let mut report = ValidationReport::valid();
    let name_length = form.product_name.trim().chars().count();
    if !(3..=50).contains(&name_length) {
        report = report.with_message(
            "productName",
            "Product name must be between 3 and 50 characters.",
        );
    }
    if form.product_code.trim().is_empty() {
        report = report.with_message("productCode", "Product code is required.");
    }
    if let Some(star_rating) = form.star_rating
        && !(1.0..=5.0).contains(&star_rating)
    {
        report = report.with_message(
            "starRating",
            "Rate the product between 1 (lowest) and 5 (highest).",
        );
    }
    report
}

/// Dispatch the result of a page interaction, if there is one.
async fn dispatch_intent(
    store: &mut AppStore,
    effects: &impl Effect<AppAction>,
    maybe_action: Option<AppAction>,
) {
    if let Some(action) = maybe_action {
        dispatch_with_effects(store, effects, action).await;
    }
}

/// Scripted walkthrough: log in, browse and filter the list, edit a product, add one,
/// and delete it again. Writes what each page shows to `out`.
///
/// # Errors
///
/// If `out` can't be written to.
pub async fn run_demo(
    store: &mut AppStore,
    effects: &impl Effect<AppAction>,
    out: &mut impl Write,
) -> miette::Result<()> {
    // Log in.
    let mut login_page = LoginPage::open(store);
    login_page.check_changed(store, true);
    writeln!(
        out,
        "🔑 {} (mask user name: {})",
        login_page.page_title,
        login_page.mask_user_name()
    )
    .into_diagnostic()?;

    let mut auth_service = InMemoryAuthService::default();
    login_page.login(&LoginForm::default(), &required_login_fields, &mut auth_service);
    if let Some(error_message) = &login_page.error_message {
        writeln!(out, "   {error_message}").into_diagnostic()?;
    }

    let form = LoginForm {
        user_name: "admin".to_string(),
        password: "demo".to_string(),
    };
    if let Some(navigation) = login_page.login(&form, &required_login_fields, &mut auth_service)
    {
        writeln!(out, "   Navigating to {navigation}").into_diagnostic()?;
    }
    login_page.close(store);

    // Browse.
    let list_page = ProductListPage::open(store, effects).await;
    write!(out, "\n{}", render_product_list_view(&list_page.view())).into_diagnostic()?;

    list_page.filter_changed(store, "er");
    list_page.check_changed(store, false);
    write!(out, "\n{}", render_product_list_view(&list_page.view())).into_diagnostic()?;

    list_page.filter_changed(store, "");
    list_page.check_changed(store, true);
    let maybe_hammer = get_products(store.state()).iter().find(|it| it.id == 5).cloned();
    if let Some(hammer) = maybe_hammer {
        list_page.product_selected(store, &hammer);
    }

    // Edit.
    let mut edit_page = ProductEditPage::new();
    edit_page.refresh(store);
    writeln!(out, "\n✏️ {}", edit_page.page_title).into_diagnostic()?;

    if let Some(form) = edit_page.form.clone() {
        let too_short = form.clone().edit(|it| it.product_name = "H".to_string());
        edit_page.save_product(too_short, &product_form_rules);
        if let Some(error_message) = &edit_page.error_message {
            writeln!(out, "   {error_message}").into_diagnostic()?;
        }

        let renamed = form.edit(|it| it.product_name = "Claw Hammer".to_string());
        let maybe_action = edit_page.save_product(renamed, &product_form_rules);
        dispatch_intent(store, effects, maybe_action).await;
        edit_page.refresh(store);
        writeln!(out, "   Saved: {}", edit_page.page_title).into_diagnostic()?;
    }

    // Add.
    list_page.new_product(store);
    edit_page.refresh(store);
    writeln!(out, "\n🆕 {}", edit_page.page_title).into_diagnostic()?;

    if let Some(form) = edit_page.form.clone() {
        let shovel = form.edit(|it| {
            it.product_name = "Shovel".to_string();
            it.product_code = "GDN-0100".to_string();
            it.star_rating = Some(3.9);
        });
        let maybe_action = edit_page.save_product(shovel, &product_form_rules);
        dispatch_intent(store, effects, maybe_action).await;
        edit_page.refresh(store);
        writeln!(out, "   Saved: {}", edit_page.page_title).into_diagnostic()?;
    }
    write!(out, "\n{}", render_product_list_view(&list_page.view())).into_diagnostic()?;

    // Delete.
    let maybe_action = edit_page.delete_product(|_| true);
    dispatch_intent(store, effects, maybe_action).await;
    write!(out, "\n🗑️ Deleted\n{}", render_product_list_view(&list_page.view()))
        .into_diagnostic()?;

    list_page.close(store);

    writeln!(
        out,
        "\n🏁 Store version {}, {} states in history",
        store.version(),
        store.history().len()
    )
    .into_diagnostic()?;

    Ok(())
}
