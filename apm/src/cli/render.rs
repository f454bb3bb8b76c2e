// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use crate::{PRODUCT_LIST_PAGE_TITLE, ProductListView};

/// Plain text rendering of the product list, one product per line. The selected product
/// is marked with `>`.
#[must_use]
pub fn render_product_list_view(view: &ProductListView) -> String {
    let mut acc = String::new();

    if view.list_filter.is_empty() {
        _ = writeln!(acc, "{PRODUCT_LIST_PAGE_TITLE}");
    } else {
        _ = writeln!(acc, "{PRODUCT_LIST_PAGE_TITLE} (filtered by: {})", view.list_filter);
    }

    if view.rows.is_empty() {
        _ = writeln!(acc, "  No products");
    }

    for row in &view.rows {
        let marker = if row.is_selected { '>' } else { ' ' };
        match &row.product_code {
            Some(code) => {
                _ = writeln!(
                    acc,
                    "{marker} {:>3} {:<24} {code:<10} {:.1}",
                    row.id, row.product_name, row.star_rating
                );
            }
            None => {
                _ = writeln!(
                    acc,
                    "{marker} {:>3} {:<24} {:.1}",
                    row.id, row.product_name, row.star_rating
                );
            }
        }
    }

    if !view.error.is_empty() {
        _ = writeln!(acc, "Error: {}", view.error);
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductRow;
    use pretty_assertions::assert_eq;

    fn row(id: u32, name: &str, code: Option<&str>, is_selected: bool) -> ProductRow {
        ProductRow {
            id,
            product_name: name.to_string(),
            product_code: code.map(str::to_string),
            star_rating: 4.0,
            is_selected,
        }
    }

    #[test]
    fn test_render_with_codes_and_selection() {
        let view = ProductListView {
            display_code: true,
            list_filter: String::new(),
            rows: vec![
                row(1, "Leaf Rake", Some("GDN-0011"), false),
                row(5, "Hammer", Some("TBX-0048"), true),
            ],
            error: String::new(),
        };

        let lines: Vec<String> = render_product_list_view(&view)
            .lines()
            .map(|it| it.trim_end().to_string())
            .collect();

        assert_eq!(lines, vec![
            "Products".to_string(),
            format!("    1 {:<24} GDN-0011   4.0", "Leaf Rake"),
            format!(">   5 {:<24} TBX-0048   4.0", "Hammer"),
        ]);
    }

    #[test]
    fn test_render_empty_filtered_with_error() {
        let view = ProductListView {
            display_code: false,
            list_filter: "zzz".to_string(),
            rows: vec![],
            error: "offline".to_string(),
        };
        assert_eq!(
            render_product_list_view(&view),
            "Products (filtered by: zzz)\n  No products\nError: offline\n"
        );
    }
}
