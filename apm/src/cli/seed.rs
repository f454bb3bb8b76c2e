// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashSet, path::Path};

use crate::{InMemoryProductService, NEW_PRODUCT_ID, Product};

/// Read the starting products from a JSON array of products, eg:
/// `[{"id": 1, "productName": "Leaf Rake", "productCode": "GDN-0011"}]`.
///
/// # Errors
///
/// If the file can't be read, isn't a JSON array of products, or has a product whose id
/// is [`NEW_PRODUCT_ID`] or is used more than once.
pub fn load_seed_products(path: &Path) -> Result<Vec<Product>, SeedErrorCouldNot> {
    let content = std::fs::read_to_string(path).map_err(|error| SeedErrorCouldNot::ReadFile {
        path: path.display().to_string(),
        reason: error.to_string(),
    })?;

    let products: Vec<Product> =
        serde_json::from_str(&content).map_err(|error| SeedErrorCouldNot::ParseJson {
            path: path.display().to_string(),
            reason: error.to_string(),
        })?;

    check_seed_ids(path, &products)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🌱 loaded seed products",
        path = %path.display(),
        count = %products.len()
    );

    Ok(products)
}

/// Every seeded product must already be saved, under an id of its own.
fn check_seed_ids(path: &Path, products: &[Product]) -> Result<(), SeedErrorCouldNot> {
    let mut seen_ids = HashSet::new();
    for product in products {
        if product.id == NEW_PRODUCT_ID {
            return Err(SeedErrorCouldNot::UseUnsavedId {
                path: path.display().to_string(),
                product_name: product.product_name.clone(),
            });
        }
        if !seen_ids.insert(product.id) {
            return Err(SeedErrorCouldNot::UseDuplicateId {
                path: path.display().to_string(),
                id: product.id,
            });
        }
    }
    Ok(())
}

/// Seeded from `maybe_seed_path` if given, otherwise from the demo catalogue.
///
/// # Errors
///
/// See [`load_seed_products`].
pub fn try_create_product_service(
    maybe_seed_path: Option<&Path>,
) -> Result<InMemoryProductService, SeedErrorCouldNot> {
    Ok(match maybe_seed_path {
        Some(path) => InMemoryProductService::new(load_seed_products(path)?),
        None => InMemoryProductService::default(),
    })
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum SeedErrorCouldNot {
    #[error("📂 Could not read seed file {path}: {reason}")]
    ReadFile { path: String, reason: String },

    #[error("📭 Could not parse seed file {path}: {reason}")]
    #[diagnostic(help("The seed file is a JSON array of products"))]
    ParseJson { path: String, reason: String },

    #[error("🆕 Could not use seed file {path}: product '{product_name}' has id 0")]
    #[diagnostic(help("Id 0 is reserved for products that haven't been saved yet"))]
    UseUnsavedId { path: String, product_name: String },

    #[error("👯 Could not use seed file {path}: id {id} is used more than once")]
    UseDuplicateId { path: String, id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductService;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_seed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[{"id": 3, "productName": "Shovel", "productCode": "GDN-0003", "starRating": 2.5}]"#,
        )
        .unwrap();

        let service = try_create_product_service(Some(&path)).unwrap();
        let products = service.get_products().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name, "Shovel");
        assert_eq!(products[0].description, "");
    }

    #[tokio::test]
    async fn test_no_seed_uses_demo_catalogue() {
        let service = try_create_product_service(None).unwrap();
        assert_eq!(service.get_products().await.map(|it| it.len()), Ok(5));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_seed_products(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(SeedErrorCouldNot::ReadFile { .. })));
    }

    #[test]
    fn test_unsaved_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"[{"id": 0, "productName": "Rake", "productCode": "R"}]"#)
            .unwrap();

        assert_eq!(
            load_seed_products(&path),
            Err(SeedErrorCouldNot::UseUnsavedId {
                path: path.display().to_string(),
                product_name: "Rake".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 7, "productName": "Rake", "productCode": "R"},
                {"id": 8, "productName": "Hoe", "productCode": "H"},
                {"id": 7, "productName": "Spade", "productCode": "S"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            load_seed_products(&path),
            Err(SeedErrorCouldNot::UseDuplicateId {
                path: path.display().to_string(),
                id: 7,
            })
        );
    }

    #[test]
    fn test_not_a_product_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"{"id": 1}"#).unwrap();
        assert!(matches!(
            load_seed_products(&path),
            Err(SeedErrorCouldNot::ParseJson { .. })
        ));
    }
}
