// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::RwLock;

use crate::{NEW_PRODUCT_ID, Product, demo_catalogue};

/// Where products come from. The store never calls this directly; only
/// [`crate::ProductEffects`] does, and it reports back with actions.
pub trait ProductService {
    fn get_products(&self) -> impl Future<Output = Result<Vec<Product>, ProductServiceError>>;

    /// A product whose id is [`NEW_PRODUCT_ID`] is given the next free id.
    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, ProductServiceError>>;

    fn update_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, ProductServiceError>>;

    /// Returns the id of the deleted product.
    fn delete_product(&self, id: u32) -> impl Future<Output = Result<u32, ProductServiceError>>;
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum ProductServiceError {
    #[error("🔍 Product {id} was not found")]
    NotFound { id: u32 },

    #[error("👯 Product {id} already exists")]
    AlreadyExists { id: u32 },

    #[error("🔢 No product ids left after {last_id}")]
    IdsExhausted { last_id: u32 },
}

/// Process local product service. Nothing is persisted, the data is gone when this is
/// dropped.
#[derive(Debug)]
pub struct InMemoryProductService {
    products: RwLock<Vec<Product>>,
}

impl Default for InMemoryProductService {
    fn default() -> Self { Self::new(demo_catalogue()) }
}

impl InMemoryProductService {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

impl ProductService for InMemoryProductService {
    async fn get_products(&self) -> Result<Vec<Product>, ProductServiceError> {
        Ok(self.products.read().await.clone())
    }

    async fn create_product(&self, product: Product) -> Result<Product, ProductServiceError> {
        let mut products = self.products.write().await;

        let product = if product.id == NEW_PRODUCT_ID {
            let last_id = products.iter().map(|it| it.id).max().unwrap_or(NEW_PRODUCT_ID);
            let next_id = last_id
                .checked_add(1)
                .ok_or(ProductServiceError::IdsExhausted { last_id })?;
            Product {
                id: next_id,
                ..product
            }
        } else if products.iter().any(|it| it.id == product.id) {
            return Err(ProductServiceError::AlreadyExists { id: product.id });
        } else {
            product
        };

        products.push(product.clone());

        // % is Display, ? is Debug.
        tracing::debug!(message = "🆕 product created", product = ?product);

        Ok(product)
    }

    async fn update_product(&self, product: Product) -> Result<Product, ProductServiceError> {
        let mut products = self.products.write().await;
        let Some(existing) = products.iter_mut().find(|it| it.id == product.id) else {
            return Err(ProductServiceError::NotFound { id: product.id });
        };
        existing.clone_from(&product);

        // % is Display, ? is Debug.
        tracing::debug!(message = "✏️ product updated", product = ?product);

        Ok(product)
    }

    async fn delete_product(&self, id: u32) -> Result<u32, ProductServiceError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|it| it.id != id);
        if products.len() == before {
            return Err(ProductServiceError::NotFound { id });
        }

        // % is Display, ? is Debug.
        tracing::debug!(message = "🗑️ product deleted", id = %id);

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let service = InMemoryProductService::default();
        let created = service
            .create_product(Product {
                product_name: "Shovel".into(),
                ..Product::new_unsaved()
            })
            .await;

        assert_eq!(created.map(|it| it.id), Ok(11));
        assert_eq!(service.get_products().await.map(|it| it.len()), Ok(6));
    }

    #[tokio::test]
    async fn test_create_in_empty_service_starts_at_one() {
        let service = InMemoryProductService::new(vec![]);
        let created = service.create_product(Product::new_unsaved()).await;
        assert_eq!(created.map(|it| it.id), Ok(1));
    }

    #[tokio::test]
    async fn test_create_after_largest_id_fails() {
        let service = InMemoryProductService::new(vec![Product {
            id: u32::MAX,
            ..Product::new_unsaved()
        }]);

        assert_eq!(
            service.create_product(Product::new_unsaved()).await,
            Err(ProductServiceError::IdsExhausted { last_id: u32::MAX })
        );
        assert_eq!(service.get_products().await.map(|it| it.len()), Ok(1));
    }

    #[tokio::test]
    async fn test_create_with_taken_id() {
        let service = InMemoryProductService::default();
        let taken = Product {
            id: 5,
            ..Product::new_unsaved()
        };
        assert_eq!(
            service.create_product(taken).await,
            Err(ProductServiceError::AlreadyExists { id: 5 })
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let service = InMemoryProductService::default();
        let ghost = Product {
            id: 99,
            ..Product::new_unsaved()
        };
        assert_eq!(
            service.update_product(ghost).await,
            Err(ProductServiceError::NotFound { id: 99 })
        );
        assert_eq!(
            service.delete_product(99).await,
            Err(ProductServiceError::NotFound { id: 99 })
        );
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let service = InMemoryProductService::default();
        let mut saw = service
            .get_products()
            .await
            .unwrap()
            .into_iter()
            .find(|it| it.id == 8)
            .unwrap();
        saw.star_rating = 5.0;

        assert_eq!(service.update_product(saw.clone()).await, Ok(saw));
        assert_eq!(service.delete_product(8).await, Ok(8));

        let ids: Vec<u32> = service
            .get_products()
            .await
            .unwrap()
            .iter()
            .map(|it| it.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 5, 10]);
    }
}
