//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, ProductCatalog};
use crate::repository::CategoryRepository;

pub struct CatalogService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every category as `key → {id, en}`.
    ///
    /// If the store holds two categories with the same key, the later wins.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> CatalogResult<ProductCatalog> {
        let categories = self.repository.list().await?;

        Ok(categories
            .into_iter()
            .map(|category| (category.key, category.products))
            .collect())
    }

    /// Replace the whole catalog with `payload`.
    ///
    /// The payload is parsed before anything is deleted, so a malformed body
    /// leaves the stored catalog untouched.
    #[instrument(skip(self, payload))]
    pub async fn seed_products(&self, payload: serde_json::Value) -> CatalogResult<usize> {
        warn!("Unauthenticated catalog seed requested; existing categories will be replaced");

        let catalog: ProductCatalog = serde_json::from_value(payload)
            .map_err(|e| CatalogError::MalformedPayload(e.to_string()))?;
        let categories: Vec<Category> = catalog
            .into_iter()
            .map(|(key, products)| Category::new(key, products))
            .collect();

        let inserted = self.repository.replace_all(categories).await?;
        info!(count = inserted, "Seeding Database Berhasil");
        Ok(inserted)
    }
}

impl<R: CategoryRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryProducts;
    use crate::repository::MockCategoryRepository;
    use serde_json::json;

    fn fruits() -> Category {
        Category::new(
            "fruits",
            CategoryProducts {
                id: vec!["apel".to_string()],
                en: vec!["apple".to_string()],
            },
        )
    }

    #[tokio::test]
    async fn test_list_products_reshapes_by_key() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![fruits()]));

        let service = CatalogService::new(mock_repo);
        let catalog = service.list_products().await.unwrap();

        assert_eq!(
            serde_json::to_value(&catalog).unwrap(),
            json!({ "fruits": { "id": ["apel"], "en": ["apple"] } })
        );
    }

    #[tokio::test]
    async fn test_list_products_empty_store() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![]));

        let service = CatalogService::new(mock_repo);
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_passes_parsed_categories() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_replace_all()
            .withf(|categories: &Vec<Category>| categories == &vec![fruits()])
            .times(1)
            .returning(|categories| Ok(categories.len()));

        let service = CatalogService::new(mock_repo);
        let inserted = service
            .seed_products(json!({ "fruits": { "id": ["apel"], "en": ["apple"] } }))
            .await
            .unwrap();

        assert_eq!(inserted, 1);
    }

    #[tokio::test]
    async fn test_malformed_seed_never_deletes() {
        let payloads = [
            json!(["fruits"]),
            json!({ "fruits": { "id": ["apel"] } }),
            json!({ "fruits": { "id": [1], "en": ["apple"] } }),
            json!({ "fruits": "apel" }),
        ];

        for payload in payloads {
            let mut mock_repo = MockCategoryRepository::new();
            mock_repo.expect_replace_all().never();

            let service = CatalogService::new(mock_repo);
            assert!(matches!(
                service.seed_products(payload).await,
                Err(CatalogError::MalformedPayload(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_empty_seed_clears_catalog() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_replace_all()
            .withf(|categories: &Vec<Category>| categories.is_empty())
            .times(1)
            .returning(|_| Ok(0));

        let service = CatalogService::new(mock_repo);
        assert_eq!(service.seed_products(json!({})).await.unwrap(), 0);
    }
}
