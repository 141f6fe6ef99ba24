//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, Database, IndexModel, bson::doc, options::IndexOptions};
use tracing::{debug, instrument};

use crate::error::CatalogResult;
use crate::models::{Category, CategoryDocument};
use crate::repository::CategoryRepository;

pub const COLLECTION: &str = "categories";

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    collection: Collection<CategoryDocument>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<CategoryDocument>(collection_name);
        Self { collection }
    }

    /// Create the unique index on `key`.
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_key_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> CatalogResult<Vec<Category>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<CategoryDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, categories), fields(count = categories.len()))]
    async fn replace_all(&self, categories: Vec<Category>) -> CatalogResult<usize> {
        let deleted = self.collection.delete_many(doc! {}).await?;
        debug!(deleted = deleted.deleted_count, "Cleared categories");

        // insert_many rejects an empty batch.
        if categories.is_empty() {
            return Ok(0);
        }

        let documents: Vec<CategoryDocument> =
            categories.iter().map(CategoryDocument::from).collect();
        let result = self.collection.insert_many(documents).await?;

        Ok(result.inserted_ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryProducts;
    use test_utils::TestMongo;

    fn category(key: &str, id: &str, en: &str) -> Category {
        Category::new(
            key,
            CategoryProducts {
                id: vec![id.to_string()],
                en: vec![en.to_string()],
            },
        )
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_replace_all_then_list() {
        let mongo = TestMongo::new().await;
        let repo = MongoCategoryRepository::new(&mongo.database());
        repo.init_indexes().await.unwrap();

        repo.replace_all(vec![category("fruits", "apel", "apple")])
            .await
            .unwrap();
        let inserted = repo
            .replace_all(vec![category("veg", "bayam", "spinach")])
            .await
            .unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(repo.list().await.unwrap(), vec![category("veg", "bayam", "spinach")]);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_replace_with_nothing_empties_collection() {
        let mongo = TestMongo::new().await;
        let repo = MongoCategoryRepository::new(&mongo.database());

        repo.replace_all(vec![category("fruits", "apel", "apple")])
            .await
            .unwrap();
        assert_eq!(repo.replace_all(vec![]).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unique_index_rejects_duplicate_keys() {
        let mongo = TestMongo::new().await;
        let repo = MongoCategoryRepository::new(&mongo.database());
        repo.init_indexes().await.unwrap();

        let result = repo
            .replace_all(vec![
                category("fruits", "apel", "apple"),
                category("fruits", "jeruk", "orange"),
            ])
            .await;
        assert!(result.is_err());
    }
}
