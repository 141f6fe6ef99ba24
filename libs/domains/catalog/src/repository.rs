use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Category;

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All stored categories, in storage order.
    async fn list(&self) -> CatalogResult<Vec<Category>>;

    /// Delete every category, then insert `categories`.
    ///
    /// Not atomic: a failure after the delete leaves the collection empty or
    /// partially filled. Returns the number of inserted categories.
    async fn replace_all(&self, categories: Vec<Category>) -> CatalogResult<usize>;
}
