use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for catalog items.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All stored items, in storage order
    async fn get_all(&self) -> CatalogResult<Vec<Item>>;

    /// Fetch one item by id
    async fn get(&self, id: Uuid) -> CatalogResult<Option<Item>>;

    /// Persist a newly created item
    async fn create(&self, item: &Item) -> CatalogResult<()>;

    /// Overwrite the stored document of an existing item
    async fn update(&self, item: &Item) -> CatalogResult<()>;

    /// Remove an item by id
    async fn delete(&self, id: Uuid) -> CatalogResult<()>;
}
