//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository over the `items` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("catalog");
    /// let repo = MongoItemRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Item>("items");
        Self { collection }
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Item>(collection_name);
        Self { collection }
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> CatalogResult<Vec<Item>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> CatalogResult<Option<Item>> {
        let item = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn create(&self, item: &Item) -> CatalogResult<()> {
        self.collection.insert_one(item).await?;

        tracing::info!(item_id = %item.id, "Item persisted");
        Ok(())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn update(&self, item: &Item) -> CatalogResult<()> {
        self.collection
            .replace_one(Self::id_filter(item.id), item)
            .await?;

        tracing::info!(item_id = %item.id, "Item updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}
