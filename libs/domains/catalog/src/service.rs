//! Item service - business logic layer
//!
//! Each operation is a single linear sequence: fetch/validate, mutate
//! storage, publish the matching event, respond. The service holds no
//! state between calls; both collaborators are injected at construction.

use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::events::CatalogEvent;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::publisher::EventPublisher;
use crate::repository::ItemRepository;

/// Item service orchestrating storage and event publication
pub struct ItemService<R: ItemRepository, P: EventPublisher> {
    repository: Arc<R>,
    publisher: Arc<P>,
}

impl<R: ItemRepository, P: EventPublisher> ItemService<R, P> {
    /// Create a new ItemService with the given collaborators
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            repository: Arc::new(repository),
            publisher: Arc::new(publisher),
        }
    }

    /// List all items, in storage order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> CatalogResult<Vec<Item>> {
        self.repository.get_all().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> CatalogResult<Item> {
        self.repository
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Create a new item and publish `catalog-item.created`
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> CatalogResult<Item> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let item = Item::new(input);
        self.repository.create(&item).await?;

        self.emit(CatalogEvent::created(&item)).await;

        Ok(item)
    }

    /// Overwrite an existing item and publish `catalog-item.updated`
    ///
    /// The id and creation timestamp are never touched. If no item has
    /// the given id, no event is published.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> CatalogResult<()> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let mut item = self
            .repository
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        item.apply_update(input);
        self.repository.update(&item).await?;

        self.emit(CatalogEvent::updated(&item)).await;

        Ok(())
    }

    /// Delete an item and publish `catalog-item.deleted`
    ///
    /// If no item has the given id, no event is published.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> CatalogResult<()> {
        let item = self
            .repository
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        self.repository.delete(item.id).await?;

        self.emit(CatalogEvent::deleted(item.id)).await;

        Ok(())
    }

    /// Publish an event for a write that has already committed.
    ///
    /// A failed publish is logged and swallowed: the mutation stands and
    /// the caller keeps its success response. There is no atomicity
    /// between the persist and the publish.
    async fn emit(&self, event: CatalogEvent) {
        if let Err(error) = self.publisher.publish(&event).await {
            warn!(
                %error,
                event_type = event.event_type(),
                item_id = %event.item_id(),
                "Failed to publish catalog event"
            );
        }
    }
}

impl<R: ItemRepository, P: EventPublisher> Clone for ItemService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            publisher: Arc::clone(&self.publisher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::MockEventPublisher;
    use crate::repository::MockItemRepository;

    fn sword() -> CreateItem {
        CreateItem {
            name: "Sword".to_string(),
            description: "A sharp blade".to_string(),
            price: 100.0,
        }
    }

    fn sharper() -> UpdateItem {
        UpdateItem {
            name: "Sword+1".to_string(),
            description: "A sharper blade".to_string(),
            price: 150.0,
        }
    }

    #[tokio::test]
    async fn test_create_persists_then_publishes_created() {
        let mut repository = MockItemRepository::new();
        repository.expect_create().times(1).returning(|_| Ok(()));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .withf(|event| {
                matches!(event, CatalogEvent::Created(e) if e.name == "Sword"
                    && e.description == "A sharp blade")
            })
            .returning(|_| Ok(()));

        let service = ItemService::new(repository, publisher);
        let item = service.create_item(sword()).await.unwrap();

        assert_eq!(item.name, "Sword");
        assert_eq!(item.price, 100.0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_persisting() {
        let mut repository = MockItemRepository::new();
        repository.expect_create().times(0);

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().times(0);

        let service = ItemService::new(repository, publisher);
        let result = service
            .create_item(CreateItem {
                price: -1.0,
                ..sword()
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_succeeds_even_if_publish_fails() {
        let mut repository = MockItemRepository::new();
        repository.expect_create().times(1).returning(|_| Ok(()));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(CatalogError::Publish("sidecar down".to_string())));

        let service = ItemService::new(repository, publisher);
        assert!(service.create_item(sword()).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let mut repository = MockItemRepository::new();
        repository.expect_get().returning(|_| Ok(None));

        let service = ItemService::new(repository, MockEventPublisher::new());
        let id = Uuid::now_v7();

        assert!(matches!(
            service.get_item(id).await,
            Err(CatalogError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_update_overwrites_and_publishes_updated() {
        let existing = Item::new(sword());
        let id = existing.id;
        let created_date = existing.created_date;

        let mut repository = MockItemRepository::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .times(1)
            .withf(move |item| {
                item.id == id
                    && item.created_date == created_date
                    && item.name == "Sword+1"
                    && item.price == 150.0
            })
            .returning(|_| Ok(()));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .withf(move |event| {
                matches!(event, CatalogEvent::Updated(e) if e.id == id && e.name == "Sword+1")
            })
            .returning(|_| Ok(()));

        let service = ItemService::new(repository, publisher);
        service.update_item(id, sharper()).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_item_publishes_nothing() {
        let mut repository = MockItemRepository::new();
        repository.expect_get().returning(|_| Ok(None));
        repository.expect_update().times(0);

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().times(0);

        let service = ItemService::new(repository, publisher);
        let result = service.update_item(Uuid::now_v7(), sharper()).await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_and_publishes_deleted() {
        let existing = Item::new(sword());
        let id = existing.id;

        let mut repository = MockItemRepository::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_delete()
            .times(1)
            .withf(move |deleted| *deleted == id)
            .returning(|_| Ok(()));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .withf(move |event| matches!(event, CatalogEvent::Deleted(e) if e.id == id))
            .returning(|_| Ok(()));

        let service = ItemService::new(repository, publisher);
        service.delete_item(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_item_publishes_nothing() {
        let mut repository = MockItemRepository::new();
        repository.expect_get().returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().times(0);

        let service = ItemService::new(repository, publisher);
        let result = service.delete_item(Uuid::now_v7()).await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }
}
