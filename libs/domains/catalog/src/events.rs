//! Domain events describing completed catalog mutations
//!
//! One event is published per successful mutation, carrying the
//! post-mutation state (or just the identity, for deletion). The records
//! are immutable value types; they never change after construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Item;

/// Published after a new item has been persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemCreated {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// Published after an existing item has been overwritten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemUpdated {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// Published after an item has been removed from storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemDeleted {
    pub id: Uuid,
}

/// A completed catalog mutation, ready for publication
///
/// Serializes transparently as the inner record; the event kind travels
/// in the envelope's type field (see [`crate::dapr::CloudEvent`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEvent {
    Created(CatalogItemCreated),
    Updated(CatalogItemUpdated),
    Deleted(CatalogItemDeleted),
}

impl CatalogEvent {
    /// Event for a freshly persisted item
    pub fn created(item: &Item) -> Self {
        Self::Created(CatalogItemCreated {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
        })
    }

    /// Event for an overwritten item, carrying the post-update state
    pub fn updated(item: &Item) -> Self {
        Self::Updated(CatalogItemUpdated {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
        })
    }

    /// Event for a removed item
    pub fn deleted(id: Uuid) -> Self {
        Self::Deleted(CatalogItemDeleted { id })
    }

    /// Event type string, used as the envelope's type field and as the
    /// routing subject for downstream consumers
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created(_) => "catalog-item.created",
            Self::Updated(_) => "catalog-item.updated",
            Self::Deleted(_) => "catalog-item.deleted",
        }
    }

    /// Identifier of the item this event describes
    pub fn item_id(&self) -> Uuid {
        match self {
            Self::Created(e) => e.id,
            Self::Updated(e) => e.id,
            Self::Deleted(e) => e.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateItem;

    fn item() -> Item {
        Item::new(CreateItem {
            name: "Sword".to_string(),
            description: "A sharp blade".to_string(),
            price: 100.0,
        })
    }

    #[test]
    fn test_created_event_carries_post_mutation_state() {
        let item = item();
        let event = CatalogEvent::created(&item);

        assert_eq!(event.event_type(), "catalog-item.created");
        assert_eq!(event.item_id(), item.id);
        assert_eq!(
            event,
            CatalogEvent::Created(CatalogItemCreated {
                id: item.id,
                name: "Sword".to_string(),
                description: "A sharp blade".to_string(),
            })
        );
    }

    #[test]
    fn test_deleted_event_carries_only_identity() {
        let id = Uuid::now_v7();
        let event = CatalogEvent::deleted(id);

        assert_eq!(event.event_type(), "catalog-item.deleted");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({ "id": id }));
    }

    #[test]
    fn test_events_serialize_without_enum_tag() {
        let item = item();
        let json = serde_json::to_value(CatalogEvent::updated(&item)).unwrap();

        assert_eq!(json["name"], "Sword");
        assert!(json.get("Updated").is_none());
    }
}
