use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Catalog item entity - represents an item stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Non-negative price
    pub price: f64,
    /// Creation timestamp, set once when the item is first persisted
    pub created_date: DateTime<Utc>,
}

/// Public representation of an item, as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub price: f64,
}

/// DTO for updating an existing item
///
/// All fields are required: an update overwrites name, description and
/// price wholesale. The id and creation timestamp never change.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub price: f64,
}

impl Item {
    /// Create a new item from a CreateItem DTO, stamping a fresh id and
    /// the creation instant
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            created_date: Utc::now(),
        }
    }

    /// Overwrite the mutable fields from an UpdateItem DTO
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
    }

    /// Public representation of this item
    pub fn as_dto(&self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            created_date: self.created_date,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_date: item.created_date,
        }
    }
}
