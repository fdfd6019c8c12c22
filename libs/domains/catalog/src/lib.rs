//! Catalog Domain
//!
//! This module provides a complete domain implementation for managing
//! catalog items using MongoDB, publishing a domain event after every
//! successful mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, persist-then-publish sequencing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────┬───────────────────┐
//! │ Repository          │ Event publisher   │
//! │ (trait + MongoDB)   │ (trait + Dapr)    │
//! └──────┬──────────────┴───────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, domain events
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     dapr::{DaprClient, DaprEventPublisher},
//!     handlers,
//!     mongodb::MongoItemRepository,
//!     service::ItemService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! // Create the collaborators and the service
//! let repository = MongoItemRepository::new(db);
//! let publisher = DaprEventPublisher::new(DaprClient::from_env(), "catalog-items", "catalog-api");
//! let service = ItemService::new(repository, publisher);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod dapr;
pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod publisher;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use dapr::{CloudEvent, DaprClient, DaprEventPublisher};
pub use error::{CatalogError, CatalogResult};
pub use events::{CatalogEvent, CatalogItemCreated, CatalogItemDeleted, CatalogItemUpdated};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemDto, UpdateItem};
pub use mongodb::MongoItemRepository;
pub use publisher::EventPublisher;
pub use repository::ItemRepository;
pub use service::ItemService;
