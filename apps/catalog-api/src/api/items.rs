//! Items API routes
//!
//! This module wires the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{handlers, DaprClient, DaprEventPublisher, ItemService, MongoItemRepository};

use crate::state::AppState;

/// Topic the catalog events are published on
const EVENTS_TOPIC: &str = "catalog-items";

/// Create the items router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoItemRepository::new(state.db.clone());

    // Create the Dapr-backed event publisher
    let dapr = DaprClient::from_env();
    let publisher = DaprEventPublisher::new(dapr, EVENTS_TOPIC, state.config.app.name);

    // Create the service
    let service = ItemService::new(repository, publisher);

    // Return the domain's router
    handlers::router(service)
}
