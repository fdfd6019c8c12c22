use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::events::CatalogEvent;

/// Outbound event collaborator
///
/// Implementations deliver a domain event to the message broker. Delivery
/// semantics beyond "handed to the broker client" belong to that client,
/// not to this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &CatalogEvent) -> CatalogResult<()>;
}
