//! Dapr integration for event publishing
//!
//! Catalog events leave the service through the Dapr sidecar's pub/sub
//! HTTP endpoint, wrapped in a CloudEvents 1.0 envelope.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::events::CatalogEvent;
use crate::publisher::EventPublisher;

/// CloudEvents 1.0 envelope for pub/sub
#[derive(Debug, Clone, Serialize)]
pub struct CloudEvent<T> {
    /// CloudEvent spec version
    pub specversion: String,

    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event source
    pub source: String,

    /// Unique event ID
    pub id: String,

    /// Timestamp
    pub time: DateTime<Utc>,

    /// Content type
    pub datacontenttype: String,

    /// Event data
    pub data: T,
}

impl<T: Serialize> CloudEvent<T> {
    /// Create a new CloudEvent wrapper
    pub fn new(event_type: impl Into<String>, source: impl Into<String>, data: T) -> Self {
        Self {
            specversion: "1.0".to_string(),
            event_type: event_type.into(),
            source: source.into(),
            id: Uuid::now_v7().to_string(),
            time: Utc::now(),
            datacontenttype: "application/json".to_string(),
            data,
        }
    }
}

/// Dapr pub/sub client for event distribution
#[derive(Clone)]
pub struct DaprClient {
    client: reqwest::Client,
    dapr_http_port: u16,
    pubsub_name: String,
}

impl DaprClient {
    /// Create a new Dapr client
    pub fn new(dapr_http_port: u16, pubsub_name: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            dapr_http_port,
            pubsub_name: pubsub_name.into(),
        }
    }

    /// Create from environment variables
    ///
    /// - `DAPR_HTTP_PORT` (default: 3500)
    /// - `DAPR_PUBSUB_NAME` (default: "catalog-pubsub")
    pub fn from_env() -> Self {
        let port = std::env::var("DAPR_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3500);

        let pubsub_name =
            std::env::var("DAPR_PUBSUB_NAME").unwrap_or_else(|_| "catalog-pubsub".to_string());

        Self::new(port, pubsub_name)
    }

    /// Get the Dapr sidecar base URL
    fn base_url(&self) -> String {
        format!("http://localhost:{}", self.dapr_http_port)
    }

    /// Publish a payload to a topic
    #[instrument(skip(self, data), fields(topic = %topic))]
    pub async fn publish<T: Serialize>(&self, topic: &str, data: &T) -> CatalogResult<()> {
        let url = format!(
            "{}/v1.0/publish/{}/{}",
            self.base_url(),
            self.pubsub_name,
            topic
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(data)
            .send()
            .await
            .map_err(|e| CatalogError::Publish(format!("Failed to publish to {}: {}", topic, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Dapr publish failed");
            return Err(CatalogError::Publish(format!(
                "Publish failed with status {}: {}",
                status, body
            )));
        }

        info!(topic = %topic, "Event published to Dapr");
        Ok(())
    }

    /// Health check for the Dapr sidecar
    pub async fn health(&self) -> CatalogResult<bool> {
        let url = format!("{}/v1.0/healthz", self.base_url());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Publish(format!("Health check failed: {}", e)))?;

        Ok(response.status().is_success())
    }
}

/// Publishes catalog events as CloudEvents on a fixed topic
pub struct DaprEventPublisher {
    /// The underlying Dapr client
    pub dapr: DaprClient,
    topic: String,
    source: String,
}

impl DaprEventPublisher {
    /// Create a new event publisher
    pub fn new(dapr: DaprClient, topic: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            dapr,
            topic: topic.into(),
            source: source.into(),
        }
    }
}

#[async_trait]
impl EventPublisher for DaprEventPublisher {
    #[instrument(
        skip(self, event),
        fields(event_type = %event.event_type(), item_id = %event.item_id())
    )]
    async fn publish(&self, event: &CatalogEvent) -> CatalogResult<()> {
        let envelope = CloudEvent::new(event.event_type(), self.source.clone(), event);
        self.dapr.publish(&self.topic, &envelope).await?;

        info!(item_id = %event.item_id(), "Catalog event published via Dapr");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CatalogEvent;

    #[test]
    fn test_dapr_client_base_url() {
        let client = DaprClient::new(3500, "test-pubsub");
        assert_eq!(client.base_url(), "http://localhost:3500");
    }

    #[test]
    fn test_cloud_event_envelope() {
        let event = CatalogEvent::deleted(Uuid::now_v7());
        let envelope = CloudEvent::new(event.event_type(), "catalog-api", &event);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["specversion"], "1.0");
        assert_eq!(json["type"], "catalog-item.deleted");
        assert_eq!(json["source"], "catalog-api");
        assert_eq!(json["datacontenttype"], "application/json");
        assert!(json["data"].get("id").is_some());
    }
}
