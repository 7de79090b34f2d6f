//! Catalog event fan-out to connected WebSocket clients.
//!
//! [`EventBroadcaster`] subscribes to the event bus and forwards every
//! catalog event, serialized as a text frame, to every currently connected
//! client.

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;

use tienda_events::CatalogEvent;

use crate::ws::WsManager;

/// Forwards catalog events to all connected WebSocket clients.
///
/// Fire-and-forget: clients that connect after an event was published never
/// see it, and no delivery tracking is kept.
pub struct EventBroadcaster {
    ws_manager: Arc<WsManager>,
}

impl EventBroadcaster {
    /// Create a broadcaster over the given connection manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main fan-out loop.
    ///
    /// Consumes events from `receiver` until the channel closes (i.e. the
    /// [`EventBus`](tienda_events::EventBus) is dropped during shutdown).
    pub async fn run(self, mut receiver: broadcast::Receiver<CatalogEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.fan_out(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event broadcaster lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, broadcaster shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and push it to every connection.
    async fn fan_out(&self, event: &CatalogEvent) {
        match serde_json::to_string(event) {
            Ok(body) => {
                self.ws_manager.broadcast(Message::Text(body.into())).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize catalog event");
            }
        }
    }
}
