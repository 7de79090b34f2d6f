use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;

use tienda_core::product::NewProduct;
use tienda_events::CatalogEvent;

use crate::state::AppState;

/// Inbound messages accepted on the realtime channel.
///
/// Same adjacently-tagged shape as the outbound [`CatalogEvent`]s:
/// `{"event": "addProduct", "payload": { ...fields... }}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
enum ClientMessage {
    /// Create a product. Runs the same validated add operation as
    /// `POST /api/products`; an under-specified payload is rejected.
    AddProduct(NewProduct),
}

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection is registered with `WsManager` and
/// managed by two tasks (sender + receiver).
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single WebSocket connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager`.
///   2. Spawns a sender task that forwards messages from the manager channel.
///   3. Processes inbound messages on the current task.
///   4. Cleans up on disconnect.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    // Register and get the receiver for outbound messages.
    let mut rx = state.ws_manager.add(conn_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: process inbound messages.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(Message::Text(text)) => {
                handle_client_message(&state, &conn_id, text.as_str()).await;
            }
            Ok(_msg) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Clean up: remove connection and abort sender task.
    state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "WebSocket disconnected");
}

/// Dispatch one inbound text frame.
///
/// Malformed messages and failed adds are reported back to the originating
/// connection only; a successful add is published on the event bus, which
/// the fan-out task turns into a `productAdded` broadcast for everyone.
async fn handle_client_message(state: &AppState, conn_id: &str, text: &str) {
    let message: ClientMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(conn_id = %conn_id, error = %e, "Unrecognized WebSocket message");
            send_error(state, conn_id, "Unrecognized message").await;
            return;
        }
    };

    match message {
        ClientMessage::AddProduct(input) => match state.store.add(input).await {
            Ok(product) => {
                tracing::info!(
                    conn_id = %conn_id,
                    id = product.id,
                    title = %product.title,
                    "Product created over realtime channel"
                );
                state.event_bus.publish(CatalogEvent::ProductAdded(product));
            }
            Err(e) => {
                tracing::error!(conn_id = %conn_id, error = %e, "Failed to add product from realtime channel");
                send_error(state, conn_id, &e.to_string()).await;
            }
        },
    }
}

async fn send_error(state: &AppState, conn_id: &str, message: &str) {
    let body = serde_json::json!({ "error": message });
    state
        .ws_manager
        .send_to(conn_id, Message::Text(body.to_string().into()))
        .await;
}
