//! WebSocket infrastructure for the realtime product feed.
//!
//! Provides connection management, heartbeat monitoring, and the HTTP
//! upgrade handler used by Axum routes. Inbound `addProduct` messages are
//! dispatched from here; outbound event fan-out lives in
//! [`crate::broadcast`].

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
