//! HTTP and WebSocket surface for the product catalog.
//!
//! Routes and middleware live here, together with the WebSocket connection
//! manager and the task that fans catalog events out to connected clients.
//! Domain logic lives in `tienda-core`; persistence in `tienda-store`.

pub mod broadcast;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod ws;
