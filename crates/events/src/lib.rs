//! In-process catalog event plumbing.
//!
//! The write path publishes a [`CatalogEvent`] for every successful add or
//! update; the API layer's fan-out task subscribes and forwards each event
//! to every connected realtime client.

pub mod bus;

pub use bus::{CatalogEvent, EventBus};
