//! Domain types for the product catalog.
//!
//! Holds the [`Product`](product::Product) model, the request types used by
//! every create/update ingress, required-field validation, and id
//! assignment. Nothing in this crate touches the filesystem or the network.

pub mod error;
pub mod product;
pub mod types;
