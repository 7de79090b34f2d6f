//! The product model and the request types shared by every ingress.
//!
//! Creation is a two-step contract: [`NewProduct::validate`] enforces the
//! required-field rules, then [`NewProduct::into_product`] materializes the
//! record with a store-assigned id. Both the HTTP POST handler and the
//! realtime `addProduct` path go through the same two steps (via the store),
//! so there is exactly one validation contract.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ProductId;

/// A catalog entry. The JSON document on disk is an array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    #[serde(default = "default_status")]
    pub status: bool,
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

fn default_status() -> bool {
    true
}

/// Fields accepted when creating a product.
///
/// Every field is optional at the deserialization layer so that a missing
/// required field surfaces as a [`CoreError::Validation`] (HTTP 400) rather
/// than a deserialization rejection. `title` is also accepted under the
/// legacy alias `name`, which some clients still send.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    #[serde(alias = "name")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

impl NewProduct {
    /// Enforce the required-field contract: `title`, `description`, `code`,
    /// `price`, and `stock` must be present, strings non-empty and numbers
    /// non-zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut missing = Vec::new();

        if self.title.as_deref().map_or(true, str::is_empty) {
            missing.push("title");
        }
        if self.description.as_deref().map_or(true, str::is_empty) {
            missing.push("description");
        }
        if self.code.as_deref().map_or(true, str::is_empty) {
            missing.push("code");
        }
        if self.price.map_or(true, |p| p == 0.0) {
            missing.push("price");
        }
        if self.stock.map_or(true, |s| s == 0) {
            missing.push("stock");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Materialize a [`Product`] under the given id, filling the defaulted
    /// fields (`status` true, `category` empty, `thumbnails` empty).
    ///
    /// Callers must run [`validate`](Self::validate) first; a required field
    /// missing here is a programming error, reported as
    /// [`CoreError::Internal`] rather than a panic.
    pub fn into_product(self, id: ProductId) -> Result<Product, CoreError> {
        let required = |field: &'static str| {
            move || CoreError::Internal(format!("unvalidated create request: missing {field}"))
        };

        Ok(Product {
            id,
            title: self.title.ok_or_else(required("title"))?,
            description: self.description.ok_or_else(required("description"))?,
            code: self.code.ok_or_else(required("code"))?,
            price: self.price.ok_or_else(required("price"))?,
            status: self.status.unwrap_or(true),
            stock: self.stock.ok_or_else(required("stock"))?,
            category: self.category.unwrap_or_default(),
            thumbnails: self.thumbnails.unwrap_or_default(),
        })
    }
}

/// Partial fields accepted when updating a product. Absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(alias = "name")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

impl ProductPatch {
    /// Shallow-merge the patch over an existing record.
    ///
    /// The id is never touched: a record keeps the id it was stored under
    /// regardless of what the request path or body said.
    pub fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(thumbnails) = self.thumbnails {
            product.thumbnails = thumbnails;
        }
    }
}

/// Next id for a new record: one past the maximum id in the collection,
/// advanced until unused.
///
/// The re-check loop guards against documents whose ids were edited by hand
/// and no longer form a dense sequence.
pub fn next_id(products: &[Product]) -> ProductId {
    let max = products.iter().map(|p| p.id).max().unwrap_or(0);
    let mut candidate = max + 1;
    while products.iter().any(|p| p.id == candidate) {
        candidate += 1;
    }
    candidate
}
