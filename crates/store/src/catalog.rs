use std::path::PathBuf;

use tokio::sync::Mutex;

use tienda_core::product::{self, NewProduct, Product, ProductPatch};
use tienda_core::types::ProductId;

use crate::error::StoreError;

/// Whole-document product store backed by a flat JSON file.
///
/// Designed to be wrapped in `Arc` and shared across request handlers. The
/// store is the single owner of the document: `add` and `update` take the
/// internal mutex for their whole read-modify-write cycle, so interleaved
/// writers cannot drop each other's changes. Plain reads skip the lock.
pub struct CatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogStore {
    /// Create a store over the document at `path`. Does not touch the file;
    /// call [`init`](Self::init) once at startup to create it if absent.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create the document as an empty array if it does not exist yet.
    ///
    /// A malformed existing document is left alone and will surface as a
    /// parse error on first read.
    pub async fn init(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(StoreError::Read)?
        {
            return Ok(());
        }

        tracing::info!(path = %self.path.display(), "Creating empty catalog document");
        tokio::fs::write(&self.path, "[]")
            .await
            .map_err(StoreError::Write)
    }

    async fn load(&self) -> Result<Vec<Product>, StoreError> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::Read)?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn persist(&self, products: &[Product]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(products)?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(StoreError::Write)
    }

    /// All products, in stored order.
    pub async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.load().await
    }

    /// The first `limit` products in stored order. A limit of zero or less,
    /// or `None`, means no limit.
    pub async fn list_limited(&self, limit: Option<i64>) -> Result<Vec<Product>, StoreError> {
        let mut products = self.load().await?;
        if let Some(limit) = limit {
            if limit > 0 {
                products.truncate(limit as usize);
            }
        }
        Ok(products)
    }

    /// Linear scan by id. `Ok(None)` when no record matches; an absent
    /// product is not an error at this layer.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.load().await?.into_iter().find(|p| p.id == id))
    }

    /// Validate, assign a fresh unique id, append, and persist.
    ///
    /// This is the single create operation behind every ingress (HTTP POST
    /// and the realtime `addProduct` message); the required-field contract
    /// is enforced here, not in the transports.
    pub async fn add(&self, new: NewProduct) -> Result<Product, StoreError> {
        new.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;

        let id = product::next_id(&products);
        let created = new.into_product(id)?;

        products.push(created.clone());
        self.persist(&products).await?;

        Ok(created)
    }

    /// Shallow-merge `patch` over the record with `id` and persist.
    ///
    /// Returns `Ok(None)` when no record matches. The stored id is
    /// preserved; a patch cannot re-identify a record.
    pub async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;

        let Some(existing) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply(existing);
        let updated = existing.clone();

        self.persist(&products).await?;
        Ok(Some(updated))
    }
}
