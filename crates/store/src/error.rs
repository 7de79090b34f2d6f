use tienda_core::error::CoreError;

/// Errors produced by the catalog store.
///
/// Read/parse/write failures are terminal for the triggering request and map
/// to a generic 500 at the API layer; there are no retries and no
/// partial-write recovery.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be read (missing file, permissions, I/O).
    #[error("Failed to read catalog document: {0}")]
    Read(#[source] std::io::Error),

    /// The document exists but does not parse as a product array.
    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document could not be written back.
    #[error("Failed to write catalog document: {0}")]
    Write(#[source] std::io::Error),

    /// A domain-level failure, e.g. a create request that fails the
    /// required-field contract.
    #[error(transparent)]
    Core(#[from] CoreError),
}
