use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;

/// An object's bytes together with the version tag it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned {
    pub body: Vec<u8>,
    /// Opaque tag (the ETag on S3). Pass it back to
    /// [`ObjectStore::put_if_match`] to write only if nothing changed since.
    pub version: String,
}

/// Minimal key/value object store. Keys are `/`-separated paths as laid
/// out in [`compass_core::keys`].
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object's bytes. Missing keys are [`StorageError::NotFound`].
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Fetch an object's bytes and its current version tag.
    async fn get_versioned(&self, key: &str) -> Result<Versioned, StorageError>;

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// Write only if the object is still at `expected`, or, with `None`,
    /// only if it does not exist yet. Any other state is
    /// [`StorageError::PreconditionFailed`]. Returns the new version tag.
    async fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
        expected: Option<&str>,
    ) -> Result<String, StorageError>;

    /// Delete an object. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// All keys under `prefix`, in lexical order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.get(key).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

pub type SharedStore = Arc<dyn ObjectStore>;
