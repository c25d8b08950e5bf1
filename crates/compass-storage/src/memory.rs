use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::store::{ObjectStore, Versioned};

struct Object {
    body: Vec<u8>,
    version: u64,
}

#[derive(Default)]
struct Objects {
    map: BTreeMap<String, Object>,
    next_version: u64,
}

impl Objects {
    fn insert(&mut self, key: &str, body: Vec<u8>) -> u64 {
        self.next_version += 1;
        let version = self.next_version;
        self.map.insert(key.to_string(), Object { body, version });
        version
    }
}

/// Process-local store. Contents vanish with the process.
///
/// Every write bumps a store-wide counter, which serves as the version tag
/// for conditional writes.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<Objects>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.map.is_empty()
    }
}

fn not_found(key: &str) -> StorageError {
    StorageError::NotFound {
        key: key.to_string(),
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .await
            .map
            .get(key)
            .map(|o| o.body.clone())
            .ok_or_else(|| not_found(key))
    }

    async fn get_versioned(&self, key: &str) -> Result<Versioned, StorageError> {
        self.objects
            .read()
            .await
            .map
            .get(key)
            .map(|o| Versioned {
                body: o.body.clone(),
                version: o.version.to_string(),
            })
            .ok_or_else(|| not_found(key))
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        self.objects.write().await.insert(key, body);
        Ok(())
    }

    async fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        _content_type: Option<&str>,
        expected: Option<&str>,
    ) -> Result<String, StorageError> {
        let mut objects = self.objects.write().await;
        let current = objects.map.get(key).map(|o| o.version.to_string());
        if current.as_deref() != expected {
            return Err(StorageError::PreconditionFailed {
                key: key.to_string(),
            });
        }
        Ok(objects.insert(key, body).to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.write().await.map.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects
            .map
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }
}
