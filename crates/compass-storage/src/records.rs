use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::{ObjectStore, Versioned};

/// Load a JSON record.
pub async fn load<T: DeserializeOwned>(
    store: &dyn ObjectStore,
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load every JSON record under `prefix`. Objects that fail to decode are
/// skipped with a warning so one bad record cannot hide the rest.
pub async fn load_all<T: DeserializeOwned>(
    store: &dyn ObjectStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;
    let mut records = Vec::with_capacity(keys.len());
    for key in &keys {
        match load(store, key).await {
            Ok(record) => records.push(record),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(key = %key, error = %e, "skipping undecodable record");
            }
            Err(StorageError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(records)
}

pub async fn save<T: Serialize>(
    store: &dyn ObjectStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body, Some("application/json")).await
}

/// Load a JSON record along with the version tag it was read at.
pub async fn load_versioned<T: DeserializeOwned>(
    store: &dyn ObjectStore,
    key: &str,
) -> Result<(T, String), StorageError> {
    let Versioned { body, version } = store.get_versioned(key).await?;
    Ok((serde_json::from_slice(&body)?, version))
}

/// Save a JSON record only if it is still at `expected` (or, with `None`,
/// still absent).
pub async fn save_if_match<T: Serialize>(
    store: &dyn ObjectStore,
    key: &str,
    value: &T,
    expected: Option<&str>,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store
        .put_if_match(key, body, Some("application/json"), expected)
        .await
}
