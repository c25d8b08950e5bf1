use tracing::info;

use compass_core::keys;
use compass_core::models::user::User;

use crate::error::StorageError;
use crate::records;
use crate::store::ObjectStore;

pub async fn list(store: &dyn ObjectStore) -> Result<Vec<User>, StorageError> {
    let mut users: Vec<User> = records::load_all(store, keys::USERS_PREFIX).await?;
    users.sort_by_key(|u| u.created_at);
    Ok(users)
}

pub async fn get(store: &dyn ObjectStore, id: &str) -> Result<User, StorageError> {
    records::load(store, &keys::user(id)?).await
}

pub async fn put(store: &dyn ObjectStore, user: &User) -> Result<(), StorageError> {
    records::save(store, &keys::user(&user.id)?, user).await
}

/// Remove a user record. Unlike the raw store, deleting an unknown user
/// is [`StorageError::NotFound`].
pub async fn delete(store: &dyn ObjectStore, id: &str) -> Result<(), StorageError> {
    let key = keys::user(id)?;
    if !store.exists(&key).await? {
        return Err(StorageError::NotFound { key });
    }
    store.delete(&key).await?;
    info!(user_id = id, "user deleted");
    Ok(())
}
