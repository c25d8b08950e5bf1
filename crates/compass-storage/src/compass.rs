use tracing::{debug, warn};

use compass_core::keys;
use compass_core::models::compass::CompassEntry;
use compass_core::models::generation::{GenerationKind, GenerationRequest};

use crate::error::StorageError;
use crate::records;
use crate::store::ObjectStore;

pub async fn get(
    store: &dyn ObjectStore,
    sub: &str,
    date: &str,
) -> Result<CompassEntry, StorageError> {
    records::load(store, &keys::compass_entry(sub, date)?).await
}

/// All of a user's entries, ordered by day.
pub async fn list(store: &dyn ObjectStore, sub: &str) -> Result<Vec<CompassEntry>, StorageError> {
    let mut entries: Vec<CompassEntry> =
        records::load_all(store, &keys::compass_prefix(sub)?).await?;
    entries.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(entries)
}

/// Attempts made before a contended upsert gives up.
const MAX_UPSERT_ATTEMPTS: usize = 5;

/// Upsert the day's entry with freshly generated output.
///
/// The write is conditional on the entry being unchanged since it was
/// read. On conflict the entry is reloaded and the output applied again, so
/// a summary and a question generated at the same time both survive.
pub async fn record_generation(
    store: &dyn ObjectStore,
    sub: &str,
    req: &GenerationRequest,
    kind: GenerationKind,
    output: &str,
    now: jiff::Timestamp,
) -> Result<CompassEntry, StorageError> {
    let key = keys::compass_entry(sub, &req.date)?;

    for attempt in 1..=MAX_UPSERT_ATTEMPTS {
        let (mut entry, version) = match records::load_versioned::<CompassEntry>(store, &key).await
        {
            Ok((entry, version)) => (entry, Some(version)),
            Err(StorageError::NotFound { .. }) => (
                CompassEntry::new(req.date.clone(), req.free_text.clone(), now),
                None,
            ),
            Err(e) => return Err(e),
        };
        entry.apply(kind, req.free_text.clone(), output.to_string(), now);

        match records::save_if_match(store, &key, &entry, version.as_deref()).await {
            Ok(_) => return Ok(entry),
            Err(StorageError::PreconditionFailed { .. }) => {
                debug!(key = %key, attempt, "compass entry changed concurrently, retrying");
            }
            Err(e) => return Err(e),
        }
    }

    warn!(key = %key, "compass entry upsert kept conflicting");
    Err(StorageError::PreconditionFailed { key })
}
