//! Read-compute-commit retry wrapper around [`RoomStore`].

use tracing::{debug, warn};

use crate::config::TxnConfig;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::store::{RoomStore, RoomTxn, StoreError};

/// Run `op` inside a room transaction, retrying the whole
/// read-compute-commit on conflicts up to the configured attempt budget.
///
/// `op` runs against a fresh snapshot on every attempt, so its
/// preconditions are re-validated and a retried operation can never
/// double-apply. A domain error from `op` aborts immediately with nothing
/// written; only commit conflicts retry.
pub async fn with_room_txn<T, F>(
    store: &dyn RoomStore,
    config: &TxnConfig,
    room_id: &str,
    mut op: F,
) -> Result<T, DomainError>
where
    F: FnMut(&mut RoomTxn) -> Result<T, DomainError>,
{
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        let mut txn = store.begin(room_id).await.map_err(DomainError::from)?;
        let out = op(&mut txn)?;
        match store.commit(txn).await {
            Ok(()) => {
                if attempt > 1 {
                    debug!(room_id, attempt, "transaction committed after retry");
                }
                return Ok(out);
            }
            Err(StoreError::Conflict(_)) if attempt < config.max_attempts => {
                debug!(room_id, attempt, "commit conflict, retrying");
                tokio::time::sleep(config.retry_interval).await;
            }
            Err(StoreError::Conflict(_)) => {
                warn!(room_id, attempt, "commit conflicts exhausted retry budget");
                return Err(DomainError::infra(
                    InfraErrorKind::RetriesExhausted,
                    format!("room {room_id} kept conflicting after {attempt} attempts"),
                ));
            }
            Err(other) => return Err(other.into()),
        }
    }
}
