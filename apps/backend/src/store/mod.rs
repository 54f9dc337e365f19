//! Transactional room store boundary.
//!
//! A [`RoomStore`] hands out [`RoomTxn`] transactions: a consistent snapshot
//! of every record under one room key, tagged with the room's commit
//! generation. Staged writes commit atomically iff no other transaction
//! committed to the room in between; a losing transaction observes
//! [`StoreError::Conflict`] and is re-run by the retry wrapper in
//! [`txn`].

pub mod memory;
pub mod txn;

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::Uid;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Independently addressable records under one room key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// The room document.
    Room,
    /// The ordered player roster with hand-count mirrors.
    Roster,
    /// One hand document per player.
    Hand(Uid),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Room => write!(f, "room"),
            RecordKey::Roster => write!(f, "players"),
            RecordKey::Hand(uid) => write!(f, "hands/{uid}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another transaction committed to the room since `begin`.
    #[error("commit conflict on room {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("failed to decode record {key}: {source}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            // Conflicts are normally consumed by the retry loop; one
            // escaping this far is an operational failure.
            StoreError::Conflict(room_id) => DomainError::infra(
                InfraErrorKind::Other("UNRETRIED_CONFLICT".into()),
                format!("unhandled commit conflict on room {room_id}"),
            ),
            StoreError::Unavailable(detail) => {
                DomainError::infra(InfraErrorKind::StoreUnavailable, detail)
            }
            StoreError::Codec { key, source } => DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("record {key} failed to decode: {source}"),
            ),
        }
    }
}

/// A consistent snapshot of one room plus staged writes.
///
/// Reads see the transaction's own staged writes first, then the snapshot.
#[derive(Debug)]
pub struct RoomTxn {
    room_id: String,
    generation: u64,
    snapshot: HashMap<RecordKey, Value>,
    writes: HashMap<RecordKey, Value>,
}

impl RoomTxn {
    pub(crate) fn new(
        room_id: impl Into<String>,
        generation: u64,
        snapshot: HashMap<RecordKey, Value>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            generation,
            snapshot,
            writes: HashMap::new(),
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Commit generation this transaction read at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get<T: DeserializeOwned>(&self, key: &RecordKey) -> Result<Option<T>, StoreError> {
        let raw = self.writes.get(key).or_else(|| self.snapshot.get(key));
        raw.map(|value| {
            serde_json::from_value(value.clone()).map_err(|source| StoreError::Codec {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
    }

    pub fn set<T: Serialize>(&mut self, key: RecordKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_value(value).map_err(|source| StoreError::Codec {
            key: key.to_string(),
            source,
        })?;
        self.writes.insert(key, raw);
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (String, u64, HashMap<RecordKey, Value>) {
        (self.room_id, self.generation, self.writes)
    }
}

/// The consumed collaborator contract: atomic conditional read-modify-write
/// over a room's records.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Snapshot every record under `room_id`. A room with no records yields
    /// an empty snapshot at generation zero.
    async fn begin(&self, room_id: &str) -> Result<RoomTxn, StoreError>;

    /// Apply the transaction's staged writes atomically, failing with
    /// [`StoreError::Conflict`] if the room moved since `begin`.
    async fn commit(&self, txn: RoomTxn) -> Result<(), StoreError>;
}
