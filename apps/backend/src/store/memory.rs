//! In-memory reference adapter for the [`RoomStore`] contract.
//!
//! Serves tests and local runs, and doubles as the executable model of the
//! contract: per-room commit generations give exactly the "at least one of
//! two racing writers observes a conflict" guarantee the engine assumes.

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::domain::{PlayerSeat, RoomState};
use crate::store::{RecordKey, RoomStore, RoomTxn, StoreError};

#[derive(Debug, Default)]
struct RoomShard {
    generation: u64,
    records: HashMap<RecordKey, Value>,
}

#[derive(Debug, Default)]
pub struct InMemoryRoomStore {
    rooms: DashMap<String, RoomShard>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in for the out-of-scope lobby: install (or replace) a room
    /// document and roster, with no hands dealt.
    pub fn put_room(
        &self,
        room_id: &str,
        room: &RoomState,
        seats: &[PlayerSeat],
    ) -> Result<(), StoreError> {
        let room_value = serde_json::to_value(room).map_err(|source| StoreError::Codec {
            key: RecordKey::Room.to_string(),
            source,
        })?;
        let roster_value = serde_json::to_value(seats).map_err(|source| StoreError::Codec {
            key: RecordKey::Roster.to_string(),
            source,
        })?;
        let mut shard = self.rooms.entry(room_id.to_string()).or_default();
        shard.generation += 1;
        shard.records.clear();
        shard.records.insert(RecordKey::Room, room_value);
        shard.records.insert(RecordKey::Roster, roster_value);
        Ok(())
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn begin(&self, room_id: &str) -> Result<RoomTxn, StoreError> {
        let (generation, snapshot) = match self.rooms.get(room_id) {
            Some(shard) => (shard.generation, shard.records.clone()),
            None => (0, HashMap::new()),
        };
        Ok(RoomTxn::new(room_id, generation, snapshot))
    }

    async fn commit(&self, txn: RoomTxn) -> Result<(), StoreError> {
        let (room_id, read_generation, writes) = txn.into_parts();
        let mut shard = self.rooms.entry(room_id.clone()).or_default();
        if shard.generation != read_generation {
            return Err(StoreError::Conflict(room_id));
        }
        shard.records.extend(writes);
        shard.generation += 1;
        Ok(())
    }
}
