//! Room document access.

use crate::domain::RoomState;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::store::{RecordKey, RoomTxn};

pub fn find(txn: &RoomTxn) -> Result<Option<RoomState>, DomainError> {
    txn.get(&RecordKey::Room).map_err(DomainError::from)
}

pub fn require(txn: &RoomTxn) -> Result<RoomState, DomainError> {
    find(txn)?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Room, format!("room {}", txn.room_id()))
    })
}

pub fn save(txn: &mut RoomTxn, room: &RoomState) -> Result<(), DomainError> {
    txn.set(RecordKey::Room, room).map_err(DomainError::from)
}
