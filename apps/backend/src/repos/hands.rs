//! Per-player hand access. A missing record reads as an empty hand, which
//! is what a waiting room has.

use crate::domain::Card;
use crate::errors::DomainError;
use crate::store::{RecordKey, RoomTxn};

pub fn load(txn: &RoomTxn, uid: &str) -> Result<Vec<Card>, DomainError> {
    Ok(txn
        .get(&RecordKey::Hand(uid.to_string()))
        .map_err(DomainError::from)?
        .unwrap_or_default())
}

pub fn save(txn: &mut RoomTxn, uid: &str, hand: &[Card]) -> Result<(), DomainError> {
    txn.set(RecordKey::Hand(uid.to_string()), &hand)
        .map_err(DomainError::from)
}
