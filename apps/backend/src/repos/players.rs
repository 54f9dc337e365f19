//! Player roster access. The roster is one ordered record; its order is
//! the turn order.

use crate::domain::PlayerSeat;
use crate::errors::DomainError;
use crate::store::{RecordKey, RoomTxn};

pub fn load_roster(txn: &RoomTxn) -> Result<Vec<PlayerSeat>, DomainError> {
    Ok(txn
        .get(&RecordKey::Roster)
        .map_err(DomainError::from)?
        .unwrap_or_default())
}

pub fn save_roster(txn: &mut RoomTxn, seats: &[PlayerSeat]) -> Result<(), DomainError> {
    txn.set(RecordKey::Roster, &seats)
        .map_err(DomainError::from)
}
