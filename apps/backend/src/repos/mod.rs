//! Typed record access over [`RoomTxn`](crate::store::RoomTxn).

pub mod hands;
pub mod players;
pub mod rooms;

use crate::domain::RoomCtx;
use crate::errors::DomainError;
use crate::store::RoomTxn;

/// Load everything one operation needs: the room, the roster, and one hand
/// per seat.
pub fn load_room_ctx(txn: &RoomTxn) -> Result<RoomCtx, DomainError> {
    let room = rooms::require(txn)?;
    let seats = players::load_roster(txn)?;
    let mut hands = std::collections::BTreeMap::new();
    for seat in &seats {
        hands.insert(seat.uid.clone(), hands::load(txn, &seat.uid)?);
    }
    Ok(RoomCtx {
        room_id: txn.room_id().to_string(),
        room,
        seats,
        hands,
    })
}

/// Stage every record of the context; all of them commit together.
pub fn stage_room_ctx(txn: &mut RoomTxn, ctx: &RoomCtx) -> Result<(), DomainError> {
    rooms::save(txn, &ctx.room)?;
    players::save_roster(txn, &ctx.seats)?;
    for (uid, hand) in &ctx.hands {
        hands::save(txn, uid, hand)?;
    }
    Ok(())
}
