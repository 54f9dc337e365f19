//! Public projection of a room: everything a client may see.
//!
//! Hands never leave the server; the snapshot carries per-player hand
//! counts and pile sizes instead.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::state::{Direction, PendingKind, PlayerSeat, RoomState, RoomStatus, Uid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPublic {
    pub id: Uid,
    pub display_name: String,
    #[serde(default)]
    pub is_host: bool,
    #[serde(default)]
    pub hand_count: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_uid: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_turn: Option<Uid>,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_card: Option<Card>,
    pub pending_draw: u8,
    pub pending_kind: PendingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_value: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_player: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_uid: Option<Uid>,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub players: Vec<PlayerPublic>,
}

impl RoomSnapshot {
    pub fn project(room_id: &str, room: &RoomState, seats: &[PlayerSeat]) -> Self {
        Self {
            id: room_id.to_string(),
            code: room.code.clone(),
            status: room.status,
            host_uid: room.host_uid.clone(),
            current_turn: room.current_turn.clone(),
            direction: room.direction,
            top_card: room.top_card,
            pending_draw: room.pending_draw,
            pending_kind: room.pending_kind,
            chain_value: room.chain_value,
            chain_player: room.chain_player.clone(),
            winner_uid: room.winner_uid.clone(),
            draw_pile_size: room.draw_pile.len(),
            discard_pile_size: room.discard_pile.len(),
            players: seats
                .iter()
                .map(|seat| PlayerPublic {
                    id: seat.uid.clone(),
                    display_name: seat.display_name.clone(),
                    is_host: seat.is_host,
                    hand_count: seat.hand_count,
                })
                .collect(),
        }
    }
}
