//! Authoritative room state, roster seats, and turn math.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::cards_types::Card;

/// Player identifier as issued by the auth collaborator.
pub type Uid = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

/// Signed rotation applied to roster order, flipped by a reverse card.
/// Serialized as `1` / `-1`, matching the room documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    pub fn step(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.step() as i8)
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i8::deserialize(deserializer)? {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            other => Err(serde::de::Error::custom(format!(
                "invalid direction: {other}"
            ))),
        }
    }
}

/// Kind of the active forced-draw penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PendingKind {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "draw2")]
    DrawTwo,
    #[serde(rename = "draw4")]
    DrawFour,
}

/// The authoritative room document.
///
/// `code`, `host_uid`, and `rng_seed` are owned by the out-of-scope lobby;
/// the engine reads `rng_seed` for the opening shuffle and carries the
/// others through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_uid: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_turn: Option<Uid>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_card: Option<Card>,
    #[serde(default)]
    pub draw_pile: Vec<Card>,
    #[serde(default)]
    pub discard_pile: Vec<Card>,
    #[serde(default)]
    pub pending_draw: u8,
    #[serde(default)]
    pub pending_kind: PendingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_value: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_player: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_uid: Option<Uid>,
}

impl RoomState {
    /// A room as the lobby leaves it: waiting, nothing dealt.
    pub fn waiting() -> Self {
        Self {
            status: RoomStatus::Waiting,
            code: None,
            host_uid: None,
            rng_seed: None,
            current_turn: None,
            direction: Direction::Clockwise,
            top_card: None,
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            pending_draw: 0,
            pending_kind: PendingKind::None,
            chain_value: None,
            chain_player: None,
            winner_uid: None,
        }
    }

    pub fn clear_pending(&mut self) {
        self.pending_draw = 0;
        self.pending_kind = PendingKind::None;
    }

    pub fn clear_chain(&mut self) {
        self.chain_value = None;
        self.chain_player = None;
    }
}

/// A roster entry with the public hand-size mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeat {
    pub uid: Uid,
    pub display_name: String,
    #[serde(default)]
    pub is_host: bool,
    #[serde(default)]
    pub hand_count: u8,
}

/// Everything one transaction reads: the room, the ordered roster, and one
/// hand per seat. The four table operations are pure over this context.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCtx {
    pub room_id: String,
    pub room: RoomState,
    pub seats: Vec<PlayerSeat>,
    pub hands: BTreeMap<Uid, Vec<Card>>,
}

impl RoomCtx {
    pub fn seat_index(&self, uid: &str) -> Option<usize> {
        self.seats.iter().position(|seat| seat.uid == uid)
    }

    pub fn hand(&self, uid: &str) -> &[Card] {
        self.hands.get(uid).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn hand_mut(&mut self, uid: &str) -> &mut Vec<Card> {
        self.hands.entry(uid.to_string()).or_default()
    }

    /// Keep the public hand-size mirror in step with the hand itself.
    pub fn sync_hand_count(&mut self, uid: &str) {
        let count = self.hand(uid).len() as u8;
        if let Some(seat) = self.seats.iter_mut().find(|seat| seat.uid == uid) {
            seat.hand_count = count;
        }
    }

    /// Cards across the draw pile, discard pile, and every hand. 108 for
    /// every reachable started room.
    pub fn total_cards(&self) -> usize {
        self.room.draw_pile.len()
            + self.room.discard_pile.len()
            + self.hands.values().map(Vec::len).sum::<usize>()
    }
}

/// Seat `delta` steps away from `current` around a table of `count` seats.
///
/// Euclidean remainder keeps the result in range for negative deltas.
#[inline]
pub fn seat_offset(count: usize, current: usize, delta: i32) -> usize {
    debug_assert!(count > 0, "seat_offset on an empty roster");
    (current as i32 + delta).rem_euclid(count as i32) as usize
}

/// The next seat in `direction`.
#[inline]
pub fn next_seat(count: usize, current: usize, direction: Direction) -> usize {
    seat_offset(count, current, direction.step())
}
