//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod table;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_table;

// Re-exports for ergonomics
pub use cards_logic::{card_matches, find_card, hand_has_value, same_card};
pub use cards_types::{ActionKind, Card, Color, WildKind};
pub use dealing::{derive_shuffle_seed, full_deck, shuffled_deck};
pub use snapshot::{PlayerPublic, RoomSnapshot};
pub use state::{
    next_seat, seat_offset, Direction, PendingKind, PlayerSeat, RoomCtx, RoomState, RoomStatus,
    Uid,
};
pub use table::{draw_one, end_turn, play_card, playable_cards, start_game};
