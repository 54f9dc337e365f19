//! Fixed table rules: deck composition, deal size, penalties.

use crate::domain::cards_types::Color;

/// Total cards in the deck: 25 per color plus 8 wilds.
pub const DECK_SIZE: usize = 108;

pub const INITIAL_HAND_SIZE: usize = 7;

pub const MIN_PLAYERS: usize = 2;

/// Copies of each wild kind in the deck.
pub const WILDS_PER_KIND: usize = 4;

pub const DRAW_TWO_PENALTY: u8 = 2;
pub const WILD_DRAW_FOUR_PENALTY: u8 = 4;

pub const COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
