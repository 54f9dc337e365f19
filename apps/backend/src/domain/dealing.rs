//! Deck construction, seeded shuffling, and the opening deal.
//!
//! Shuffles never touch the system RNG: the generator is seeded from the
//! room record (or a deterministic room-id fallback), so a retried
//! `start_game` replays the identical shuffle.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xxhash_rust::xxh3::xxh3_64;

use crate::domain::cards_types::{ActionKind, Card, WildKind};
use crate::domain::rules::{COLORS, DECK_SIZE, WILDS_PER_KIND};
use crate::errors::DomainError;

/// The canonical 108-card multiset in deterministic order.
///
/// Per color: one 0, two each of 1-9, two each of skip/reverse/draw two.
/// Plus four wilds and four wild draw fours.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in COLORS {
        deck.push(Card::Number { color, value: 0 });
        for value in 1..=9 {
            deck.push(Card::Number { color, value });
            deck.push(Card::Number { color, value });
        }
        for action in [ActionKind::Skip, ActionKind::Reverse, ActionKind::DrawTwo] {
            deck.push(Card::Action { color, action });
            deck.push(Card::Action { color, action });
        }
    }
    for _ in 0..WILDS_PER_KIND {
        deck.push(Card::Wild {
            action: WildKind::Wild,
            chosen_color: None,
        });
        deck.push(Card::Wild {
            action: WildKind::WildDrawFour,
            chosen_color: None,
        });
    }
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// Unbiased Fisher-Yates permutation driven by the caller's generator.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// A fresh deck shuffled reproducibly from `seed`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = full_deck();
    shuffle(&mut deck, &mut rng);
    deck
}

/// Shuffle seed for a room: the stored seed when the lobby set one, else a
/// hash of the room id. Either way, retries replay the same shuffle.
pub fn derive_shuffle_seed(stored: Option<i64>, room_id: &str) -> u64 {
    match stored {
        Some(seed) => seed as u64,
        None => xxh3_64(room_id.as_bytes()),
    }
}

/// Deal `hand_size` cards to each of `players` off the draw end (the tail),
/// in roster order.
pub fn deal_hands(deck: &mut Vec<Card>, players: usize, hand_size: usize) -> Vec<Vec<Card>> {
    let mut hands = Vec::with_capacity(players);
    for _ in 0..players {
        let mut hand = Vec::with_capacity(hand_size);
        for _ in 0..hand_size {
            if let Some(card) = deck.pop() {
                hand.push(card);
            }
        }
        hands.push(hand);
    }
    hands
}

/// Flip cards off the draw end until a non-wild appears; wilds flipped
/// during the search go to the bottom of the pile, preserving the card
/// count. The revealed card becomes the opening top card.
pub fn reveal_first_top(deck: &mut Vec<Card>) -> Result<Card, DomainError> {
    // Bounded by the pile size so an (unreachable) all-wild pile terminates.
    for _ in 0..deck.len() {
        let Some(card) = deck.pop() else { break };
        if card.is_wild() {
            deck.insert(0, card);
            continue;
        }
        return Ok(card);
    }
    Err(DomainError::resource_exhausted(
        "no non-wild card available for the opening top card",
    ))
}
