//! Proptest strategies for domain types.

use proptest::prelude::*;

use crate::domain::cards_types::{ActionKind, Card, Color, WildKind};

pub fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Green),
        Just(Color::Blue),
    ]
}

pub fn arb_action() -> impl Strategy<Value = ActionKind> {
    prop_oneof![
        Just(ActionKind::Skip),
        Just(ActionKind::Reverse),
        Just(ActionKind::DrawTwo),
    ]
}

pub fn arb_wild_kind() -> impl Strategy<Value = WildKind> {
    prop_oneof![Just(WildKind::Wild), Just(WildKind::WildDrawFour)]
}

/// Any card as it can sit in a hand or pile (wilds uncommitted).
pub fn arb_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        (arb_color(), 0u8..=9).prop_map(|(color, value)| Card::Number { color, value }),
        (arb_color(), arb_action()).prop_map(|(color, action)| Card::Action { color, action }),
        arb_wild_kind().prop_map(|action| Card::Wild {
            action,
            chosen_color: None
        }),
    ]
}

/// Any card as it can land on the table (wilds committed).
pub fn arb_played_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        (arb_color(), 0u8..=9).prop_map(|(color, value)| Card::Number { color, value }),
        (arb_color(), arb_action()).prop_map(|(color, action)| Card::Action { color, action }),
        (arb_wild_kind(), arb_color()).prop_map(|(action, color)| Card::Wild {
            action,
            chosen_color: Some(color)
        }),
    ]
}
