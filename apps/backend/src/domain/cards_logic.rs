//! Card game logic: structural equality, match legality, hand lookups.

use crate::domain::cards_types::Card;

/// Structural equality used to locate a card in a hand.
///
/// Number cards compare color+value, action cards color+action, wild cards
/// action only. A wild's chosen color is ignored: the hand stores the wild
/// uncommitted, the play request carries it committed.
pub fn same_card(a: &Card, b: &Card) -> bool {
    match (a, b) {
        (
            Card::Number {
                color: ac,
                value: av,
            },
            Card::Number {
                color: bc,
                value: bv,
            },
        ) => ac == bc && av == bv,
        (
            Card::Action {
                color: ac,
                action: aa,
            },
            Card::Action {
                color: bc,
                action: ba,
            },
        ) => ac == bc && aa == ba,
        (Card::Wild { action: aa, .. }, Card::Wild { action: ba, .. }) => aa == ba,
        _ => false,
    }
}

/// Whether `candidate` may legally land on `top` when no penalty or chain
/// constraint is active.
///
/// Total by construction: a missing top card or a wild top without a chosen
/// color admits anything. The engine never produces either state after the
/// first deal, but the predicate still answers.
pub fn card_matches(top: Option<&Card>, candidate: &Card) -> bool {
    if candidate.is_wild() {
        return true;
    }
    let Some(top) = top else {
        return true;
    };
    match (top, candidate) {
        (Card::Wild { chosen_color, .. }, _) => match chosen_color {
            Some(color) => candidate.effective_color() == Some(*color),
            None => true,
        },
        (
            Card::Number {
                color: tc,
                value: tv,
            },
            Card::Number {
                color: cc,
                value: cv,
            },
        ) => tc == cc || tv == cv,
        (Card::Number { color: tc, .. }, Card::Action { color: cc, .. }) => tc == cc,
        (Card::Action { color: tc, .. }, Card::Number { color: cc, .. }) => tc == cc,
        (
            Card::Action {
                color: tc,
                action: ta,
            },
            Card::Action {
                color: cc,
                action: ca,
            },
        ) => tc == cc || ta == ca,
        // Wild candidates returned early above.
        (_, Card::Wild { .. }) => true,
    }
}

/// Position of `card` in `hand` by [`same_card`] equality.
pub fn find_card(hand: &[Card], card: &Card) -> Option<usize> {
    hand.iter().position(|held| same_card(held, card))
}

/// Whether the hand holds a number card of `value`.
pub fn hand_has_value(hand: &[Card], value: u8) -> bool {
    hand.iter().any(|c| c.number_value() == Some(value))
}
