//! Core card types: Color, ActionKind, WildKind, Card.
//!
//! `Card` is a closed sum over the three shapes the deck contains. The serde
//! representation matches the room documents: an internally tagged object
//! with a `kind` discriminant and camelCase fields, e.g.
//! `{"kind":"number","color":"red","value":5}` or
//! `{"kind":"wild","action":"wildDraw4","chosenColor":"green"}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "skip")]
    Skip,
    #[serde(rename = "reverse")]
    Reverse,
    #[serde(rename = "draw2")]
    DrawTwo,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WildKind {
    #[serde(rename = "wild")]
    Wild,
    #[serde(rename = "wildDraw4")]
    WildDrawFour,
}

/// A single card. Immutable except for a wild's `chosen_color`, which is
/// `None` while the card sits in a pile or hand and is set exactly once,
/// when the card is played.
///
/// Note: derived equality includes `chosen_color`. Use
/// [`same_card`](crate::domain::cards_logic::same_card) to locate a card in
/// a hand regardless of chosen color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Card {
    Number {
        color: Color,
        value: u8,
    },
    Action {
        color: Color,
        action: ActionKind,
    },
    Wild {
        action: WildKind,
        #[serde(
            rename = "chosenColor",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        chosen_color: Option<Color>,
    },
}

impl Card {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Card::Action {
                action: ActionKind::Skip,
                ..
            }
        )
    }

    pub fn is_reverse(&self) -> bool {
        matches!(
            self,
            Card::Action {
                action: ActionKind::Reverse,
                ..
            }
        )
    }

    pub fn is_draw_two(&self) -> bool {
        matches!(
            self,
            Card::Action {
                action: ActionKind::DrawTwo,
                ..
            }
        )
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild { .. })
    }

    pub fn is_wild_draw_four(&self) -> bool {
        matches!(
            self,
            Card::Wild {
                action: WildKind::WildDrawFour,
                ..
            }
        )
    }

    /// The value of a number card, `None` otherwise.
    pub fn number_value(&self) -> Option<u8> {
        match self {
            Card::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// The color this card counts as for matching: the printed color, or a
    /// wild's chosen color once set.
    pub fn effective_color(&self) -> Option<Color> {
        match self {
            Card::Number { color, .. } | Card::Action { color, .. } => Some(*color),
            Card::Wild { chosen_color, .. } => *chosen_color,
        }
    }

    /// The same wild card with its color committed. Identity for non-wilds.
    pub fn with_chosen_color(self, color: Color) -> Card {
        match self {
            Card::Wild { action, .. } => Card::Wild {
                action,
                chosen_color: Some(color),
            },
            other => other,
        }
    }
}
