//! Card parsing from compact string tokens, used by fixtures and logs.
//!
//! Grammar:
//! - number: color letter + digit, e.g. `R5`, `B0`
//! - action: color letter + `S`|`R`|`D`, e.g. `GS` (green skip), `RR` (red
//!   reverse), `YD` (yellow draw two)
//! - wild: `W`, wild draw four: `W4`; an optional `/` + color letter commits
//!   the chosen color, e.g. `W/G`, `W4/R`

use std::fmt;
use std::str::FromStr;

use crate::domain::cards_types::{ActionKind, Card, Color, WildKind};
use crate::errors::domain::{DomainError, InfraErrorKind};

fn parse_error(token: &str) -> DomainError {
    // Tokens only come from fixtures and logs, never from clients.
    DomainError::infra(
        InfraErrorKind::ParseCard,
        format!("cannot parse card token: {token}"),
    )
}

fn color_from_char(ch: char) -> Option<Color> {
    match ch {
        'R' => Some(Color::Red),
        'Y' => Some(Color::Yellow),
        'G' => Some(Color::Green),
        'B' => Some(Color::Blue),
        _ => None,
    }
}

fn color_to_char(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Yellow => 'Y',
        Color::Green => 'G',
        Color::Blue => 'B',
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, chosen) = match s.split_once('/') {
            Some((base, color)) => {
                let mut chars = color.chars();
                let ch = chars.next().ok_or_else(|| parse_error(s))?;
                if chars.next().is_some() {
                    return Err(parse_error(s));
                }
                let color = color_from_char(ch).ok_or_else(|| parse_error(s))?;
                (base, Some(color))
            }
            None => (s, None),
        };

        if base == "W" || base == "W4" {
            let action = if base == "W" {
                WildKind::Wild
            } else {
                WildKind::WildDrawFour
            };
            return Ok(Card::Wild {
                action,
                chosen_color: chosen,
            });
        }
        if chosen.is_some() {
            // Only wilds take a chosen color suffix.
            return Err(parse_error(s));
        }

        let mut chars = base.chars();
        let color_ch = chars.next().ok_or_else(|| parse_error(s))?;
        let kind_ch = chars.next().ok_or_else(|| parse_error(s))?;
        if chars.next().is_some() {
            return Err(parse_error(s));
        }
        let color = color_from_char(color_ch).ok_or_else(|| parse_error(s))?;

        if let Some(value) = kind_ch.to_digit(10) {
            return Ok(Card::Number {
                color,
                value: value as u8,
            });
        }
        let action = match kind_ch {
            'S' => ActionKind::Skip,
            'R' => ActionKind::Reverse,
            'D' => ActionKind::DrawTwo,
            _ => return Err(parse_error(s)),
        };
        Ok(Card::Action { color, action })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number { color, value } => write!(f, "{}{}", color_to_char(*color), value),
            Card::Action { color, action } => {
                let ch = match action {
                    ActionKind::Skip => 'S',
                    ActionKind::Reverse => 'R',
                    ActionKind::DrawTwo => 'D',
                };
                write!(f, "{}{}", color_to_char(*color), ch)
            }
            Card::Wild {
                action,
                chosen_color,
            } => {
                match action {
                    WildKind::Wild => write!(f, "W")?,
                    WildKind::WildDrawFour => write!(f, "W4")?,
                }
                if let Some(color) = chosen_color {
                    write!(f, "/{}", color_to_char(*color))?;
                }
                Ok(())
            }
        }
    }
}
