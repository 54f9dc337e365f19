//! The room state machine: the four table operations, pure over [`RoomCtx`].
//!
//! Every operation validates all of its preconditions before touching the
//! context, so an `Err` always leaves the context exactly as it was read.
//! The service layer runs each operation inside one store transaction and
//! only stages writes on `Ok`.

use crate::domain::cards_logic::{card_matches, find_card, hand_has_value};
use crate::domain::cards_types::Card;
use crate::domain::dealing::{deal_hands, derive_shuffle_seed, reveal_first_top, shuffled_deck};
use crate::domain::rules::{
    DRAW_TWO_PENALTY, INITIAL_HAND_SIZE, MIN_PLAYERS, WILD_DRAW_FOUR_PENALTY,
};
use crate::domain::state::{seat_offset, Direction, PendingKind, RoomCtx, RoomStatus, Uid};
use crate::errors::domain::{DomainError, InvalidStateKind, RuleViolationKind};

/// What a committed play did, for callers and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Set when this play emptied the caller's hand and finished the game.
    pub winner: Option<Uid>,
    /// A same-value chain is open (held by the caller) after this play.
    pub chain_open: bool,
    /// Accumulated forced-draw penalty after this play.
    pub pending_after: u8,
    /// Turn holder after this play.
    pub next_turn: Option<Uid>,
}

/// What a committed draw did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards moved from the draw pile to the caller's hand.
    pub drawn: u8,
    /// False for a voluntary draw: the caller keeps the turn.
    pub turn_passed: bool,
}

fn ensure_playing(ctx: &RoomCtx) -> Result<(), DomainError> {
    match ctx.room.status {
        RoomStatus::Playing => Ok(()),
        RoomStatus::Waiting => Err(DomainError::invalid_state(
            InvalidStateKind::NotStarted,
            format!("room {} has not been dealt yet", ctx.room_id),
        )),
        RoomStatus::Finished => Err(DomainError::invalid_state(
            InvalidStateKind::Finished,
            format!("room {} is finished", ctx.room_id),
        )),
    }
}

fn ensure_turn(ctx: &RoomCtx, caller: &str) -> Result<usize, DomainError> {
    if ctx.room.current_turn.as_deref() != Some(caller) {
        return Err(DomainError::turn_violation(format!(
            "it is not {caller}'s turn in room {}",
            ctx.room_id
        )));
    }
    ctx.seat_index(caller).ok_or_else(|| {
        DomainError::turn_violation(format!("{caller} holds the turn but has no seat"))
    })
}

fn pass_turn(ctx: &mut RoomCtx, from: usize, steps: i32) {
    let count = ctx.seats.len();
    let to = seat_offset(count, from, ctx.room.direction.step() * steps);
    ctx.room.current_turn = Some(ctx.seats[to].uid.clone());
}

/// Deal a waiting room into play.
///
/// Shuffles from the room's stored seed (deterministic room-id fallback),
/// deals seven cards to each seat in roster order, reveals a non-wild top
/// card, and hands the turn to the first roster entry.
pub fn start_game(ctx: &mut RoomCtx) -> Result<(), DomainError> {
    match ctx.room.status {
        RoomStatus::Waiting => {}
        RoomStatus::Playing => {
            return Err(DomainError::invalid_state(
                InvalidStateKind::AlreadyStarted,
                format!("room {} is already playing", ctx.room_id),
            ))
        }
        RoomStatus::Finished => {
            return Err(DomainError::invalid_state(
                InvalidStateKind::Finished,
                format!("room {} is finished", ctx.room_id),
            ))
        }
    }
    if ctx.seats.len() < MIN_PLAYERS {
        return Err(DomainError::invalid_state(
            InvalidStateKind::NotEnoughPlayers,
            format!(
                "room {} has {} players, needs at least {MIN_PLAYERS}",
                ctx.room_id,
                ctx.seats.len()
            ),
        ));
    }

    let seed = derive_shuffle_seed(ctx.room.rng_seed, &ctx.room_id);
    let mut deck = shuffled_deck(seed);
    let dealt = deal_hands(&mut deck, ctx.seats.len(), INITIAL_HAND_SIZE);
    let top = reveal_first_top(&mut deck)?;

    for (seat, hand) in ctx.seats.iter_mut().zip(dealt) {
        seat.hand_count = hand.len() as u8;
        ctx.hands.insert(seat.uid.clone(), hand);
    }
    ctx.room.status = RoomStatus::Playing;
    ctx.room.current_turn = Some(ctx.seats[0].uid.clone());
    ctx.room.direction = Direction::Clockwise;
    ctx.room.top_card = Some(top);
    ctx.room.discard_pile = vec![top];
    ctx.room.draw_pile = deck;
    ctx.room.clear_pending();
    ctx.room.clear_chain();
    ctx.room.winner_uid = None;
    Ok(())
}

/// Play `card` from the caller's hand onto the table.
///
/// The card must be in the hand by structural equality and legal under the
/// active constraint: stack on an open penalty, continue an open chain, or
/// match the top card. A wild must arrive with its color chosen.
pub fn play_card(ctx: &mut RoomCtx, caller: &str, card: Card) -> Result<PlayOutcome, DomainError> {
    ensure_playing(ctx)?;
    let seat_idx = ensure_turn(ctx, caller)?;

    let pos = find_card(ctx.hand(caller), &card).ok_or_else(|| {
        DomainError::rule_violation(
            RuleViolationKind::CardNotInHand,
            format!("{card} is not in {caller}'s hand"),
        )
    })?;
    if let Card::Wild {
        chosen_color: None, ..
    } = card
    {
        return Err(DomainError::rule_violation(
            RuleViolationKind::WildNeedsColor,
            format!("{card} needs a chosen color"),
        ));
    }

    let was_pending = ctx.room.pending_draw > 0;
    let active_chain = ctx.room.chain_value;
    if was_pending {
        let stacks = match ctx.room.pending_kind {
            PendingKind::DrawTwo => card.is_draw_two(),
            PendingKind::DrawFour => card.is_wild_draw_four(),
            PendingKind::None => false,
        };
        if !stacks {
            let owed = ctx.room.pending_draw;
            return Err(DomainError::rule_violation(
                RuleViolationKind::MustDrawPending { owed },
                format!("{card} does not stack; draw {owed} instead"),
            ));
        }
    } else if let Some(required) = active_chain {
        if ctx.room.chain_player.as_deref() != Some(caller) {
            return Err(DomainError::rule_violation(
                RuleViolationKind::ChainNotHeld,
                format!("the active chain does not belong to {caller}"),
            ));
        }
        if card.number_value() != Some(required) {
            return Err(DomainError::rule_violation(
                RuleViolationKind::ChainValueMismatch { required },
                format!("{card} does not continue the {required}-chain"),
            ));
        }
    } else if !card_matches(ctx.room.top_card.as_ref(), &card) {
        return Err(DomainError::rule_violation(
            RuleViolationKind::IllegalPlay,
            format!("{card} does not match the top card"),
        ));
    }

    // All preconditions hold; mutate.
    ctx.hand_mut(caller).remove(pos);
    ctx.room.discard_pile.push(card);
    ctx.room.top_card = Some(card);
    ctx.sync_hand_count(caller);

    if ctx.hand(caller).is_empty() {
        ctx.room.status = RoomStatus::Finished;
        ctx.room.winner_uid = Some(caller.to_string());
        ctx.room.clear_pending();
        ctx.room.clear_chain();
        return Ok(PlayOutcome {
            winner: Some(caller.to_string()),
            chain_open: false,
            pending_after: 0,
            next_turn: ctx.room.current_turn.clone(),
        });
    }

    let mut chain_open = false;
    if was_pending {
        ctx.room.pending_draw += if card.is_draw_two() {
            DRAW_TWO_PENALTY
        } else {
            WILD_DRAW_FOUR_PENALTY
        };
        pass_turn(ctx, seat_idx, 1);
    } else if let Some(required) = active_chain {
        if hand_has_value(ctx.hand(caller), required) {
            // Chain persists, caller plays again.
            chain_open = true;
        } else {
            ctx.room.clear_chain();
            pass_turn(ctx, seat_idx, 1);
        }
    } else {
        match card {
            _ if card.is_skip() => {
                pass_turn(ctx, seat_idx, 2);
            }
            _ if card.is_reverse() => {
                ctx.room.direction = ctx.room.direction.flip();
                if ctx.seats.len() == 2 {
                    // Heads-up a reverse acts as a skip: the caller keeps
                    // the turn.
                } else {
                    pass_turn(ctx, seat_idx, 1);
                }
            }
            _ if card.is_draw_two() => {
                ctx.room.pending_draw = DRAW_TWO_PENALTY;
                ctx.room.pending_kind = PendingKind::DrawTwo;
                pass_turn(ctx, seat_idx, 1);
            }
            _ if card.is_wild_draw_four() => {
                ctx.room.pending_draw = WILD_DRAW_FOUR_PENALTY;
                ctx.room.pending_kind = PendingKind::DrawFour;
                pass_turn(ctx, seat_idx, 1);
            }
            Card::Number { value, .. } if hand_has_value(ctx.hand(caller), value) => {
                ctx.room.chain_value = Some(value);
                ctx.room.chain_player = Some(caller.to_string());
                chain_open = true;
            }
            _ => {
                // Plain wild or a number without a duplicate.
                pass_turn(ctx, seat_idx, 1);
            }
        }
    }

    Ok(PlayOutcome {
        winner: None,
        chain_open,
        pending_after: ctx.room.pending_draw,
        next_turn: ctx.room.current_turn.clone(),
    })
}

/// Draw from the pile: the owed penalty when one is open, otherwise a single
/// voluntary card that leaves the turn with the caller.
pub fn draw_one(ctx: &mut RoomCtx, caller: &str) -> Result<DrawOutcome, DomainError> {
    ensure_playing(ctx)?;
    let seat_idx = ensure_turn(ctx, caller)?;

    if ctx.room.pending_draw > 0 {
        let owed = ctx.room.pending_draw as usize;
        if ctx.room.draw_pile.len() < owed {
            return Err(DomainError::resource_exhausted(format!(
                "penalty needs {owed} cards, draw pile holds {}",
                ctx.room.draw_pile.len()
            )));
        }
        for _ in 0..owed {
            if let Some(card) = ctx.room.draw_pile.pop() {
                ctx.hand_mut(caller).push(card);
            }
        }
        ctx.room.clear_pending();
        ctx.room.clear_chain();
        ctx.sync_hand_count(caller);
        pass_turn(ctx, seat_idx, 1);
        return Ok(DrawOutcome {
            drawn: owed as u8,
            turn_passed: true,
        });
    }

    let Some(card) = ctx.room.draw_pile.pop() else {
        return Err(DomainError::resource_exhausted(format!(
            "draw pile of room {} is empty",
            ctx.room_id
        )));
    };
    ctx.hand_mut(caller).push(card);
    // A number chain cannot survive a voluntary draw.
    ctx.room.clear_chain();
    ctx.sync_hand_count(caller);
    Ok(DrawOutcome {
        drawn: 1,
        turn_passed: false,
    })
}

/// Relinquish the turn. Clears chain state; an unresolved penalty travels
/// to the next player.
pub fn end_turn(ctx: &mut RoomCtx, caller: &str) -> Result<(), DomainError> {
    ensure_playing(ctx)?;
    let seat_idx = ensure_turn(ctx, caller)?;
    ctx.room.clear_chain();
    pass_turn(ctx, seat_idx, 1);
    Ok(())
}

/// The subset of `uid`'s hand the active constraint admits right now.
/// Empty when the room is not playing or the turn is elsewhere.
pub fn playable_cards(ctx: &RoomCtx, uid: &str) -> Vec<Card> {
    if ctx.room.status != RoomStatus::Playing || ctx.room.current_turn.as_deref() != Some(uid) {
        return Vec::new();
    }
    let hand = ctx.hand(uid);
    if ctx.room.pending_draw > 0 {
        return match ctx.room.pending_kind {
            PendingKind::DrawTwo => hand.iter().filter(|c| c.is_draw_two()).copied().collect(),
            PendingKind::DrawFour => hand
                .iter()
                .filter(|c| c.is_wild_draw_four())
                .copied()
                .collect(),
            PendingKind::None => Vec::new(),
        };
    }
    if let Some(required) = ctx.room.chain_value {
        if ctx.room.chain_player.as_deref() != Some(uid) {
            return Vec::new();
        }
        return hand
            .iter()
            .filter(|c| c.number_value() == Some(required))
            .copied()
            .collect();
    }
    hand.iter()
        .filter(|c| card_matches(ctx.room.top_card.as_ref(), c))
        .copied()
        .collect()
}
