use crate::domain::rules::DECK_SIZE;
use crate::domain::state::{Direction, PendingKind, RoomStatus};
use crate::domain::table::{draw_one, end_turn, play_card, playable_cards, start_game};
use crate::domain::test_state_helpers::{card, hand, playing_ctx, waiting_ctx};
use crate::errors::domain::{DomainError, InvalidStateKind, RuleViolationKind};
use crate::errors::ErrorCode;

fn turn(ctx: &crate::domain::RoomCtx) -> &str {
    ctx.room.current_turn.as_deref().unwrap()
}

// --- start_game ---

#[test]
fn start_deals_seven_each_and_flips_a_non_wild_top() {
    let mut ctx = waiting_ctx("room-start", &["a", "b", "c"]);
    start_game(&mut ctx).unwrap();

    assert_eq!(ctx.room.status, RoomStatus::Playing);
    assert_eq!(turn(&ctx), "a");
    assert_eq!(ctx.room.direction, Direction::Clockwise);
    for seat in &ctx.seats {
        assert_eq!(seat.hand_count, 7);
        assert_eq!(ctx.hand(&seat.uid).len(), 7);
    }
    let top = ctx.room.top_card.unwrap();
    assert!(!top.is_wild());
    assert_eq!(ctx.room.discard_pile, vec![top]);
    assert_eq!(ctx.room.pending_draw, 0);
    assert_eq!(ctx.room.pending_kind, PendingKind::None);
    assert_eq!(ctx.room.chain_value, None);
    assert_eq!(ctx.total_cards(), DECK_SIZE);
}

#[test]
fn start_is_deterministic_for_a_stored_seed() {
    let mut first = waiting_ctx("room-seeded", &["a", "b"]);
    first.room.rng_seed = Some(1234);
    let mut second = first.clone();
    start_game(&mut first).unwrap();
    start_game(&mut second).unwrap();
    // A retried start replays the identical shuffle.
    assert_eq!(first, second);
}

#[test]
fn start_without_a_seed_hashes_the_room_id() {
    let mut a1 = waiting_ctx("room-a", &["a", "b"]);
    let mut a2 = waiting_ctx("room-a", &["a", "b"]);
    let mut b = waiting_ctx("room-b", &["a", "b"]);
    start_game(&mut a1).unwrap();
    start_game(&mut a2).unwrap();
    start_game(&mut b).unwrap();
    assert_eq!(a1.room.draw_pile, a2.room.draw_pile);
    assert_ne!(a1.room.draw_pile, b.room.draw_pile);
}

#[test]
fn start_needs_two_players() {
    let mut ctx = waiting_ctx("room-solo", &["a"]);
    let before = ctx.clone();
    let err = start_game(&mut ctx).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotEnoughPlayers);
    assert_eq!(ctx, before);
}

#[test]
fn start_twice_is_rejected() {
    let mut ctx = waiting_ctx("room-twice", &["a", "b"]);
    start_game(&mut ctx).unwrap();
    let err = start_game(&mut ctx).unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameAlreadyStarted);
}

// --- play_card basics ---

#[test]
fn plain_number_passes_the_turn() {
    let mut ctx = playing_ctx(&[("a", &["R7", "GS"]), ("b", &["B3"])], "R5");
    let outcome = play_card(&mut ctx, "a", card("R7")).unwrap();
    assert_eq!(ctx.room.top_card, Some(card("R7")));
    assert_eq!(*ctx.room.discard_pile.last().unwrap(), card("R7"));
    assert_eq!(ctx.hand("a"), hand(&["GS"]));
    assert_eq!(ctx.seats[0].hand_count, 1);
    assert_eq!(turn(&ctx), "b");
    assert!(!outcome.chain_open);
    assert_eq!(outcome.winner, None);
}

#[test]
fn out_of_turn_play_is_rejected() {
    let mut ctx = playing_ctx(&[("a", &["R7"]), ("b", &["B3"])], "R5");
    let err = play_card(&mut ctx, "b", card("B3")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::OutOfTurn);
}

#[test]
fn card_must_be_in_hand() {
    let mut ctx = playing_ctx(&[("a", &["R7"]), ("b", &["B3"])], "R5");
    let err = play_card(&mut ctx, "a", card("R9")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CardNotInHand);
}

#[test]
fn illegal_play_leaves_the_room_untouched() {
    let mut ctx = playing_ctx(&[("a", &["B3", "R7"]), ("b", &["G2"])], "R5");
    let before = ctx.clone();
    let err = play_card(&mut ctx, "a", card("B3")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::RuleViolation(RuleViolationKind::IllegalPlay, _)
    ));
    assert_eq!(ctx, before);
}

#[test]
fn wild_without_a_chosen_color_is_rejected() {
    let mut ctx = playing_ctx(&[("a", &["W", "R7"]), ("b", &["G2"])], "R5");
    let before = ctx.clone();
    let err = play_card(&mut ctx, "a", card("W")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::WildNeedsColor);
    assert_eq!(ctx, before);
}

#[test]
fn wild_commits_its_color_on_the_table() {
    let mut ctx = playing_ctx(&[("a", &["W", "R7"]), ("b", &["G2"])], "R5");
    play_card(&mut ctx, "a", card("W/G")).unwrap();
    assert_eq!(ctx.room.top_card, Some(card("W/G")));
    // The hand loses the uncommitted wild.
    assert_eq!(ctx.hand("a"), hand(&["R7"]));
    assert_eq!(turn(&ctx), "b");
    // Follow-up must honor the chosen color.
    play_card(&mut ctx, "b", card("G2")).unwrap();
    assert_eq!(ctx.room.top_card, Some(card("G2")));
}

// --- skip / reverse ---

#[test]
fn skip_jumps_the_next_player() {
    let mut ctx = playing_ctx(&[("a", &["RS", "R1"]), ("b", &["G2"]), ("c", &["Y3"])], "R5");
    play_card(&mut ctx, "a", card("RS")).unwrap();
    assert_eq!(turn(&ctx), "c");
}

#[test]
fn skip_heads_up_returns_to_the_caller() {
    let mut ctx = playing_ctx(&[("a", &["RS", "R1"]), ("b", &["G2"])], "R5");
    play_card(&mut ctx, "a", card("RS")).unwrap();
    assert_eq!(turn(&ctx), "a");
}

#[test]
fn reverse_flips_direction_with_three_players() {
    let mut ctx = playing_ctx(&[("a", &["RR", "R1"]), ("b", &["G2"]), ("c", &["Y3"])], "R5");
    play_card(&mut ctx, "a", card("RR")).unwrap();
    assert_eq!(ctx.room.direction, Direction::CounterClockwise);
    // Next under the new direction is the player behind the caller.
    assert_eq!(turn(&ctx), "c");
}

#[test]
fn reverse_heads_up_keeps_the_caller_on_turn() {
    let mut ctx = playing_ctx(&[("a", &["RR", "R1"]), ("b", &["G2"])], "R5");
    play_card(&mut ctx, "a", card("RR")).unwrap();
    assert_eq!(ctx.room.direction, Direction::CounterClockwise);
    assert_eq!(turn(&ctx), "a");
    // The opponent lost their turn; the caller moves again.
    play_card(&mut ctx, "a", card("R1")).unwrap();
    assert_eq!(turn(&ctx), "b");
}

// --- stacking penalties ---

#[test]
fn draw_two_chain_accumulates_then_resolves() {
    let mut ctx = playing_ctx(
        &[
            ("a", &["RD", "R1"]),
            ("b", &["BD", "B1"]),
            ("c", &["G2", "G3"]),
        ],
        "R5",
    );

    let outcome = play_card(&mut ctx, "a", card("RD")).unwrap();
    assert_eq!(ctx.room.pending_draw, 2);
    assert_eq!(ctx.room.pending_kind, PendingKind::DrawTwo);
    assert_eq!(outcome.pending_after, 2);
    assert_eq!(turn(&ctx), "b");

    play_card(&mut ctx, "b", card("BD")).unwrap();
    assert_eq!(ctx.room.pending_draw, 4);
    assert_eq!(ctx.room.pending_kind, PendingKind::DrawTwo);
    assert_eq!(turn(&ctx), "c");

    // c holds no draw two and must draw the accumulated penalty.
    let pile_before = ctx.room.draw_pile.len();
    let outcome = draw_one(&mut ctx, "c").unwrap();
    assert_eq!(outcome.drawn, 4);
    assert!(outcome.turn_passed);
    assert_eq!(ctx.hand("c").len(), 6);
    assert_eq!(ctx.room.draw_pile.len(), pile_before - 4);
    assert_eq!(ctx.room.pending_draw, 0);
    assert_eq!(ctx.room.pending_kind, PendingKind::None);
    assert_eq!(turn(&ctx), "a");
}

#[test]
fn non_stacking_card_is_rejected_with_the_amount_owed() {
    let mut ctx = playing_ctx(&[("a", &["RD"]), ("b", &["B1", "BD"]), ("c", &["G2"])], "R5");
    play_card(&mut ctx, "a", card("RD")).unwrap();
    let err = play_card(&mut ctx, "b", card("B1")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::RuleViolation(RuleViolationKind::MustDrawPending { owed: 2 }, _)
    ));
}

#[test]
fn draw_four_stacks_only_on_draw_four() {
    let mut ctx = playing_ctx(
        &[("a", &["W4", "R1"]), ("b", &["W4", "BD"]), ("c", &["G2"])],
        "R5",
    );
    play_card(&mut ctx, "a", card("W4/G")).unwrap();
    assert_eq!(ctx.room.pending_draw, 4);
    assert_eq!(ctx.room.pending_kind, PendingKind::DrawFour);

    // A draw two never answers a wild draw four.
    let err = play_card(&mut ctx, "b", card("BD")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MustDrawPending);

    play_card(&mut ctx, "b", card("W4/R")).unwrap();
    assert_eq!(ctx.room.pending_draw, 8);
    assert_eq!(ctx.room.pending_kind, PendingKind::DrawFour);
    assert_eq!(turn(&ctx), "c");
}

#[test]
fn penalty_draw_fails_cleanly_when_the_pile_is_short() {
    let mut ctx = playing_ctx(&[("a", &["RD"]), ("b", &["B1"])], "R5");
    play_card(&mut ctx, "a", card("RD")).unwrap();
    ctx.room.draw_pile = hand(&["G2"]);
    let before = ctx.clone();
    let err = draw_one(&mut ctx, "b").unwrap_err();
    assert_eq!(err.code(), ErrorCode::DrawPileExhausted);
    assert_eq!(ctx, before);
}

// --- chains ---

#[test]
fn duplicate_number_opens_a_chain_and_holds_the_turn() {
    let mut ctx = playing_ctx(&[("a", &["R7", "B7", "G2"]), ("b", &["Y1"])], "R5");
    let outcome = play_card(&mut ctx, "a", card("R7")).unwrap();
    assert!(outcome.chain_open);
    assert_eq!(ctx.room.chain_value, Some(7));
    assert_eq!(ctx.room.chain_player.as_deref(), Some("a"));
    assert_eq!(turn(&ctx), "a");

    // The second seven closes the chain and passes the turn.
    let outcome = play_card(&mut ctx, "a", card("B7")).unwrap();
    assert!(!outcome.chain_open);
    assert_eq!(ctx.room.chain_value, None);
    assert_eq!(ctx.room.chain_player, None);
    assert_eq!(turn(&ctx), "b");
}

#[test]
fn chain_persists_while_duplicates_remain() {
    let mut ctx = playing_ctx(&[("a", &["R7", "B7", "G7"]), ("b", &["Y1"])], "R5");
    play_card(&mut ctx, "a", card("R7")).unwrap();
    let outcome = play_card(&mut ctx, "a", card("B7")).unwrap();
    assert!(outcome.chain_open);
    assert_eq!(turn(&ctx), "a");
    // Playing the last seven empties the hand and wins instead.
    let outcome = play_card(&mut ctx, "a", card("G7")).unwrap();
    assert_eq!(outcome.winner.as_deref(), Some("a"));
}

#[test]
fn chain_rejects_other_values() {
    let mut ctx = playing_ctx(&[("a", &["R7", "B7", "R2"]), ("b", &["Y1"])], "R5");
    play_card(&mut ctx, "a", card("R7")).unwrap();
    let err = play_card(&mut ctx, "a", card("R2")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::RuleViolation(RuleViolationKind::ChainValueMismatch { required: 7 }, _)
    ));
}

#[test]
fn voluntary_draw_breaks_an_open_chain() {
    let mut ctx = playing_ctx(&[("a", &["R7", "B7"]), ("b", &["Y1"])], "R5");
    play_card(&mut ctx, "a", card("R7")).unwrap();
    assert_eq!(ctx.room.chain_value, Some(7));
    let outcome = draw_one(&mut ctx, "a").unwrap();
    assert!(!outcome.turn_passed);
    assert_eq!(ctx.room.chain_value, None);
    assert_eq!(ctx.room.chain_player, None);
    // Turn retained; the caller relinquishes it explicitly.
    assert_eq!(turn(&ctx), "a");
}

// --- draws and end_turn ---

#[test]
fn voluntary_draw_retains_the_turn_and_repeats() {
    let mut ctx = playing_ctx(&[("a", &["R7"]), ("b", &["Y1"])], "B9");
    let hand_before = ctx.hand("a").len();
    draw_one(&mut ctx, "a").unwrap();
    draw_one(&mut ctx, "a").unwrap();
    draw_one(&mut ctx, "a").unwrap();
    assert_eq!(ctx.hand("a").len(), hand_before + 3);
    assert_eq!(ctx.seats[0].hand_count as usize, hand_before + 3);
    assert_eq!(turn(&ctx), "a");
    end_turn(&mut ctx, "a").unwrap();
    assert_eq!(turn(&ctx), "b");
}

#[test]
fn voluntary_draw_on_an_empty_pile_is_an_error() {
    let mut ctx = playing_ctx(&[("a", &["R7"]), ("b", &["Y1"])], "B9");
    ctx.room.draw_pile.clear();
    let before = ctx.clone();
    let err = draw_one(&mut ctx, "a").unwrap_err();
    assert_eq!(err.code(), ErrorCode::DrawPileExhausted);
    assert_eq!(ctx, before);
}

#[test]
fn end_turn_passes_and_leaves_a_pending_penalty_in_place() {
    let mut ctx = playing_ctx(&[("a", &["RD"]), ("b", &["B1"]), ("c", &["G2"])], "R5");
    play_card(&mut ctx, "a", card("RD")).unwrap();
    assert_eq!(turn(&ctx), "b");
    // b declines to stack or draw and passes; the penalty travels on.
    end_turn(&mut ctx, "b").unwrap();
    assert_eq!(turn(&ctx), "c");
    assert_eq!(ctx.room.pending_draw, 2);
    assert_eq!(ctx.room.pending_kind, PendingKind::DrawTwo);
}

#[test]
fn end_turn_respects_direction() {
    let mut ctx = playing_ctx(&[("a", &["RR", "R1"]), ("b", &["G2"]), ("c", &["Y3"])], "R5");
    play_card(&mut ctx, "a", card("RR")).unwrap();
    assert_eq!(turn(&ctx), "c");
    end_turn(&mut ctx, "c").unwrap();
    assert_eq!(turn(&ctx), "b");
}

// --- winning ---

#[test]
fn playing_the_last_card_finishes_the_room() {
    let mut ctx = playing_ctx(&[("a", &["R7"]), ("b", &["Y1", "Y2"])], "R5");
    let outcome = play_card(&mut ctx, "a", card("R7")).unwrap();
    assert_eq!(outcome.winner.as_deref(), Some("a"));
    assert_eq!(ctx.room.status, RoomStatus::Finished);
    assert_eq!(ctx.room.winner_uid.as_deref(), Some("a"));
    assert_eq!(ctx.room.pending_draw, 0);
    assert_eq!(ctx.room.chain_value, None);
    assert_eq!(ctx.seats[0].hand_count, 0);
}

#[test]
fn winning_with_a_stacked_penalty_clears_it() {
    let mut ctx = playing_ctx(&[("a", &["RD", "R1"]), ("b", &["BD"]), ("c", &["G2"])], "R5");
    play_card(&mut ctx, "a", card("RD")).unwrap();
    // b stacks their last card and wins; the penalty dies with the game.
    let outcome = play_card(&mut ctx, "b", card("BD")).unwrap();
    assert_eq!(outcome.winner.as_deref(), Some("b"));
    assert_eq!(ctx.room.status, RoomStatus::Finished);
    assert_eq!(ctx.room.pending_draw, 0);
    assert_eq!(ctx.room.pending_kind, PendingKind::None);
}

#[test]
fn finished_rooms_reject_every_mutation() {
    let mut ctx = playing_ctx(&[("a", &["R7"]), ("b", &["Y1"])], "R5");
    play_card(&mut ctx, "a", card("R7")).unwrap();
    for err in [
        play_card(&mut ctx, "b", card("Y1")).unwrap_err(),
        draw_one(&mut ctx, "b").unwrap_err(),
        end_turn(&mut ctx, "b").unwrap_err(),
        start_game(&mut ctx).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            DomainError::InvalidState(InvalidStateKind::Finished, _)
        ));
    }
}

#[test]
fn waiting_rooms_reject_play() {
    let mut ctx = waiting_ctx("room-wait", &["a", "b"]);
    let err = draw_one(&mut ctx, "a").unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotStarted);
}

// --- playable_cards ---

#[test]
fn playable_cards_follow_the_active_constraint() {
    let mut ctx = playing_ctx(
        &[("a", &["R7", "B3", "W", "RD"]), ("b", &["BD", "B1"])],
        "R5",
    );
    // No constraint: color/value matches plus wilds.
    assert_eq!(playable_cards(&ctx, "a"), hand(&["R7", "W", "RD"]));
    // Not their turn: nothing.
    assert!(playable_cards(&ctx, "b").is_empty());

    play_card(&mut ctx, "a", card("RD")).unwrap();
    // Pending draw two: only stacking cards.
    assert_eq!(playable_cards(&ctx, "b"), hand(&["BD"]));
}

#[test]
fn playable_cards_during_a_chain() {
    let mut ctx = playing_ctx(&[("a", &["R7", "B7", "G2", "W"]), ("b", &["Y1"])], "R5");
    play_card(&mut ctx, "a", card("R7")).unwrap();
    assert_eq!(playable_cards(&ctx, "a"), hand(&["B7"]));
}

#[test]
fn playable_cards_empty_when_not_playing() {
    let ctx = waiting_ctx("room-wait", &["a", "b"]);
    assert!(playable_cards(&ctx, "a").is_empty());
}
