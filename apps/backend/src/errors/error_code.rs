//! Error codes for the Matcha backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that transport layers surface to clients.

use core::fmt;

/// Centralized error codes for the Matcha backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,

    // Resource Not Found
    /// Room not found
    RoomNotFound,
    /// Player not found in the room roster
    PlayerNotFound,
    /// Hand record missing for a roster member
    HandNotFound,

    // Room Status
    /// Mutating operation before the first deal
    GameNotStarted,
    /// Start requested on a room already playing
    GameAlreadyStarted,
    /// Mutating operation on a finished room
    GameFinished,
    /// Start requested with fewer than two players
    NotEnoughPlayers,

    // Play Validation
    /// Caller is not the current turn holder
    OutOfTurn,
    /// Card not in hand
    CardNotInHand,
    /// Wild played without a chosen color
    WildNeedsColor,
    /// Active penalty must be drawn or stacked
    MustDrawPending,
    /// Active chain belongs to another player
    ChainNotHeld,
    /// Card does not carry the active chain value
    ChainValueMismatch,
    /// Card does not match the top card
    IllegalPlay,
    /// Card token failed to parse
    ParseCard,

    // Resources
    /// Draw pile cannot cover a required draw
    DrawPileExhausted,

    // System Errors
    /// Store unavailable
    StoreUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Commit conflicts exhausted the retry budget
    RetriesExhausted,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::HandNotFound => "HAND_NOT_FOUND",

            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameFinished => "GAME_FINISHED",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::WildNeedsColor => "WILD_NEEDS_COLOR",
            Self::MustDrawPending => "MUST_DRAW_PENDING",
            Self::ChainNotHeld => "CHAIN_NOT_HELD",
            Self::ChainValueMismatch => "CHAIN_VALUE_MISMATCH",
            Self::IllegalPlay => "ILLEGAL_PLAY",
            Self::ParseCard => "PARSE_CARD",

            Self::DrawPileExhausted => "DRAW_PILE_EXHAUSTED",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::RetriesExhausted => "RETRIES_EXHAUSTED",
            Self::Internal => "INTERNAL",
        }
    }

    /// Every code, for exhaustive uniqueness checks in tests.
    pub const ALL: [ErrorCode; 21] = [
        Self::Unauthorized,
        Self::RoomNotFound,
        Self::PlayerNotFound,
        Self::HandNotFound,
        Self::GameNotStarted,
        Self::GameAlreadyStarted,
        Self::GameFinished,
        Self::NotEnoughPlayers,
        Self::OutOfTurn,
        Self::CardNotInHand,
        Self::WildNeedsColor,
        Self::MustDrawPending,
        Self::ChainNotHeld,
        Self::ChainValueMismatch,
        Self::IllegalPlay,
        Self::ParseCard,
        Self::DrawPileExhausted,
        Self::StoreUnavailable,
        Self::DataCorruption,
        Self::RetriesExhausted,
        Self::Internal,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
