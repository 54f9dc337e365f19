//! Domain-level error type used across the rule engine, repos, and services.
//!
//! This error type is transport- and store-agnostic. Every variant is
//! detected before any store write, so a returned error always means the
//! transaction was abandoned with no partial effect. Transport layers map
//! each error to its stable [`ErrorCode`](crate::errors::ErrorCode) via
//! [`DomainError::code`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Player,
    Hand,
}

/// Room-status preconditions that can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidStateKind {
    /// Mutating operation on a room still in `waiting`.
    NotStarted,
    /// `start_game` on a room already in `playing`.
    AlreadyStarted,
    /// Any mutating operation on a finished room.
    Finished,
    /// `start_game` with fewer than the minimum roster size.
    NotEnoughPlayers,
}

/// Unmet play constraints. Each kind carries what the caller needs to react
/// correctly (amount owed, required chain value).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleViolationKind {
    /// The proposed card is not in the caller's hand.
    CardNotInHand,
    /// A wild was played without a chosen color.
    WildNeedsColor,
    /// A forced-draw penalty is active and the card does not stack on it.
    MustDrawPending { owed: u8 },
    /// A chain is active but belongs to another player.
    ChainNotHeld,
    /// A chain is active and the card is not a number card of its value.
    ChainValueMismatch { required: u8 },
    /// The card does not match the top card.
    IllegalPlay,
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    DataCorruption,
    /// Commit conflicts exhausted the retry budget.
    RetriesExhausted,
    /// A card token in a fixture or log failed to parse.
    ParseCard,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No verified caller identity on a mutating call.
    Unauthorized(String),
    /// Missing resource in domain terms.
    NotFound(NotFoundKind, String),
    /// Room status disallows the operation.
    InvalidState(InvalidStateKind, String),
    /// Caller is not the current turn holder.
    TurnViolation(String),
    /// The card fails the active stacking/chain/match constraint.
    RuleViolation(RuleViolationKind, String),
    /// The draw pile cannot cover a required draw.
    ResourceExhausted(String),
    /// Infrastructure/operational failures.
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Unauthorized(d) => write!(f, "unauthorized: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::InvalidState(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
            DomainError::TurnViolation(d) => write!(f, "turn violation: {d}"),
            DomainError::RuleViolation(kind, d) => write!(f, "rule violation {kind:?}: {d}"),
            DomainError::ResourceExhausted(d) => write!(f, "resource exhausted: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::Unauthorized(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn invalid_state(kind: InvalidStateKind, detail: impl Into<String>) -> Self {
        Self::InvalidState(kind, detail.into())
    }
    pub fn turn_violation(detail: impl Into<String>) -> Self {
        Self::TurnViolation(detail.into())
    }
    pub fn rule_violation(kind: RuleViolationKind, detail: impl Into<String>) -> Self {
        Self::RuleViolation(kind, detail.into())
    }
    pub fn resource_exhausted(detail: impl Into<String>) -> Self {
        Self::ResourceExhausted(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Stable code for transport layers. Codes never change once shipped.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => ErrorCode::RoomNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Hand => ErrorCode::HandNotFound,
            },
            DomainError::InvalidState(kind, _) => match kind {
                InvalidStateKind::NotStarted => ErrorCode::GameNotStarted,
                InvalidStateKind::AlreadyStarted => ErrorCode::GameAlreadyStarted,
                InvalidStateKind::Finished => ErrorCode::GameFinished,
                InvalidStateKind::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
            },
            DomainError::TurnViolation(_) => ErrorCode::OutOfTurn,
            DomainError::RuleViolation(kind, _) => match kind {
                RuleViolationKind::CardNotInHand => ErrorCode::CardNotInHand,
                RuleViolationKind::WildNeedsColor => ErrorCode::WildNeedsColor,
                RuleViolationKind::MustDrawPending { .. } => ErrorCode::MustDrawPending,
                RuleViolationKind::ChainNotHeld => ErrorCode::ChainNotHeld,
                RuleViolationKind::ChainValueMismatch { .. } => ErrorCode::ChainValueMismatch,
                RuleViolationKind::IllegalPlay => ErrorCode::IllegalPlay,
            },
            DomainError::ResourceExhausted(_) => ErrorCode::DrawPileExhausted,
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::StoreUnavailable => ErrorCode::StoreUnavailable,
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::RetriesExhausted => ErrorCode::RetriesExhausted,
                InfraErrorKind::ParseCard => ErrorCode::ParseCard,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }
}
