//! Verified caller identity at the service boundary.
//!
//! Authentication itself is an external collaborator. The transport layer
//! verifies whatever credential it accepts and hands the service a [`Caller`]
//! carrying the verified uid, or nothing. The engine never authenticates.

use crate::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    uid: Option<String>,
}

impl Caller {
    /// A caller whose identity the boundary has verified.
    pub fn user(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
        }
    }

    /// A request that arrived with no verified identity.
    pub fn anonymous() -> Self {
        Self { uid: None }
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// Every mutating operation goes through here first.
    pub fn require_uid(&self) -> Result<&str, DomainError> {
        self.uid
            .as_deref()
            .ok_or_else(|| DomainError::unauthorized("no verified caller identity"))
    }
}
