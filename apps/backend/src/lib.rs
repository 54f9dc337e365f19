#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;
pub mod store;

// Re-exports for public API
pub use auth::Caller;
pub use config::TxnConfig;
pub use domain::{Card, Color, RoomCtx, RoomSnapshot, RoomState, RoomStatus};
pub use errors::{DomainError, ErrorCode};
pub use services::GameFlowService;
pub use store::memory::InMemoryRoomStore;
pub use store::{RoomStore, RoomTxn};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
