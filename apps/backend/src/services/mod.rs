//! Service layer: authenticated, transactional entry points.

pub mod game_flow;

pub use game_flow::GameFlowService;
