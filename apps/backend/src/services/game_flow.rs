//! Game flow orchestration service - bridges the pure rule engine with the
//! transactional store.
//!
//! Each method authenticates the caller, runs one pure table operation
//! inside a [`with_room_txn`] read-compute-commit, and returns the public
//! snapshot of the committed state. Commit conflicts retry transparently;
//! every domain error aborts with nothing written.

use std::sync::Arc;

use tracing::{debug, info};

use crate::auth::Caller;
use crate::config::TxnConfig;
use crate::domain::{table, Card, RoomSnapshot};
use crate::errors::DomainError;
use crate::repos;
use crate::store::txn::with_room_txn;
use crate::store::RoomStore;

pub struct GameFlowService {
    store: Arc<dyn RoomStore>,
    txn: TxnConfig,
}

impl GameFlowService {
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self::with_config(store, TxnConfig::default())
    }

    pub fn with_config(store: Arc<dyn RoomStore>, txn: TxnConfig) -> Self {
        Self { store, txn }
    }

    /// Deal a waiting room into play.
    pub async fn start_game(
        &self,
        caller: &Caller,
        room_id: &str,
    ) -> Result<RoomSnapshot, DomainError> {
        let uid = caller.require_uid()?;
        debug!(room_id, uid, "start game requested");
        let snapshot = with_room_txn(self.store.as_ref(), &self.txn, room_id, |txn| {
            let mut ctx = repos::load_room_ctx(txn)?;
            table::start_game(&mut ctx)?;
            repos::stage_room_ctx(txn, &ctx)?;
            Ok(RoomSnapshot::project(room_id, &ctx.room, &ctx.seats))
        })
        .await?;
        info!(
            room_id,
            uid,
            players = snapshot.players.len(),
            current_turn = ?snapshot.current_turn,
            "game started"
        );
        Ok(snapshot)
    }

    /// Play a card from the caller's hand. A wild must arrive with its
    /// color chosen.
    pub async fn play_card(
        &self,
        caller: &Caller,
        room_id: &str,
        card: Card,
    ) -> Result<RoomSnapshot, DomainError> {
        let uid = caller.require_uid()?;
        debug!(room_id, uid, %card, "play card requested");
        let (snapshot, outcome) = with_room_txn(self.store.as_ref(), &self.txn, room_id, |txn| {
            let mut ctx = repos::load_room_ctx(txn)?;
            let outcome = table::play_card(&mut ctx, uid, card)?;
            repos::stage_room_ctx(txn, &ctx)?;
            Ok((
                RoomSnapshot::project(room_id, &ctx.room, &ctx.seats),
                outcome,
            ))
        })
        .await?;
        info!(
            room_id,
            uid,
            %card,
            winner = ?outcome.winner,
            chain_open = outcome.chain_open,
            pending_after = outcome.pending_after,
            next_turn = ?outcome.next_turn,
            "card played"
        );
        Ok(snapshot)
    }

    /// Draw the owed penalty, or one voluntary card that keeps the turn.
    pub async fn draw_one(
        &self,
        caller: &Caller,
        room_id: &str,
    ) -> Result<RoomSnapshot, DomainError> {
        let uid = caller.require_uid()?;
        debug!(room_id, uid, "draw requested");
        let (snapshot, outcome) = with_room_txn(self.store.as_ref(), &self.txn, room_id, |txn| {
            let mut ctx = repos::load_room_ctx(txn)?;
            let outcome = table::draw_one(&mut ctx, uid)?;
            repos::stage_room_ctx(txn, &ctx)?;
            Ok((
                RoomSnapshot::project(room_id, &ctx.room, &ctx.seats),
                outcome,
            ))
        })
        .await?;
        info!(
            room_id,
            uid,
            drawn = outcome.drawn,
            turn_passed = outcome.turn_passed,
            "cards drawn"
        );
        Ok(snapshot)
    }

    /// Relinquish the turn.
    pub async fn end_turn(
        &self,
        caller: &Caller,
        room_id: &str,
    ) -> Result<RoomSnapshot, DomainError> {
        let uid = caller.require_uid()?;
        debug!(room_id, uid, "end turn requested");
        let snapshot = with_room_txn(self.store.as_ref(), &self.txn, room_id, |txn| {
            let mut ctx = repos::load_room_ctx(txn)?;
            table::end_turn(&mut ctx, uid)?;
            repos::stage_room_ctx(txn, &ctx)?;
            Ok(RoomSnapshot::project(room_id, &ctx.room, &ctx.seats))
        })
        .await?;
        info!(room_id, uid, next_turn = ?snapshot.current_turn, "turn ended");
        Ok(snapshot)
    }

    /// Public view of a room. No authentication: the snapshot only carries
    /// what everyone at the table may see.
    pub async fn read_room(&self, room_id: &str) -> Result<RoomSnapshot, DomainError> {
        let txn = self.store.begin(room_id).await.map_err(DomainError::from)?;
        let room = repos::rooms::require(&txn)?;
        let seats = repos::players::load_roster(&txn)?;
        Ok(RoomSnapshot::project(room_id, &room, &seats))
    }
}
