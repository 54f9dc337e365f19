//! Fixtures shared by the integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use std::sync::Arc;

use backend_test_support::unique_helpers::unique_str;
use matcha_backend::domain::{PlayerSeat, RoomCtx, RoomState};
use matcha_backend::{repos, GameFlowService, InMemoryRoomStore, RoomStore};

pub const PLAYER_NAMES: [&str; 5] = ["alice", "bob", "carol", "dave", "erin"];

pub struct TestRoom {
    pub store: Arc<InMemoryRoomStore>,
    pub service: Arc<GameFlowService>,
    pub room_id: String,
    pub uids: Vec<String>,
}

pub fn seat(uid: &str, is_host: bool) -> PlayerSeat {
    PlayerSeat {
        uid: uid.to_string(),
        display_name: uid.to_string(),
        is_host,
        hand_count: 0,
    }
}

/// A freshly seeded waiting room with `players` seats and a fixed shuffle
/// seed, behind a service with default transaction config.
pub fn waiting_room(players: usize) -> TestRoom {
    let store = Arc::new(InMemoryRoomStore::new());
    let service = Arc::new(GameFlowService::new(
        store.clone() as Arc<dyn matcha_backend::RoomStore>
    ));
    let room_id = unique_str("room");
    let uids: Vec<String> = PLAYER_NAMES
        .iter()
        .take(players)
        .map(|name| name.to_string())
        .collect();
    let seats: Vec<PlayerSeat> = uids
        .iter()
        .enumerate()
        .map(|(i, uid)| seat(uid, i == 0))
        .collect();

    let mut room = RoomState::waiting();
    room.rng_seed = Some(42);
    room.host_uid = uids.first().cloned();
    store.put_room(&room_id, &room, &seats).unwrap();

    TestRoom {
        store,
        service,
        room_id,
        uids,
    }
}

/// Authoritative context straight from the store, the way a transaction
/// would read it.
pub async fn load_ctx(store: &InMemoryRoomStore, room_id: &str) -> RoomCtx {
    let txn = store.begin(room_id).await.unwrap();
    repos::load_room_ctx(&txn).unwrap()
}
