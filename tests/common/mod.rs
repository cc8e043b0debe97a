#![allow(dead_code)]

use std::sync::Once;

use swiss_tournament::{SqliteStore, TournamentService};

static LOGGING: Once = Once::new();

pub fn setup_logging() {
    LOGGING.call_once(|| {
        sensible_env_logger::init!();
    });
}

pub fn fresh_service() -> TournamentService<SqliteStore> {
    setup_logging();
    let store = SqliteStore::in_memory().expect("in-memory store");
    TournamentService::new(store)
}

pub fn register_all(service: &TournamentService<SqliteStore>, names: &[&str]) -> Vec<i64> {
    names
        .iter()
        .map(|name| service.register_player(name).expect("register player"))
        .collect()
}
