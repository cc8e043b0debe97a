pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pairing;
pub mod services;
pub mod store;

pub use config::settings::AppConfig;
pub use database::SqliteStore;
pub use domain::{MatchRecord, MatchResult, PairedPlayer, Pairing, PlayerId, PlayerRecord, Score};
pub use errors::{TournamentError, TournamentResult};
pub use services::TournamentService;
pub use store::TournamentStore;
