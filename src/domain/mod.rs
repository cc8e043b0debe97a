pub mod models;

pub use models::{
    MatchRecord, MatchResult, NewMatch, PairedPlayer, Pairing, PlayerId, PlayerRecord, Score,
};
