//! Tournament error types.

use thiserror::Error;

use crate::domain::PlayerId;

#[derive(Debug, Error)]
pub enum TournamentError {
    /// Unknown player id
    #[error("Player {0} not found")]
    NotFound(PlayerId),

    /// Request that cannot be applied to the current tournament
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Store unreachable or a write failed
    #[error("Persistence error: {0:#}")]
    Persistence(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        TournamentError::Persistence(err.into())
    }
}

impl From<r2d2::Error> for TournamentError {
    fn from(err: r2d2::Error) -> Self {
        TournamentError::Persistence(err.into())
    }
}

pub type TournamentResult<T> = Result<T, TournamentError>;
