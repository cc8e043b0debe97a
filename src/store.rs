use crate::domain::{MatchRecord, MatchResult, PlayerId, PlayerRecord};
use crate::errors::TournamentResult;

/// Persistent tournament state.
///
/// Each call is all-or-nothing. `record_result` must update every
/// participant's counters and the match history in one atomic step.
pub trait TournamentStore {
    fn register_player(&self, name: &str) -> TournamentResult<PlayerId>;

    fn count_players(&self) -> TournamentResult<usize>;

    fn find_player(&self, id: PlayerId) -> TournamentResult<Option<PlayerRecord>>;

    /// Highest score first, ties in registration order
    fn standings(&self) -> TournamentResult<Vec<PlayerRecord>>;

    /// Returns the history row written, `None` for a bye.
    fn record_result(&self, result: &MatchResult) -> TournamentResult<Option<MatchRecord>>;

    fn match_history(&self) -> TournamentResult<Vec<MatchRecord>>;

    /// Clears the match history and zeroes every player's statistics.
    fn delete_matches(&self) -> TournamentResult<()>;

    fn delete_players(&self) -> TournamentResult<()>;

    fn reset(&self) -> TournamentResult<()>;
}
