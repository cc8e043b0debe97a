use log::info;

use crate::config::settings::AppConfig;
use crate::database::SqliteStore;
use crate::domain::{MatchRecord, MatchResult, Pairing, PlayerId, PlayerRecord};
use crate::errors::{TournamentError, TournamentResult};
use crate::pairing;
use crate::store::TournamentStore;

/// Entry point for running a Swiss-system tournament over an injected store.
pub struct TournamentService<S: TournamentStore> {
    store: S,
}

impl TournamentService<SqliteStore> {
    pub fn open(config: &AppConfig) -> TournamentResult<Self> {
        info!("Opening tournament store at {}", config.store.database_path);
        Ok(Self::new(SqliteStore::open(&config.store)?))
    }
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Adds a player with no score and no games played. Names need not be
    /// unique.
    pub fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidState(
                "player name must not be empty".to_string(),
            ));
        }

        let id = self.store.register_player(name)?;
        info!("Registered player {} ({})", id, name);
        Ok(id)
    }

    pub fn count_players(&self) -> TournamentResult<usize> {
        self.store.count_players()
    }

    pub fn player(&self, id: PlayerId) -> TournamentResult<PlayerRecord> {
        self.store
            .find_player(id)?
            .ok_or(TournamentError::NotFound(id))
    }

    pub fn player_standings(&self) -> TournamentResult<Vec<PlayerRecord>> {
        self.store.standings()
    }

    /// Records one result. `loser` of `None` is a bye: full credit for the
    /// winner, one more game played, nothing in the match history.
    pub fn report_match(
        &self,
        winner: PlayerId,
        loser: Option<PlayerId>,
        is_draw: bool,
    ) -> TournamentResult<()> {
        let result = MatchResult::from_report(winner, loser, is_draw)?;
        self.store.record_result(&result)?;

        match result {
            MatchResult::Decisive { winner, loser } => {
                info!("Player {} beat player {}", winner, loser)
            }
            MatchResult::Draw { first, second } => {
                info!("Players {} and {} drew", first, second)
            }
            MatchResult::Bye { player } => info!("Player {} took a bye", player),
        }
        Ok(())
    }

    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.store.standings()?;
        let pairings = pairing::swiss_pairings(&standings);
        info!(
            "Paired {} players into {} pairings",
            standings.len(),
            pairings.len()
        );
        Ok(pairings)
    }

    pub fn match_history(&self) -> TournamentResult<Vec<MatchRecord>> {
        self.store.match_history()
    }

    pub fn delete_matches(&self) -> TournamentResult<()> {
        self.store.delete_matches()?;
        info!("Match history cleared");
        Ok(())
    }

    pub fn delete_players(&self) -> TournamentResult<()> {
        self.store.delete_players()?;
        info!("All players removed");
        Ok(())
    }

    pub fn reset(&self) -> TournamentResult<()> {
        self.store.reset()
    }
}
