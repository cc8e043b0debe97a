use log::debug;
use rusqlite::TransactionBehavior;

use super::connection::{DbPool, create_pool, get_connection};
use super::{matches, players, setup, statistics};
use crate::config::settings::StoreSettings;
use crate::domain::{MatchRecord, MatchResult, PlayerId, PlayerRecord};
use crate::errors::{TournamentError, TournamentResult};
use crate::store::TournamentStore;

/// SQLite-backed store. Writes run in `BEGIN IMMEDIATE` transactions so
/// concurrent reporters serialize on the database lock.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(settings: &StoreSettings) -> TournamentResult<Self> {
        let pool = create_pool(settings)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> TournamentResult<Self> {
        Self::open(&StoreSettings::in_memory())
    }

    pub fn from_pool(pool: DbPool) -> TournamentResult<Self> {
        let conn = get_connection(&pool)?;
        setup::ensure_schema(&conn)?;
        drop(conn);
        Ok(Self { pool })
    }
}

impl TournamentStore for SqliteStore {
    fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let id = players::insert_player(&tx, name)?;
        statistics::insert_initial(&tx, id)?;

        tx.commit()?;
        Ok(id)
    }

    fn count_players(&self) -> TournamentResult<usize> {
        let conn = get_connection(&self.pool)?;
        Ok(players::count(&conn)?)
    }

    fn find_player(&self, id: PlayerId) -> TournamentResult<Option<PlayerRecord>> {
        let conn = get_connection(&self.pool)?;
        Ok(players::find_by_id(&conn, id)?)
    }

    fn standings(&self) -> TournamentResult<Vec<PlayerRecord>> {
        let conn = get_connection(&self.pool)?;
        Ok(players::list_standings(&conn)?)
    }

    fn record_result(&self, result: &MatchResult) -> TournamentResult<Option<MatchRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        for id in result.participants() {
            if !players::exists(&tx, id)? {
                return Err(TournamentError::NotFound(id));
            }
        }

        for (id, score) in result.credits() {
            if statistics::apply_credit(&tx, id, score)? == 0 {
                return Err(TournamentError::InvalidState(format!(
                    "player {id} has no statistics row"
                )));
            }
        }

        let record = result
            .history_entry()
            .map(|entry| matches::insert_match(&tx, &entry))
            .transpose()?;

        tx.commit()?;
        debug!("Recorded {:?}", result);
        Ok(record)
    }

    fn match_history(&self) -> TournamentResult<Vec<MatchRecord>> {
        let conn = get_connection(&self.pool)?;
        Ok(matches::list_all(&conn)?)
    }

    fn delete_matches(&self) -> TournamentResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let removed = matches::delete_all(&tx)?;
        statistics::reset_all(&tx)?;

        tx.commit()?;
        debug!("Deleted {} matches", removed);
        Ok(())
    }

    fn delete_players(&self) -> TournamentResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        matches::delete_all(&tx)?;
        statistics::delete_all(&tx)?;
        let removed = players::delete_all(&tx)?;

        tx.commit()?;
        debug!("Deleted {} players", removed);
        Ok(())
    }

    fn reset(&self) -> TournamentResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        setup::reset_database(&tx)?;

        tx.commit()?;
        Ok(())
    }
}
