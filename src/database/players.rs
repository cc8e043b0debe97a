use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::domain::{PlayerId, PlayerRecord, Score};

const RECORD_COLUMNS: &str = "p.id, p.name, s.half_points, s.played FROM players p JOIN statistics s ON s.player_id = p.id";

pub fn insert_player(conn: &Connection, name: &str) -> Result<PlayerId> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id";

    conn.query_row(sql, params![name], |row| row.get(0))
        .context("Failed to insert new player")
}

fn parse_record_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRecord> {
    Ok(PlayerRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        score: Score::from_half_points(row.get(2)?),
        played: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<PlayerRecord>> {
    let sql = format!("SELECT {RECORD_COLUMNS} WHERE p.id = ?1");

    conn.query_row(&sql, params![id], parse_record_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn exists(conn: &Connection, id: PlayerId) -> Result<bool> {
    let sql = "SELECT EXISTS(SELECT 1 FROM players WHERE id = ?1)";
    conn.query_row(sql, params![id], |row| row.get(0))
        .context("Failed to check player existence")
}

/// Highest score first, registration order among equal scores
pub fn list_standings(conn: &Connection) -> Result<Vec<PlayerRecord>> {
    let sql = format!("SELECT {RECORD_COLUMNS} ORDER BY s.half_points DESC, p.id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_record_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let sql = "SELECT COUNT(*) FROM players";
    conn.query_row(sql, [], |row| row.get(0))
        .context("Failed to count players")
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}
