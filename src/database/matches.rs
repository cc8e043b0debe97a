use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::domain::{MatchRecord, NewMatch};

pub fn insert_match(conn: &Connection, new_match: &NewMatch) -> Result<MatchRecord> {
    let sql = "INSERT INTO matches (first_player_id, second_player_id, winner_id) VALUES (?1, ?2, ?3) RETURNING id, first_player_id, second_player_id, winner_id, played_at";

    conn.query_row(
        sql,
        params![
            new_match.first_player_id,
            new_match.second_player_id,
            new_match.winner_id
        ],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        first_player_id: row.get(1)?,
        second_player_id: row.get(2)?,
        winner_id: row.get(3)?,
        played_at: row.get(4)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<MatchRecord>> {
    let sql = "SELECT id, first_player_id, second_player_id, winner_id, played_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}
