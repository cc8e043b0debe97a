use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::domain::{PlayerId, Score};

pub fn insert_initial(conn: &Connection, player_id: PlayerId) -> Result<()> {
    let sql = "INSERT INTO statistics (player_id, half_points, played) VALUES (?1, 0, 0)";

    conn.execute(sql, params![player_id])
        .context("Failed to insert initial statistics")
        .map(|_| ())
}

/// Adds `score` and one played game in place. Returns the number of rows
/// touched, zero when the player has no statistics row.
pub fn apply_credit(conn: &Connection, player_id: PlayerId, score: Score) -> Result<usize> {
    let sql = "UPDATE statistics SET half_points = half_points + ?1, played = played + 1 WHERE player_id = ?2";

    conn.execute(sql, params![score.half_points(), player_id])
        .with_context(|| format!("Failed to update statistics for player {player_id}"))
}

pub fn reset_all(conn: &Connection) -> Result<usize> {
    conn.execute("UPDATE statistics SET half_points = 0, played = 0", [])
        .context("Failed to reset statistics")
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM statistics", [])
        .context("Failed to delete statistics")
}
