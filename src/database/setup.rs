use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn ensure_schema(conn: &Connection) -> Result<()> {
    run_script(conn, include_str!("schema.sql"))?;
    log::info!("Database schema ready");
    Ok(())
}

pub fn reset_database(conn: &Connection) -> Result<()> {
    run_script(conn, include_str!("drop.sql"))?;
    run_script(conn, include_str!("schema.sql"))?;
    log::info!("Database schema reset successfully");
    Ok(())
}

fn run_script(conn: &Connection, script: &str) -> Result<()> {
    let statements = split_sql_statements(script);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
