use log::{debug, info};

use super::connection::DbConn;
use crate::errors::{TournamentError, TournamentResult};

const SCHEMA_SQL: &str = include_str!("schema.sql");

// Views first, they depend on the tables
const DROP_STATEMENTS: [&str; 4] = [
    "DROP VIEW IF EXISTS pairings_v",
    "DROP VIEW IF EXISTS standings_v",
    "DROP TABLE IF EXISTS matches",
    "DROP TABLE IF EXISTS players",
];

/// Creates any missing tables and views. Existing data is left alone.
pub fn ensure_schema(conn: &mut DbConn) -> TournamentResult<()> {
    let statements = split_sql_statements(SCHEMA_SQL);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement).map_err(|e| with_statement_context(e, idx + 1))?;
    }

    info!("Database schema ready ({} statements)", statements.len());
    Ok(())
}

/// Drops every table and view, then recreates the schema from scratch.
pub fn reset_database(conn: &mut DbConn) -> TournamentResult<()> {
    for statement in DROP_STATEMENTS {
        execute_sql(conn, statement)?;
    }

    ensure_schema(conn)?;
    info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> TournamentResult<()> {
    debug!("Executing schema statement: {}", sql.lines().next().unwrap_or_default());
    conn.execute(sql, [])?;
    Ok(())
}

fn with_statement_context(err: TournamentError, position: usize) -> TournamentError {
    match err {
        TournamentError::Query(msg) => {
            TournamentError::query(format!("Failed to execute statement {position}: {msg}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection};

    fn count_objects(conn: &DbConn, kind: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name NOT LIKE 'sqlite_%'",
            [kind],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_split_sql_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n CREATE TABLE b (y);  ");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }

    #[test]
    fn test_ensure_schema_creates_tables_and_views() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();

        assert_eq!(count_objects(&conn, "table"), 2);
        assert_eq!(count_objects(&conn, "view"), 2);
    }

    #[test]
    fn test_ensure_schema_is_idempotent_and_keeps_data() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO players (full_name) VALUES ('Bruce')", [])
            .unwrap();

        ensure_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_reset_database_drops_data() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO players (full_name) VALUES ('Bruce')", [])
            .unwrap();

        reset_database(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(count_objects(&conn, "view"), 2);
    }
}
