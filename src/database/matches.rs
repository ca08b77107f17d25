use log::debug;
use rusqlite::params;

use super::connection::DbConn;
use super::models::{Match, PlayerId};
use crate::errors::TournamentResult;

pub fn insert_match(
    conn: &mut DbConn,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> TournamentResult<()> {
    let sql = "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2)";

    conn.execute(sql, params![winner_id, loser_id])?;
    debug!("Recorded match: {winner_id} beat {loser_id}");
    Ok(())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        winner_id: row.get(0)?,
        loser_id: row.get(1)?,
        reported_at: row.get(2)?,
    })
}

/// Match history in the order results were reported.
pub fn list_all(conn: &mut DbConn) -> TournamentResult<Vec<Match>> {
    let sql = "SELECT winner_id, loser_id, reported_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> TournamentResult<usize> {
    Ok(conn.execute("DELETE FROM matches", [])?)
}
