use log::debug;
use rusqlite::params;

use super::connection::DbConn;
use super::models::Player;
use crate::errors::TournamentResult;

pub fn insert_player(conn: &mut DbConn, name: &str) -> TournamentResult<Player> {
    let sql = "INSERT INTO players (full_name) VALUES (?1) RETURNING id, full_name";

    let player = conn.query_row(sql, params![name], parse_player_row)?;
    debug!("Registered player {} as id {}", player.name, player.id);
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> TournamentResult<Vec<Player>> {
    let sql = "SELECT id, full_name FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> TournamentResult<i64> {
    let sql = "SELECT COUNT(id) FROM players";
    Ok(conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn delete_all(conn: &mut DbConn) -> TournamentResult<usize> {
    Ok(conn.execute("DELETE FROM players", [])?)
}
