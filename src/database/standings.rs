use super::connection::DbConn;
use super::models::{PairingRow, StandingsRow};
use crate::errors::TournamentResult;

pub fn read_standings(conn: &mut DbConn) -> TournamentResult<Vec<StandingsRow>> {
    let sql = "SELECT id, name, wins, matches FROM standings_v";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StandingsRow {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn read_pairings(conn: &mut DbConn) -> TournamentResult<Vec<PairingRow>> {
    let sql = "SELECT id1, name1, id2, name2 FROM pairings_v";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(PairingRow {
                id1: row.get(0)?,
                name1: row.get(1)?,
                id2: row.get(2)?,
                name2: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, matches, players, setup, DbPool};

    fn prepared_pool() -> DbPool {
        let pool = create_memory_pool().unwrap();
        setup::ensure_schema(&mut get_connection(&pool).unwrap()).unwrap();
        pool
    }

    #[test]
    fn test_players_without_matches_are_listed() {
        let pool = prepared_pool();
        let mut conn = get_connection(&pool).unwrap();
        players::insert_player(&mut conn, "Melpomene Murray").unwrap();
        players::insert_player(&mut conn, "Randy Schwartz").unwrap();

        let standings = read_standings(&mut conn).unwrap();

        assert_eq!(standings.len(), 2);
        assert!(standings.iter().all(|r| r.wins == 0 && r.matches == 0));
    }

    #[test]
    fn test_wins_descending_ties_by_id() {
        let pool = prepared_pool();
        let mut conn = get_connection(&pool).unwrap();
        let ids: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|n| players::insert_player(&mut conn, n).unwrap().id)
            .collect();
        matches::insert_match(&mut conn, ids[3], ids[0]).unwrap();
        matches::insert_match(&mut conn, ids[1], ids[2]).unwrap();

        let order: Vec<_> = read_standings(&mut conn)
            .unwrap()
            .into_iter()
            .map(|r| (r.id, r.wins, r.matches))
            .collect();

        assert_eq!(
            order,
            vec![(ids[1], 1, 1), (ids[3], 1, 1), (ids[0], 0, 1), (ids[2], 0, 1)]
        );
    }

    #[test]
    fn test_self_match_counts_win_and_loss() {
        let pool = prepared_pool();
        let mut conn = get_connection(&pool).unwrap();
        let a = players::insert_player(&mut conn, "A").unwrap();
        matches::insert_match(&mut conn, a.id, a.id).unwrap();

        let standings = read_standings(&mut conn).unwrap();

        assert_eq!((standings[0].wins, standings[0].matches), (1, 2));
    }

    #[test]
    fn test_pairings_adjacent_and_odd_drops_last() {
        let pool = prepared_pool();
        let mut conn = get_connection(&pool).unwrap();
        let ids: Vec<_> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|n| players::insert_player(&mut conn, n).unwrap().id)
            .collect();
        matches::insert_match(&mut conn, ids[4], ids[0]).unwrap();

        let pairings = read_pairings(&mut conn).unwrap();

        let pairs: Vec<_> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(pairs, vec![(ids[4], ids[0]), (ids[1], ids[2])]);
        assert_eq!(pairings[0].name1, "E");
        assert!(!pairings.iter().any(|p| p.contains(ids[3])));
    }

    #[test]
    fn test_no_players_no_pairings() {
        let pool = prepared_pool();
        let mut conn = get_connection(&pool).unwrap();

        assert!(read_standings(&mut conn).unwrap().is_empty());
        assert!(read_pairings(&mut conn).unwrap().is_empty());
    }
}
