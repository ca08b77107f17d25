use log::{info, warn};

use crate::config::settings::{AppConfig, DerivationSource};
use crate::database::{
    self, matches, players, setup, standings, DbPool, Match, PairingRow, Player, PlayerId,
    StandingsRow,
};
use crate::errors::TournamentResult;
use crate::swiss;

/// Access layer over one tournament database.
///
/// Every operation checks out a single pooled connection, runs one statement
/// (autocommit) and hands the connection back when it returns, whether it
/// succeeded or not.
pub struct TournamentService {
    pool: DbPool,
    config: AppConfig,
}

impl TournamentService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Opens the configured database file and makes sure the schema exists.
    pub fn open(config: AppConfig) -> TournamentResult<Self> {
        let pool = database::create_pool(&config.store)?;
        info!("Opened tournament database at {}", config.store.database_path);
        let service = Self::new(pool, config);
        service.ensure_schema()?;
        Ok(service)
    }

    /// Private in-memory tournament with the schema in place.
    pub fn in_memory(config: AppConfig) -> TournamentResult<Self> {
        let service = Self::new(database::create_memory_pool()?, config);
        service.ensure_schema()?;
        Ok(service)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ensure_schema(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        setup::ensure_schema(&mut conn)
    }

    pub fn reset(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        setup::reset_database(&mut conn)
    }

    pub fn delete_matches(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = matches::delete_all(&mut conn)?;
        info!("Deleted {removed} matches");
        Ok(())
    }

    /// Fails with a constraint violation while matches still reference players;
    /// call [`Self::delete_matches`] first.
    pub fn delete_players(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = players::delete_all(&mut conn)?;
        info!("Deleted {removed} players");
        Ok(())
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        let mut conn = database::get_connection(&self.pool)?;
        players::count_all(&mut conn)
    }

    /// The assigned id is not returned; look it up through
    /// [`Self::list_players`] or the standings.
    pub fn register_player(&self, name: &str) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let player = players::insert_player(&mut conn, name)?;
        info!("Registered player #{}", player.id);
        Ok(())
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        matches::insert_match(&mut conn, winner, loser)?;
        info!("Reported match: #{winner} beat #{loser}");
        Ok(())
    }

    pub fn player_standings(&self) -> TournamentResult<Vec<StandingsRow>> {
        match self.config.derivation.source {
            DerivationSource::Store => {
                let mut conn = database::get_connection(&self.pool)?;
                standings::read_standings(&mut conn)
            }
            DerivationSource::InProcess => self.compute_standings(),
        }
    }

    pub fn swiss_pairings(&self) -> TournamentResult<Vec<PairingRow>> {
        match self.config.derivation.source {
            DerivationSource::Store => {
                let mut conn = database::get_connection(&self.pool)?;
                standings::read_pairings(&mut conn)
            }
            DerivationSource::InProcess => {
                let rows = self.compute_standings()?;
                if let Some(left_out) = swiss::unpaired(&rows) {
                    warn!(
                        "Odd number of players ({}); #{} {} is not paired this round",
                        rows.len(),
                        left_out.id,
                        left_out.name
                    );
                }
                Ok(swiss::pair_adjacent(&rows))
            }
        }
    }

    pub fn list_players(&self) -> TournamentResult<Vec<Player>> {
        let mut conn = database::get_connection(&self.pool)?;
        players::list_all(&mut conn)
    }

    pub fn list_matches(&self) -> TournamentResult<Vec<Match>> {
        let mut conn = database::get_connection(&self.pool)?;
        matches::list_all(&mut conn)
    }

    fn compute_standings(&self) -> TournamentResult<Vec<StandingsRow>> {
        let mut conn = database::get_connection(&self.pool)?;
        let all_players = players::list_all(&mut conn)?;
        let all_matches = matches::list_all(&mut conn)?;
        Ok(swiss::compute_standings(&all_players, &all_matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(source: DerivationSource) -> TournamentService {
        TournamentService::in_memory(AppConfig::new().with_derivation(source)).unwrap()
    }

    fn register_all(service: &TournamentService, names: &[&str]) -> Vec<PlayerId> {
        for name in names {
            service.register_player(name).unwrap();
        }
        service.list_players().unwrap().into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_count_after_register_and_delete() {
        let service = service(DerivationSource::Store);

        service.register_player("Bruce").unwrap();
        assert_eq!(service.count_players().unwrap(), 1);

        service.delete_players().unwrap();
        assert_eq!(service.count_players().unwrap(), 0);
    }

    #[test]
    fn test_delete_matches_resets_records() {
        let service = service(DerivationSource::Store);
        let ids = register_all(&service, &["A", "B"]);
        service.report_match(ids[0], ids[1]).unwrap();

        service.delete_matches().unwrap();

        let standings = service.player_standings().unwrap();
        assert_eq!(standings.len(), 2);
        assert!(standings.iter().all(|r| r.wins == 0 && r.matches == 0));
    }

    #[test]
    fn test_delete_players_blocked_by_matches() {
        let service = service(DerivationSource::Store);
        let ids = register_all(&service, &["A", "B"]);
        service.report_match(ids[0], ids[1]).unwrap();

        let err = service.delete_players().unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(service.count_players().unwrap(), 2);
    }

    #[test]
    fn test_report_unknown_player_fails() {
        let service = service(DerivationSource::Store);

        let err = service.report_match(1, 2).unwrap_err();

        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_store_and_in_process_agree() {
        let store = service(DerivationSource::Store);
        let in_process = service(DerivationSource::InProcess);
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let results = [(0, 1), (2, 3), (4, 5), (0, 2), (6, 4), (3, 1)];

        for tournament in [&store, &in_process] {
            let ids = register_all(tournament, &names);
            for (winner, loser) in results {
                tournament.report_match(ids[winner], ids[loser]).unwrap();
            }
        }

        assert_eq!(
            store.player_standings().unwrap(),
            in_process.player_standings().unwrap()
        );
        assert_eq!(store.swiss_pairings().unwrap(), in_process.swiss_pairings().unwrap());
        assert_eq!(store.swiss_pairings().unwrap().len(), 3);
    }
}
