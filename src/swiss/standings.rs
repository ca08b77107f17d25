use std::collections::HashMap;

use log::debug;

use crate::database::{Match, Player, PlayerId, StandingsRow};

#[derive(Debug, Default, Clone, Copy)]
struct Record {
    wins: i32,
    losses: i32,
}

/// Aggregates wins and matches played for every player, sorted by wins
/// descending with ties going to the lower id.
///
/// Players without matches get zero counts. Matches naming an id that is not
/// in `players` are ignored.
pub fn compute_standings(players: &[Player], matches: &[Match]) -> Vec<StandingsRow> {
    let records = tally_records(matches);
    debug!(
        "Computing standings for {} players over {} matches",
        players.len(),
        matches.len()
    );

    let mut rows: Vec<StandingsRow> = players
        .iter()
        .map(|player| build_row(player, records.get(&player.id).copied().unwrap_or_default()))
        .collect();

    sort_standings(&mut rows);
    rows
}

fn tally_records(matches: &[Match]) -> HashMap<PlayerId, Record> {
    let mut records: HashMap<PlayerId, Record> = HashMap::new();
    for m in matches {
        records.entry(m.winner_id).or_default().wins += 1;
        records.entry(m.loser_id).or_default().losses += 1;
    }
    records
}

fn build_row(player: &Player, record: Record) -> StandingsRow {
    StandingsRow {
        id: player.id,
        name: player.name.clone(),
        wins: record.wins,
        matches: record.wins + record.losses,
    }
}

pub fn sort_standings(rows: &mut [StandingsRow]) {
    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}
