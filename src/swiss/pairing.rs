use crate::database::{PairingRow, StandingsRow};

/// Pairs standings rows (1,2), (3,4), ... in the order given.
///
/// Yields `floor(n / 2)` pairs; with an odd count the last row sits out
/// (see [`unpaired`]). No rematch avoidance is attempted.
pub fn pair_adjacent(standings: &[StandingsRow]) -> Vec<PairingRow> {
    standings
        .chunks_exact(2)
        .map(|pair| build_pairing(&pair[0], &pair[1]))
        .collect()
}

/// The row left over by [`pair_adjacent`] when the count is odd.
pub fn unpaired(standings: &[StandingsRow]) -> Option<&StandingsRow> {
    standings.chunks_exact(2).remainder().first()
}

fn build_pairing(first: &StandingsRow, second: &StandingsRow) -> PairingRow {
    PairingRow {
        id1: first.id,
        name1: first.name.clone(),
        id2: second.id,
        name2: second.name.clone(),
    }
}
