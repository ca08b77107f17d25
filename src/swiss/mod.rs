pub mod pairing;
pub mod standings;

pub use pairing::{pair_adjacent, unpaired};
pub use standings::{compute_standings, sort_standings};
