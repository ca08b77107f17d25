use chrono::NaiveDateTime;
use serde::Serialize;

pub type PlayerId = i32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub reported_at: Option<NaiveDateTime>,
}

impl Match {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
            reported_at: None,
        }
    }
}

// Derived rows, produced by the views or by crate::swiss
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches: i32,
}

impl StandingsRow {
    pub fn losses(&self) -> i32 {
        self.matches - self.wins
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingRow {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl PairingRow {
    pub fn contains(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}
