use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::database::{Match, PairingRow, Player, StandingsRow};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

/// Leaders (everyone on the top win count) are highlighted once someone has won.
pub fn standings_table(rows: &[StandingsRow]) -> String {
    if rows.is_empty() {
        return "No players registered".to_string();
    }

    let top_wins = rows.iter().map(|r| r.wins).max().unwrap_or(0);
    let mut lines = vec![format!(
        "{:>4}  {:>5}  {:<24} {:>4} {:>7}",
        "#", "id", "name", "wins", "matches"
    )
    .bold()
    .to_string()];

    for (idx, row) in rows.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>5}  {:<24} {:>4} {:>7}",
            idx + 1,
            row.id,
            row.name,
            row.wins,
            row.matches
        );
        if top_wins > 0 && row.wins == top_wins {
            lines.push(line.green().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

pub fn pairings_table(rows: &[PairingRow]) -> String {
    if rows.is_empty() {
        return "No pairings available".to_string();
    }

    rows.iter()
        .enumerate()
        .map(|(idx, p)| {
            format!(
                "Table {:>2}: {} {} {}",
                idx + 1,
                format!("#{} {}", p.id1, p.name1).cyan(),
                "vs".dimmed(),
                format!("#{} {}", p.id2, p.name2).cyan()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn players_table(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players registered".to_string();
    }

    players
        .iter()
        .map(|p| format!("{:>5}  {}", p.id, p.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn history_table(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches reported".to_string();
    }

    matches
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let when = m
                .reported_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{:>4}  {:<16}  #{} beat #{}",
                idx + 1,
                when,
                m.winner_id,
                m.loser_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
