pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod render;
pub mod services;
pub mod swiss;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::tournament::TournamentService;

pub use crate::errors::{TournamentError, TournamentResult};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment settings with the command-line overrides applied.
pub fn build_config(cli: &Cli) -> AppConfig {
    let config = AppConfig::from_env().with_derivation(cli.derive);
    match &cli.database {
        Some(path) => config.with_database_path(path.clone()),
        None => config,
    }
}

pub fn open_service(config: AppConfig) -> Result<TournamentService> {
    let path = config.store.database_path.clone();
    TournamentService::open(config)
        .with_context(|| format!("Failed to open tournament database {path}"))
}

pub fn handle_init(service: &TournamentService) -> Result<()> {
    service.ensure_schema()?;
    println!("Tournament database ready");
    Ok(())
}

pub fn handle_reset(service: &TournamentService) -> Result<()> {
    service.reset().context("Failed to reset tournament database")?;
    println!("Tournament database reset");
    Ok(())
}

pub fn handle_register(service: &TournamentService, name: &str) -> Result<()> {
    service
        .register_player(name)
        .with_context(|| format!("Failed to register player {name:?}"))?;
    println!("Registered {name}");
    Ok(())
}

pub fn handle_report(service: &TournamentService, winner: i32, loser: i32) -> Result<()> {
    service
        .report_match(winner, loser)
        .with_context(|| format!("Failed to report match {winner} vs {loser}"))?;
    println!("Recorded: #{winner} beat #{loser}");
    Ok(())
}

pub fn handle_count(service: &TournamentService) -> Result<()> {
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_players(service: &TournamentService, json: bool) -> Result<()> {
    let players = service.list_players()?;
    print_output(&players, json, render::players_table)
}

pub fn handle_history(service: &TournamentService, json: bool) -> Result<()> {
    let matches = service.list_matches()?;
    print_output(&matches, json, render::history_table)
}

pub fn handle_standings(service: &TournamentService, json: bool) -> Result<()> {
    let standings = service.player_standings().context("Failed to load standings")?;
    print_output(&standings, json, render::standings_table)
}

pub fn handle_pairings(service: &TournamentService, json: bool) -> Result<()> {
    let pairings = service.swiss_pairings().context("Failed to compute pairings")?;
    print_output(&pairings, json, render::pairings_table)
}

pub fn handle_delete_matches(service: &TournamentService) -> Result<()> {
    service.delete_matches().context("Failed to delete matches")?;
    println!("All matches deleted");
    Ok(())
}

pub fn handle_delete_players(service: &TournamentService) -> Result<()> {
    service
        .delete_players()
        .context("Failed to delete players (delete matches first)")?;
    println!("All players deleted");
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn print_output<T: serde::Serialize>(
    rows: &[T],
    json: bool,
    table: fn(&[T]) -> String,
) -> Result<()> {
    if json {
        println!("{}", render::to_json(rows)?);
    } else {
        println!("{}", table(rows));
    }
    Ok(())
}
