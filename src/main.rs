use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::{
    build_config, handle_completions, handle_count, handle_delete_matches,
    handle_delete_players, handle_history, handle_init, handle_pairings, handle_players,
    handle_register, handle_report, handle_reset, handle_standings, interpret, open_service,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        return handle_completions(*shell);
    }

    let service = open_service(build_config(cli))?;
    match &cli.command {
        Command::Init => handle_init(&service),
        Command::Reset => handle_reset(&service),
        Command::Register { name } => handle_register(&service, name),
        Command::Report { winner, loser } => handle_report(&service, *winner, *loser),
        Command::Count => handle_count(&service),
        Command::Players { json } => handle_players(&service, *json),
        Command::History { json } => handle_history(&service, *json),
        Command::Standings { json } => handle_standings(&service, *json),
        Command::Pairings { json } => handle_pairings(&service, *json),
        Command::DeleteMatches => handle_delete_matches(&service),
        Command::DeletePlayers => handle_delete_players(&service),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
