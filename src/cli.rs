use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::DerivationSource;

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-tournament player and pairing manager")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Where standings and pairings are computed
    #[arg(long, value_enum, global = true, default_value_t = DerivationSource::Store)]
    pub derive: DerivationSource,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the tables and views if they are missing
    Init,
    /// Drop everything and recreate an empty tournament
    Reset,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record that one player beat another
    Report {
        /// Id of the winner
        winner: i32,
        /// Id of the loser
        loser: i32,
    },
    /// Print the number of registered players
    Count,
    /// List registered players
    Players {
        #[arg(long)]
        json: bool,
    },
    /// List reported matches
    History {
        #[arg(long)]
        json: bool,
    },
    /// Show standings, most wins first
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    DeleteMatches,
    /// Remove all players (matches must be deleted first)
    DeletePlayers,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_with_global_options() {
        let cli = Cli::try_parse_from([
            "swiss-tournament",
            "report",
            "3",
            "7",
            "--database",
            "club.db",
            "--derive",
            "in-process",
        ])
        .unwrap();

        assert_eq!(cli.command, Command::Report { winner: 3, loser: 7 });
        assert_eq!(cli.database.as_deref(), Some("club.db"));
        assert_eq!(cli.derive, DerivationSource::InProcess);
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["swiss-tournament", "delete-matches"]).unwrap();
        assert_eq!(cli.command, Command::DeleteMatches);
        assert_eq!(cli.derive, DerivationSource::Store);
    }
}
