//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ipl_scorer::{
    cli::{Commands, IplScorer},
    commands::{
        batch_score::handle_batch, leaderboard::handle_leaderboard,
        team_detail::handle_team_detail, team_ops::handle_team,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = IplScorer::parse();

    match app.command {
        Commands::Team { cmd } => handle_team(cmd, app.store)?,

        Commands::Leaderboard { catalog, json } => {
            handle_leaderboard(app.store, &catalog, json)?
        }

        Commands::Detail { name, catalog, json } => {
            handle_team_detail(&name, app.store, &catalog, json)?
        }

        Commands::Batch {
            input,
            values,
            timed,
            output,
        } => handle_batch(&input, values, timed, output)?,
    }

    Ok(())
}
