//! Terminal Wordle - CLI
//!
//! Wordle in the terminal with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_score, run_simple},
    core::Word,
    game::{DEFAULT_TOTAL_GUESSES, GameController, JsonFileStore},
    interactive::{App, run_tui},
    wordlists::random_solution,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal: duplicate-aware feedback, resumable sessions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution word (default: random pick from the built-in list)
    #[arg(short, long, global = true)]
    solution: Option<String>,

    /// Session save file (committed guesses persist here)
    #[arg(long, global = true, default_value = ".wordle_session.json")]
    save_file: String,

    /// Number of allowed guesses
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOTAL_GUESSES)]
    guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based CLI mode without the TUI
    Simple,

    /// Score a single guess against an answer and exit
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let controller = build_controller(&cli)?;
            run_tui(App::new(controller))
        }
        Commands::Simple => {
            let controller = build_controller(&cli)?;
            run_simple(controller)?;
            Ok(())
        }
        Commands::Score { guess, answer } => {
            run_score(&guess, &answer)?;
            Ok(())
        }
    }
}

/// Resolve the solution and wire the controller to its save file
///
/// The solution is pre-supplied via --solution; without one, the binary picks
/// from the built-in list. The game core never selects words itself.
fn build_controller(cli: &Cli) -> Result<GameController<JsonFileStore>> {
    let solution = match &cli.solution {
        Some(text) => Word::new(text)?,
        None => random_solution(),
    };
    let store = JsonFileStore::new(&cli.save_file);

    Ok(GameController::with_total_guesses(
        solution,
        store,
        cli.guesses,
    ))
}
