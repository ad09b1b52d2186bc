//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI: type a word per turn, read the
//! colored feedback in place.

use crate::game::{GameController, GameResult, Notification, SessionStore};
use crate::output::formatters::colored_row;
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-based game loop
///
/// # Errors
/// Returns an error when reading stdin or flushing stdout fails.
pub fn run_simple<S: SessionStore>(mut controller: GameController<S>) -> io::Result<()> {
    println!(
        "\nGuess the word in {} tries.",
        controller.session().total_guesses()
    );
    println!("Commands: 'quit' to exit, 'new' to clear the session.\n");

    loop {
        print_board(&controller);

        match controller.session().result() {
            GameResult::Win => println!("{}", "Solved!".green().bold()),
            GameResult::Loss => println!(
                "The word was {}.",
                controller.session().solution().text().bold()
            ),
            GameResult::Unfinished => {}
        }

        if controller.session().result().is_terminal() {
            let line = prompt("Type 'new' to play again, anything else to exit")?;
            if line.eq_ignore_ascii_case("new") {
                controller.reset();
                println!();
                continue;
            }
            return Ok(());
        }

        let line = prompt(&format!(
            "Guess {}/{}",
            controller.session().committed_guesses().len() + 1,
            controller.session().total_guesses()
        ))?;

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(()),
            "new" => {
                controller.reset();
                println!("\nSession cleared, fresh board.");
                continue;
            }
            _ => {}
        }

        // Feed the line through the same per-letter surface the TUI uses
        while !controller.session().current_guess().is_empty() {
            controller.delete_letter();
        }
        for c in line.chars() {
            controller.input_letter(c);
        }
        controller.enter_guess();

        for notification in controller.take_notifications() {
            print_notification(notification);
        }
    }
}

fn print_board<S: SessionStore>(controller: &GameController<S>) {
    let session = controller.session();
    println!();
    for guess in session.committed_guesses() {
        println!("  {}", colored_row(guess));
    }
    if !session.committed_guesses().is_empty() {
        println!();
    }
}

fn print_notification(notification: Notification) {
    match notification {
        Notification::TooShort => println!("{}", "Not enough letters!".yellow()),
        Notification::InvalidGuess => println!("{}", "Not a valid word!".yellow()),
        Notification::Win => println!("{}", "You got it!".green().bold()),
        Notification::Loss => println!("{}", "Out of guesses.".red().bold()),
    }
}

fn prompt(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
