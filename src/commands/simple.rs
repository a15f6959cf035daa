//! Simple interactive CLI mode
//!
//! Text-based play mode without TUI

use crate::game::Game;
use crate::output::formatters::{format_letters, rank_progress_bar};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive play mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut game: Game) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Spelling Bee - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_board(&game);
    println!("Type words to score them.");
    println!("Commands: '!shuffle', '!found', '!reveal', '!quit'\n");

    loop {
        let Some(input) = get_user_input("Word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "!quit" | "!q" | "!exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "!shuffle" | "!s" => print_board(&game),
            "!found" | "!f" => {
                let mut found: Vec<&str> = game.found().iter().map(|w| w.word()).collect();
                found.sort_unstable();
                println!("Found {}: {}\n", found.len(), found.join(" "));
            }
            "!reveal" | "!r" => {
                let remaining: Vec<&str> = game.remaining().map(|w| w.word()).collect();
                println!("Remaining {}: {}\n", remaining.len(), remaining.join(" "));
            }
            guess => match game.guess(guess) {
                Ok(accepted) => {
                    let points = accepted.word.score();
                    let plural = if points == 1 { "" } else { "s" };
                    if accepted.word.is_pangram() {
                        println!(
                            "{}",
                            format!("🎉 PANGRAM! {} +{points} point{plural}", accepted.word)
                                .bright_yellow()
                                .bold()
                        );
                    } else {
                        println!("{}", format!("✓ {} +{points} point{plural}", accepted.word).green());
                    }
                    if let Some(rank) = accepted.rank_up {
                        println!("{}", format!("⭐ New rank: {rank}").bright_cyan().bold());
                    }
                    print_status(&game);

                    if game.is_complete() {
                        println!("\n{}", "🐝 Every word found. Queen Bee!".bright_green().bold());
                        return Ok(());
                    }
                }
                Err(err) => println!("{}", format!("✗ {err}").red()),
            },
        }
    }
}

fn print_board(game: &Game) {
    let center = game.target().letter().map_or_else(String::new, |c| c.to_string());
    println!(
        "Letters: {}  Center: {}",
        format_letters(&game.shuffled_outer_letters()).bright_white().bold(),
        center.bright_yellow().bold()
    );
    print_status(game);
    println!();
}

fn print_status(game: &Game) {
    let total = game.solution().total_score;
    println!(
        "  {} {} | {}/{} points | {}/{} words",
        game.rank().to_string().bright_cyan(),
        rank_progress_bar(game.score(), total, 20),
        game.score(),
        total,
        game.found().len(),
        game.solution().words.len()
    );
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
