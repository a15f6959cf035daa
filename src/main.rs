//! Spelling Bee Solver - CLI
//!
//! Solves, checks, generates and plays Spelling Bee puzzles, with TUI and
//! line-oriented play modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{
    commands::{SolveConfig, check_word, run_generate, run_simple, solve_puzzle, start_game},
    output::{print_check_result, print_generate_result, print_solve_result},
    solver::{Solver, SolverConfig},
    wordlists::{DICTIONARY, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee solver: find, score and play every word in a puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Minimum word length
    #[arg(short = 'm', long, global = true, default_value_t = SolverConfig::STANDARD.min_length)]
    min_length: usize,

    /// Bonus points for a pangram
    #[arg(short = 'b', long, global = true, default_value_t = SolverConfig::STANDARD.pangram_bonus)]
    pangram_bonus: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Available letters (random puzzle if omitted)
        letters: Option<String>,

        /// Center letter every word must contain
        #[arg(short, long, default_value = "")]
        target: String,
    },

    /// Simple CLI mode (interactive play without TUI)
    Simple {
        /// Available letters (random puzzle if omitted)
        letters: Option<String>,

        /// Center letter every word must contain
        #[arg(short, long, default_value = "")]
        target: String,
    },

    /// List every word for a puzzle
    Solve {
        /// Available letters
        letters: String,

        /// Center letter every word must contain
        #[arg(short, long, default_value = "")]
        target: String,

        /// Show only pangrams
        #[arg(short, long)]
        pangrams_only: bool,
    },

    /// Explain how a single word scores in a puzzle
    Check {
        /// Available letters
        letters: String,

        /// Word to check
        word: String,

        /// Center letter every word must contain
        #[arg(short, long, default_value = "")]
        target: String,
    },

    /// Find the best puzzles hidden in the word list
    Generate {
        /// Number of puzzles to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Skip puzzles with fewer words than this
        #[arg(long, default_value = "10")]
        min_words: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": a custom word list file
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<String>> {
    use spelling_bee::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).context("failed to load word list"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = SolverConfig::new(cli.min_length, cli.pangram_bonus);
    log::debug!("dictionary: {} words, config: {config:?}", dictionary.len());

    let solver = Solver::new(&dictionary, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        letters: None,
        target: String::new(),
    });

    match command {
        Commands::Play { letters, target } => run_play_command(&solver, letters.as_deref(), &target),
        Commands::Simple { letters, target } => {
            run_simple_command(&solver, letters.as_deref(), &target)
        }
        Commands::Solve {
            letters,
            target,
            pangrams_only,
        } => run_solve_command(&solver, letters, target, pangrams_only),
        Commands::Check {
            letters,
            word,
            target,
        } => run_check_command(&solver, &letters, &target, &word),
        Commands::Generate { limit, min_words } => {
            run_generate_command(&solver, limit, min_words);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &Solver<'_>,
    letters: String,
    target: String,
    pangrams_only: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(letters, target);
    config.pangrams_only = pangrams_only;

    let result = solve_puzzle(config, solver)?;
    print_solve_result(&result);
    Ok(())
}

fn run_check_command(solver: &Solver<'_>, letters: &str, target: &str, word: &str) -> Result<()> {
    let result = check_word(letters, target, word, solver)?;
    print_check_result(&result);
    Ok(())
}

fn run_generate_command(solver: &Solver<'_>, limit: usize, min_words: usize) {
    let result = run_generate(solver, Some(limit), min_words);
    print_generate_result(&result);
}

fn run_simple_command(solver: &Solver<'_>, letters: Option<&str>, target: &str) -> Result<()> {
    let game = start_game(solver, letters, target)?;
    run_simple(game)
}

fn run_play_command(solver: &Solver<'_>, letters: Option<&str>, target: &str) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let game = start_game(solver, letters, target)?;
    run_tui(App::new(game))
}
