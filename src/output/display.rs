//! Display functions for command results

use super::formatters::pangram_marker;
use crate::commands::{CheckResult, GenerateResult, SolveResult};
use colored::Colorize;

/// Print a solved puzzle, grouped by word length
pub fn print_solve_result(result: &SolveResult) {
    let solution = &result.solution;
    let letters = solution.query.letters();

    println!("\n{}", "─".repeat(60).cyan());
    print!("Letters: {}", letters.to_string().bright_yellow().bold());
    if let Some(target) = solution.query.target().letter() {
        print!("   Center: {}", target.to_string().bright_yellow().bold());
    }
    println!();
    println!("{}", "─".repeat(60).cyan());

    if solution.is_empty() {
        println!("\nNo words found.");
        return;
    }

    if result.pangrams_only {
        println!("\n{}", "Pangrams".bright_cyan().bold());
        for word in &solution.pangrams {
            let marker = pangram_marker(true, word.is_perfect_pangram(letters));
            println!("  {} {marker} ({} pts)", word.word().bright_yellow().bold(), word.score());
        }
    } else {
        for (length, words) in solution.by_length() {
            println!("\n{}", format!("{length} letters ({})", words.len()).bright_cyan().bold());
            for word in words {
                let marker = pangram_marker(word.is_pangram(), word.is_perfect_pangram(letters));
                if word.is_pangram() {
                    println!(
                        "  {} {marker} ({} pts)",
                        word.word().bright_yellow().bold(),
                        word.score()
                    );
                } else {
                    println!("  {} ({} pts)", word.word(), word.score());
                }
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} words, {} pangrams, {} points",
            solution.words.len(),
            solution.pangrams.len(),
            solution.total_score
        )
        .green()
        .bold()
    );
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD CHECK:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let tick = |ok: bool| if ok { "✓".green() } else { "✗".red() };

    println!("\n   Uses only available letters: {}", tick(result.constructible));
    if let Some(target) = result.query.target().letter() {
        println!("   Contains center letter {target}:   {}", tick(result.has_target));
    }
    println!("   Long enough:                 {}", tick(result.long_enough));
    println!("   In word list:                {}", tick(result.in_dictionary));
    println!("   Pangram:                     {}", tick(result.pangram));
    if result.pangram {
        println!("   Perfect pangram:             {}", tick(result.perfect_pangram));
    }

    println!();
    if result.accepted() {
        println!(
            "{}",
            format!("✅ Accepted for {} points", result.score).green().bold()
        );
    } else {
        println!("{}", "❌ Not accepted".red().bold());
    }
}

/// Print the result of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED PUZZLES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Letter sets:      {}", result.seeds);
    println!("   Candidates:       {}", result.candidates);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.puzzles.is_empty() {
        println!("\nNo puzzles met the threshold.");
        return;
    }

    println!("\n🐝 {}", "Best puzzles:".bright_cyan().bold());
    for (i, puzzle) in result.puzzles.iter().enumerate() {
        println!(
            "   {:>3}. {} center {}  {:4} words {:2} pangrams {:5} points",
            i + 1,
            puzzle.query.letters().to_string().bright_yellow(),
            puzzle.query.target().to_string().bright_yellow().bold(),
            puzzle.word_count,
            puzzle.pangram_count,
            puzzle.total_score
        );
    }
}
