//! Display functions for command results

use super::formatters::{medal, rack_line};
use crate::commands::{BoardResult, DealResult, ShuffleResult, SubmitResult};
use crate::engine::{Rejection, Submission};
use crate::persist::TOP_N;
use colored::Colorize;

/// Print a dealt rack with points, dictionary status, and the best-word hint
pub fn print_deal(result: &DealResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Daily Rack — {}", result.date_key.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", rack_line(&result.tiles).bold());

    let dict_note = if result.dictionary_limited {
        format!("{} words (demo list)", result.dictionary_size)
            .yellow()
            .to_string()
    } else {
        format!("{} words", result.dictionary_size).to_string()
    };
    println!("\nDictionary: {dict_note}");

    if let Some(best) = &result.best {
        println!(
            "Best possible (from loaded list): {} = {}",
            best.word.bright_yellow(),
            best.score.to_string().bold()
        );
    }
}

/// Print a submission outcome: breakdown and rank, or the rejection reason
pub fn print_submit(result: &SubmitResult) {
    match &result.outcome {
        Submission::Accepted { breakdown } => {
            println!("\n{breakdown}");
            println!(
                "{}",
                format!("✅ {} scores {} points!", result.word, breakdown.total())
                    .green()
                    .bold()
            );
            if breakdown.is_bingo() {
                println!("{}", "Bingo! All seven tiles used.".bright_yellow().bold());
            }
            if let Some(rank) = result.rank {
                println!("Today's rank: {}", format!("#{rank}").bold());
            }
        }
        Submission::Rejected(rejection) => {
            let hint = match rejection {
                Rejection::InvalidCharacters => "Use only letters from the tile set.",
                Rejection::NotFeasible => "Check the rack letters and the dictionary.",
            };
            println!("{}", format!("❌ {rejection}").red().bold());
            println!("{hint}");
        }
    }
}

/// Print the day's top standings with medals
pub fn print_board(result: &BoardResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LEADERBOARD".bright_cyan().bold(),
        result.date_key.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.rows.is_empty() {
        println!("\nNo scores yet for today — be the first!");
        return;
    }

    for (i, row) in result.rows.iter().take(TOP_N).enumerate() {
        let rank = i + 1;
        let badge = medal(rank).unwrap_or("  ");
        let avatar = row
            .avatar
            .as_deref()
            .map_or(String::new(), |a| format!("{a} "));
        println!(
            "  {rank:2}. {badge} {avatar}{:<20} {:<10} {}",
            row.name,
            row.word,
            row.score.to_string().bold()
        );
    }
}

/// Print a shuffled display order of the rack
pub fn print_shuffle(result: &ShuffleResult) {
    let letters: Vec<String> = result.letters.iter().map(char::to_string).collect();
    println!("{}: {}", result.date_key, letters.join(" ").bold());
}

/// Print the share text
pub fn print_share(text: &str) {
    println!("{text}");
}
