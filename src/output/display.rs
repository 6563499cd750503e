//! Display functions for command results

use super::formatters::{feedback_to_emoji, ratio_bar};
use crate::commands::{BenchmarkResult, CompareResult, GameResult};
use colored::Colorize;

/// Print the result of one simulated game
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}  [{} strategy]",
        result.target.to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, step) in result.steps.iter().enumerate() {
            println!(
                "\nRound {}: {} {}",
                i + 1,
                step.word.to_uppercase(),
                feedback_to_emoji(&step.feedback)
            );
            println!("  Candidates remaining: {}", step.remaining_after);
        }
    }

    println!();
    print_game_summary(result);
}

/// One-line summary in the classic report phrasing
fn print_game_summary(result: &GameResult) {
    let line = if result.found {
        format!(
            "Using a {}, the program found \"{}\" in {} operations ({} rounds).",
            result.strategy, result.target, result.operations, result.rounds
        )
        .green()
    } else {
        format!(
            "Using a {}, the program did not find \"{}\" in {} operations ({} rounds).",
            result.strategy, result.target, result.operations, result.rounds
        )
        .red()
    };
    println!("{}", line.bold());
}

/// Print the head-to-head comparison of the two strategies
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LIST vs TRIE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    print_game_summary(&result.list);
    print_game_summary(&result.trie);

    let max_ops = result.list.operations.max(result.trie.operations) as f64;
    println!("\n📊 {}", "Operations:".bright_cyan().bold());
    println!(
        "   list: {} {}",
        ratio_bar(result.list.operations as f64, max_ops, 40).yellow(),
        result.list.operations
    );
    println!(
        "   trie: {} {}",
        ratio_bar(result.trie.operations as f64, max_ops, 40).green(),
        result.trie.operations
    );

    if let Some(ratio) = result.operations_ratio() {
        println!(
            "\n   The trie did {} less counted work.",
            format!("{ratio:.0}x").bright_green().bold()
        );
    }
}

/// Print aggregated benchmark results
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Targets tested:   {}", result.total_targets);
    println!(
        "   Solved (list):    {}   avg rounds {:.2}   max {}",
        result.list.solved, result.list.average_rounds, result.list.max_rounds
    );
    println!(
        "   Solved (trie):    {}   avg rounds {:.2}   max {}",
        result.trie.solved, result.trie.average_rounds, result.trie.max_rounds
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Targets/second:   {:.1}", result.targets_per_second);

    println!("\n🔢 {}", "Total operations:".bright_cyan().bold());
    let max_ops = result.list.operations.max(result.trie.operations) as f64;
    println!(
        "   list: {} {}",
        ratio_bar(result.list.operations as f64, max_ops, 40).yellow(),
        format!("{}", result.list.operations).bright_yellow()
    );
    println!(
        "   trie: {} {}",
        ratio_bar(result.trie.operations as f64, max_ops, 40).green(),
        format!("{}", result.trie.operations).bright_green()
    );

    println!("\n📈 {}", "Rounds distribution (trie):".bright_cyan().bold());
    let mut rounds: Vec<_> = result.trie.rounds_distribution.iter().collect();
    rounds.sort_by_key(|(r, _)| **r);
    let max_count = rounds.iter().map(|(_, c)| **c).max().unwrap_or(1);
    for (round, count) in rounds {
        let bar = ratio_bar(*count as f64, max_count as f64, 30);
        let pct = *count as f64 / result.total_targets.max(1) as f64 * 100.0;
        println!("   {round}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
