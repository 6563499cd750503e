//! Word-guessing simulator CLI
//!
//! Compares list-based and trie-based candidate elimination on a 5-letter
//! word-guessing puzzle.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use wordle_trie::{
    commands::{benchmark::targets_from_tokens, run_benchmark, run_compare, run_game},
    core::Word,
    output::{print_benchmark_result, print_compare_result, print_game_result},
    solver::EliminatorKind,
    wordlists::{DEMO_WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Word-guessing simulator comparing list and trie candidate elimination",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file (whitespace-separated tokens); defaults to the built-in demo list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate solving one target word with a single strategy
    Solve {
        /// The target word to find
        target: String,

        /// Strategy: trie (default) or list
        #[arg(short, long, default_value = "trie")]
        strategy: String,

        /// First guess (default: a random corpus word)
        #[arg(short, long)]
        first_guess: Option<String>,

        /// Show every round with its feedback
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run both strategies on one target and compare operation counts
    Compare {
        /// The target word to find
        target: String,

        /// First guess (default: a random corpus word)
        #[arg(short, long)]
        first_guess: Option<String>,
    },

    /// Compare both strategies across many targets
    Benchmark {
        /// Number of corpus words to use as targets
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// First guess (default: a random corpus word)
        #[arg(short, long)]
        first_guess: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tokens = load_tokens(cli.wordlist.as_deref())?;

    match cli.command {
        Commands::Solve {
            target,
            strategy,
            first_guess,
            verbose,
        } => {
            let target = parse_word(&target)?;
            let first_guess = resolve_first_guess(first_guess.as_deref(), &tokens)?;

            let mut eliminator = EliminatorKind::from_name(&strategy, &tokens);
            let result = run_game(&mut eliminator, &target, &first_guess);
            print_game_result(&result, verbose);
        }
        Commands::Compare {
            target,
            first_guess,
        } => {
            let target = parse_word(&target)?;
            let first_guess = resolve_first_guess(first_guess.as_deref(), &tokens)?;

            let result = run_compare(&tokens, &target, &first_guess);
            print_compare_result(&result);
        }
        Commands::Benchmark { count, first_guess } => {
            let first_guess = resolve_first_guess(first_guess.as_deref(), &tokens)?;
            let targets = targets_from_tokens(&tokens, count);
            if targets.is_empty() {
                return Err(anyhow!("word list contains no valid 5-letter words"));
            }

            println!(
                "Running {} targets against a corpus of {} tokens (first guess: {first_guess})...",
                targets.len(),
                tokens.len()
            );
            let result = run_benchmark(&tokens, &targets, &first_guess);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

/// Load the corpus from the -w flag, or fall back to the demo list
fn load_tokens(wordlist: Option<&str>) -> Result<Vec<String>> {
    match wordlist {
        Some(path) => {
            loader::read_tokens(path).with_context(|| format!("reading word list {path}"))
        }
        None => Ok(DEMO_WORDS.iter().map(ToString::to_string).collect()),
    }
}

/// Parse a CLI word argument, lowercasing at the boundary
fn parse_word(text: &str) -> Result<Word> {
    Word::new(text.to_lowercase()).map_err(|e| anyhow!("invalid word {text:?}: {e}"))
}

/// Use the explicit first guess, or pick a random word from the corpus
fn resolve_first_guess(first_guess: Option<&str>, tokens: &[String]) -> Result<Word> {
    use rand::prelude::IndexedRandom;

    match first_guess {
        Some(text) => parse_word(text),
        None => {
            let words = loader::words_from_tokens(tokens);
            words
                .choose(&mut rand::rng())
                .cloned()
                .ok_or_else(|| anyhow!("word list contains no valid 5-letter words"))
        }
    }
}
