//! Multi-target benchmark
//!
//! Runs the list/trie duel across many targets in parallel, aggregating
//! per-strategy operation totals and round distributions.

use crate::commands::solve::{GameResult, run_game};
use crate::core::Word;
use crate::solver::{ListEliminator, TrieEliminator};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Aggregated results for one strategy across all targets
#[derive(Debug, Clone, Default)]
pub struct StrategySummary {
    pub solved: usize,
    pub operations: u64,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub rounds_distribution: FxHashMap<usize, usize>,
}

impl StrategySummary {
    fn accumulate(&mut self, result: &GameResult) {
        if result.found {
            self.solved += 1;
        }
        self.operations += result.operations;
        self.total_rounds += result.rounds;
        self.max_rounds = self.max_rounds.max(result.rounds);
        *self.rounds_distribution.entry(result.rounds).or_insert(0) += 1;
    }

    fn finish(&mut self, total_targets: usize) {
        self.average_rounds = if total_targets > 0 {
            self.total_rounds as f64 / total_targets as f64
        } else {
            0.0
        };
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_targets: usize,
    pub list: StrategySummary,
    pub trie: StrategySummary,
    pub duration: Duration,
    pub targets_per_second: f64,
}

/// Run the duel on every target, in parallel
///
/// Both eliminators are built once from the token stream and cloned per
/// target, so each game starts from the full pool. The same first guess is
/// used for every target and both strategies, keeping the counters
/// comparable.
pub fn run_benchmark<S: AsRef<str> + Sync>(
    tokens: &[S],
    targets: &[Word],
    first_guess: &Word,
) -> BenchmarkResult {
    let base_list = ListEliminator::from_tokens(tokens.iter().map(AsRef::as_ref));
    let base_trie = TrieEliminator::from_tokens(tokens.iter().map(AsRef::as_ref));

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<(GameResult, GameResult)> = targets
        .par_iter()
        .map(|target| {
            let mut list = base_list.clone();
            let mut trie = base_trie.clone();

            let list_result = run_game(&mut list, target, first_guess);
            let trie_result = run_game(&mut trie, target, first_guess);

            pb.inc(1);
            (list_result, trie_result)
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_targets = targets.len();

    let mut list = StrategySummary::default();
    let mut trie = StrategySummary::default();
    for (list_result, trie_result) in &results {
        list.accumulate(list_result);
        trie.accumulate(trie_result);
    }
    list.finish(total_targets);
    trie.finish(total_targets);

    BenchmarkResult {
        total_targets,
        list,
        trie,
        duration,
        targets_per_second: total_targets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Pick benchmark targets from the corpus: the first `count` valid words
#[must_use]
pub fn targets_from_tokens<S: AsRef<str>>(tokens: &[S], count: usize) -> Vec<Word> {
    tokens
        .iter()
        .filter_map(|token| Word::new(token.as_ref()).ok())
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEMO_WORDS;

    #[test]
    fn benchmark_runs_over_demo_words() {
        let tokens = &DEMO_WORDS[..30];
        let targets = targets_from_tokens(tokens, 5);
        let first_guess = Word::new(DEMO_WORDS[0]).unwrap();

        let result = run_benchmark(tokens, &targets, &first_guess);

        assert_eq!(result.total_targets, 5);
        assert_eq!(result.list.solved, 5);
        assert_eq!(result.trie.solved, 5);
        assert!(result.list.operations > 0);
    }

    #[test]
    fn distributions_sum_to_target_count() {
        let tokens = &DEMO_WORDS[..30];
        let targets = targets_from_tokens(tokens, 8);
        let first_guess = Word::new(DEMO_WORDS[0]).unwrap();

        let result = run_benchmark(tokens, &targets, &first_guess);

        let list_sum: usize = result.list.rounds_distribution.values().sum();
        let trie_sum: usize = result.trie.rounds_distribution.values().sum();
        assert_eq!(list_sum, result.total_targets);
        assert_eq!(trie_sum, result.total_targets);
    }

    #[test]
    fn list_scans_more_than_trie_passes() {
        let tokens = &DEMO_WORDS[..50];
        let targets = targets_from_tokens(tokens, 10);
        let first_guess = Word::new(DEMO_WORDS[0]).unwrap();

        let result = run_benchmark(tokens, &targets, &first_guess);

        assert!(result.list.operations > result.trie.operations);
    }

    #[test]
    fn metrics_are_consistent() {
        let tokens = &DEMO_WORDS[..30];
        let targets = targets_from_tokens(tokens, 6);
        let first_guess = Word::new(DEMO_WORDS[0]).unwrap();

        let result = run_benchmark(tokens, &targets, &first_guess);

        assert!(result.list.average_rounds >= 1.0);
        assert!(result.trie.average_rounds >= 1.0);
        assert!(result.list.max_rounds >= result.list.average_rounds as usize);
        assert!(result.trie.max_rounds >= result.trie.average_rounds as usize);
    }

    #[test]
    fn empty_target_list_yields_zeroes() {
        let tokens = &DEMO_WORDS[..10];
        let first_guess = Word::new(DEMO_WORDS[0]).unwrap();

        let result = run_benchmark(tokens, &[], &first_guess);

        assert_eq!(result.total_targets, 0);
        assert_eq!(result.list.operations, 0);
        assert_eq!(result.trie.operations, 0);
        assert_eq!(result.list.average_rounds, 0.0);
    }
}
