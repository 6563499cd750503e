//! Head-to-head strategy comparison
//!
//! Runs the list and trie eliminators against the same target from the same
//! corpus and first guess, so their operation counters can be read side by
//! side.

use super::solve::{GameResult, run_game};
use crate::core::Word;
use crate::solver::{ListEliminator, TrieEliminator};

/// Results of one duel between the two strategies
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub list: GameResult,
    pub trie: GameResult,
}

impl CompareResult {
    /// How many times more scanning the list did than the trie did passes
    ///
    /// Returns `None` when the trie performed no prune at all (first guess
    /// hit the target).
    #[must_use]
    pub fn operations_ratio(&self) -> Option<f64> {
        if self.trie.operations == 0 {
            return None;
        }
        Some(self.list.operations as f64 / self.trie.operations as f64)
    }
}

/// Run both strategies on one target with the same first guess
pub fn run_compare<S: AsRef<str>>(
    tokens: &[S],
    target: &Word,
    first_guess: &Word,
) -> CompareResult {
    let mut list = ListEliminator::from_tokens(tokens.iter().map(AsRef::as_ref));
    let mut trie = TrieEliminator::from_tokens(tokens.iter().map(AsRef::as_ref));

    CompareResult {
        list: run_game(&mut list, target, first_guess),
        trie: run_game(&mut trie, target, first_guess),
    }
}
