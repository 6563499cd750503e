//! The elimination loop
//!
//! Simulates one game: guess, collect feedback, prune, repeat until the
//! target is hit or the candidate pool runs dry.

use crate::core::{Feedback, Word};
use crate::solver::Eliminator;

/// One round of the simulation
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub remaining_after: usize,
}

/// Result of simulating one game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub strategy: &'static str,
    pub target: String,
    pub found: bool,
    pub rounds: usize,
    pub operations: u64,
    pub steps: Vec<GuessStep>,
}

/// Run the elimination loop for one target word
///
/// The first round plays `first_guess`; every later round plays the
/// eliminator's canonical candidate. The loop needs no round cap: a wrong
/// guess never survives its own feedback, so the pool shrinks every round,
/// and the target always does survive, so a target present in the pool is
/// eventually guessed.
pub fn run_game<E: Eliminator>(
    eliminator: &mut E,
    target: &Word,
    first_guess: &Word,
) -> GameResult {
    eliminator.reset_operations();

    let mut steps = Vec::new();
    let mut guess = first_guess.clone();

    loop {
        let feedback = Feedback::from_guess(&guess, target);

        if feedback.is_all_hits() {
            steps.push(GuessStep {
                word: guess.text().to_string(),
                feedback,
                remaining_after: eliminator.remaining(),
            });
            return GameResult {
                strategy: eliminator.name(),
                target: target.text().to_string(),
                found: true,
                rounds: steps.len(),
                operations: eliminator.operations(),
                steps,
            };
        }

        eliminator.prune(&guess, &feedback);
        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            remaining_after: eliminator.remaining(),
        });

        match eliminator.candidate() {
            Some(next) => guess = next,
            None => {
                return GameResult {
                    strategy: eliminator.name(),
                    target: target.text().to_string(),
                    found: false,
                    rounds: steps.len(),
                    operations: eliminator.operations(),
                    steps,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Eliminator, ListEliminator, TrieEliminator};

    const WORDS: &[&str] = &["swing", "mango", "thing", "cling", "peach"];

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn trie_game_finds_target() {
        let mut eliminator = TrieEliminator::from_tokens(WORDS);
        let result = run_game(&mut eliminator, &word("thing"), &word("swing"));

        assert!(result.found);
        assert_eq!(result.strategy, "trie");
        // swing -> bbggg leaves {cling, thing}; cling -> bbggg leaves {thing}
        assert_eq!(result.rounds, 3);
        assert_eq!(result.operations, 2); // one per prune pass
        assert!(result.steps.last().unwrap().feedback.is_all_hits());
    }

    #[test]
    fn list_game_finds_target_with_more_operations() {
        let mut eliminator = ListEliminator::from_tokens(WORDS);
        let result = run_game(&mut eliminator, &word("thing"), &word("swing"));

        assert!(result.found);
        // Round 1 plays swing, leaving [thing, cling]; the list then guesses
        // its front word, which is the target
        assert_eq!(result.rounds, 2);
        assert_eq!(result.operations, 5); // all five words examined in round 1
    }

    #[test]
    fn both_strategies_find_the_same_target() {
        let mut list = ListEliminator::from_tokens(WORDS);
        let mut trie = TrieEliminator::from_tokens(WORDS);

        let list_result = run_game(&mut list, &word("cling"), &word("swing"));
        let trie_result = run_game(&mut trie, &word("cling"), &word("swing"));

        assert!(list_result.found);
        assert!(trie_result.found);
        // Canonical picks differ (insertion order vs ascending letters), but
        // the list never does less scanning than the trie does passes
        assert!(list_result.operations >= trie_result.operations);
    }

    #[test]
    fn missing_target_exhausts_the_pool() {
        let mut eliminator = TrieEliminator::from_tokens(["mango", "peach"]);
        let result = run_game(&mut eliminator, &word("zonal"), &word("mango"));

        assert!(!result.found);
        assert_eq!(eliminator.remaining(), 0);
    }

    #[test]
    fn first_guess_hitting_the_target_costs_nothing() {
        let mut eliminator = TrieEliminator::from_tokens(WORDS);
        let result = run_game(&mut eliminator, &word("peach"), &word("peach"));

        assert!(result.found);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.operations, 0);
    }

    #[test]
    fn counter_is_reset_between_runs() {
        let mut eliminator = ListEliminator::from_tokens(WORDS);

        let first = run_game(&mut eliminator, &word("thing"), &word("swing"));
        // The pool was consumed; rebuild for a fresh run
        let mut eliminator = ListEliminator::from_tokens(WORDS);
        let second = run_game(&mut eliminator, &word("thing"), &word("swing"));

        assert_eq!(first.operations, second.operations);
    }
}
