//! List-based candidate elimination
//!
//! The baseline strategy: hold every candidate in a `Vec` and rebuild the
//! whole vector on each prune, examining every remaining word individually.
//! Its work counter ticks once per candidate examined, so its totals grow
//! with pool size times rounds.

use super::Eliminator;
use crate::core::{Feedback, Word};

/// Linear candidate pool, rebuilt from scratch each round
#[derive(Debug, Clone, Default)]
pub struct ListEliminator {
    words: Vec<Word>,
    operations: u64,
}

impl ListEliminator {
    /// Build a pool from a token stream, accepting only valid 5-letter
    /// lowercase tokens and silently skipping the rest
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = tokens
            .into_iter()
            .filter_map(|token| Word::new(token.as_ref()).ok())
            .collect();

        Self {
            words,
            operations: 0,
        }
    }

    /// Remaining candidates, in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Eliminator for ListEliminator {
    fn candidate(&self) -> Option<Word> {
        self.words.first().cloned()
    }

    fn prune(&mut self, guess: &Word, feedback: &Feedback) {
        // Discard the old pool and rebuild, touching every candidate once.
        let words = std::mem::take(&mut self.words);
        self.words = words
            .into_iter()
            .filter(|candidate| {
                self.operations += 1;
                feedback.admits(guess, candidate)
            })
            .collect();
    }

    fn remaining(&self) -> usize {
        self.words.len()
    }

    fn operations(&self) -> u64 {
        self.operations
    }

    fn reset_operations(&mut self) {
        self.operations = 0;
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tokens_keeps_only_valid_words() {
        let eliminator =
            ListEliminator::from_tokens(["swing", "to", "pineapple", "thing", "CLING"]);
        assert_eq!(eliminator.remaining(), 2);
        assert_eq!(eliminator.candidate().unwrap().text(), "swing");
    }

    #[test]
    fn candidate_is_first_in_insertion_order() {
        let eliminator = ListEliminator::from_tokens(["mango", "apple"]);
        assert_eq!(eliminator.candidate().unwrap().text(), "mango");
    }

    #[test]
    fn empty_pool_has_no_candidate() {
        let eliminator = ListEliminator::from_tokens(Vec::<&str>::new());
        assert_eq!(eliminator.candidate(), None);
        assert_eq!(eliminator.remaining(), 0);
    }

    #[test]
    fn prune_rebuilds_and_counts_every_candidate() {
        let mut eliminator =
            ListEliminator::from_tokens(["swing", "mango", "thing", "cling", "peach"]);

        let guess = Word::new("swing").unwrap();
        let feedback = Feedback::parse("bbggg").unwrap();
        eliminator.prune(&guess, &feedback);

        assert_eq!(eliminator.remaining(), 2);
        assert_eq!(eliminator.operations(), 5); // one per word examined

        // Second round scans only the survivors
        eliminator.prune(&guess, &feedback);
        assert_eq!(eliminator.remaining(), 2);
        assert_eq!(eliminator.operations(), 7);
    }

    #[test]
    fn reset_operations_clears_the_counter() {
        let mut eliminator = ListEliminator::from_tokens(["swing", "thing"]);

        let guess = Word::new("swing").unwrap();
        let feedback = Feedback::parse("bbggg").unwrap();
        eliminator.prune(&guess, &feedback);
        assert!(eliminator.operations() > 0);

        eliminator.reset_operations();
        assert_eq!(eliminator.operations(), 0);
    }
}
