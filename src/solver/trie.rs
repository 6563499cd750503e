//! Trie-based candidate elimination
//!
//! Wraps the core prefix tree behind the [`Eliminator`] seam. Pruning is a
//! single structural pass over the tree, so the work counter ticks once per
//! prune invocation rather than once per candidate — the asymmetry that
//! makes the reported totals differ by orders of magnitude from the list
//! strategy on a real corpus.

use super::Eliminator;
use crate::core::{Feedback, Trie, Word};

/// Prefix-tree candidate pool, pruned in place
#[derive(Debug, Clone, Default)]
pub struct TrieEliminator {
    trie: Trie,
    operations: u64,
}

impl TrieEliminator {
    /// Build a pool from a token stream
    ///
    /// Every token is offered to `Trie::insert`, whose own length check
    /// rejects non-conforming tokens; nothing is filtered up front.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for token in tokens {
            trie.insert(token.as_ref());
        }

        Self {
            trie,
            operations: 0,
        }
    }

    /// Access the underlying trie
    #[must_use]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Eliminator for TrieEliminator {
    fn candidate(&self) -> Option<Word> {
        // The canonical first word is all lowercase letters by construction;
        // a corpus token that was not gets flattened away here.
        self.trie
            .first_word()
            .and_then(|word| Word::new(word).ok())
    }

    fn prune(&mut self, guess: &Word, feedback: &Feedback) {
        self.operations += 1;
        self.trie.prune(guess, feedback);
    }

    fn remaining(&self) -> usize {
        self.trie.size()
    }

    fn operations(&self) -> u64 {
        self.operations
    }

    fn reset_operations(&mut self) {
        self.operations = 0;
    }

    fn name(&self) -> &'static str {
        "trie"
    }
}
