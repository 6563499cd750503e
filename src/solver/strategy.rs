//! The elimination strategy seam
//!
//! Defines the Eliminator trait and a kind enum for runtime selection.

use super::{ListEliminator, TrieEliminator};
use crate::core::{Feedback, Word};

/// A candidate pool that can be narrowed by guess feedback
///
/// Each implementation carries its own work counter so callers can compare
/// how much scanning the two strategies actually did; the counter is explicit
/// state threaded through the eliminator, not a process-wide global.
pub trait Eliminator {
    /// The canonical next guess: any remaining candidate under the
    /// strategy's deterministic ordering, or `None` when the pool is empty.
    fn candidate(&self) -> Option<Word>;

    /// Remove every candidate inconsistent with `feedback` for `guess`.
    fn prune(&mut self, guess: &Word, feedback: &Feedback);

    /// Number of remaining candidates.
    fn remaining(&self) -> usize;

    /// Work performed since the last reset. The unit differs by strategy:
    /// candidates examined for the list, prune passes for the trie.
    fn operations(&self) -> u64;

    /// Reset the work counter between simulation runs.
    fn reset_operations(&mut self);

    /// Short strategy name for reporting.
    fn name(&self) -> &'static str;
}

/// Enum wrapper for the elimination strategies
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum EliminatorKind {
    /// Linear word list, rebuilt from scratch each round
    List(ListEliminator),
    /// Prefix tree, pruned structurally in place
    Trie(TrieEliminator),
}

impl EliminatorKind {
    /// Create an eliminator by name, seeded from a token stream
    ///
    /// Supported names: "list", "trie". Defaults to the trie if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name<I, S>(name: &str, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match name {
            "list" => Self::List(ListEliminator::from_tokens(tokens)),
            _ => Self::Trie(TrieEliminator::from_tokens(tokens)),
        }
    }
}

impl Eliminator for EliminatorKind {
    fn candidate(&self) -> Option<Word> {
        match self {
            Self::List(e) => e.candidate(),
            Self::Trie(e) => e.candidate(),
        }
    }

    fn prune(&mut self, guess: &Word, feedback: &Feedback) {
        match self {
            Self::List(e) => e.prune(guess, feedback),
            Self::Trie(e) => e.prune(guess, feedback),
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Self::List(e) => e.remaining(),
            Self::Trie(e) => e.remaining(),
        }
    }

    fn operations(&self) -> u64 {
        match self {
            Self::List(e) => e.operations(),
            Self::Trie(e) => e.operations(),
        }
    }

    fn reset_operations(&mut self) {
        match self {
            Self::List(e) => e.reset_operations(),
            Self::Trie(e) => e.reset_operations(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::List(e) => e.name(),
            Self::Trie(e) => e.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["swing", "mango", "thing", "cling", "peach"];

    #[test]
    fn from_name_selects_list() {
        let kind = EliminatorKind::from_name("list", WORDS);
        assert!(matches!(kind, EliminatorKind::List(_)));
        assert_eq!(kind.name(), "list");
    }

    #[test]
    fn from_name_selects_trie() {
        let kind = EliminatorKind::from_name("trie", WORDS);
        assert!(matches!(kind, EliminatorKind::Trie(_)));
        assert_eq!(kind.name(), "trie");
    }

    #[test]
    fn from_name_defaults_to_trie() {
        let kind = EliminatorKind::from_name("something-else", WORDS);
        assert!(matches!(kind, EliminatorKind::Trie(_)));
    }

    #[test]
    fn kind_delegates_pruning() {
        let mut kind = EliminatorKind::from_name("trie", WORDS);
        assert_eq!(kind.remaining(), 5);

        let guess = Word::new("swing").unwrap();
        let feedback = Feedback::parse("bbggg").unwrap();
        kind.prune(&guess, &feedback);

        assert_eq!(kind.remaining(), 2);
        assert_eq!(kind.operations(), 1);

        kind.reset_operations();
        assert_eq!(kind.operations(), 0);
    }
}
