//! Prefix tree of fixed-length candidate words
//!
//! Every stored word is exactly five letters, so a node reached after
//! consuming five letters from the root is a complete word and needs no
//! end-of-word flag. Children live in a `BTreeMap` keyed by letter, which
//! makes enumeration and the canonical first word deterministic (ascending
//! letter order).
//!
//! The structure exists for one operation: [`Trie::filter`], which prunes
//! every word inconsistent with a guess's feedback in a single traversal,
//! compacting emptied branches bottom-up as it returns. Candidates sharing a
//! prefix are tested and freed together instead of being revisited one by
//! one, which is the whole argument for using a trie over a flat list here.

use super::{Feedback, WORD_LEN, Word};
use std::collections::BTreeMap;

/// One tree node; owns its children, keyed by letter.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
}

impl TrieNode {
    /// Count leaf nodes (nodes with no children) in this subtree.
    fn count_leaves(&self) -> usize {
        if self.children.is_empty() {
            return 1;
        }
        self.children.values().map(TrieNode::count_leaves).sum()
    }

    /// Collect every depth-5 path below this node, extending `prefix`.
    fn collect_words(&self, prefix: &mut Vec<u8>, out: &mut Vec<String>) {
        if prefix.len() == WORD_LEN {
            out.push(String::from_utf8_lossy(prefix).into_owned());
            return;
        }

        for (&letter, child) in &self.children {
            prefix.push(letter);
            child.collect_words(prefix, out);
            prefix.pop();
        }
    }

    /// Prune every edge whose subtree holds no word admitted by `feedback`.
    ///
    /// `path[..depth]` is the prefix consumed so far. Children are visited
    /// first; a child left without children survives only if it sits at full
    /// depth and its completed word passes the match predicate. Sub-depth
    /// branches emptied by pruning fail that test and are removed on the way
    /// back up, cascading one level per frame.
    fn prune_children(
        &mut self,
        path: &mut [u8; WORD_LEN],
        depth: usize,
        guess: &[u8; WORD_LEN],
        feedback: &Feedback,
    ) {
        // Depth-5 nodes are complete words and own no meaningful children.
        if depth == WORD_LEN {
            return;
        }

        self.children.retain(|&letter, child| {
            path[depth] = letter;
            child.prune_children(path, depth + 1, guess, feedback);

            if child.children.is_empty() {
                depth + 1 == WORD_LEN && feedback.admits_letters(guess, path)
            } else {
                true
            }
        });
    }
}

/// Prefix tree over 5-letter words, prunable in place by guess feedback.
///
/// # Examples
/// ```
/// use wordle_trie::core::Trie;
///
/// let mut trie = Trie::new();
/// assert!(trie.insert("apple"));
/// assert!(!trie.insert("apple")); // duplicate
/// assert!(!trie.insert("app")); // wrong length
/// assert_eq!(trie.size(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating only the missing suffix nodes
    ///
    /// Returns false, without mutating the trie, when the word is not exactly
    /// five bytes long or is already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.len() != WORD_LEN {
            return false;
        }

        let mut current = &mut self.root;
        let mut created = false;
        for &letter in bytes {
            if !current.children.contains_key(&letter) {
                created = true;
            }
            current = current.children.entry(letter).or_default();
        }

        // Walking the full word through existing nodes means it was already stored.
        created
    }

    /// Number of stored words, counted as leaf nodes reachable from the root
    ///
    /// An empty trie has size 0 even though its root is itself childless.
    /// Under the depth-5 invariant every leaf is a complete word, but the
    /// definition is leaf count, so a malformed shorter leaf would still be
    /// counted.
    #[must_use]
    pub fn size(&self) -> usize {
        if self.root.children.is_empty() {
            return 0;
        }
        self.root.count_leaves()
    }

    /// Whether the trie stores no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Enumerate every stored word in ascending letter order
    ///
    /// Recomputed fresh on each call; only depth-5 paths are reported.
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut prefix = Vec::with_capacity(WORD_LEN);
        self.root.collect_words(&mut prefix, &mut words);
        words
    }

    /// The canonical first word: greedy descent taking the smallest letter
    /// at each level
    ///
    /// Pruning can leave a branch that dead-ends before depth 5; in that case
    /// fall back to a full enumeration. Returns `None` iff the trie holds no
    /// complete word.
    #[must_use]
    pub fn first_word(&self) -> Option<String> {
        let mut word = Vec::with_capacity(WORD_LEN);
        let mut current = &self.root;

        while word.len() < WORD_LEN {
            match current.children.first_key_value() {
                Some((&letter, child)) => {
                    word.push(letter);
                    current = child;
                }
                None => break,
            }
        }

        if word.len() == WORD_LEN {
            return Some(String::from_utf8_lossy(&word).into_owned());
        }

        self.all_words().into_iter().next()
    }

    /// Prune every word inconsistent with `pattern` for `guess`
    ///
    /// Validation happens before any mutation: the guess must be five bytes
    /// and the pattern must parse as five `g`/`y`/`b` symbols, otherwise
    /// false is returned and the trie is untouched. A valid pass always runs
    /// to completion and returns true, whether it removed zero words or all
    /// of them.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("apple");
    /// trie.insert("ipple");
    ///
    /// assert!(!trie.filter("app", "bbbbb")); // guess too short
    /// assert!(!trie.filter("apple", "bbb")); // pattern too short
    /// assert_eq!(trie.size(), 2);
    ///
    /// assert!(trie.filter("apple", "bgggg"));
    /// assert_eq!(trie.all_words(), vec!["ipple"]);
    /// ```
    pub fn filter(&mut self, guess: &str, pattern: &str) -> bool {
        let Ok(guess) = <&[u8; WORD_LEN]>::try_from(guess.as_bytes()) else {
            return false;
        };
        let Some(feedback) = Feedback::parse(pattern) else {
            return false;
        };

        self.root
            .prune_children(&mut [0u8; WORD_LEN], 0, guess, &feedback);
        true
    }

    /// Typed pruning entry for callers that already hold validated values
    ///
    /// Same pass as [`Self::filter`] without the string-level checks.
    pub fn prune(&mut self, guess: &Word, feedback: &Feedback) {
        self.root
            .prune_children(&mut [0u8; WORD_LEN], 0, guess.chars(), feedback);
    }

    /// Remove the entire subtree hanging off one root edge
    ///
    /// Returns whether the edge existed. Supports external structural edits;
    /// `size` stays consistent because it counts whatever leaves remain.
    pub fn remove_branch(&mut self, letter: u8) -> bool {
        self.root.children.remove(&letter).is_some()
    }
}
