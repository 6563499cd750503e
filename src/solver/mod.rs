//! Candidate elimination strategies
//!
//! Two interchangeable ways of narrowing the candidate pool round by round:
//! a flat word list rebuilt on every prune, and a prefix tree pruned in place.

mod list;
mod strategy;
mod trie;

pub use list::ListEliminator;
pub use strategy::{Eliminator, EliminatorKind};
pub use trie::TrieEliminator;
