//! Core domain types for the word-guessing simulation
//!
//! This module contains the fundamental domain types with zero external dependencies:
//! validated words, colored feedback, and the prunable prefix tree.

mod feedback;
mod trie;
mod word;

pub use feedback::{Feedback, Tile};
pub use trie::Trie;
pub use word::{WORD_LEN, Word, WordError};
