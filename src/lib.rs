//! Wordle Trie
//!
//! Simulates solving a 5-letter word-guessing puzzle by iterative candidate
//! elimination, comparing a linear word list rebuilt each round against a
//! prefix tree pruned structurally in place.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_trie::core::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["swing", "mango", "thing", "cling", "peach"] {
//!     trie.insert(word);
//! }
//!
//! // Feedback for guessing "swing": gray, gray, green, green, green
//! assert!(trie.filter("swing", "bbggg"));
//! assert_eq!(trie.size(), 2);
//! assert_eq!(trie.all_words(), vec!["cling", "thing"]);
//! ```

// Core domain types
pub mod core;

// Candidate elimination strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
