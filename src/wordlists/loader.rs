//! Word list loading
//!
//! Reads a plain-text corpus of whitespace-separated tokens. Tokens are
//! passed through untouched; each consumer applies its own acceptance rule
//! (the list eliminator validates through `Word::new`, the trie leans on
//! `insert`'s length check).

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read every whitespace-separated token from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_trie::wordlists::loader::read_tokens;
///
/// let tokens = read_tokens("wordlist.txt").unwrap();
/// println!("Read {} tokens", tokens.len());
/// ```
pub fn read_tokens<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .split_whitespace()
        .map(ToString::to_string)
        .collect())
}

/// Convert tokens to validated words, skipping anything invalid
#[must_use]
pub fn words_from_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<Word> {
    tokens
        .iter()
        .filter_map(|token| Word::new(token.as_ref()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_tokens_keeps_valid_words() {
        let tokens = ["crane", "slate", "irate"];
        let words = words_from_tokens(&tokens);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_tokens_skips_invalid() {
        let tokens = ["crane", "toolong", "abc", "CRANE", "slate"];
        let words = words_from_tokens(&tokens);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_tokens_empty() {
        let tokens: [&str; 0] = [];
        assert!(words_from_tokens(&tokens).is_empty());
    }

    #[test]
    fn read_tokens_splits_on_any_whitespace() {
        let path = std::env::temp_dir().join("wordle_trie_loader_test.txt");
        fs::write(&path, "swing thing\ncling\t mango  \n").unwrap();

        let tokens = read_tokens(&path).unwrap();
        assert_eq!(tokens, vec!["swing", "thing", "cling", "mango"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn read_tokens_missing_file_is_an_error() {
        let result = read_tokens("/definitely/not/a/real/path.txt");
        assert!(result.is_err());
    }
}
