//! Colored feedback patterns and the candidate-matching predicate
//!
//! Feedback encodes the verdict for one guess as five position-aligned tiles:
//! - `g` (hit): letter is in the correct position
//! - `y` (present): letter occurs elsewhere in the word
//! - `b` (absent): letter does not occur in the word
//!
//! Occurrence checks for `y`/`b` test membership in the whole word, with no
//! accounting for how many copies of a letter remain unconsumed. This is a
//! deliberate simplification carried through both elimination strategies; the
//! matcher and the colorizer must agree on it, or a target word could be
//! eliminated by its own feedback.

use super::{WORD_LEN, Word};
use std::fmt;

/// One feedback tile for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Correct letter, correct position (`g`)
    Hit,
    /// Letter occurs in the word, wrong position (`y`)
    Present,
    /// Letter does not occur in the word (`b`)
    Absent,
}

impl Tile {
    /// Parse a tile from its external character representation
    #[must_use]
    pub const fn from_char(c: u8) -> Option<Self> {
        match c {
            b'g' => Some(Self::Hit),
            b'y' => Some(Self::Present),
            b'b' => Some(Self::Absent),
            _ => None,
        }
    }

    /// External character representation (`g`, `y`, or `b`)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }
}

/// Position-aligned feedback for a full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tile; WORD_LEN]);

impl Feedback {
    /// All hits (the guess is the answer)
    pub const ALL_HITS: Self = Self([Tile::Hit; WORD_LEN]);

    /// Get the tiles
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    /// Check whether every position is a hit
    #[must_use]
    pub fn is_all_hits(&self) -> bool {
        self.0.iter().all(|&t| t == Tile::Hit)
    }

    /// Parse a feedback pattern from a string like `"bbggg"`
    ///
    /// Requires exactly five characters, each one of `g`, `y`, `b`
    /// (case-sensitive). Returns `None` otherwise.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Feedback;
    ///
    /// assert!(Feedback::parse("bbggg").is_some());
    /// assert!(Feedback::parse("bbg").is_none());
    /// assert!(Feedback::parse("bbgxg").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let bytes: &[u8; WORD_LEN] = s.as_bytes().try_into().ok()?;

        let mut tiles = [Tile::Absent; WORD_LEN];
        for (tile, &b) in tiles.iter_mut().zip(bytes) {
            *tile = Tile::from_char(b)?;
        }

        Some(Self(tiles))
    }

    /// Compute the feedback produced by guessing `guess` against `secret`
    ///
    /// Position i is Hit when the letters agree, Present when the guessed
    /// letter occurs anywhere in the secret, and Absent otherwise. Membership
    /// is whole-word, not remaining-count based.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Feedback, Word};
    ///
    /// let guess = Word::new("swing").unwrap();
    /// let secret = Word::new("thing").unwrap();
    /// let feedback = Feedback::from_guess(&guess, &secret);
    /// assert_eq!(feedback.to_string(), "bbggg");
    /// ```
    #[must_use]
    pub fn from_guess(guess: &Word, secret: &Word) -> Self {
        let mut tiles = [Tile::Absent; WORD_LEN];

        for (i, tile) in tiles.iter_mut().enumerate() {
            let letter = guess.chars()[i];
            *tile = if letter == secret.chars()[i] {
                Tile::Hit
            } else if secret.has_letter(letter) {
                Tile::Present
            } else {
                Tile::Absent
            };
        }

        Self(tiles)
    }

    /// Check whether `candidate` is consistent with this feedback for `guess`
    #[must_use]
    pub fn admits(&self, guess: &Word, candidate: &Word) -> bool {
        self.admits_letters(guess.chars(), candidate.chars())
    }

    /// Raw-letters variant of [`Self::admits`], used during trie pruning
    /// where candidate words exist only as paths of bytes.
    #[must_use]
    pub fn admits_letters(
        &self,
        guess: &[u8; WORD_LEN],
        candidate: &[u8; WORD_LEN],
    ) -> bool {
        self.0.iter().enumerate().all(|(i, tile)| {
            let letter = guess[i];
            match tile {
                Tile::Hit => candidate[i] == letter,
                Tile::Present => candidate[i] != letter && candidate.contains(&letter),
                Tile::Absent => !candidate.contains(&letter),
            }
        })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback pattern: {s}"))
    }
}
