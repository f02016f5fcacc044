//! The closed alphabet indexed by the trie.
//!
//! Every node owns one child slot per symbol. Slot 0 is reserved for the
//! end-of-sequence marker and slots 1 through 26 hold the letters `a..=z` in
//! alphabetical order, so slot order and symbol order are the same thing.

use std::fmt;

/// Number of child slots per node (end marker plus 26 letters).
pub const ALPHABET_SIZE: usize = 27;

/// A lowercase ASCII letter.
///
/// Only obtainable through [`Symbol::from_char`] or [`Symbol::from_slot`], so
/// every `Letter` is within `a..=z`.
///
/// ```compile_fail
/// let letter = frequency_trie::Letter(b'A');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub fn as_char(self) -> char {
        self.0 as char
    }
}

/// A single position in a stored sequence.
///
/// The derived ordering puts `End` before every letter, which is what makes a
/// complete sequence win a tie against any of its extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Marks the end of a stored sequence.
    End,
    /// A letter of the alphabet.
    Letter(Letter),
}

impl Symbol {
    /// Maps a character onto the alphabet.
    ///
    /// Returns `None` for anything other than `'a'..='z'`.
    ///
    /// ```
    /// use frequency_trie::Symbol;
    ///
    /// let c = Symbol::from_char('c').unwrap();
    /// assert_eq!(c.as_char(), Some('c'));
    /// assert_eq!(Symbol::from_char('C'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Symbol::Letter(Letter(ch as u8)))
        } else {
            None
        }
    }

    /// Returns the symbol stored in `slot`, if the slot is in range.
    pub fn from_slot(slot: usize) -> Option<Self> {
        match slot {
            0 => Some(Symbol::End),
            1..=26 => Some(Symbol::Letter(Letter(b'a' + (slot - 1) as u8))),
            _ => None,
        }
    }

    /// The child slot this symbol occupies, always below `ALPHABET_SIZE`.
    pub fn slot(self) -> usize {
        match self {
            Symbol::End => 0,
            Symbol::Letter(Letter(b)) => (b - b'a') as usize + 1,
        }
    }

    /// The character this symbol contributes to a completion, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::End => None,
            Symbol::Letter(letter) => Some(letter.as_char()),
        }
    }

    pub fn is_end(self) -> bool {
        self == Symbol::End
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(ch) => write!(f, "{}", ch),
            None => write!(f, "$"),
        }
    }
}

/// Converts `sequence` into symbols, stopping at the first character outside
/// the alphabet.
///
/// On failure returns the offending character together with its character
/// offset in `sequence`.
pub(crate) fn to_symbols(sequence: &str) -> Result<Vec<Symbol>, (char, usize)> {
    sequence
        .chars()
        .enumerate()
        .map(|(i, ch)| Symbol::from_char(ch).ok_or((ch, i)))
        .collect()
}
