//! # Frequency Trie
//!
//! A trie that answers single-best autocomplete queries over a corpus of
//! lowercase sequences.
//!
//! Every node caches the occurrence count of the most frequent sequence that
//! passes through it, so finding the best completion for a prompt is a single
//! walk down the tree: follow the prompt, then keep taking the child with the
//! highest count until the end of a sequence is reached.
//!
//! ## Features
//!
//! - **Frequency ranking**: the most frequent stored sequence wins
//! - **Deterministic ties**: equally frequent sequences resolve to the
//!   lexicographically smaller one
//! - **Explicit misses**: a prompt without completion yields `None`
//! - **Prefix Views**: inspect the subtrie below a prompt, its best completion
//!   and every sequence it holds
//!
//! ## Example
//!
//! ```rust
//! use frequency_trie::{autocomplete, build};
//!
//! let trie = build(vec!["cat", "cats", "cats", "dog"]).unwrap();
//!
//! assert_eq!(autocomplete(&trie, "ca"), Some("cats".to_string()));
//! assert_eq!(autocomplete(&trie, "d"), Some("dog".to_string()));
//! assert_eq!(autocomplete(&trie, "x"), None);
//! ```

pub mod node;
mod prefix_view;
mod symbol;
mod trie;

// Re-export public types
pub use crate::node::TrieNode;
pub use crate::prefix_view::{Completion, PrefixView, PrefixViewIter};
pub use crate::symbol::{Letter, Symbol, ALPHABET_SIZE};
pub use crate::trie::Trie;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character outside `a..=z` was found.
    ///
    /// `index` is the character offset within the offending sequence and
    /// `sequence` its position in the corpus (always 0 for a prompt).
    #[error("symbol {ch:?} at index {index} of sequence {sequence} is outside the a-z alphabet")]
    InvalidSymbol {
        ch: char,
        index: usize,
        sequence: usize,
    },
}

/// Builds a trie from an ordered corpus of sequences.
///
/// See [`Trie::build`].
pub fn build<I, S>(sequences: I) -> Result<Trie, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Trie::build(sequences)
}

/// Returns the best completion of `prompt`, or `None` if there is none.
///
/// See [`Trie::autocomplete`].
pub fn autocomplete(trie: &Trie, prompt: &str) -> Option<String> {
    trie.autocomplete(prompt)
}
