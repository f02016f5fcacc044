//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides bulk construction from
//! a corpus and the autocomplete query over it.

use std::iter;

use tracing::{debug, trace};

use crate::node::TrieNode;
use crate::prefix_view::{Completion, PrefixView};
use crate::symbol::{self, Symbol};
use crate::Error;

/// A frequency-ranked trie over the lowercase alphabet.
///
/// Every stored sequence is a path from the root to an end-marker node whose
/// count records how often the sequence occurred in the corpus. Each other node
/// caches the highest count reachable below it, so the best completion for a
/// prompt can be found by walking straight down without searching.
///
/// The trie is built once with [`Trie::build`] and is read-only afterwards.
#[derive(Debug, PartialEq, Eq)]
pub struct Trie {
    /// The root node of the trie
    pub(crate) root: TrieNode,

    /// Number of non-empty sequences inserted, duplicates included
    len: usize,

    /// Number of distinct non-empty sequences
    distinct: usize,
}

impl Trie {
    /// Builds a trie from an ordered corpus of sequences.
    ///
    /// Empty sequences are skipped. Every sequence is checked against the
    /// `a..=z` alphabet before any of them is inserted, so a rejected corpus
    /// never yields a partial trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_trie::Trie;
    ///
    /// let trie = Trie::build(vec!["ab", "ab", "ac"]).unwrap();
    /// assert_eq!(trie.len(), 3);
    /// assert_eq!(trie.distinct_len(), 2);
    ///
    /// assert!(Trie::build(vec!["ok", "Not ok"]).is_err());
    /// ```
    pub fn build<I, S>(sequences: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated = Vec::new();
        let mut skipped = 0;

        for (position, sequence) in sequences.into_iter().enumerate() {
            let sequence = sequence.as_ref();
            if sequence.is_empty() {
                trace!(sequence = position, "skipping empty sequence");
                skipped += 1;
                continue;
            }

            match symbol::to_symbols(sequence) {
                Ok(symbols) => validated.push(symbols),
                Err((ch, index)) => {
                    debug!(
                        sequence = position,
                        index,
                        ch = %ch.escape_debug(),
                        "rejecting sequence with symbol outside the alphabet"
                    );
                    return Err(Error::InvalidSymbol {
                        ch,
                        index,
                        sequence: position,
                    });
                }
            }
        }

        let mut trie = Trie::default();
        for symbols in &validated {
            trie.insert(symbols);
        }

        debug!(
            sequences = trie.len,
            distinct = trie.distinct,
            skipped,
            nodes = trie.root.subtree_size(),
            "built frequency trie"
        );

        Ok(trie)
    }

    // Construction-only; the public API never mutates a built trie.
    //
    // Each touched node is detached on the way down, so the path is owned by
    // `path` rather than by the call stack. Popping it reattaches the nodes
    // deepest first and re-aggregates each one after its child is back.
    fn insert(&mut self, symbols: &[Symbol]) {
        if symbols.is_empty() {
            return;
        }

        let mut path: Vec<Box<TrieNode>> = Vec::with_capacity(symbols.len() + 1);
        let terminated = symbols.iter().copied().chain(iter::once(Symbol::End));

        for symbol in terminated {
            let parent = match path.last_mut() {
                Some(node) => &mut **node,
                None => &mut self.root,
            };
            let child = parent.take_touched_child(symbol);
            path.push(child);
        }

        // The end marker was pushed last
        if path.last().map_or(false, |end| end.best_count() == 1) {
            self.distinct += 1;
        }

        while let Some(mut node) = path.pop() {
            node.refresh_best_count();
            let parent = match path.last_mut() {
                Some(parent) => &mut **parent,
                None => &mut self.root,
            };
            parent.put_child(node);
        }

        self.len += 1;
    }

    /// Returns the number of non-empty sequences the trie was built from,
    /// counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no sequence was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_trie::Trie;
    ///
    /// assert!(Trie::build(Vec::<String>::new()).unwrap().is_empty());
    /// assert!(Trie::build(vec!["", ""]).unwrap().is_empty());
    /// assert!(!Trie::build(vec!["a"]).unwrap().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct sequences stored.
    pub fn distinct_len(&self) -> usize {
        self.distinct
    }

    /// Returns how many times `sequence` occurred in the corpus.
    ///
    /// Sequences that were never stored, including empty ones and ones with
    /// characters outside the alphabet, have a count of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_trie::Trie;
    ///
    /// let trie = Trie::build(vec!["cat", "cats", "cats"]).unwrap();
    /// assert_eq!(trie.count("cats"), 2);
    /// assert_eq!(trie.count("cat"), 1);
    /// assert_eq!(trie.count("ca"), 0);
    /// ```
    pub fn count(&self, sequence: &str) -> usize {
        if sequence.is_empty() {
            return 0;
        }

        let mut current = &self.root;
        for ch in sequence.chars() {
            let next = Symbol::from_char(ch).and_then(|symbol| current.child(symbol));
            match next {
                Some(child) => current = child,
                None => return 0,
            }
        }

        current.child(Symbol::End).map_or(0, TrieNode::best_count)
    }

    /// Creates a view of the node reached by `prompt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_trie::Trie;
    ///
    /// let trie = Trie::build(vec!["help", "hello", "hello"]).unwrap();
    /// let view = trie.view_prefix("hel");
    ///
    /// assert!(view.exists());
    /// assert_eq!(view.best_count(), 2);
    /// assert_eq!(view.best().map(|c| c.text.as_str()), Some("hello"));
    /// ```
    pub fn view_prefix<'a>(&'a self, prompt: &str) -> PrefixView<'a> {
        PrefixView::new(self, prompt)
    }

    /// Returns the most frequent stored sequence starting with `prompt`.
    ///
    /// Ties between equally frequent sequences go to the lexicographically
    /// smaller one, so a sequence beats its own extensions on a tie. Returns
    /// `None` when nothing stored starts with `prompt`; a prompt containing a
    /// character outside the alphabet can never match.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_trie::Trie;
    ///
    /// let trie = Trie::build(vec!["ab", "ab", "ac"]).unwrap();
    ///
    /// assert_eq!(trie.autocomplete("a"), Some("ab".to_string()));
    /// assert_eq!(trie.autocomplete("b"), None);
    /// ```
    pub fn autocomplete(&self, prompt: &str) -> Option<String> {
        self.best_completion(prompt).map(|completion| completion.text)
    }

    /// Like [`Trie::autocomplete`], but rejects prompts with characters outside
    /// the alphabet and reports the occurrence count of the completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_trie::{Completion, Error, Trie};
    ///
    /// let trie = Trie::build(vec!["cat", "cats", "cats"]).unwrap();
    ///
    /// assert_eq!(
    ///     trie.complete("cat"),
    ///     Ok(Some(Completion { text: "cats".to_string(), count: 2 }))
    /// );
    /// assert_eq!(trie.complete("dog"), Ok(None));
    /// assert_eq!(
    ///     trie.complete("Cat"),
    ///     Err(Error::InvalidSymbol { ch: 'C', index: 0, sequence: 0 })
    /// );
    /// ```
    pub fn complete(&self, prompt: &str) -> Result<Option<Completion>, Error> {
        symbol::to_symbols(prompt).map_err(|(ch, index)| Error::InvalidSymbol {
            ch,
            index,
            sequence: 0,
        })?;

        Ok(self.best_completion(prompt))
    }

    fn best_completion(&self, prompt: &str) -> Option<Completion> {
        let node = PrefixView::find_subtrie_node(self, prompt)?;
        PrefixView::walk_best(node, prompt)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie {
            root: TrieNode::root(),
            len: 0,
            distinct: 0,
        }
    }
}
