//! Prefix view into a frequency trie.
//!
//! This module provides the `PrefixView` type, which locates the node reached
//! by a prompt and answers questions about the sequences stored beneath it.

use std::fmt;

use once_cell::unsync::OnceCell;

use crate::node::TrieNode;
use crate::symbol::Symbol;
use crate::Trie;

/// A completed sequence together with the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Completion {
    /// The full sequence, prompt included
    pub text: String,

    /// How many times the sequence appeared in the corpus
    pub count: usize,
}

/// A lightweight view of the subtrie below a prompt.
///
/// The best completion is computed on first use and cached for the lifetime
/// of the view.
///
/// # Examples
///
/// ```
/// use frequency_trie::Trie;
///
/// let trie = Trie::build(vec!["hello", "help", "help", "world"]).unwrap();
/// let view = trie.view_prefix("hel");
///
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.best().unwrap().text, "help");
///
/// assert!(!trie.view_prefix("x").exists());
/// ```
pub struct PrefixView<'a> {
    /// The source trie for this view
    trie: &'a Trie,

    /// The prompt defining this view
    prompt: String,

    /// The node reached by the prompt, if it exists
    subtrie_node: Option<&'a TrieNode>,

    /// Lazily computed best completion
    best: OnceCell<Option<Completion>>,
}

/// An iterator over the sequences stored below a `PrefixView`.
///
/// Yields `(sequence, count)` pairs in lexicographic order.
pub struct PrefixViewIter<'a> {
    /// Nodes still to visit, paired with the text spelled out to reach them
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> PrefixView<'a> {
    /// Creates a new prefix view for the given trie and prompt.
    pub fn new(trie: &'a Trie, prompt: &str) -> Self {
        let subtrie_node = Self::find_subtrie_node(trie, prompt);

        PrefixView {
            trie,
            prompt: prompt.to_string(),
            subtrie_node,
            best: OnceCell::new(),
        }
    }

    /// Returns the prompt for this view.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// Returns whether any stored sequence starts with the prompt.
    pub fn exists(&self) -> bool {
        self.subtrie_node.map_or(false, |node| !node.is_leaf())
    }

    /// Returns the occurrence count of the best completion, or 0 if none.
    pub fn best_count(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::max_child_count)
    }

    /// Returns whether the prompt is itself a stored sequence.
    pub fn is_complete_sequence(&self) -> bool {
        self.subtrie_node
            .and_then(|node| node.child(Symbol::End))
            .is_some()
    }

    /// Checks if the view holds a stored sequence.
    ///
    /// Only returns true if `sequence` starts with the prompt and occurred in
    /// the corpus.
    pub fn contains(&self, sequence: &str) -> bool {
        let suffix = sequence.strip_prefix(self.prompt.as_str());
        let (mut current, suffix) = match (self.subtrie_node, suffix) {
            (Some(node), Some(suffix)) => (node, suffix),
            _ => return false,
        };

        // Only the part past the prompt needs walking
        for ch in suffix.chars() {
            match Symbol::from_char(ch).and_then(|symbol| current.child(symbol)) {
                Some(child) => current = child,
                None => return false,
            }
        }

        current.child(Symbol::End).is_some()
    }

    /// Returns the number of distinct sequences starting with the prompt.
    pub fn len(&self) -> usize {
        match self.subtrie_node {
            Some(node) => Self::count_sequences_in_subtrie(node),
            None => 0,
        }
    }

    /// Returns whether no stored sequence starts with the prompt.
    pub fn is_empty(&self) -> bool {
        !self.exists()
    }

    /// Returns the most frequent sequence starting with the prompt.
    ///
    /// Ties go to the lexicographically smaller sequence.
    pub fn best(&self) -> Option<&Completion> {
        self.best
            .get_or_init(|| {
                self.subtrie_node
                    .and_then(|node| Self::walk_best(node, &self.prompt))
            })
            .as_ref()
    }

    /// Returns an iterator over the sequences stored below the prompt.
    pub fn iter(&self) -> PrefixViewIter<'a> {
        let mut stack = Vec::new();

        if let Some(node) = self.subtrie_node {
            stack.push((node, self.prompt.clone()));
        }

        PrefixViewIter { stack }
    }

    // Follows the prompt one symbol at a time from the root
    pub(crate) fn find_subtrie_node(trie: &'a Trie, prompt: &str) -> Option<&'a TrieNode> {
        let mut current = &trie.root;

        for ch in prompt.chars() {
            let symbol = Symbol::from_char(ch)?;
            current = current.child(symbol)?;
        }

        Some(current)
    }

    // Descends through the highest-count child until an end marker is chosen,
    // appending every letter passed on the way.
    pub(crate) fn walk_best(start: &TrieNode, prompt: &str) -> Option<Completion> {
        let mut current = start.best_child()?;
        let count = current.best_count();
        let mut text = prompt.to_string();

        while let Some(ch) = current.symbol().and_then(Symbol::as_char) {
            text.push(ch);
            current = current.best_child()?;
        }

        Some(Completion { text, count })
    }

    fn count_sequences_in_subtrie(node: &TrieNode) -> usize {
        let mut count = 0;
        let mut pending = vec![node];

        while let Some(node) = pending.pop() {
            if node.is_end() {
                count += 1;
            } else {
                pending.extend(node.children());
            }
        }

        count
    }
}

impl<'a> fmt::Debug for PrefixView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prompt", &self.prompt)
            .field("exists", &self.exists())
            .field("best_count", &self.best_count())
            .finish()
    }
}

impl<'a, 'b> IntoIterator for &'b PrefixView<'a> {
    type Item = (String, usize);
    type IntoIter = PrefixViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for PrefixViewIter<'a> {
    type Item = (String, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, text)) = self.stack.pop() {
            if node.is_end() {
                return Some((text, node.best_count()));
            }

            // Push in reverse slot order so the end marker and then `a` pop first
            for child in node.children().collect::<Vec<_>>().into_iter().rev() {
                let mut path = text.clone();
                if let Some(ch) = child.symbol().and_then(Symbol::as_char) {
                    path.push(ch);
                }
                self.stack.push((child, path));
            }
        }

        None
    }
}
