//! Node implementation for the frequency trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Each node exclusively owns its children through a fixed array of
//! optional boxes, one slot per alphabet symbol.
//!
//! A single stored sequence produces a chain of nodes as deep as the sequence
//! is long, so nothing here recurses over the tree: traversal, comparison and
//! drop all work from an explicit stack.

use std::fmt;

use crate::symbol::{Symbol, ALPHABET_SIZE};

/// A single node of the frequency trie.
///
/// Each node stores the symbol it represents, the number of occurrences of
/// the most frequent sequence passing through it, and one optional child per
/// alphabet slot.
///
/// Nodes are only created while a [`Trie`](crate::Trie) is built; outside the
/// crate they are read-only.
///
/// ```compile_fail
/// let node = frequency_trie::TrieNode::root();
/// ```
pub struct TrieNode {
    /// The symbol this node represents (`None` only for the root)
    pub(crate) symbol: Option<Symbol>,

    /// For an end-marker node, the number of corpus sequences ending here.
    /// For any other node, the maximum `best_count` among its children.
    pub(crate) best_count: usize,

    /// Child nodes indexed by symbol slot
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    /// Creates the symbol-less root node.
    pub(crate) fn root() -> Self {
        TrieNode {
            symbol: None,
            best_count: 0,
            children: Default::default(),
        }
    }

    /// Creates a node for `symbol` with the given count and no children.
    pub(crate) fn new(symbol: Symbol, best_count: usize) -> Self {
        TrieNode {
            symbol: Some(symbol),
            best_count,
            children: Default::default(),
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    pub fn best_count(&self) -> usize {
        self.best_count
    }

    /// Returns whether this node marks the end of a stored sequence
    pub fn is_end(&self) -> bool {
        self.symbol.map_or(false, Symbol::is_end)
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Returns the child stored under `symbol`, if present.
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children[symbol.slot()].as_deref()
    }

    /// Iterates over the present children in slot order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter().filter_map(|child| child.as_deref())
    }

    /// Detaches the child under `symbol` with its count bumped by one, or a
    /// fresh child with a count of one if the slot is empty.
    ///
    /// The slot stays empty until the child is handed back to [`put_child`].
    ///
    /// [`put_child`]: TrieNode::put_child
    pub(crate) fn take_touched_child(&mut self, symbol: Symbol) -> Box<TrieNode> {
        match self.children[symbol.slot()].take() {
            Some(mut child) => {
                child.best_count += 1;
                child
            }
            None => Box::new(TrieNode::new(symbol, 1)),
        }
    }

    /// Stores `child` in the slot of its symbol.
    pub(crate) fn put_child(&mut self, child: Box<TrieNode>) {
        if let Some(symbol) = child.symbol {
            self.children[symbol.slot()] = Some(child);
        }
    }

    /// Returns the child with the largest `best_count`.
    ///
    /// Ties go to the lowest slot, so the end marker beats every letter and
    /// letters are compared alphabetically. Returns `None` only when the node
    /// has no children.
    pub fn best_child(&self) -> Option<&TrieNode> {
        let mut best: Option<&TrieNode> = None;

        for child in self.children() {
            match best {
                Some(current) if child.best_count <= current.best_count => {}
                _ => best = Some(child),
            }
        }

        best
    }

    /// The largest `best_count` among the present children, or 0 if none.
    pub(crate) fn max_child_count(&self) -> usize {
        self.best_child().map_or(0, |child| child.best_count)
    }

    /// Recomputes `best_count` from the children.
    ///
    /// End-marker nodes hold their own occurrence count and are left alone.
    pub(crate) fn refresh_best_count(&mut self) {
        if !self.is_end() {
            self.best_count = self.max_child_count();
        }
    }

    /// Returns the number of nodes in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        let mut size = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children());
        }

        size
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach every descendant first so each box is dropped childless
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((left, right)) = pending.pop() {
            if left.symbol != right.symbol || left.best_count != right.best_count {
                return false;
            }

            for (l, r) in left.children.iter().zip(right.children.iter()) {
                match (l, r) {
                    (Some(l), Some(r)) => pending.push((&**l, &**r)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for TrieNode {}

// Shallow on purpose: a deep chain would otherwise be formatted recursively.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<Symbol> = self.children().filter_map(TrieNode::symbol).collect();

        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("best_count", &self.best_count)
            .field("children", &children)
            .finish()
    }
}
