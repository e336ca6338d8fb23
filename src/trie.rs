// Multimatch Trie Engine
// Public build-then-query surface tying compiler and matcher together

use crate::compiler;
use crate::matcher::{self, Scan};
use crate::node::TrieNode;
use crate::types::{Dialect, Match, TrieError};
use rustc_hash::FxHashMap;

/// A compressed trie matching many patterns in one pass
///
/// Patterns of all three dialects share one tree: equal steps along a
/// common prefix compile to the same node. Build the trie with
/// [`add_word`](Trie::add_word), then query it with
/// [`match_at`](Trie::match_at) or [`scan`](Trie::scan). Querying is
/// read-only; once building is done, a shared reference can be matched
/// from any number of threads.
///
/// # Example
/// ```
/// use multimatch::{Dialect, Trie};
///
/// let mut trie = Trie::new();
/// trie.add_word(b"cat", 1, Dialect::Literal)?;
/// trie.add_word(b"Cat", 2, Dialect::English)?;
///
/// let found = trie.match_at(b"CAT scan", 0).unwrap();
/// assert_eq!((found.payload, found.length), (2, 3));
/// # Ok::<(), multimatch::TrieError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie: a root node with no children
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
        }
    }

    /// Insert a pattern with its payload
    ///
    /// See [`compiler::add_word`] for the per-dialect step rules, the
    /// duplicate/conflict policy, and the error conditions.
    pub fn add_word(
        &mut self,
        pattern: &[u8],
        payload: i64,
        dialect: Dialect,
    ) -> Result<(), TrieError> {
        compiler::add_word(&mut self.root, pattern, payload, dialect)
    }

    /// Match against `buffer` starting at `offset`
    ///
    /// Returns the payload of the pattern completed at this position
    /// and the number of bytes it consumed, or `None` when nothing
    /// matches here. All-or-nothing: a failed walk consumes nothing.
    pub fn match_at(&self, buffer: &[u8], offset: usize) -> Option<Match> {
        matcher::match_at(&self.root, buffer, offset)
    }

    /// Iterate every hit in `buffer`, retrying at successive offsets
    ///
    /// Overlapping hits are all reported.
    pub fn scan<'t, 'b>(&'t self, buffer: &'b [u8]) -> Scan<'t, 'b> {
        Scan::new(&self.root, buffer)
    }

    /// The root node, for callers inspecting tree structure
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// True when no pattern has been inserted
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    /// Total node count, excluding the root
    ///
    /// Data terminals count as nodes, so inserting `"cat"` into an
    /// empty trie yields 4.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Node counts keyed by depth; the root's children are depth 1
    ///
    /// Shared prefixes show up here directly: patterns with a common
    /// first byte contribute a single depth-1 node.
    pub fn node_count_by_depth(&self) -> FxHashMap<usize, usize> {
        self.root.descendant_count_by_depth()
    }

    /// Depth of the deepest node (the longest pattern plus its terminal)
    pub fn max_depth(&self) -> usize {
        self.root.max_depth()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trie_is_empty() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
        assert_eq!(trie.match_at(b"anything", 0), None);
    }

    #[test]
    fn test_build_then_match() {
        let mut trie = Trie::new();
        trie.add_word(b"cat", 1, Dialect::Literal).unwrap();

        let found = trie.match_at(b"cat", 0).unwrap();
        assert_eq!(found.payload, 1);
        assert_eq!(found.length, 3);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Trie::default().is_empty());
    }

    #[test]
    fn test_statistics_surface() {
        let mut trie = Trie::new();
        trie.add_word(b"cat", 1, Dialect::Literal).unwrap();
        trie.add_word(b"car", 2, Dialect::Literal).unwrap();

        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.max_depth(), 4);

        let counts = trie.node_count_by_depth();
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&3), Some(&2));
        assert_eq!(counts.get(&4), Some(&2));
    }

    #[test]
    fn test_scan_through_engine() {
        let mut trie = Trie::new();
        trie.add_word(b"at", 7, Dialect::Literal).unwrap();

        let offsets: Vec<usize> = trie.scan(b"at bat").map(|hit| hit.offset).collect();
        assert_eq!(offsets, vec![0, 4]);
    }
}
