// Multimatch Matcher
// Read-only trie walk against an input buffer, plus the buffer scanner

use crate::node::{NodeKind, TrieNode};
use crate::types::{Hit, Match};

/// Match the trie rooted at `root` against `buffer` starting at `offset`
///
/// Greedy committed walk: at each node the children are tried in
/// insertion order, and the first that matches is taken: a `Data`
/// child accepts immediately, a literal or class child consumes one
/// byte and the walk descends into it. There is no backtracking: when
/// two overlapping sibling classes could both accept a byte, the
/// earlier-inserted one wins.
///
/// Returns `None` when the walk reaches a node where no child matches
/// and no `Data` child is present; the buffer position is the caller's
/// to retry at the next offset. Running out of input is a non-match,
/// never an error. The walk allocates nothing and mutates nothing, so
/// any number of threads may match against a completed trie at once.
pub fn match_at(root: &TrieNode, buffer: &[u8], offset: usize) -> Option<Match> {
    if offset > buffer.len() {
        return None;
    }

    let mut current = root;
    let mut consumed = 0;

    'walk: loop {
        for child in current.children() {
            if let NodeKind::Data(payload) = child.kind() {
                return Some(Match {
                    payload: *payload,
                    length: consumed,
                });
            }
            if let Some(step) = child.matches(&buffer[offset + consumed..]) {
                consumed += step;
                current = child;
                continue 'walk;
            }
        }
        return None;
    }
}

/// Iterator over every match in a buffer, tried at successive offsets
///
/// Advances one byte per attempt regardless of hit length, so
/// overlapping hits are all reported, which is what a keyword indexer
/// wants. Created by [`Trie::scan`](crate::trie::Trie::scan).
#[derive(Debug, Clone)]
pub struct Scan<'t, 'b> {
    root: &'t TrieNode,
    buffer: &'b [u8],
    offset: usize,
}

impl<'t, 'b> Scan<'t, 'b> {
    pub(crate) fn new(root: &'t TrieNode, buffer: &'b [u8]) -> Self {
        Self {
            root,
            buffer,
            offset: 0,
        }
    }
}

impl Iterator for Scan<'_, '_> {
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        while self.offset < self.buffer.len() {
            let offset = self.offset;
            self.offset += 1;
            if let Some(found) = match_at(self.root, self.buffer, offset) {
                return Some(Hit {
                    offset,
                    payload: found.payload,
                    length: found.length,
                });
            }
        }
        None
    }
}
