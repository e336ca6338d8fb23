// Multimatch Word Compiler
// Compiles one pattern into node insertions and merges under a root

use crate::node::{NodeKind, TrieNode};
use crate::pattern::{next_step, Step};
use crate::types::{Dialect, TrieError};

/// Insert a pattern into the trie rooted at `root`
///
/// Walks the pattern left to right, keeping a current node: each step
/// builds a candidate kind, reuses an equal existing child when there
/// is one, and attaches a fresh child otherwise. After the last step a
/// `Data` child carrying `payload` marks the pattern complete.
///
/// Step construction per dialect:
/// - `Literal` - one pattern byte, one exact-match node
/// - `English` - one pattern byte, folded to ASCII lowercase; the node
///   folds input bytes the same way, so `Cat` and `cAT` share a path
/// - `Extended` - a bracketed class specification compiles to a class
///   node and may consume several pattern bytes; anything else is a
///   single literal byte (see [`next_step`] for the class syntax)
///
/// Re-inserting an identical (pattern, dialect, payload) is a no-op. A
/// second payload under the same pattern appends a second `Data` child;
/// matching returns the first-inserted payload.
///
/// A failed call may leave nodes for the already-valid prefix attached.
/// They carry no `Data` child, so no complete pattern reaches them and
/// matching behavior is unchanged.
///
/// # Errors
/// `EmptyPattern` for a zero-length pattern; the malformed-pattern
/// variants for a bad class specification under `Extended`.
pub fn add_word(
    root: &mut TrieNode,
    pattern: &[u8],
    payload: i64,
    dialect: Dialect,
) -> Result<(), TrieError> {
    if pattern.is_empty() {
        return Err(TrieError::EmptyPattern);
    }

    let mut current = root;
    let mut pos = 0;

    while pos < pattern.len() {
        let (kind, consumed) = compile_step(pattern, pos, dialect)?;

        let index = match current.find_equal(&kind) {
            Some(index) => index,
            None => current.add_child(kind),
        };
        current = current.child_mut(index);
        pos += consumed;
    }

    // Terminal marker; an equal Data child makes this a duplicate insert
    let data = NodeKind::Data(payload);
    if current.find_equal(&data).is_none() {
        current.add_child(data);
    }

    Ok(())
}

/// Build the candidate kind for the step at `pos`, returning the
/// number of pattern bytes it consumed
fn compile_step(
    pattern: &[u8],
    pos: usize,
    dialect: Dialect,
) -> Result<(NodeKind, usize), TrieError> {
    match dialect {
        Dialect::Literal => Ok((
            NodeKind::Literal {
                value: pattern[pos],
                fold: false,
            },
            1,
        )),
        Dialect::English => Ok((
            NodeKind::Literal {
                value: pattern[pos].to_ascii_lowercase(),
                fold: true,
            },
            1,
        )),
        Dialect::Extended => {
            let (step, consumed) = next_step(pattern, pos)?;
            let kind = match step {
                Step::Literal(value) => NodeKind::Literal { value, fold: false },
                Step::Class(set) => NodeKind::Class(set),
            };
            Ok((kind, consumed))
        }
    }
}
