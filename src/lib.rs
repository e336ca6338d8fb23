//! # Multimatch: Multi-Pattern Byte Matching Trie
//!
//! Matches many heterogeneous patterns against a byte stream in a single
//! left-to-right pass, returning the payload of the pattern completed at the
//! current position.
//!
//! ## Three Pattern Dialects
//!
//! 1. **Literal** - Exact bytes, case matters
//!    - `b"GET "` matches only `GET `
//! 2. **Extended** - Bytes plus bracketed character classes
//!    - `b"[0-9][0-9]:"` matches `07:`, `23:`, ...
//! 3. **English** - Case-insensitive word (ASCII folding)
//!    - `b"Cat"` matches `cat`, `CAT`, `cAt`
//!
//! All three dialects share one tree: patterns with a common prefix compile
//! onto the same node chain, so the cost of a query is bounded by pattern
//! depth, not by how many patterns were inserted.
//!
//! ## Class Syntax (Extended dialect)
//!
//! - `[abc]` - any of the enumerated bytes
//! - `[a-f0-9]` - inclusive ranges, mixable with single bytes
//! - `[-a]`, `[a-]` - a dash first or last in the class is literal
//! - `\` escapes the next byte, inside and outside classes
//! - Negation (`[^...]`) is not supported
//!
//! ## Example Usage
//!
//! ```
//! use multimatch::{Dialect, Trie};
//!
//! let mut trie = Trie::new();
//! trie.add_word(b"cat", 1, Dialect::Literal)?;
//! trie.add_word(b"HTTP", 2, Dialect::English)?;
//! trie.add_word(b"[0-9][0-9]:", 3, Dialect::Extended)?;
//!
//! // Match at a single position
//! let found = trie.match_at(b"cat videos", 0).unwrap();
//! assert_eq!((found.payload, found.length), (1, 3));
//!
//! // Scan a whole buffer for every hit
//! let hits: Vec<_> = trie.scan(b"http at 12: cat").collect();
//! assert_eq!(hits.len(), 3);
//! # Ok::<(), multimatch::TrieError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Byte Class** - the finite byte set a class node tests against
//! - **Pattern Scanner** - splits extended patterns into literal/class steps
//! - **Trie Node** - four variants (Root, Literal, Class, Data) with
//!   per-variant match rules and an insertion-ordered sibling set
//! - **Word Compiler** - turns a pattern into node insertions and merges
//! - **Matcher** - the read-only greedy walk, plus the buffer scanner
//! - **Trie** - the build-then-query engine combining all components
//!
//! Building is sequential; a completed trie is queried through `&self` with
//! no allocation or mutation, so read-only matching may be shared freely
//! across threads.

pub mod class;
pub mod compiler;
pub mod matcher;
pub mod node;
pub mod pattern;
pub mod trie;
pub mod types;

// Re-export main types and functions for convenience
pub use class::ByteClass;
pub use compiler::add_word;
pub use matcher::{match_at, Scan};
pub use node::{NodeKind, TrieNode};
pub use trie::Trie;
pub use types::{Dialect, Hit, Match, TrieError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
