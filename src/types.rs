// Multimatch Type Definitions
// Core types for pattern dialects, match results, and errors

use thiserror::Error;

/// Pattern dialects accepted by the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Exact bytes: every pattern byte must appear verbatim in the input
    /// Example: `b"GET "` matches only `GET ` (case matters)
    Literal,

    /// Bytes plus bracketed character classes
    /// Example: `b"[0-9][0-9]:"` matches `07:`, `23:`, ...
    Extended,

    /// Case-insensitive word: ASCII letters fold before comparison
    /// Example: `b"Cat"` matches `cat`, `CAT`, `cAt`, ...
    English,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Literal => write!(f, "Literal"),
            Dialect::Extended => write!(f, "Extended"),
            Dialect::English => write!(f, "English"),
        }
    }
}

/// Result of a successful match at a single buffer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Payload stored with the matched pattern
    pub payload: i64,

    /// Number of input bytes the pattern consumed
    pub length: usize,
}

/// A match found while scanning a buffer at successive offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Buffer offset the match starts at
    pub offset: usize,

    /// Payload stored with the matched pattern
    pub payload: i64,

    /// Number of input bytes the pattern consumed
    pub length: usize,
}

/// Pattern compilation errors
///
/// Matching never fails; all errors are raised synchronously by
/// [`add_word`](crate::compiler::add_word). Everything except
/// `EmptyPattern` is a malformed class specification under the
/// Extended dialect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrieError {
    #[error("Invalid pattern: empty")]
    EmptyPattern,

    #[error("Malformed pattern: class opened at byte {start} is never closed")]
    UnterminatedClass { start: usize },

    #[error("Malformed pattern: class at byte {start} is empty")]
    EmptyClass { start: usize },

    #[error("Malformed pattern: inverted range {lo:#04x}-{hi:#04x} in class at byte {start}")]
    InvertedRange { lo: u8, hi: u8, start: usize },

    #[error("Malformed pattern: trailing escape at byte {position}")]
    TrailingEscape { position: usize },
}
