//! Keyword Engine - A multi-pattern keyword matching engine for Rust
//!
//! This library compiles a dictionary of words into an Aho-Corasick
//! automaton (a trie augmented with failure links) and scans arbitrary
//! content in a single linear pass, independent of dictionary size:
//! - Every occurrence of every word, with start offsets
//! - Quick mode (stop at the first hit) and longest-match-per-offset mode
//! - Incremental dictionary growth on a compiled automaton
//! - Per-word occurrence counting
//! - Cooperative-yield construction for very large dictionaries (`async`
//!   feature)
//!
//! # Example
//!
//! ```rust
//! use keyword_engine_r::{compile, Match, SearchOptions};
//!
//! let automaton = compile(&["近平", "习近平", "习近平好"]);
//!
//! let matches = automaton.search("我不说习近平好，也不是习近平坏", SearchOptions::default());
//! assert_eq!(matches[0], Match::new(3, "习近平"));
//!
//! // One entry per start offset, longest word wins
//! let longest = automaton.search(
//!     "我不说习近平好，也不是习近平坏",
//!     SearchOptions { longest: true, ..Default::default() },
//! );
//! assert_eq!(longest[0], Match::new(3, "习近平好"));
//! ```
//!
//! # Offsets
//!
//! Content and words are indexed in Unicode scalar values (`char`): the
//! `offset` of a [`Match`] is a char count from the start of the content,
//! not a byte position. Slice content with `chars()` based helpers, not
//! `&content[offset..]`.
//!
//! # Concurrency
//!
//! One automaton is a single mutable structure with no internal locking.
//! [`Automaton::add`] mutates in place and [`Automaton::search`] reads
//! without mutation; callers needing concurrent access must serialize
//! mutation externally.

pub mod automaton;
pub mod compile;
pub mod error;
pub mod node;
mod search;
pub mod types;

// Re-export commonly used items
pub use automaton::Automaton;
pub use compile::compile;
#[cfg(feature = "async")]
pub use compile::compile_async;
pub use error::{EngineError, Result};
pub use node::NodeRef;
pub use types::{BuildOptions, Match, SearchOptions, DEFAULT_BATCH_SIZE};
