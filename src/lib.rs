//! # Wordseek: In-Memory Lexicon Search
//!
//! A search engine over a fixed vocabulary of words, answering wildcard
//! patterns, structured constraint queries, and best-effort suggestions.
//!
//! ## Query Forms
//!
//! 1. **Pattern** - fixed-length template with `_` wildcards
//!    - `search("w___s")` - 5-letter words: 'w', anything x3, 's'
//! 2. **Free text** - required characters and length phrases
//!    - `search("5 letters [o]")` - 5-letter words containing 'o'
//! 3. **Structured** - typed constraint list, intersected in order
//!    - length / starts_with / ends_with / contains_at_position / contains
//!
//! ## Example Usage
//!
//! ```
//! use wordseek::{Constraint, SearchEngine};
//!
//! let engine = SearchEngine::load(["words", "works", "wants", "about"]);
//!
//! // Wildcard pattern: 'w' at 0, 's' at 4, anything between
//! assert_eq!(engine.search("w___s"), vec!["wants", "words", "works"]);
//!
//! // Structured query
//! let results = engine.advanced_search(&[
//!     Constraint::Length { value: 5 },
//!     Constraint::StartsWith { value: "w".to_string() },
//!     Constraint::Contains { ch: 'o' },
//! ]);
//! assert_eq!(results, vec!["words", "works"]);
//!
//! // Suggestions
//! let hints = engine.suggestions("w___s", 10);
//! assert!(hints.len() <= 10);
//! ```
//!
//! ## Architecture
//!
//! - **PatternTree** - arena-backed prefix tree for prefix and wildcard lookup
//! - **InvertedIndex** - character postings with per-word position sets
//! - **LengthIndex** - words bucketed by length
//! - **Vocabulary** - canonical sorted word list with word <-> id mapping
//! - **SearchEngine** - builds all four at load and intersects their answers
//!
//! The engine is built once and read-only afterwards; reload by building
//! a new engine and swapping the active reference.

pub mod engine;
pub mod index;
pub mod query;
pub mod trie;
pub mod types;
pub mod vocab;
pub mod wordlist;

// Re-export main types and functions for convenience
pub use engine::{SearchEngine, DEFAULT_SUGGESTION_LIMIT};
pub use index::{InvertedIndex, LengthIndex};
pub use query::{parse_constraints, parse_query, salvage_pattern};
pub use trie::PatternTree;
pub use types::{Constraint, ParsedQuery, Pattern, Token, WordListError, WILDCARD};
pub use vocab::Vocabulary;
pub use wordlist::WordList;
