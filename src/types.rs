// Wordseek type definitions
// Core types shared by the query parser, the indexes, and the engine

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The wildcard marker accepted in pattern queries ("w___s").
pub const WILDCARD: char = '_';

/// One position of a pattern template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Matches exactly this lowercase letter.
    Literal(char),
    /// Matches any single character.
    Wildcard,
}

/// A fixed-length template mixing literal letters and wildcard markers.
///
/// A pattern only ever matches words of exactly its own length.
///
/// # Examples
/// ```
/// # use wordseek::types::{Pattern, Token};
/// let p = Pattern::parse("w___s").unwrap();
/// assert_eq!(p.len(), 5);
/// assert_eq!(p.tokens()[0], Token::Literal('w'));
/// assert_eq!(p.tokens()[1], Token::Wildcard);
/// assert!(Pattern::parse("w__s!").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Parse a pattern from text.
    ///
    /// The entire input must consist of lowercase ASCII letters and
    /// wildcard markers; anything else (including an empty string)
    /// yields `None` rather than a partial pattern.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        let mut tokens = Vec::with_capacity(text.len());
        for ch in text.chars() {
            if ch == WILDCARD {
                tokens.push(Token::Wildcard);
            } else if ch.is_ascii_lowercase() {
                tokens.push(Token::Literal(ch));
            } else {
                return None;
            }
        }
        Some(Self { tokens })
    }

    /// Number of positions in the template.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the template has no positions.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The template positions in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Literal(ch) => write!(f, "{}", ch)?,
                Token::Wildcard => write!(f, "{}", WILDCARD)?,
            }
        }
        Ok(())
    }
}

/// One typed filter condition of a structured query.
///
/// Serialized with an external `type` tag so the wire shape matches
/// `{"type": "contains_at_position", "char": "w", "position": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Exact word length.
    Length { value: usize },

    /// Word starts with the given prefix.
    StartsWith { value: String },

    /// Word ends with the given suffix.
    EndsWith { value: String },

    /// Word has `char` at the given zero-based position.
    ContainsAtPosition {
        #[serde(rename = "char")]
        ch: char,
        position: usize,
    },

    /// Word contains `char` anywhere.
    Contains {
        #[serde(rename = "char")]
        ch: char,
    },
}

/// A free-text query decomposed into its three independent parts.
///
/// Every part is optional; `pattern` is only present when the whole
/// query text had the letters-and-wildcards shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Fixed-length template, if the query was in pattern form.
    pub pattern: Option<Pattern>,

    /// Required-but-unpositioned characters from `[x]` groups.
    pub required: Vec<char>,

    /// Explicit length from an "N letter" phrase.
    pub length: Option<usize>,
}

/// Errors raised while sourcing a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("word list contains no usable words")]
    Empty,
}
