// Wordseek word list loading
// Sources the dictionary for the engine: plain text, one word per line

use crate::types::WordListError;
use std::path::Path;

/// A raw word list ready to feed into [`crate::SearchEngine::load`].
///
/// Line format is deliberately forgiving: the first `;`- or
/// whitespace-separated token of each line is taken as the word, blank
/// lines and `#` comments are skipped, tokens with non-alphabetic
/// characters are dropped, and everything is lowercased. Deduplication
/// and sorting happen inside the engine, not here.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Lowercase candidate words, in file order, possibly with
    /// duplicates.
    pub entries: Vec<String>,
}

impl WordList {
    /// Parse a word list from in-memory text.
    pub fn parse_from_str(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter_map(|raw| {
                let line = raw.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                let token = line.split(|c: char| c == ';' || c.is_whitespace()).next()?;
                if token.is_empty() || !token.chars().all(|c| c.is_alphabetic()) {
                    return None;
                }
                Some(token.to_lowercase())
            })
            .collect();

        Self { entries }
    }

    /// Read and parse a word list file.
    ///
    /// Fails when the file cannot be read or when no usable word
    /// survives filtering; an unreadable dictionary should surface at
    /// startup, not as silently empty search results.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let list = Self::parse_from_str(&contents);
        if list.entries.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(list)
    }

    /// Number of candidate words (duplicates included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no words were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
