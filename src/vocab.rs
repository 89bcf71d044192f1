// Wordseek vocabulary
// The canonical loaded word set, with word <-> id mapping

use rustc_hash::FxHashMap;

/// The complete set of loaded words.
///
/// Words are lowercased, deduplicated, and sorted ascending at build
/// time, and every word gets a dense `u32` id equal to its position in
/// the sorted list. The indexes all speak ids; because id order equals
/// lexicographic order, a sorted id sequence resolves directly to a
/// sorted word sequence.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Sorted, unique, lowercase words; index is the word id.
    words: Vec<String>,

    /// Word -> id mapping.
    ids: FxHashMap<String, u32>,
}

impl Vocabulary {
    /// Build a vocabulary from raw input words.
    ///
    /// Input is normalized to lowercase; duplicates (including
    /// case-only duplicates) collapse to a single entry, and empty
    /// strings are dropped.
    pub fn build<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = input
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        let ids = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.clone(), id as u32))
            .collect();

        Self { words, ids }
    }

    /// Look up the id of a word, if loaded.
    pub fn id(&self, word: &str) -> Option<u32> {
        self.ids.get(word).copied()
    }

    /// Resolve an id back to its word.
    pub fn word(&self, id: u32) -> &str {
        &self.words[id as usize]
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over (id, word) pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(id, word)| (id as u32, word.as_str()))
    }

    /// Resolve a set of ids to words, sorted ascending.
    pub fn resolve_sorted(&self, ids: impl IntoIterator<Item = u32>) -> Vec<String> {
        let mut ids: Vec<u32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter()
            .map(|id| self.words[id as usize].clone())
            .collect()
    }
}
