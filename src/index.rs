// Wordseek posting indexes
// Per-character inverted index with position tracking, plus the length index

use rustc_hash::{FxHashMap, FxHashSet};

/// Postings for one character: which words contain it, and where.
///
/// Invariant: an id is in `words` iff its entry in `positions` is
/// non-empty.
#[derive(Debug, Clone, Default)]
struct Postings {
    /// Ids of all words containing the character anywhere.
    words: FxHashSet<u32>,

    /// Word id -> zero-based positions of the character in that word.
    positions: FxHashMap<u32, FxHashSet<usize>>,
}

/// Character -> word-set index with per-word position sets.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    by_char: FxHashMap<char, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every (character, position) pair of a word.
    /// Idempotent per pair; all postings are hash sets.
    pub fn add_word(&mut self, id: u32, word: &str) {
        for (position, ch) in word.chars().enumerate() {
            let postings = self.by_char.entry(ch).or_default();
            postings.words.insert(id);
            postings.positions.entry(id).or_default().insert(position);
        }
    }

    /// Words containing the character anywhere.
    ///
    /// `None` stands for the empty set: the character was never indexed.
    pub fn words_containing(&self, ch: char) -> Option<&FxHashSet<u32>> {
        self.by_char.get(&ch).map(|postings| &postings.words)
    }

    /// Words with the character at the given zero-based position.
    pub fn words_containing_at(&self, ch: char, position: usize) -> FxHashSet<u32> {
        match self.by_char.get(&ch) {
            Some(postings) => postings
                .positions
                .iter()
                .filter(|(_, positions)| positions.contains(&position))
                .map(|(&id, _)| id)
                .collect(),
            None => FxHashSet::default(),
        }
    }
}

/// Length -> word-set buckets.
///
/// The buckets partition the vocabulary: every word sits in exactly the
/// bucket of its own length.
#[derive(Debug, Clone, Default)]
pub struct LengthIndex {
    buckets: FxHashMap<usize, FxHashSet<u32>>,
}

impl LengthIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word id into the bucket for its length, creating the
    /// bucket if this is the first word of that length.
    pub fn add_word(&mut self, id: u32, length: usize) {
        self.buckets.entry(length).or_default().insert(id);
    }

    /// The bucket for the given length; `None` stands for the empty set.
    pub fn words_of_length(&self, length: usize) -> Option<&FxHashSet<u32>> {
        self.buckets.get(&length)
    }

    /// Length -> bucket size, for statistics output.
    pub fn histogram(&self) -> FxHashMap<usize, usize> {
        self.buckets
            .iter()
            .map(|(&length, bucket)| (length, bucket.len()))
            .collect()
    }
}
