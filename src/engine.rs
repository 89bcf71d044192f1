// Wordseek search engine
// Owns the vocabulary and all three indexes; routes queries to the
// right sub-index and intersects the partial results

use crate::index::{InvertedIndex, LengthIndex};
use crate::query;
use crate::trie::PatternTree;
use crate::types::{Constraint, ParsedQuery, WILDCARD};
use crate::vocab::Vocabulary;
use rustc_hash::{FxHashMap, FxHashSet};

/// Default cap on the number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// How many hints each suggestion source contributes before the merge.
const SUGGESTIONS_PER_SOURCE: usize = 5;

/// The lexicon search engine.
///
/// Built once from a word collection and immutable afterwards: every
/// query method takes `&self` and performs no I/O, so queries can run
/// fully in parallel. To reload, build a fresh engine and swap the
/// active reference (e.g. an `Arc<SearchEngine>`); in-flight queries
/// then finish against the old instance and no reader ever observes a
/// partially built set of indexes.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    vocab: Vocabulary,
    tree: PatternTree,
    chars: InvertedIndex,
    lengths: LengthIndex,
}

impl SearchEngine {
    /// Build an engine from a word collection.
    ///
    /// Words are lowercased and deduplicated; every word is inserted
    /// into the pattern tree, the inverted index, and the length index
    /// before the engine becomes observable, so the four structures
    /// are always mutually consistent. Loading the same collection
    /// twice produces identical engines.
    pub fn load<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocab = Vocabulary::build(input);
        let mut tree = PatternTree::new();
        let mut chars = InvertedIndex::new();
        let mut lengths = LengthIndex::new();

        for (id, word) in vocab.iter() {
            tree.insert(word, id);
            chars.add_word(id, word);
            lengths.add_word(id, word.chars().count());
        }

        Self {
            vocab,
            tree,
            chars,
            lengths,
        }
    }

    /// Answer a free-text query.
    ///
    /// The query is parsed into an optional pattern, required
    /// characters, and an explicit length (see [`query::parse_query`]),
    /// then resolved by [`SearchEngine::search_parsed`]. Returns the
    /// matching words sorted ascending, without duplicates.
    pub fn search(&self, raw: &str) -> Vec<String> {
        self.search_parsed(&query::parse_query(raw))
    }

    /// Resolve an already-parsed query.
    ///
    /// Resolution order: the pattern result (or the full vocabulary
    /// when no pattern is present), intersected with the words
    /// containing every required character, intersected with the
    /// explicit length bucket. The explicit length is applied as the
    /// final filter, so a length phrase that conflicts with the
    /// pattern's own length deliberately empties the result.
    pub fn search_parsed(&self, parsed: &ParsedQuery) -> Vec<String> {
        let mut result: FxHashSet<u32> = match &parsed.pattern {
            Some(pattern) => self.tree.pattern_search(pattern).into_iter().collect(),
            None => self.all_ids(),
        };

        for &ch in &parsed.required {
            if result.is_empty() {
                break;
            }
            match self.chars.words_containing(ch) {
                Some(words) => result.retain(|id| words.contains(id)),
                None => result.clear(),
            }
        }

        if let Some(length) = parsed.length {
            match self.lengths.words_of_length(length) {
                Some(bucket) => result.retain(|id| bucket.contains(id)),
                None => result.clear(),
            }
        }

        self.vocab.resolve_sorted(result)
    }

    /// Answer a structured query.
    ///
    /// Starts from the full vocabulary and intersects with each
    /// constraint's word set in input order; the result set is
    /// order-independent, only the work done per step varies. An empty
    /// constraint list returns the whole vocabulary. `EndsWith` is the
    /// one O(vocabulary) scan; everything else resolves through an
    /// index. Returns the survivors sorted ascending.
    pub fn advanced_search(&self, constraints: &[Constraint]) -> Vec<String> {
        let mut result = self.all_ids();

        for constraint in constraints {
            if result.is_empty() {
                break;
            }
            match constraint {
                Constraint::Length { value } => match self.lengths.words_of_length(*value) {
                    Some(bucket) => result.retain(|id| bucket.contains(id)),
                    None => result.clear(),
                },
                Constraint::StartsWith { value } => {
                    let matches: FxHashSet<u32> =
                        self.tree.prefix_search(value).iter().copied().collect();
                    result.retain(|id| matches.contains(id));
                }
                Constraint::EndsWith { value } => {
                    result.retain(|&id| self.vocab.word(id).ends_with(value.as_str()));
                }
                Constraint::ContainsAtPosition { ch, position } => {
                    let matches = self.chars.words_containing_at(*ch, *position);
                    result.retain(|id| matches.contains(id));
                }
                Constraint::Contains { ch } => match self.chars.words_containing(*ch) {
                    Some(words) => result.retain(|id| words.contains(id)),
                    None => result.clear(),
                },
            }
        }

        self.vocab.resolve_sorted(result)
    }

    /// Best-effort hints for a partial query.
    ///
    /// Two sources, each capped at five words: a salvaged wildcard
    /// pattern (non-pattern characters stripped) when the query holds
    /// a wildcard marker, and the length bucket when it holds an
    /// "N letter" phrase. Sources are concatenated, deduplicated, and
    /// truncated to `limit`. Bucket hints are taken in ascending order
    /// so repeated calls return the same words. No completeness is
    /// promised; this is a UX affordance, not a query result.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        let mut hints: Vec<String> = Vec::new();

        if partial.contains(WILDCARD) {
            if let Some(pattern) = query::salvage_pattern(partial) {
                let mut ids = self.tree.pattern_search(&pattern);
                ids.sort_unstable();
                for id in ids.into_iter().take(SUGGESTIONS_PER_SOURCE) {
                    hints.push(self.vocab.word(id).to_string());
                }
            }
        }

        if let Some(length) = query::parse_query(partial).length {
            if let Some(bucket) = self.lengths.words_of_length(length) {
                let mut ids: Vec<u32> = bucket.iter().copied().collect();
                ids.sort_unstable();
                for id in ids.into_iter().take(SUGGESTIONS_PER_SOURCE) {
                    let word = self.vocab.word(id).to_string();
                    if !hints.contains(&word) {
                        hints.push(word);
                    }
                }
            }
        }

        hints.truncate(limit);
        hints
    }

    /// Number of distinct loaded words.
    pub fn word_count(&self) -> usize {
        self.vocab.len()
    }

    /// True when no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Word count per length, for statistics output.
    pub fn length_histogram(&self) -> FxHashMap<usize, usize> {
        self.lengths.histogram()
    }

    fn all_ids(&self) -> FxHashSet<u32> {
        (0..self.vocab.len() as u32).collect()
    }
}
