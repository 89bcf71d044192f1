// Wordseek pattern tree
// Arena-backed prefix tree with exact-prefix and wildcard-pattern lookup

use crate::types::{Pattern, Token};
use rustc_hash::FxHashMap;

/// One prefix position. Nodes live in the tree's arena and refer to
/// each other by index, never by pointer.
#[derive(Debug, Clone, Default)]
struct Node {
    /// Next character -> arena index of the child.
    children: FxHashMap<char, u32>,

    /// Id of the word ending exactly at this node, if any.
    word: Option<u32>,

    /// Ids of every word whose insertion path passes through this node.
    /// Invariant: equals the union of the children's sets, plus `word`.
    reachable: Vec<u32>,
}

/// Prefix tree over the vocabulary, stored as a flat node arena.
///
/// Each node carries the full set of word ids reachable through it, so
/// `prefix_search` is a walk plus a slice borrow and `pattern_search`
/// never has to re-collect subtrees.
#[derive(Debug, Clone)]
pub struct PatternTree {
    nodes: Vec<Node>,
}

impl PatternTree {
    /// Create an empty tree holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Insert a word under the given id.
    ///
    /// Creates path nodes as needed and adds the id to the reachable
    /// set of every node on the path. Re-inserting a word that is
    /// already present is a no-op, keeping the reachable sets true sets.
    pub fn insert(&mut self, word: &str, id: u32) {
        if self.contains(word) {
            return;
        }
        let mut current = 0usize;
        self.nodes[0].reachable.push(id);
        for ch in word.chars() {
            let next = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
            self.nodes[next].reachable.push(id);
            current = next;
        }
        self.nodes[current].word = Some(id);
    }

    /// True if the exact word has been inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|node| self.nodes[node].word.is_some())
    }

    /// All word ids sharing the given prefix.
    ///
    /// A prefix that leaves the tree resolves to an empty slice, not an
    /// error. The empty prefix resolves to every loaded word.
    pub fn prefix_search(&self, prefix: &str) -> &[u32] {
        match self.walk(prefix) {
            Some(node) => &self.nodes[node].reachable,
            None => &[],
        }
    }

    /// All word ids matching a fixed-length template.
    ///
    /// Depth-first walk: a literal follows only its matching child, a
    /// wildcard branches into every child. A branch contributes a word
    /// only when the entire pattern is consumed at an end-of-word node,
    /// so results always have exactly the pattern's length. Worst case
    /// explores the whole subtree below each wildcard, which stays
    /// cheap for short words over a 26-letter alphabet.
    pub fn pattern_search(&self, pattern: &Pattern) -> Vec<u32> {
        let mut found = Vec::new();
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];

        while let Some((node, depth)) = stack.pop() {
            if depth == pattern.len() {
                if let Some(id) = self.nodes[node].word {
                    found.push(id);
                }
                continue;
            }
            match pattern.tokens()[depth] {
                Token::Literal(ch) => {
                    if let Some(&child) = self.nodes[node].children.get(&ch) {
                        stack.push((child as usize, depth + 1));
                    }
                }
                Token::Wildcard => {
                    for &child in self.nodes[node].children.values() {
                        stack.push((child as usize, depth + 1));
                    }
                }
            }
        }

        found
    }

    /// Number of arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow a string character-by-character; None once a character
    /// has no matching child.
    fn walk(&self, text: &str) -> Option<usize> {
        let mut current = 0usize;
        for ch in text.chars() {
            current = *self.nodes[current].children.get(&ch)? as usize;
        }
        Some(current)
    }
}

impl Default for PatternTree {
    fn default() -> Self {
        Self::new()
    }
}
