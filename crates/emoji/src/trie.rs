//! Prefix trie over the code points of every known emoji.
//!
//! Nodes live in a flat arena and refer to their children by index. Children are kept
//! sorted by code point so each step is a binary search, which keeps the root (with
//! one edge per distinct leading code point) fast without a hashmap per node.

use smallvec::SmallVec;

use crate::emoji::Emoji;

/// Position of an emoji within the catalog it was built from
pub type EmojiId = u32;

type NodeId = u32;

const ROOT: NodeId = 0;

/// Three-way result of classifying a code point sequence against the trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matches {
    /// The sequence is exactly a known emoji. It may still be the prefix of a longer one.
    Exact,
    /// The sequence is a strict prefix of at least one known emoji
    Partial,
    /// The sequence is neither an emoji nor the prefix of one
    Impossible,
}

impl Matches {
    #[inline]
    pub const fn exact_match(self) -> bool {
        matches!(self, Matches::Exact)
    }

    /// Either an exact match or a prefix of one
    #[inline]
    pub const fn possible_match(self) -> bool {
        !matches!(self, Matches::Impossible)
    }

    #[inline]
    pub const fn impossible_match(self) -> bool {
        matches!(self, Matches::Impossible)
    }
}

#[derive(Debug, Default, Clone)]
struct Node {
    children: SmallVec<[(char, NodeId); 2]>,
    emoji: Option<EmojiId>,
}

impl Node {
    #[inline]
    fn child(&self, c: char) -> Option<NodeId> {
        match self.children.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(idx) => Some(self.children[idx].1),
            Err(_) => None,
        }
    }

    #[inline]
    fn matches(&self) -> Matches {
        if self.emoji.is_some() {
            Matches::Exact
        } else if !self.children.is_empty() {
            Matches::Partial
        } else {
            Matches::Impossible
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmojiTrie {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for EmojiTrie {
    fn default() -> Self {
        EmojiTrie {
            nodes: vec![Node::default()],
            len: 0,
        }
    }
}

impl EmojiTrie {
    /// Builds a trie where each emoji's [`EmojiId`] is its position in `emojis`
    pub fn new(emojis: &[Emoji]) -> EmojiTrie {
        let mut trie = EmojiTrie::default();

        for (id, emoji) in emojis.iter().enumerate() {
            if let Some(prev) = trie.insert(emoji.sequence(), id as EmojiId) {
                tracing::warn!("Emoji {id} replaced emoji {prev} in trie, duplicate sequence {:?}", emoji.unicode());
            }
        }

        tracing::debug!("Built emoji trie with {} nodes for {} emojis", trie.nodes.len(), trie.len);

        trie
    }

    /// Inserts a sequence, returning the id previously stored for that exact sequence.
    ///
    /// Empty sequences are ignored, as the root never terminates an emoji.
    pub fn insert(&mut self, sequence: &[char], id: EmojiId) -> Option<EmojiId> {
        if sequence.is_empty() {
            return None;
        }

        let mut node = ROOT;

        for &c in sequence {
            let idx = match self.nodes[node as usize].children.binary_search_by_key(&c, |&(k, _)| k) {
                Ok(idx) => idx,
                Err(idx) => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children.insert(idx, (c, next));
                    idx
                }
            };

            node = self.nodes[node as usize].children[idx].1;
        }

        let prev = self.nodes[node as usize].emoji.replace(id);

        if prev.is_none() {
            self.len += 1;
        }

        prev
    }

    /// Number of emojis terminating in this trie
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn walk(&self, sequence: &[char]) -> Option<&Node> {
        let mut node = &self.nodes[ROOT as usize];

        for &c in sequence {
            node = &self.nodes[node.child(c)? as usize];
        }

        Some(node)
    }

    /// Classifies `sequence` as an exact emoji, a prefix of one, or neither.
    pub fn classify(&self, sequence: &[char]) -> Matches {
        match self.walk(sequence) {
            Some(node) => node.matches(),
            None => Matches::Impossible,
        }
    }

    /// Finds the emoji whose sequence is exactly `sequence`
    pub fn get(&self, sequence: &[char]) -> Option<EmojiId> {
        self.walk(sequence).and_then(|node| node.emoji)
    }

    /// Longest known emoji starting at `text[start]`, as its id and the exclusive end offset.
    ///
    /// Every terminal passed on the way overwrites the previous best, and the walk stops as
    /// soon as the next code point has no edge, so a shorter emoji is still returned when a
    /// longer one sharing its prefix is not fully present.
    pub fn longest_match(&self, text: &[char], start: usize) -> Option<(EmojiId, usize)> {
        let rest = text.get(start..)?;

        let mut node = &self.nodes[ROOT as usize];
        let mut best = None;

        for (offset, &c) in rest.iter().enumerate() {
            node = match node.child(c) {
                Some(next) => &self.nodes[next as usize],
                None => break,
            };

            if let Some(id) = node.emoji {
                best = Some((id, start + offset + 1));
            }

            if node.children.is_empty() {
                break;
            }
        }

        best
    }

    /// Starts an incremental walk from the root
    #[inline]
    pub fn cursor(&self) -> TrieCursor<'_> {
        TrieCursor {
            trie: self,
            node: Some(ROOT),
        }
    }
}

/// Incremental walk over an [`EmojiTrie`], fed one code point at a time.
///
/// Once a code point falls off the trie the cursor stays [`Matches::Impossible`] until reset.
#[derive(Debug, Clone, Copy)]
pub struct TrieCursor<'a> {
    trie: &'a EmojiTrie,
    node: Option<NodeId>,
}

impl TrieCursor<'_> {
    pub fn push(&mut self, c: char) -> Matches {
        self.node = self.node.and_then(|node| self.trie.nodes[node as usize].child(c));
        self.matches()
    }

    pub fn matches(&self) -> Matches {
        match self.node {
            Some(node) => self.trie.nodes[node as usize].matches(),
            None => Matches::Impossible,
        }
    }

    /// The emoji ending exactly at the current position, if any
    pub fn emoji(&self) -> Option<EmojiId> {
        self.node.and_then(|node| self.trie.nodes[node as usize].emoji)
    }

    pub fn reset(&mut self) {
        self.node = Some(ROOT);
    }
}
