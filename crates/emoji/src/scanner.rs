//! Left-to-right search for emoji occurrences within text.
//!
//! All offsets are code point positions into the scanned `&[char]` buffer.

use crate::emoji::Emoji;
use crate::fitzpatrick::Fitzpatrick;
use crate::trie::{EmojiId, EmojiTrie};

/// One emoji found within a specific buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeCandidate<'a> {
    pub emoji: &'a Emoji,
    pub id: EmojiId,
    /// Inclusive start of the emoji
    pub start: usize,
    /// Exclusive end of the bare emoji sequence
    pub end: usize,
    pub fitzpatrick: Option<Fitzpatrick>,
    /// Exclusive end including the skin tone modifier, equal to `end` without one
    pub fitzpatrick_end: usize,
}

impl UnicodeCandidate<'_> {
    #[inline]
    pub fn has_fitzpatrick(&self) -> bool {
        self.fitzpatrick.is_some()
    }

    /// Code points covered, including any modifier
    #[inline]
    pub fn len(&self) -> usize {
        self.fitzpatrick_end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stateless scanner borrowing a built trie and the catalog it indexes
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    trie: &'a EmojiTrie,
    emojis: &'a [Emoji],
}

impl<'a> Scanner<'a> {
    /// `trie` must have been built from `emojis`, so that every id resolves
    #[inline]
    pub const fn new(trie: &'a EmojiTrie, emojis: &'a [Emoji]) -> Self {
        Scanner { trie, emojis }
    }

    /// Finds the first emoji starting at or after `from`, preferring the longest one at each position.
    pub fn next_candidate(&self, text: &[char], from: usize) -> Option<UnicodeCandidate<'a>> {
        for start in from..text.len() {
            let Some((id, end)) = self.trie.longest_match(text, start) else {
                continue;
            };

            let Some(emoji) = self.emojis.get(id as usize) else {
                continue;
            };

            let fitzpatrick = match emoji.supports_fitzpatrick() {
                true => text.get(end).copied().and_then(Fitzpatrick::from_char),
                false => None,
            };

            return Some(UnicodeCandidate {
                emoji,
                id,
                start,
                end,
                fitzpatrick,
                fitzpatrick_end: end + fitzpatrick.is_some() as usize,
            });
        }

        None
    }

    /// Iterates over consecutive, non-overlapping candidates
    #[inline]
    pub fn candidates<'t>(&self, text: &'t [char]) -> Candidates<'a, 't> {
        Candidates {
            scanner: *self,
            text,
            pos: 0,
        }
    }

    /// The whole text is exactly one emoji, optionally with a skin tone
    pub fn is_emoji(&self, text: &[char]) -> bool {
        matches!(self.next_candidate(text, 0), Some(c) if c.start == 0 && c.fitzpatrick_end == text.len())
    }

    pub fn contains_emoji(&self, text: &[char]) -> bool {
        self.next_candidate(text, 0).is_some()
    }

    /// Nothing is left over once every emoji is removed, which holds for empty text
    pub fn is_only_emojis(&self, text: &[char]) -> bool {
        let mut pos = 0;
        for c in self.candidates(text) {
            if c.start != pos {
                return false;
            }
            pos = c.fitzpatrick_end;
        }

        pos == text.len()
    }
}

/// Iterator returned by [`Scanner::candidates`]
#[derive(Debug, Clone)]
pub struct Candidates<'a, 't> {
    scanner: Scanner<'a>,
    text: &'t [char],
    pos: usize,
}

impl<'a> Iterator for Candidates<'a, '_> {
    type Item = UnicodeCandidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.scanner.next_candidate(self.text, self.pos)?;
        self.pos = candidate.fitzpatrick_end;
        Some(candidate)
    }
}

impl std::iter::FusedIterator for Candidates<'_, '_> {}
