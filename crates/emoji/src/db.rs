use crate::catalog::Catalog;
use crate::emoji::{Category, Emoji};
use crate::index::EmojiIndex;
use crate::scanner::{Scanner, UnicodeCandidate};
use crate::trie::{EmojiId, EmojiTrie, Matches};

/// Immutable emoji database: the catalog plus its trie and lookup index.
///
/// Everything is built in [`EmojiDb::new`] and never modified afterwards, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct EmojiDb {
    emojis: Vec<Emoji>,
    trie: EmojiTrie,
    index: EmojiIndex,
}

impl EmojiDb {
    pub fn new(catalog: Catalog) -> EmojiDb {
        let emojis = catalog.into_emojis();

        EmojiDb {
            trie: EmojiTrie::new(&emojis),
            index: EmojiIndex::new(&emojis),
            emojis,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    #[inline]
    pub fn trie(&self) -> &EmojiTrie {
        &self.trie
    }

    #[inline]
    pub fn index(&self) -> &EmojiIndex {
        &self.index
    }

    #[inline]
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.trie, &self.emojis)
    }

    #[inline]
    pub fn get(&self, id: EmojiId) -> Option<&Emoji> {
        self.emojis.get(id as usize)
    }

    fn emojis<'a>(&'a self, ids: &'a [EmojiId]) -> Emojis<'a> {
        Emojis {
            ids: ids.iter(),
            emojis: &self.emojis,
        }
    }

    /// Resolves `smile`, `:smile:`, `:smile` and `smile:` alike
    pub fn get_for_alias(&self, alias: &str) -> Option<&Emoji> {
        self.index.for_alias(alias).and_then(|id| self.get(id))
    }

    pub fn get_for_tag(&self, tag: &str) -> Option<Emojis<'_>> {
        self.index.for_tag(tag).map(|ids| self.emojis(ids))
    }

    pub fn get_for_category(&self, category: Category) -> Option<Emojis<'_>> {
        self.index.for_category(category).map(|ids| self.emojis(ids))
    }

    /// Finds the emoji whose sequence is exactly `unicode`, without any skin tone
    pub fn get_by_unicode(&self, unicode: &str) -> Option<&Emoji> {
        let sequence: Vec<char> = unicode.chars().collect();
        self.get_by_sequence(&sequence)
    }

    pub fn get_by_sequence(&self, sequence: &[char]) -> Option<&Emoji> {
        self.trie.get(sequence).and_then(|id| self.get(id))
    }

    /// All emojis, longest sequence first
    pub fn all(&self) -> Emojis<'_> {
        self.emojis(self.index.by_length())
    }

    /// All emojis in catalog order
    #[inline]
    pub fn catalog_order(&self) -> &[Emoji] {
        &self.emojis
    }

    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.index.tags()
    }

    #[inline]
    pub fn classify(&self, sequence: &[char]) -> Matches {
        self.trie.classify(sequence)
    }

    #[inline]
    pub fn next_candidate(&self, text: &[char], from: usize) -> Option<UnicodeCandidate<'_>> {
        self.scanner().next_candidate(text, from)
    }

    pub fn is_emoji(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        self.scanner().is_emoji(&text)
    }

    pub fn contains_emoji(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        self.scanner().contains_emoji(&text)
    }

    pub fn is_only_emojis(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        self.scanner().is_only_emojis(&text)
    }
}

/// Iterator over a set of emojis from an [`EmojiDb`]
#[derive(Debug, Clone)]
pub struct Emojis<'a> {
    ids: std::slice::Iter<'a, EmojiId>,
    emojis: &'a [Emoji],
}

impl<'a> Iterator for Emojis<'a> {
    type Item = &'a Emoji;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| &self.emojis[id as usize])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Emojis<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| &self.emojis[id as usize])
    }
}

impl ExactSizeIterator for Emojis<'_> {}
