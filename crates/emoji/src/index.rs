use std::cmp::Reverse;

use hashbrown::HashMap;

use crate::emoji::{Category, Emoji};
use crate::trie::EmojiId;

/// Dictionaries from alias, tag and category to emojis of a single catalog
#[derive(Debug, Default, Clone)]
pub struct EmojiIndex {
    by_alias: HashMap<String, EmojiId>,
    by_tag: HashMap<String, Vec<EmojiId>>,
    by_category: HashMap<Category, Vec<EmojiId>>,
    by_length: Vec<EmojiId>,
}

/// Strips at most one leading and one trailing `:`
pub fn trim_alias(alias: &str) -> &str {
    let alias = alias.strip_prefix(':').unwrap_or(alias);
    alias.strip_suffix(':').unwrap_or(alias)
}

fn push_unique(ids: &mut Vec<EmojiId>, id: EmojiId) {
    // ids are inserted in increasing order, so only the last could be a duplicate
    if ids.last() != Some(&id) {
        ids.push(id);
    }
}

impl EmojiIndex {
    pub fn new(emojis: &[Emoji]) -> EmojiIndex {
        let mut index = EmojiIndex::default();

        for (id, emoji) in emojis.iter().enumerate() {
            let id = id as EmojiId;

            push_unique(index.by_category.entry(emoji.category()).or_default(), id);

            for tag in emoji.tags() {
                push_unique(index.by_tag.entry_ref(tag.as_str()).or_default(), id);
            }

            for alias in emoji.aliases() {
                if let Some(prev) = index.by_alias.insert(alias.clone(), id) {
                    if prev != id {
                        tracing::debug!("Alias {alias:?} of emoji {prev} overwritten by emoji {id}");
                    }
                }
            }
        }

        index.by_length = (0..emojis.len() as EmojiId).collect();
        index.by_length.sort_by_key(|&id| Reverse(emojis[id as usize].sequence().len()));

        tracing::debug!(
            "Indexed {} aliases, {} tags and {} categories",
            index.by_alias.len(),
            index.by_tag.len(),
            index.by_category.len()
        );

        index
    }

    /// Looks up an alias, with or without surrounding colons
    pub fn for_alias(&self, alias: &str) -> Option<EmojiId> {
        if alias.is_empty() {
            return None;
        }

        self.by_alias.get(trim_alias(alias)).copied()
    }

    pub fn for_tag(&self, tag: &str) -> Option<&[EmojiId]> {
        self.by_tag.get(tag).map(Vec::as_slice)
    }

    pub fn for_category(&self, category: Category) -> Option<&[EmojiId]> {
        self.by_category.get(&category).map(Vec::as_slice)
    }

    /// Every emoji, longest sequence first. Equal lengths keep catalog order.
    #[inline]
    pub fn by_length(&self) -> &[EmojiId] {
        &self.by_length
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.by_alias.keys().map(String::as_str)
    }
}
