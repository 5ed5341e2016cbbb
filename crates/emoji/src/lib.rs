//! Emoji recognition and lookup.
//!
//! A catalog of emojis is loaded once into an immutable [`EmojiDb`], which holds a prefix
//! trie over every emoji's code points and dictionaries by alias, tag and category.
//! Text is scanned left to right for the longest known emoji at each position, along with
//! any trailing skin tone modifier.
//!
//! Offsets reported by the scanner are code point positions, not byte offsets.
//!
//! The process-wide database must be set up with [`init`] or [`init_with`] before the free
//! functions of this crate are used, otherwise the first call initializes it from the
//! bundled catalog.

use once_cell::sync::OnceCell;

pub mod catalog;
pub mod db;
pub mod emoji;
pub mod fitzpatrick;
pub mod index;
pub mod parser;
pub mod scanner;
pub mod trie;

pub use catalog::{Catalog, CatalogError, CatalogLoader};
pub use db::{EmojiDb, Emojis};
pub use emoji::{Category, Emoji};
pub use fitzpatrick::{Fitzpatrick, FitzpatrickAction};
pub use scanner::{Candidates, Scanner, UnicodeCandidate};
pub use trie::{EmojiId, EmojiTrie, Matches, TrieCursor};

static DB: OnceCell<EmojiDb> = OnceCell::new();

/// Initializes the global database from the bundled catalog
pub fn init() -> Result<&'static EmojiDb, CatalogError> {
    init_with(Catalog::bundled()?)
}

/// Initializes the global database from the given catalog.
///
/// Fails with [`CatalogError::AlreadyInitialized`] if the database was already set up,
/// including implicitly by [`db`].
pub fn init_with(catalog: Catalog) -> Result<&'static EmojiDb, CatalogError> {
    let mut fresh = false;

    let db = DB.get_or_init(|| {
        fresh = true;
        EmojiDb::new(catalog)
    });

    if !fresh {
        tracing::warn!("Attempted to initialize emoji database twice");
        return Err(CatalogError::AlreadyInitialized);
    }

    tracing::info!("Initialized emoji database with {} emojis", db.len());

    Ok(db)
}

/// The global database, if it has been initialized
#[inline]
pub fn try_db() -> Option<&'static EmojiDb> {
    DB.get()
}

/// The global database, initialized from the bundled catalog on first use if needed
pub fn db() -> &'static EmojiDb {
    DB.get_or_init(|| match Catalog::bundled() {
        Ok(catalog) => EmojiDb::new(catalog),
        Err(e) => panic!("Bundled emoji catalog is invalid: {e}"),
    })
}

pub fn get_for_alias(alias: &str) -> Option<&'static Emoji> {
    db().get_for_alias(alias)
}

pub fn get_for_tag(tag: &str) -> Option<Emojis<'static>> {
    db().get_for_tag(tag)
}

pub fn get_for_category(category: Category) -> Option<Emojis<'static>> {
    db().get_for_category(category)
}

pub fn get_by_unicode(unicode: &str) -> Option<&'static Emoji> {
    db().get_by_unicode(unicode)
}

/// All emojis, longest sequence first
pub fn get_all() -> Emojis<'static> {
    db().all()
}

pub fn get_all_tags() -> impl Iterator<Item = &'static str> {
    db().all_tags()
}

/// Whether the whole string is a single emoji, optionally with a skin tone
pub fn is_emoji(text: &str) -> bool {
    db().is_emoji(text)
}

pub fn contains_emoji(text: &str) -> bool {
    db().contains_emoji(text)
}

pub fn is_only_emojis(text: &str) -> bool {
    db().is_only_emojis(text)
}

/// Whether `sequence` is an emoji, could become one with more input, or neither
pub fn classify(sequence: &[char]) -> Matches {
    db().classify(sequence)
}

/// Iterates through every emoji occurrence in `text`
pub fn find_emojis(text: &[char]) -> Candidates<'static, '_> {
    db().scanner().candidates(text)
}
