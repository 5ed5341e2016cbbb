use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::fitzpatrick::Fitzpatrick;

/// Closed set of categories an emoji can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Smileys,
    People,
    Component,
    Animals,
    Food,
    Travel,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Smileys,
        Category::People,
        Category::Component,
        Category::Animals,
        Category::Food,
        Category::Travel,
        Category::Activities,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Smileys => "SMILEYS",
            Category::People => "PEOPLE",
            Category::Component => "COMPONENT",
            Category::Animals => "ANIMALS",
            Category::Food => "FOOD",
            Category::Travel => "TRAVEL",
            Category::Activities => "ACTIVITIES",
            Category::Objects => "OBJECTS",
            Category::Symbols => "SYMBOLS",
            Category::Flags => "FLAGS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single known emoji. Immutable once the catalog has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub(crate) sequence: Box<[char]>,
    pub(crate) unicode: Box<str>,
    pub(crate) description: Box<str>,
    pub(crate) aliases: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) category: Category,
    pub(crate) supports_fitzpatrick: bool,
}

impl Emoji {
    pub fn new(
        unicode: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        aliases: Vec<String>,
        tags: Vec<String>,
        supports_fitzpatrick: bool,
    ) -> Emoji {
        let unicode = unicode.into();

        Emoji {
            sequence: unicode.chars().collect(),
            unicode: unicode.into_boxed_str(),
            description: description.into().into_boxed_str(),
            aliases,
            tags,
            category,
            supports_fitzpatrick,
        }
    }

    /// Code points making up this emoji, never empty for catalog entries
    #[inline]
    pub fn sequence(&self) -> &[char] {
        &self.sequence
    }

    #[inline]
    pub fn unicode(&self) -> &str {
        &self.unicode
    }

    /// The emoji with the given skin tone appended, or the bare emoji if it has no skin tones
    pub fn unicode_with(&self, fitzpatrick: Fitzpatrick) -> String {
        let mut out = String::from(self.unicode());

        if self.supports_fitzpatrick {
            out.push(fitzpatrick.as_char());
        }

        out
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// First alias, conventionally the canonical one
    #[inline]
    pub fn alias(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or_default()
    }

    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn supports_fitzpatrick(&self) -> bool {
        self.supports_fitzpatrick
    }

    /// `&#128512;` style, one entity per code point
    pub fn html_decimal(&self) -> String {
        let mut out = String::new();
        for c in self.sequence.iter() {
            let _ = write!(out, "&#{};", *c as u32);
        }
        out
    }

    /// `&#x1f600;` style, one entity per code point
    pub fn html_hexadecimal(&self) -> String {
        let mut out = String::new();
        for c in self.sequence.iter() {
            let _ = write!(out, "&#x{:x};", *c as u32);
        }
        out
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.unicode())
    }
}
