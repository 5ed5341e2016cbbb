use std::io::Read;
use std::path::Path;

use hashbrown::hash_map::{Entry, HashMap};

use crate::emoji::{Category, Emoji};

/// Catalog compiled into the crate, used when no other catalog is given
pub static BUNDLED_JSON: &str = include_str!("../data/emoji-list.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Malformed Catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Emoji #{index} has an empty sequence")]
    EmptySequence { index: usize },

    #[error("Emoji #{index} has no aliases")]
    NoAliases { index: usize },

    #[error("Emoji #{second} has the same sequence as emoji #{first}")]
    DuplicateSequence { first: usize, second: usize },

    #[error("Emoji database has already been initialized")]
    AlreadyInitialized,
}

#[derive(serde::Deserialize)]
struct RawEmoji {
    emoji: String,
    #[serde(default)]
    description: String,
    category: Category,
    aliases: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    supports_fitzpatrick: bool,
}

impl From<RawEmoji> for Emoji {
    fn from(raw: RawEmoji) -> Emoji {
        Emoji::new(
            raw.emoji,
            raw.description,
            raw.category,
            raw.aliases,
            raw.tags,
            raw.supports_fitzpatrick,
        )
    }
}

/// Validated, ordered list of emojis that the trie and index are built from
#[derive(Debug, Clone)]
pub struct Catalog {
    emojis: Vec<Emoji>,
}

/// Reads catalogs, optionally tolerating duplicate sequences
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader {
    /// Duplicate sequences are an error when strict, otherwise later duplicates are skipped
    pub strict: bool,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        CatalogLoader { strict: true }
    }
}

impl CatalogLoader {
    pub fn validate(&self, input: Vec<Emoji>) -> Result<Catalog, CatalogError> {
        let mut seen: HashMap<Box<[char]>, usize> = HashMap::with_capacity(input.len());
        let mut emojis = Vec::with_capacity(input.len());

        for (index, emoji) in input.into_iter().enumerate() {
            if emoji.sequence().is_empty() {
                return Err(CatalogError::EmptySequence { index });
            }

            if emoji.aliases().is_empty() {
                return Err(CatalogError::NoAliases { index });
            }

            match seen.entry(emoji.sequence.clone()) {
                Entry::Occupied(o) => {
                    let first = *o.get();

                    if self.strict {
                        return Err(CatalogError::DuplicateSequence { first, second: index });
                    }

                    tracing::warn!("Skipping emoji #{index} ({}), duplicate of emoji #{first}", emoji.alias());
                    continue;
                }
                Entry::Vacant(v) => {
                    v.insert(index);
                }
            }

            emojis.push(emoji);
        }

        Ok(Catalog { emojis })
    }

    pub fn load_str(&self, json: &str) -> Result<Catalog, CatalogError> {
        let raw: Vec<RawEmoji> = serde_json::from_str(json)?;

        self.validate(raw.into_iter().map(Emoji::from).collect())
    }

    pub fn load_reader(&self, reader: impl Read) -> Result<Catalog, CatalogError> {
        let raw: Vec<RawEmoji> = serde_json::from_reader(reader)?;

        self.validate(raw.into_iter().map(Emoji::from).collect())
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();

        tracing::info!("Loading emoji catalog from {}", path.display());

        let file = std::fs::File::open(path)?;
        let catalog = self.load_reader(std::io::BufReader::new(file))?;

        tracing::info!("Loaded {} emojis from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn load_bundled(&self) -> Result<Catalog, CatalogError> {
        let catalog = self.load_str(BUNDLED_JSON)?;

        tracing::debug!("Loaded {} bundled emojis", catalog.len());

        Ok(catalog)
    }
}

impl Catalog {
    #[inline]
    pub fn from_emojis(emojis: Vec<Emoji>) -> Result<Catalog, CatalogError> {
        CatalogLoader::default().validate(emojis)
    }

    #[inline]
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        CatalogLoader::default().load_str(json)
    }

    #[inline]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        CatalogLoader::default().load_path(path)
    }

    #[inline]
    pub fn bundled() -> Result<Catalog, CatalogError> {
        CatalogLoader::default().load_bundled()
    }

    #[inline]
    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
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
    pub fn into_emojis(self) -> Vec<Emoji> {
        self.emojis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"[
        { "emoji": "😀", "description": "grinning face", "category": "SMILEYS", "aliases": ["grinning"], "tags": ["smile", "happy"] },
        { "emoji": "👋", "description": "waving hand", "category": "PEOPLE", "aliases": ["wave"], "supports_fitzpatrick": true }
    ]"#;

    #[test]
    fn test_load_str() {
        let catalog = Catalog::from_json(SMALL).unwrap();

        assert_eq!(catalog.len(), 2);

        let wave = &catalog.emojis()[1];
        assert_eq!(wave.alias(), "wave");
        assert_eq!(wave.category(), Category::People);
        assert!(wave.supports_fitzpatrick());
        assert!(wave.tags().is_empty());
        assert!(!catalog.emojis()[0].supports_fitzpatrick());
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(Catalog::from_json("[{"), Err(CatalogError::JsonError(_))));
        assert!(matches!(
            Catalog::from_json(r#"[{ "emoji": "😀", "category": "NOPE", "aliases": ["x"] }]"#),
            Err(CatalogError::JsonError(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{ "emoji": "", "category": "SMILEYS", "aliases": ["x"] }]"#),
            Err(CatalogError::EmptySequence { index: 0 })
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{ "emoji": "😀", "category": "SMILEYS", "aliases": [] }]"#),
            Err(CatalogError::NoAliases { index: 0 })
        ));
    }

    #[test]
    fn test_duplicates() {
        let json = r#"[
            { "emoji": "😀", "category": "SMILEYS", "aliases": ["grinning"] },
            { "emoji": "🐱", "category": "ANIMALS", "aliases": ["cat"] },
            { "emoji": "😀", "category": "SMILEYS", "aliases": ["grin"] }
        ]"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateSequence { first: 0, second: 2 })
        ));

        let catalog = CatalogLoader { strict: false }.load_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.emojis()[0].alias(), "grinning");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Catalog::from_path("/definitely/not/here.json"),
            Err(CatalogError::IOError(_))
        ));
    }

    #[test]
    fn test_bundled_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() > 50);
    }
}
