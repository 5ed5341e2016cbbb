use std::path::PathBuf;

use crate::util;

crate::section! {
    #[serde(default)]
    pub struct Catalog {
        /// Path to a JSON emoji catalog
        ///
        /// Uses the catalog bundled with the emoji crate when unset
        pub path: Option<PathBuf> = None => "EMOJI_CATALOG_PATH" | util::opt_path,

        /// Reject catalogs containing duplicate emoji sequences,
        /// otherwise later duplicates are skipped with a warning
        pub strict: bool = true => "EMOJI_CATALOG_STRICT" | util::parse[true],
    }

    impl Extra {
        fn configure(&mut self) {
            if let Some(ref path) = self.path {
                tracing::info!("Using emoji catalog at {}", path.display());
            }
        }
    }
}
