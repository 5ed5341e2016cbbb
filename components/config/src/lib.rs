use std::io::{self, ErrorKind};
use std::path::Path;

pub extern crate paste;
pub extern crate serde;
pub extern crate tracing;

pub mod util;

pub mod sections {
    pub mod catalog;
    pub mod scan;
}

#[macro_export]
macro_rules! section {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {$(
            $(#[$field_meta:meta])*
            $field_vis:vis $field_name:ident : $field_ty:ty = $field_default:expr
                $(=> $field_env:literal
                    $(| $func:path
                        $([  $($param:expr),* ])?
                    )?
                )?
        ),*$(,)?}

        $(impl Extra { $($extra:tt)+ })?
    ) => { $crate::paste::paste! {
        #[derive(Debug, $crate::serde::Deserialize)]
        $(#[$meta])*
        #[serde(deny_unknown_fields)]
        $vis struct $name {$(
            $(#[$field_meta])*
            $(
                #[doc = ""]
                #[doc = "**Overridden by the `" $field_env "` environment variable.**"]
            )?
            $field_vis $field_name: $field_ty,
        )*}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                $name {$(
                    $field_name: $field_default,
                )*}
            }
        }

        impl $crate::ConfigExtra for $name {
            $($($extra)+)?
        }

        impl $crate::Configuration for $name {
            fn configure(&mut self) {
                $($(
                    if let Ok(value) = std::env::var($field_env) {
                        $crate::tracing::debug!("Applying environment overwrite for {}.{}=>{}", stringify!($name), stringify!($field_name), $field_env);
                        self.$field_name = ($($func(&value $( $(,$param)* )? ),)? value , ).0.into();
                    }
                )?)*

                $crate::ConfigExtra::configure(self);
            }
        }
    }};
}

#[macro_export]
macro_rules! config {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {$(
            $(#[$field_meta:meta])*
            $field:ident: $field_ty:ty
        ),*$(,)?}
    ) => {
        $(#[$meta])*
        #[derive(Default, Debug, $crate::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        #[cfg_attr(not(feature = "strict"), serde(default))]
        pub struct $name {
            $($(#[$field_meta])* pub $field: $field_ty,)*
        }

        impl $crate::Configuration for $name {
            fn configure(&mut self) {
                $($crate::Configuration::configure(&mut self.$field);)*
            }
        }
    };
}

pub trait ConfigExtra: Configuration {
    fn configure(&mut self) {}
}

pub trait Configuration: serde::de::DeserializeOwned {
    /// Applies any environmental overrides and adjustments
    fn configure(&mut self);
}

config! {
    pub struct Config {
        /// Where emojis are loaded from
        catalog: sections::catalog::Catalog,
        /// How emojis found in text are rendered
        scan: sections::scan::Scan,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    IOError(#[from] io::Error),

    #[error("TOML Error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),
}

enum Format {
    TOML,
    JSON,
}

fn get_format(path: &Path) -> Format {
    let mut format = Format::TOML;
    if let Some(ext) = path.extension() {
        if ext.eq_ignore_ascii_case("toml") {
            format = Format::TOML;
        } else if ext.eq_ignore_ascii_case("json") {
            format = Format::JSON;
        }
    }
    format
}

impl Config {
    /// Reads a TOML or JSON configuration file, falling back to defaults if it doesn't exist.
    ///
    /// Environment overrides are not applied here, see [`Configuration::configure`].
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let file = match std::fs::read_to_string(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} not found, using default config", path.display());

                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(match get_format(path) {
            Format::TOML => toml::from_str(&file)?,
            Format::JSON => serde_json::from_str(&file)?,
        })
    }

    /// Loads the emoji catalog this configuration points to
    pub fn load_catalog(&self) -> Result<emoji::Catalog, emoji::CatalogError> {
        let loader = emoji::CatalogLoader {
            strict: self.catalog.strict,
        };

        match self.catalog.path {
            Some(ref path) => loader.load_path(path),
            None => loader.load_bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoji::FitzpatrickAction;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert!(config.catalog.path.is_none());
        assert!(config.catalog.strict);
        assert_eq!(config.scan.fitzpatrick, FitzpatrickAction::Parse);
        assert!(config.load_catalog().unwrap().len() > 0);
    }

    #[test]
    fn test_toml() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            strict = false

            [scan]
            fitzpatrick = "remove"
            "#,
        )
        .unwrap();

        assert!(!config.catalog.strict);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.scan.fitzpatrick, FitzpatrickAction::Remove);

        assert!(toml::from_str::<Config>("[catalog]\nunknown = 1").is_err());
    }

    #[test]
    fn test_missing_file() {
        let config = Config::load("/definitely/not/here.toml").unwrap();
        assert!(config.catalog.strict);
    }
}
