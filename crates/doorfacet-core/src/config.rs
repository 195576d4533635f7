//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `doorfacet.toml` +
//! `doorfacet.<env>.toml` + `DOORFACET_*` env vars. Provides helpers to expand
//! `~` and `${VAR}` and to resolve relative paths against a known base
//! directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "doorfacet.toml";
pub const ENV_PREFIX: &str = "DOORFACET_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub listing: ListingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// A `.json` file or a directory of them.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSettings {
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings { path: "data/in_stock.json".to_string() },
            listing: ListingSettings { page_size: 12 },
        }
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Loads configuration from the current directory.
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().map_err(|source| Error::Io { path: PathBuf::from("."), source })?;
        Self::load_from(&cwd)
    }

    /// Loads `doorfacet.toml` and the `RUST_ENV` overlay found in `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file(dir.join(CONFIG_FILE)));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("doorfacet.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("doorfacet.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("doorfacet.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        tracing::debug!(dir = %dir.display(), env = %env_name, "loading configuration");

        let config = Self { figment, base_dir: dir.to_path_buf() };
        config.validate()?;
        Ok(config)
    }

    /// Loads a single explicit file on top of the defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!(path = %path.display(), "loading configuration file");

        let config = Self { figment, base_dir };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    /// Like [`Config::get`], but a missing key yields `None`.
    pub fn get_opt<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if self.figment.contains(key) { self.get(key).map(Some) } else { Ok(None) }
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment.extract().map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Catalog location with `~`/`$VAR` expanded, relative to the config directory.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        let settings = self.settings()?;
        Ok(resolve_with_base(&self.base_dir, settings.catalog.path))
    }

    fn validate(&self) -> Result<()> {
        let settings = self.settings()?;
        if settings.listing.page_size == 0 {
            return Err(Error::InvalidConfig("listing.page_size must be greater than zero".to_string()));
        }
        if settings.catalog.path.trim().is_empty() {
            return Err(Error::InvalidConfig("catalog.path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
