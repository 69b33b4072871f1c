//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dsdemo/dsdemo.toml`
//! 3. Local config: `<dir>/.dsdemo.toml` (working directory or `-C <dir>`)
//! 4. Environment variables: `DSDEMO_*` prefix, `__` between sections
//!    (e.g. `DSDEMO_STACK__CAPACITY=8`)

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::DEFAULT_CAPACITY;

/// Stack simulator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StackSettings {
    /// Maximum number of tokens (must be at least 1)
    pub capacity: usize,
    /// Joins rendered elements, top first
    pub separator: String,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY.get(),
            separator: " <- TOP\n".into(),
        }
    }
}

impl StackSettings {
    /// Validated capacity.
    pub fn capacity(&self) -> ApplicationResult<NonZeroUsize> {
        NonZeroUsize::new(self.capacity).ok_or_else(|| ApplicationError::Config {
            message: "stack.capacity must be at least 1".into(),
        })
    }
}

/// Tree demo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeSettings {
    /// Joins traversal values
    pub separator: String,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
        }
    }
}

/// Pages known to the navigation bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteSettings {
    /// Navigation links in display order
    pub pages: Vec<String>,
    /// Page assumed when a path has no file segment
    pub default_page: String,
    /// Page on which the simulators are initialized
    pub simulator_page: String,
    /// Ids of the reveal cards present on the site
    pub cards: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            pages: vec![
                "index.html".into(),
                "algorithms.html".into(),
                "pseudocode.html".into(),
                "data_structures.html".into(),
            ],
            default_page: "index.html".into(),
            simulator_page: "data_structures.html".into(),
            cards: vec![
                "bubble-sort".into(),
                "binary-search".into(),
                "merge-sort".into(),
                "quick-sort".into(),
            ],
        }
    }
}

impl SiteSettings {
    /// Merge page lists keeping order.
    ///
    /// - Pages from overlay not yet present are appended
    /// - Pages prefixed with `!` remove the corresponding page
    ///
    /// # Examples
    /// ```ignore
    /// merge_pages(&["a", "b"], &["c"])       // → ["a", "b", "c"]
    /// merge_pages(&["a", "b"], &["!a", "c"]) // → ["b", "c"]
    /// ```
    pub fn merge_pages(base: &[String], overlay: &[String]) -> Vec<String> {
        let mut result = base.to_vec();
        for page in overlay {
            if let Some(negated) = page.strip_prefix('!') {
                result.retain(|p| p != negated);
            } else if !result.contains(page) {
                result.push(page.clone());
            }
        }
        result
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub stack: RawStackSettings,
    pub tree: RawTreeSettings,
    pub site: RawSiteSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawStackSettings {
    pub capacity: Option<usize>,
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTreeSettings {
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSiteSettings {
    pub pages: Option<Vec<String>>,
    pub default_page: Option<String>,
    pub simulator_page: Option<String>,
    pub cards: Option<Vec<String>>,
}

/// Unified configuration for dsdemo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub stack: StackSettings,
    pub tree: TreeSettings,
    pub site: SiteSettings,
}

/// Get the XDG config directory for dsdemo.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dsdemo").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dsdemo.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".dsdemo.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read one key from the env source; a missing key is not an error.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Apply a config file onto self.
    ///
    /// Scalars: file wins if specified. Pages and cards: REPLACE when
    /// `union_pages` is false, otherwise merged with [`SiteSettings::merge_pages`].
    fn merge_with(&self, raw: &RawSettings, union_pages: bool) -> Self {
        let merge_list = |base: &[String], overlay: Option<&Vec<String>>| match overlay {
            Some(items) if union_pages => SiteSettings::merge_pages(base, items),
            Some(items) => items.clone(),
            None => base.to_vec(),
        };
        let pages = merge_list(&self.site.pages, raw.site.pages.as_ref());
        let cards = merge_list(&self.site.cards, raw.site.cards.as_ref());
        Self {
            stack: StackSettings {
                capacity: raw.stack.capacity.unwrap_or(self.stack.capacity),
                separator: raw
                    .stack
                    .separator
                    .clone()
                    .unwrap_or_else(|| self.stack.separator.clone()),
            },
            tree: TreeSettings {
                separator: raw
                    .tree
                    .separator
                    .clone()
                    .unwrap_or_else(|| self.tree.separator.clone()),
            },
            site: SiteSettings {
                pages,
                default_page: raw
                    .site
                    .default_page
                    .clone()
                    .unwrap_or_else(|| self.site.default_page.clone()),
                simulator_page: raw
                    .site
                    .simulator_page
                    .clone()
                    .unwrap_or_else(|| self.site.simulator_page.clone()),
                cards,
            },
        }
    }

    /// Load settings with layered precedence, using the XDG global config.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.dsdemo.toml`
    pub fn load(local_dir: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref(), local_dir)
    }

    /// Load settings from explicit locations.
    ///
    /// # Page list semantics
    /// - Defaults → Global: REPLACE (global defines the site)
    /// - Global → Local: UNION with `!` negation
    /// - Any → Env vars: REPLACE
    pub fn load_from(global_path: Option<&Path>, local_dir: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw, false);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw, true);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.stack.capacity()?;

        Ok(current)
    }

    /// Apply DSDEMO_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("DSDEMO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("site.pages")
                    .with_list_parse_key("site.cards"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "stack.capacity")? {
            settings.stack.capacity = val;
        }
        if let Some(val) = env_value::<String>(&config, "stack.separator")? {
            settings.stack.separator = val;
        }
        if let Some(val) = env_value::<String>(&config, "tree.separator")? {
            settings.tree.separator = val;
        }
        if let Some(val) = env_value::<Vec<String>>(&config, "site.pages")? {
            settings.site.pages = val;
        }
        if let Some(val) = env_value::<String>(&config, "site.default_page")? {
            settings.site.default_page = val;
        }
        if let Some(val) = env_value::<String>(&config, "site.simulator_page")? {
            settings.site.simulator_page = val;
        }
        if let Some(val) = env_value::<Vec<String>>(&config, "site.cards")? {
            settings.site.cards = val;
        }

        Ok(settings)
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
