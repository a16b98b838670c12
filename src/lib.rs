//! Marquee: a Zellij plugin for searching movies on OMDb.
//!
//! Marquee puts a movie search in a terminal pane:
//! - Debounced title search against the OMDb directory
//! - A detail modal per result, fetched on first open and cached
//! - Favorites persisted as JSON and browsable in an overlay

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, debounce timers                  │
//! │  - Result cards and detail panels                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Directory     │
//! │ (ui/)         │   │ (storage/)    │   │ (directory/)  │
//! │ - Rendering   │   │ - JSON files  │   │ - OMDb URLs   │
//! │ - Theming     │   │ - Favorites   │   │ - Replies     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Host paths (infrastructure/)                     │
//! │  - Movie records and errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! `api_key` is required (get one at omdbapi.com); every other key is
//! optional.
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/marquee.wasm" {
//!         api_key "your-omdb-key"
//!         default_query "Avengers"
//!         debounce_ms "600"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Load**: parse [`Config`], install tracing, build [`AppState`] with the
//!    default query committed but not yet searched.
//! 2. **Permissions granted**: open the favorites file, then
//!    [`Event::Ready`] issues the first search.
//! 3. **Typing**: each keystroke re-arms the debounce timer; the host timer
//!    that survives searches the query.
//! 4. **Responses**: the host hands back HTTP results tagged with the request
//!    they answer; stale ones are dropped.
//!
//! # Example
//!
//! ```rust
//! use marquee::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("k".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Ready)?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, Surface};
pub use domain::{MarqueeError, MovieDetail, MovieSummary, Result};
pub use ui::Theme;

use app::SearchController;
use directory::{DirectoryClient, DEFAULT_API_URL};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use storage::{FavoritesStore, JsonFileStore, MemoryStore};

/// Query searched once the plugin is ready.
pub const DEFAULT_QUERY: &str = "Avengers";

/// Quiet period after the last keystroke, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 600;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory endpoint. Default: [`DEFAULT_API_URL`]
    pub api_url: String,

    /// OMDb API key. Required in practice: there is no default, and OMDb
    /// refuses keyless requests, so without it every search comes back
    /// empty and the result list says so.
    pub api_key: Option<String>,

    /// Query committed at load and searched once ready.
    pub default_query: String,

    pub debounce_ms: u64,

    /// Where `favorites.json` lives.
    pub favorites_dir: PathBuf,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme; takes precedence over `theme_name`.
    pub theme_file: Option<PathBuf>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            default_query: DEFAULT_QUERY.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            favorites_dir: infrastructure::data_dir(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys and unparsable numbers fall back to the defaults. Paths
    /// starting with `~` resolve against the host home directory.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marquee::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_query".to_string(), "Alien".to_string());
    /// map.insert("debounce_ms".to_string(), "fast".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.default_query, "Alien");
    /// assert_eq!(config.debounce_ms, 600);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        Self {
            api_url: non_empty("api_url").unwrap_or(defaults.api_url),
            api_key: non_empty("api_key"),
            // an explicitly empty default query is allowed
            default_query: config
                .get("default_query")
                .cloned()
                .unwrap_or(defaults.default_query),
            debounce_ms,
            favorites_dir: non_empty("favorites_dir")
                .map_or(defaults.favorites_dir, |p| infrastructure::expand_tilde(&p)),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file").map(|p| infrastructure::expand_tilde(&p)),
            trace_level: non_empty("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %infrastructure::display_path(theme_file), error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }
        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state.
///
/// Favorites start in memory; the shim swaps in the durable store with
/// [`open_favorites_store`] once filesystem access is granted.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, debounce_ms = config.debounce_ms, "initializing marquee plugin");

    let client = DirectoryClient::new(config.api_url.clone(), config.api_key.clone());
    if !client.has_api_key() {
        tracing::warn!("no api_key configured; the directory will refuse requests");
    }

    let search = SearchController::new(&config.default_query, config.debounce());
    AppState::new(client, search, config.load_theme())
}

/// Opens the favorites list persisted under `config.favorites_dir`.
///
/// If the directory cannot be created the list still works for the session,
/// kept in memory only.
pub fn open_favorites_store(config: &Config) -> FavoritesStore {
    match JsonFileStore::new(&config.favorites_dir) {
        Ok(backend) => FavoritesStore::load(Box::new(backend)),
        Err(e) => {
            tracing::error!(
                path = %infrastructure::display_path(&config.favorites_dir),
                error = %e,
                "favorites directory unavailable, keeping favorites in memory"
            );
            FavoritesStore::load(Box::new(MemoryStore::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_parsed_and_trimmed() {
        let config = Config::from_zellij(&map(&[
            ("api_url", "http://localhost:8080/"),
            ("api_key", " abc123 "),
            ("debounce_ms", "250"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
            ("favorites_dir", "/tmp/marquee"),
        ]));
        assert_eq!(config.api_url, "http://localhost:8080/");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.favorites_dir, PathBuf::from("/tmp/marquee"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::from_zellij(&map(&[("api_key", "   ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }

    #[test]
    fn theme_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let latte = include_str!("../themes/catppuccin-latte.toml").replace("catppuccin-latte", "custom");
        std::fs::write(&path, latte).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(path),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");
    }

    #[test]
    fn favorites_store_persists_under_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            favorites_dir: dir.path().join("nested"),
            ..Config::default()
        };
        let mut store = open_favorites_store(&config);
        store.add(MovieSummary {
            id: "tt0848228".to_string(),
            title: "The Avengers".to_string(),
            year: "2012".to_string(),
            kind: "movie".to_string(),
            poster: domain::Poster::Missing,
        });
        assert!(dir.path().join("nested").join("favorites.json").exists());
        assert_eq!(open_favorites_store(&config).len(), 1);
    }
}
