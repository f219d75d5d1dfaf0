//! zgallery: a Zellij plugin for browsing a remote image gallery by category.
//!
//! The user types a category, pages through results, sorts the loaded page and
//! opens a detail dialog for a single image:
//! - Debounced category search with an immediate-commit shortcut
//! - Per `(category, page)` result cache with at most one fetch per key
//! - Display-only sorting by ID, views, downloads or collections
//! - Detail dialog with a focus trap and previous/next navigation
//! - Error toasts for not-found, server and network failures

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
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Gallery Layer (gallery/) │   │ UI Layer (ui/)           │
//! │ - Session store & cache  │   │ - Rendering              │
//! │ - Fetch orchestration    │   │ - Theming                │
//! │ - Debounce, sort, detail │   │ - Components             │
//! └──────────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Categories, records, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zgallery.wasm" {
//!         api_url "https://gallery.example.com/api"
//!         category "nature"
//!         sort "views"
//!         debounce_ms "300"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use zgallery::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     api_url: Some("https://gallery.example.com/api".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! let (_, actions) =
//!     handle_event(&mut state, &Event::PermissionsResult { granted: true }, Duration::ZERO)?;
//! assert!(actions.iter().any(|a| matches!(a, Action::FetchPage(_))));
//! # Ok::<(), zgallery::GalleryError>(())
//! ```

pub mod app;
pub mod domain;
pub mod gallery;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{GalleryError, Result, DEFAULT_CATEGORY};
pub use ui::Theme;

use domain::{Category, SortCriterion};
use gallery::{ApiEndpoint, Debouncer, FetchOrchestrator, SessionStore};
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zgallery.wasm" {
///     api_url "https://gallery.example.com/api"
///     category "sport"
///     sort "downloads"
///     debounce_ms "500"
///     theme "catppuccin-latte"
///     theme_file "~/.config/zgallery/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the gallery API. Required.
    pub api_url: Option<String>,

    /// Category loaded at startup. Default: `"sport"`
    pub category: String,

    /// Initial sort criterion. Default: [`SortCriterion::Id`]
    pub sort: SortCriterion,

    /// Search box quiet period in milliseconds. Default: 500
    pub debounce_ms: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            category: DEFAULT_CATEGORY.to_string(),
            sort: SortCriterion::Id,
            debounce_ms: 500,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults; blank values count as
    /// absent.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zgallery::domain::SortCriterion;
    /// use zgallery::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("category".to_string(), "nature".to_string());
    /// map.insert("sort".to_string(), "views".to_string());
    /// map.insert("debounce_ms".to_string(), "oops".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.category, "nature");
    /// assert_eq!(config.sort, SortCriterion::Views);
    /// assert_eq!(config.debounce_ms, 500);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let sort = get("sort")
            .and_then(|raw| {
                raw.parse::<SortCriterion>()
                    .map_err(|e| tracing::debug!(error = %e, "ignoring sort setting"))
                    .ok()
            })
            .unwrap_or(defaults.sort);

        let debounce_ms = get("debounce_ms")
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        Self {
            api_url: get("api_url"),
            category: get("category").unwrap_or(defaults.category),
            sort,
            debounce_ms,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Validated API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if `api_url` is missing or is not an
    /// `http://` or `https://` URL with a host.
    pub fn endpoint(&self) -> Result<ApiEndpoint> {
        let raw = self
            .api_url
            .as_deref()
            .ok_or_else(|| GalleryError::Config("api_url is not set".to_string()))?;
        ApiEndpoint::parse(raw)
    }

    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the plugin state from configuration.
///
/// Never fails: an unusable `api_url` leaves the plugin running with the
/// problem shown in place of the gallery, and an unusable category falls back
/// to [`DEFAULT_CATEGORY`].
///
/// ```rust
/// use zgallery::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.config_error.is_some());
/// assert_eq!(state.store.category().as_str(), "sport");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(category = %config.category, sort = %config.sort, "initializing zgallery plugin");

    let category = Category::new(&config.category).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "configured category unusable, using default");
        Category::default()
    });

    let (orchestrator, config_error) = match config.endpoint() {
        Ok(endpoint) => (FetchOrchestrator::new(endpoint), None),
        Err(e) => {
            tracing::warn!(error = %e, "gallery endpoint unavailable");
            (FetchOrchestrator::unavailable(&e), Some(e.to_string()))
        }
    };

    let mut state = AppState::new(
        SessionStore::new(category, config.sort),
        orchestrator,
        Debouncer::new(Duration::from_millis(config.debounce_ms)),
        config.theme(),
    );
    state.config_error = config_error;
    state
}
