//! # Client configuration: `bookflix.toml`
//!
//! Selects which backend the client talks to and how it persists the session.
//! The web entry point embeds the file at build time and falls back to
//! [`LibraryConfig::default`] when it is missing or malformed.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""          # empty = same origin as the page
//! flavor = "root"        # "root" (/entrar, /livros, ...) or "prefixed" (/api/login, ...)
//!
//! [session]
//! storage_key = "usuarioBookflix"
//!
//! [ui]
//! placeholder_cover = "https://via.placeholder.com/128x196?text=Capa"
//! toast_secs = 3
//! ```
//!
//! Every section derives `Default`, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::models::PLACEHOLDER_COVER;

/// Top-level configuration stored in `bookflix.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// The two backend conventions the client can speak.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFlavor {
    /// Root-relative endpoints with Portuguese names (`/entrar`, `/emprestar`, ...).
    #[default]
    Root,
    /// JSON endpoints under `/api/` (`/api/login`, `/api/books`, `/api/upload`, ...).
    Prefixed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend. Empty means the page's own origin.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub flavor: ApiFlavor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key under which the current user is persisted.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "usuarioBookflix".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_placeholder_cover")]
    pub placeholder_cover: String,
    /// How long transient messages stay on screen.
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u32,
}

fn default_placeholder_cover() -> String {
    PLACEHOLDER_COVER.to_string()
}

fn default_toast_secs() -> u32 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_cover: default_placeholder_cover(),
            toast_secs: default_toast_secs(),
        }
    }
}

impl LibraryConfig {
    /// Builder method to point the client at another backend.
    pub fn with_backend(mut self, base_url: impl Into<String>, flavor: ApiFlavor) -> Self {
        self.api.base_url = base_url.into();
        self.api.flavor = flavor;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bookflix.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Base URL requests are sent to, using `origin` when none is configured.
    pub fn resolve_base_url(&self, origin: &str) -> String {
        let base = self.api.base_url.trim();
        let base = if base.is_empty() { origin } else { base };
        base.trim_end_matches('/').to_string()
    }
}
