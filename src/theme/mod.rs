//! Theme state for the session.
//!
//! [`ThemeProvider`] owns the dark-mode flag. It starts from the persisted
//! preference, falls back to the host's ambient preference, and finally to
//! light. Explicit changes are persisted; ambient changes are followed only
//! until the user makes an explicit choice. Every change regenerates the
//! [`StyleConfig`] and updates the document-level marker.
//!
//! Storage and detection failures never reach the caller: they are logged and
//! the provider falls back to light mode.

pub mod ambient;
pub mod marker;
pub mod storage;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::THEME_STORAGE_KEY;
use crate::events::{lock, ListenerGuard};
use crate::style::{generate, StyleConfig};
use crate::ui_config::UiConfig;

pub use ambient::{AmbientChange, AmbientSource, ManualAmbient, SystemAmbient};
pub use marker::PresentationMarker;
pub use storage::{FileStore, MemoryStore, PreferenceStore};

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark backgrounds, light text
    Dark,
    /// Light backgrounds, dark text
    #[default]
    Light,
}

impl ThemeMode {
    /// Mode for a dark-mode flag.
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Whether this is dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Persisted text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Interprets a persisted value: `"dark"` is dark, anything else light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == Self::Dark.as_str())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{}' (expected dark or light)", other),
        }
    }
}

/// What consumers of the provider read: the flag and its style table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeContext {
    /// Whether dark mode is active
    pub is_dark_mode: bool,
    /// Style table for the active mode
    pub ui_config: StyleConfig,
}

impl ThemeContext {
    /// Context for a fixed mode, without a provider.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        Self {
            is_dark_mode: mode.is_dark(),
            ui_config: generate(mode.is_dark()),
        }
    }

    /// Class accessor over this context.
    #[must_use]
    pub fn ui(&self) -> UiConfig<'_> {
        UiConfig::new(&self.ui_config, self.is_dark_mode)
    }

    /// Active mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark_mode)
    }
}

/// Persisted theme value. A blank value counts as unset.
fn read_saved(store: &dyn PreferenceStore) -> anyhow::Result<Option<String>> {
    Ok(store
        .get(THEME_STORAGE_KEY)?
        .filter(|value| !value.trim().is_empty()))
}

struct ThemeState {
    is_dark: bool,
    /// Set once the user has chosen a mode, persisted or not.
    explicit: bool,
    style: StyleConfig,
    store: Box<dyn PreferenceStore>,
    marker: Box<dyn PresentationMarker>,
}

impl ThemeState {
    fn apply(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        self.style = generate(is_dark);
        self.marker.apply(is_dark);
    }

    fn choose(&mut self, is_dark: bool) {
        self.explicit = true;
        self.apply(is_dark);

        let mode = ThemeMode::from_dark(is_dark);
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, mode.as_str()) {
            warn!("Failed to persist theme preference: {err:#}");
        }
        debug!(%mode, "theme set explicitly");
    }

    fn has_stored_preference(&self) -> bool {
        match read_saved(self.store.as_ref()) {
            Ok(value) => value.is_some(),
            Err(err) => {
                warn!("Failed to read theme preference: {err:#}");
                false
            }
        }
    }

    fn follow_ambient(&mut self, prefers_dark: bool) {
        if self.explicit || self.has_stored_preference() {
            debug!(prefers_dark, "ignoring OS theme change, user preference set");
            return;
        }
        debug!(prefers_dark, "following OS theme change");
        self.apply(prefers_dark);
    }
}

/// Owns the session's dark-mode flag.
///
/// Methods take `&self`; the provider can be shared behind an `Arc`.
pub struct ThemeProvider {
    state: Arc<Mutex<ThemeState>>,
    _ambient_listener: ListenerGuard,
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("ThemeProvider")
            .field("is_dark", &state.is_dark)
            .field("explicit", &state.explicit)
            .finish_non_exhaustive()
    }
}

impl ThemeProvider {
    /// Reads the starting mode.
    ///
    /// Order: persisted value, then the ambient preference, then light. A
    /// blank persisted value is unset; a failed read counts as light.
    pub fn initialize(store: &dyn PreferenceStore, ambient: &dyn AmbientSource) -> ThemeMode {
        Self::starting_mode(read_saved(store), ambient)
    }

    fn starting_mode(
        saved: anyhow::Result<Option<String>>,
        ambient: &dyn AmbientSource,
    ) -> ThemeMode {
        match saved {
            Ok(Some(value)) => ThemeMode::from_stored(&value),
            Ok(None) => ambient
                .prefers_dark()
                .map_or(ThemeMode::Light, ThemeMode::from_dark),
            Err(err) => {
                warn!("Failed to read theme preference, using light: {err:#}");
                ThemeMode::Light
            }
        }
    }

    /// Creates the provider and subscribes to ambient changes for its lifetime.
    pub fn new<S, M>(store: S, ambient: &dyn AmbientSource, marker: M) -> Self
    where
        S: PreferenceStore + 'static,
        M: PresentationMarker + 'static,
    {
        let saved = read_saved(&store);
        let explicit = matches!(saved, Ok(Some(_)));
        let mode = Self::starting_mode(saved, ambient);
        debug!(%mode, explicit, "theme initialized");

        let mut state = ThemeState {
            is_dark: mode.is_dark(),
            explicit,
            style: generate(mode.is_dark()),
            store: Box::new(store),
            marker: Box::new(marker),
        };
        state.marker.apply(state.is_dark);
        let state = Arc::new(Mutex::new(state));

        let weak = Arc::downgrade(&state);
        let listener = ambient.changes().subscribe(move |change: &AmbientChange| {
            if let Some(state) = weak.upgrade() {
                lock(&state).follow_ambient(change.prefers_dark);
            }
        });

        Self {
            state,
            _ambient_listener: listener,
        }
    }

    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark_mode())
    }

    /// Whether dark mode is active.
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        lock(&self.state).is_dark
    }

    /// Whether the user has chosen a mode (this session or persisted).
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        let state = lock(&self.state);
        state.explicit || state.has_stored_preference()
    }

    /// Flips the mode and persists it. Returns the new mode.
    pub fn toggle_dark_mode(&self) -> ThemeMode {
        let mut state = lock(&self.state);
        let is_dark = !state.is_dark;
        state.choose(is_dark);
        ThemeMode::from_dark(is_dark)
    }

    /// Sets the mode and persists it.
    pub fn set_dark_mode(&self, is_dark: bool) {
        lock(&self.state).choose(is_dark);
    }

    /// Sets the mode and persists it.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.set_dark_mode(mode.is_dark());
    }

    /// Forgets the user's choice and goes back to the ambient preference.
    pub fn reset_to_system(&self, ambient: &dyn AmbientSource) -> ThemeMode {
        let mut state = lock(&self.state);
        if let Err(err) = state.store.remove(THEME_STORAGE_KEY) {
            warn!("Failed to clear theme preference: {err:#}");
        }
        state.explicit = false;

        let mode = ambient
            .prefers_dark()
            .map_or(ThemeMode::Light, ThemeMode::from_dark);
        state.apply(mode.is_dark());
        debug!(%mode, "theme reset to system preference");
        mode
    }

    /// Persisted value, if any. Read failures and blank values count as unset.
    #[must_use]
    pub fn stored_preference(&self) -> Option<String> {
        read_saved(lock(&self.state).store.as_ref()).ok().flatten()
    }

    /// Snapshot of the flag and style table.
    #[must_use]
    pub fn context(&self) -> ThemeContext {
        let state = lock(&self.state);
        ThemeContext {
            is_dark_mode: state.is_dark,
            ui_config: state.style.clone(),
        }
    }
}
