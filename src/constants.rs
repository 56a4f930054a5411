//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Civic UI";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "civic-ui";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "CivicUi";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "CIVIC_UI_CONFIG_DIR";

/// Preference key holding the persisted theme mode.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class placed on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";
