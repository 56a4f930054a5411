//! The host's dark-mode preference.
//!
//! An [`AmbientSource`] answers "does the OS prefer dark?" and publishes an
//! [`AmbientChange`] whenever that answer flips.

use std::sync::Mutex;

use crate::events::{lock, EventTarget};

/// The ambient preference flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientChange {
    /// New value of the preference
    pub prefers_dark: bool,
}

/// Read-only dark-mode preference reported by the host environment.
pub trait AmbientSource {
    /// Current preference, `None` when the host cannot tell.
    fn prefers_dark(&self) -> Option<bool>;

    /// Change notifications.
    fn changes(&self) -> &EventTarget<AmbientChange>;
}

/// The operating system's preference, detected with `dark-light`.
///
/// Detection is a point-in-time query; call [`SystemAmbient::poll`] from the
/// host's event loop to turn it into change notifications.
#[derive(Debug, Default)]
pub struct SystemAmbient {
    last: Mutex<Option<bool>>,
    changes: EventTarget<AmbientChange>,
}

impl SystemAmbient {
    /// Creates a source and takes an initial reading.
    #[must_use]
    pub fn new() -> Self {
        let source = Self::default();
        *lock(&source.last) = Self::detect();
        source
    }

    fn detect() -> Option<bool> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(true),
            Ok(dark_light::Mode::Light) => Some(false),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(err) => {
                tracing::debug!("OS theme detection failed: {err}");
                None
            }
        }
    }

    /// Re-reads the OS preference and notifies listeners if it changed.
    ///
    /// Returns the change, if any.
    pub fn poll(&self) -> Option<AmbientChange> {
        let current = Self::detect();
        let change = {
            let mut last = lock(&self.last);
            if *last == current {
                return None;
            }
            *last = current;
            current.map(|prefers_dark| AmbientChange { prefers_dark })
        };

        if let Some(change) = change {
            tracing::debug!(prefers_dark = change.prefers_dark, "OS theme changed");
            self.changes.dispatch(&change);
        }
        change
    }
}

impl AmbientSource for SystemAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        *lock(&self.last)
    }

    fn changes(&self) -> &EventTarget<AmbientChange> {
        &self.changes
    }
}

/// A preference set by the host directly.
#[derive(Debug, Default)]
pub struct ManualAmbient {
    current: Mutex<Option<bool>>,
    changes: EventTarget<AmbientChange>,
}

impl ManualAmbient {
    /// Creates a source reporting `prefers_dark`.
    #[must_use]
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            current: Mutex::new(prefers_dark),
            changes: EventTarget::new(),
        }
    }

    /// Updates the preference, notifying listeners when a known value changes.
    pub fn set(&self, prefers_dark: Option<bool>) {
        let changed = {
            let mut current = lock(&self.current);
            let changed = *current != prefers_dark;
            *current = prefers_dark;
            changed
        };

        if let (true, Some(prefers_dark)) = (changed, prefers_dark) {
            self.changes.dispatch(&AmbientChange { prefers_dark });
        }
    }
}

impl AmbientSource for ManualAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        *lock(&self.current)
    }

    fn changes(&self) -> &EventTarget<AmbientChange> {
        &self.changes
    }
}
