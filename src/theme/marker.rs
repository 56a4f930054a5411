//! Document-level mode marker.

use crate::constants::DARK_CLASS;
use crate::dom::RootClassList;

/// Receives the mode whenever it changes, for styling outside the provider.
pub trait PresentationMarker: Send {
    /// Reflects the current mode.
    fn apply(&mut self, is_dark: bool);
}

impl PresentationMarker for RootClassList {
    fn apply(&mut self, is_dark: bool) {
        if is_dark {
            self.add(DARK_CLASS);
        } else {
            self.remove(DARK_CLASS);
        }
    }
}
