//! Mobile menu open/closed state.
//!
//! While the menu is open it holds two document subscriptions: Escape closes
//! it, and so does a click whose path does not go through the navigation
//! element. Both are released when the menu closes, by any route, and when
//! the menu is dropped.

use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

use crate::dom::{Document, KeyboardEvent, NodeId, PointerEvent};
use crate::events::{lock, ListenerGuard};

#[derive(Default)]
struct MenuState {
    open: bool,
    listeners: Vec<ListenerGuard>,
}

/// Closes the menu. Returns whether it was open.
fn close_state(state: &Mutex<MenuState>, reason: &str) -> bool {
    let listeners = {
        let mut state = lock(state);
        if !state.open {
            return false;
        }
        state.open = false;
        std::mem::take(&mut state.listeners)
    };
    // guards deregister outside the menu lock
    drop(listeners);
    debug!(reason, "mobile menu closed");
    true
}

fn close_weak(state: &Weak<Mutex<MenuState>>, reason: &str) {
    if let Some(state) = state.upgrade() {
        close_state(&state, reason);
    }
}

/// The collapsible menu of the navigation bar.
pub struct MobileMenu {
    nav: NodeId,
    document: Document,
    state: Arc<Mutex<MenuState>>,
}

impl std::fmt::Debug for MobileMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileMenu")
            .field("nav", &self.nav)
            .field("open", &self.is_open())
            .finish()
    }
}

impl MobileMenu {
    /// A closed menu inside the navigation element `nav`.
    pub fn new(document: &Document, nav: NodeId) -> Self {
        Self {
            nav,
            document: document.clone(),
            state: Arc::new(Mutex::new(MenuState::default())),
        }
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        lock(&self.state).open
    }

    /// Opens the menu and starts listening for dismissal.
    pub fn open(&self) {
        let mut state = lock(&self.state);
        if state.open {
            return;
        }
        state.open = true;

        let weak = Arc::downgrade(&self.state);
        let on_escape = {
            let weak = weak.clone();
            self.document.keydown.subscribe(move |event: &KeyboardEvent| {
                if event.is_escape() {
                    close_weak(&weak, "escape");
                }
            })
        };
        let nav = self.nav;
        let on_click = self.document.click.subscribe(move |event: &PointerEvent| {
            if !event.is_within(nav) {
                close_weak(&weak, "outside click");
            }
        });
        state.listeners = vec![on_escape, on_click];
        debug!("mobile menu opened");
    }

    /// Closes the menu. Returns whether it was open.
    pub fn close(&self) -> bool {
        close_state(&self.state, "closed")
    }

    /// Flips the menu. Returns the new open state.
    pub fn toggle(&self) -> bool {
        if self.close() {
            false
        } else {
            self.open();
            true
        }
    }
}

impl Drop for MobileMenu {
    fn drop(&mut self) {
        close_state(&self.state, "teardown");
    }
}
