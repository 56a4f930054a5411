//! Minimal document model for rendered pages.
//!
//! Only what the theme provider and the navigation bar observe is modelled:
//! the root element's class list, and keyboard and pointer events with the
//! path of nodes a pointer event passed through.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::events::{lock, EventTarget};

/// Identifier of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates a process-unique id.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Value used for the `data-node` attribute in markup.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A key press delivered to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Key name as reported by the host (`"Escape"`, `"a"`, ...)
    pub key: String,
}

impl KeyboardEvent {
    /// Creates an event for the named key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Whether this is the Escape key.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// A click delivered to the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointerEvent {
    /// Target first, then each ancestor up to the root
    pub path: Vec<NodeId>,
}

impl PointerEvent {
    /// Creates an event from the target's ancestry (target first).
    #[must_use]
    pub fn new(path: Vec<NodeId>) -> Self {
        Self { path }
    }

    /// Whether the target is `node` or lies inside it.
    #[must_use]
    pub fn is_within(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }
}

/// The document root's class list.
///
/// Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct RootClassList {
    classes: Arc<Mutex<BTreeSet<String>>>,
}

impl RootClassList {
    /// Creates an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn add(&self, class: &str) {
        lock(&self.classes).insert(class.to_string());
    }

    /// Removes a class.
    pub fn remove(&self, class: &str) {
        lock(&self.classes).remove(class);
    }

    /// Whether the class is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        lock(&self.classes).contains(class)
    }

    /// Space-separated classes, sorted.
    #[must_use]
    pub fn class_attr(&self) -> String {
        lock(&self.classes)
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Document-level event targets plus the root class list.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// `keydown` listeners
    pub keydown: EventTarget<KeyboardEvent>,
    /// `click` listeners
    pub click: EventTarget<PointerEvent>,
    /// Root element classes
    pub root: RootClassList,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a key press.
    pub fn press_key(&self, key: &str) -> usize {
        self.keydown.dispatch(&KeyboardEvent::new(key))
    }

    /// Dispatches a click whose target ancestry is `path`.
    pub fn click(&self, path: Vec<NodeId>) -> usize {
        self.click.dispatch(&PointerEvent::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        let a = NodeId::next();
        let b = NodeId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pointer_event_containment() {
        let nav = NodeId::next();
        let button = NodeId::next();
        let body = NodeId::next();

        assert!(PointerEvent::new(vec![button, nav, body]).is_within(nav));
        assert!(PointerEvent::new(vec![nav, body]).is_within(nav));
        assert!(!PointerEvent::new(vec![body]).is_within(nav));
        assert!(!PointerEvent::default().is_within(nav));
    }

    #[test]
    fn test_root_class_list_is_shared() {
        let root = RootClassList::new();
        let view = root.clone();
        root.add("dark");
        root.add("antialiased");
        assert!(view.contains("dark"));
        assert_eq!(view.class_attr(), "antialiased dark");
        view.remove("dark");
        assert!(!root.contains("dark"));
    }

    #[test]
    fn test_escape_detection() {
        assert!(KeyboardEvent::new("Escape").is_escape());
        assert!(!KeyboardEvent::new("Esc").is_escape());
    }
}
