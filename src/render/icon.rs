//! Icon placeholders.
//!
//! Icons render as empty `<i data-lucide="...">` elements that a client-side
//! icon script swaps for SVG.

use serde::{Serialize, Serializer};

use super::html::Element;

/// Icons used by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Icon {
    BarChart,
    Bell,
    ChevronDown,
    Database,
    FileText,
    Globe,
    Home,
    LogOut,
    MapPin,
    Menu,
    Moon,
    Shield,
    Sun,
    TrendingUp,
    User,
    Users,
    Wrench,
    Close,
}

impl Icon {
    /// Lucide icon name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BarChart => "bar-chart-3",
            Self::Bell => "bell",
            Self::ChevronDown => "chevron-down",
            Self::Database => "database",
            Self::FileText => "file-text",
            Self::Globe => "globe",
            Self::Home => "home",
            Self::LogOut => "log-out",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Moon => "moon",
            Self::Shield => "shield",
            Self::Sun => "sun",
            Self::TrendingUp => "trending-up",
            Self::User => "user",
            Self::Users => "users",
            Self::Wrench => "wrench",
            Self::Close => "x",
        }
    }

    /// Placeholder element with `classes`.
    #[must_use]
    pub fn element(self, classes: &str) -> Element {
        Element::new("i")
            .attr("data-lucide", self.name())
            .class(classes)
            .attr("aria-hidden", "true")
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_element() {
        assert_eq!(
            Icon::Close.element("h-5 w-5").to_string(),
            r#"<i data-lucide="x" class="h-5 w-5" aria-hidden="true"></i>"#
        );
    }
}
