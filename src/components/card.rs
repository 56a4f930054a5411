//! Themed card and its sections.
//!
//! Sections are plain containers; each takes extra classes that are applied
//! after the theme's.

use crate::render::{Element, Node};
use crate::style::{join_classes, CardVariant, FontSize, Spacing, TextTone};
use crate::ui_config::UiConfig;

/// Defines a card section: a container with children and caller classes.
macro_rules! card_section {
    ($(#[$meta:meta])* $name:ident, $tag:literal, |$ui:ident, $extra:ident| $classes:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            class: Option<String>,
            children: Vec<Node>,
        }

        impl $name {
            /// Empty section.
            pub fn new() -> Self {
                Self::default()
            }

            /// Extra classes, applied last.
            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.class = Some(class.into());
                self
            }

            /// Appends a child node.
            pub fn child(mut self, child: impl Into<Node>) -> Self {
                self.children.push(child.into());
                self
            }

            /// Appends a text node.
            pub fn text(self, text: impl Into<String>) -> Self {
                self.child(Node::Text(text.into()))
            }

            /// Renders the section with the active theme.
            pub fn render(&self, $ui: &UiConfig<'_>) -> Element {
                let $extra = self.class.as_deref().unwrap_or("");
                Element::new($tag)
                    .class($classes)
                    .children(self.children.iter().cloned())
            }
        }
    };
}

card_section!(
    /// Title and description block.
    CardHeader, "div", |ui, extra| join_classes([
        "flex flex-col space-y-1.5",
        ui.spacing_classes(Spacing::Lg),
        extra,
    ])
);

card_section!(
    /// Card heading.
    CardTitle, "h3", |ui, extra| ui.text_classes(TextTone::Primary, FontSize::Heading, Some(extra))
);

card_section!(
    /// Muted subtitle under the title.
    CardDescription, "p", |ui, extra| ui.text_classes(TextTone::Muted, FontSize::Sm, Some(extra))
);

card_section!(
    /// Card body.
    CardContent, "div", |ui, extra| join_classes([ui.spacing_classes(Spacing::Lg), "pt-0", extra])
);

card_section!(
    /// Action row at the bottom.
    CardFooter, "div", |ui, extra| join_classes([
        "flex items-center",
        ui.spacing_classes(Spacing::Lg),
        "pt-0",
        extra,
    ])
);

/// A card container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    variant: CardVariant,
    class: Option<String>,
    children: Vec<Node>,
}

impl Card {
    /// Empty card of the given variant.
    pub fn new(variant: CardVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Extra classes, applied last.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Renders the card with the active theme.
    pub fn render(&self, ui: &UiConfig<'_>) -> Element {
        Element::new("div")
            .class(ui.card_classes(self.variant, self.class.as_deref()))
            .children(self.children.iter().cloned())
    }
}

/// Header with a title and description, then a content section.
pub fn titled_card(
    ui: &UiConfig<'_>,
    variant: CardVariant,
    title: &str,
    description: &str,
    content: impl Into<Node>,
) -> Element {
    Card::new(variant)
        .child(
            CardHeader::new()
                .child(CardTitle::new().text(title).render(ui))
                .child(CardDescription::new().text(description).render(ui))
                .render(ui),
        )
        .child(CardContent::new().child(content).render(ui))
        .render(ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::generate;

    #[test]
    fn test_card_variant_classes() {
        let style = generate(false);
        let ui = UiConfig::new(&style, false);
        let card = Card::new(CardVariant::Bordered).class("mt-4").render(&ui);
        let classes = card.get_attr("class").unwrap();
        assert!(classes.starts_with(style.components.card.bordered));
        assert!(classes.contains(style.colors.card));
        assert!(classes.ends_with("mt-4"));
    }

    #[test]
    fn test_sections_use_spacing_and_text_classes() {
        let style = generate(true);
        let ui = UiConfig::new(&style, true);

        let header = CardHeader::new().render(&ui);
        assert_eq!(
            header.get_attr("class"),
            Some(format!("flex flex-col space-y-1.5 {}", style.spacing.lg).as_str())
        );

        let content = CardContent::new().class("grid").render(&ui);
        assert_eq!(
            content.get_attr("class"),
            Some(format!("{} pt-0 grid", style.spacing.lg).as_str())
        );

        let title = CardTitle::new().text("Reports").render(&ui);
        assert_eq!(title.tag(), "h3");
        assert_eq!(
            title.get_attr("class").map(str::to_string),
            Some(ui.text_classes(TextTone::Primary, FontSize::Heading, None))
        );
    }

    #[test]
    fn test_titled_card_layout() {
        let style = generate(false);
        let ui = UiConfig::new(&style, false);
        let card = titled_card(&ui, CardVariant::Elevated, "Title", "Described", "Body");
        assert_eq!(card.text_content(), "TitleDescribedBody");
    }
}
