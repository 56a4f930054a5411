//! Theme demonstration page and the full HTML document.

use crate::dom::RootClassList;
use crate::i18n::Language;
use crate::render::{Element, Node};
use crate::style::{
    join_classes, ButtonSize, ButtonVariant, CardVariant, ColorRole, FontSize, Radius, Spacing,
    TextTone,
};
use crate::ui_config::UiConfig;

use super::card::{titled_card, Card, CardContent, CardDescription, CardHeader, CardTitle};
use super::Button;

fn text(ui: &UiConfig<'_>, tone: TextTone, size: FontSize, content: &str) -> Element {
    Element::new("div")
        .class(ui.text_classes(tone, size, None))
        .text(content)
}

fn pill(ui: &UiConfig<'_>, role: ColorRole, label: &str) -> Element {
    Element::new("span")
        .class(join_classes([
            ui.border_radius_classes(Radius::Full),
            ui.spacing_classes(Spacing::Sm),
            ui.color_classes(role),
            "text-xs font-medium",
        ]))
        .text(label)
}

fn button_section(ui: &UiConfig<'_>) -> Element {
    let variants = [
        (ButtonVariant::Primary, "Primary Button"),
        (ButtonVariant::Secondary, "Secondary Button"),
        (ButtonVariant::Outline, "Outline Button"),
        (ButtonVariant::Ghost, "Ghost Button"),
        (ButtonVariant::Destructive, "Destructive Button"),
    ];
    let sizes = [
        (ButtonSize::Small, "Small"),
        (ButtonSize::Default, "Default"),
        (ButtonSize::Large, "Large"),
    ];

    let content = Element::new("div")
        .child(
            Element::new("div")
                .class("flex flex-wrap gap-4")
                .children(
                    variants
                        .iter()
                        .map(|(variant, label)| Button::new(*label).variant(*variant).render(ui)),
                ),
        )
        .child(
            Element::new("div")
                .class("flex flex-wrap gap-4 mt-4")
                .children(
                    sizes
                        .iter()
                        .map(|(size, label)| Button::new(*label).size(*size).render(ui)),
                ),
        );

    titled_card(
        ui,
        CardVariant::Default,
        "Button Variants",
        "All buttons automatically adapt to the current theme",
        content,
    )
}

fn card_section(ui: &UiConfig<'_>) -> Element {
    let cards = [
        (
            CardVariant::Default,
            "Default Card",
            "Standard card with default styling",
            "This card uses the default variant and adapts to the current theme automatically.",
        ),
        (
            CardVariant::Elevated,
            "Elevated Card",
            "Card with enhanced shadow",
            "This card has an elevated appearance with a larger shadow.",
        ),
        (
            CardVariant::Bordered,
            "Bordered Card",
            "Card with emphasized border",
            "This card has a thicker border for emphasis.",
        ),
    ];

    Element::new("div")
        .class("grid grid-cols-1 md:grid-cols-3 gap-4")
        .children(cards.iter().map(|(variant, title, description, body)| {
            titled_card(
                ui,
                *variant,
                title,
                description,
                Element::new("p")
                    .class(ui.text_classes(TextTone::Primary, FontSize::Sm, None))
                    .text(*body),
            )
        }))
}

fn typography_section(ui: &UiConfig<'_>) -> Element {
    let samples = [
        (TextTone::Primary, FontSize::Heading, "Heading Text (Primary)"),
        (TextTone::Primary, FontSize::Lg, "Large Text (Primary)"),
        (TextTone::Primary, FontSize::Base, "Base Text (Primary)"),
        (TextTone::Secondary, FontSize::Base, "Base Text (Secondary)"),
        (TextTone::Muted, FontSize::Sm, "Small Muted Text"),
    ];

    titled_card(
        ui,
        CardVariant::Default,
        "Typography Examples",
        "Different text styles that adapt to the theme",
        Element::new("div")
            .class("space-y-2")
            .children(samples.iter().map(|(tone, size, label)| text(ui, *tone, *size, label))),
    )
}

fn manual_section(ui: &UiConfig<'_>) -> Element {
    let custom_button = Element::new("button")
        .attr("type", "button")
        .class(ui.button_classes(ButtonVariant::Primary, ButtonSize::Default, Some("w-full")))
        .text("Custom Button with Manual Classes");
    let custom_card = Element::new("div")
        .class(ui.card_classes(CardVariant::Elevated, Some("p-4")))
        .child(text(
            ui,
            TextTone::Primary,
            FontSize::Base,
            "Custom card content using manual configuration",
        ));
    let pills = Element::new("div")
        .attr("data-role", "status-pills")
        .class("flex flex-wrap gap-2")
        .child(pill(ui, ColorRole::Success, "Success Status"))
        .child(pill(ui, ColorRole::Warning, "Warning Status"))
        .child(pill(ui, ColorRole::Danger, "Error Status"));
    let tones = Element::new("div")
        .attr("data-role", "status-tones")
        .class("flex flex-wrap gap-2")
        .children(
            ["registered", "assigned", "progress", "resolved", "closed", "reopened"]
                .iter()
                .map(|status| {
                    Element::new("span")
                        .attr("data-status", *status)
                        .class(join_classes([
                            ui.border_radius_classes(Radius::Full),
                            "px-2 py-1 text-xs font-medium",
                            ui.status_classes(status),
                        ]))
                        .text(*status)
                }),
        );

    Card::new(CardVariant::Default)
        .child(
            CardHeader::new()
                .child(CardTitle::new().text("Manual Configuration Usage").render(ui))
                .child(
                    CardDescription::new()
                        .text("Examples of using the UI config directly for custom components")
                        .render(ui),
                )
                .render(ui),
        )
        .child(
            CardContent::new()
                .child(
                    Element::new("div")
                        .class("space-y-4")
                        .children([custom_button, custom_card, pills, tones]),
                )
                .render(ui),
        )
        .render(ui)
}

/// Demonstration of every themed element.
#[must_use]
pub fn showcase(ui: &UiConfig<'_>) -> Element {
    let mode = if ui.is_dark_mode() { "Dark" } else { "Light" };
    Element::new("div")
        .attr("data-role", "showcase")
        .class(join_classes(["space-y-6", ui.spacing_classes(Spacing::Lg)]))
        .child(text(
            ui,
            TextTone::Primary,
            FontSize::Heading,
            "Theme Configuration Example",
        ))
        .child(text(
            ui,
            TextTone::Secondary,
            FontSize::Base,
            &format!("Current mode: {mode}"),
        ))
        .child(button_section(ui))
        .child(card_section(ui))
        .child(typography_section(ui))
        .child(manual_section(ui))
}

/// Complete HTML document around `navigation` and `content`.
///
/// The root element takes its classes from `root`, so a dark theme shows up
/// as `<html class="dark">`.
#[must_use]
pub fn page(
    ui: &UiConfig<'_>,
    root: &RootClassList,
    language: Language,
    title: &str,
    navigation: Element,
    content: impl Into<Node>,
) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title));
    let body = Element::new("body")
        .class(join_classes([
            "min-h-screen",
            ui.color_classes(ColorRole::Background),
        ]))
        .child(navigation)
        .child(
            Element::new("main")
                .class("pt-20 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8")
                .child(content),
        );
    let html = Element::new("html")
        .attr("lang", language.code())
        .class(root.class_attr())
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::generate;

    #[test]
    fn test_showcase_lists_every_variant() {
        let style = generate(false);
        let ui = UiConfig::new(&style, false);
        let html = showcase(&ui).to_string();

        for label in ["Primary Button", "Destructive Button", "Elevated Card", "Small Muted Text"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("Current mode: Light"));
        assert!(html.contains(style.components.card.bordered));
    }

    #[test]
    fn test_showcase_status_pills_follow_mode() {
        let style = generate(true);
        let ui = UiConfig::new(&style, true);
        let tree = showcase(&ui);

        let resolved = tree.find_by_attr("data-status", "resolved").unwrap();
        assert!(resolved
            .get_attr("class")
            .unwrap()
            .ends_with(ui.status_classes("resolved")));
        let pills = tree.find_by_attr("data-role", "status-pills").unwrap();
        assert!(pills.to_string().contains(style.colors.success));
    }

    #[test]
    fn test_page_carries_root_classes() {
        let style = generate(true);
        let ui = UiConfig::new(&style, true);
        let root = RootClassList::new();
        root.add("dark");

        let html = page(&ui, &root, Language::En, "Portal", Element::new("nav"), "Hello");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains(style.colors.background));
        assert!(html.contains("<main"));
        assert!(html.contains("Hello"));
    }
}
