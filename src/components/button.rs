//! Themed button.

use crate::render::{Element, Icon};
use crate::style::{ButtonSize, ButtonVariant};
use crate::ui_config::UiConfig;

/// A `<button>` styled from the active theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    class: Option<String>,
    icon: Option<Icon>,
    aria_label: Option<String>,
    button_type: Option<&'static str>,
    disabled: bool,
}

impl Button {
    /// Primary, default-sized button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Visual variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Size preset.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Extra classes, applied after the theme's.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Leading icon.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Accessible label, for icon-only buttons.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// `type` attribute (`button`, `submit`, `reset`).
    pub fn button_type(mut self, button_type: &'static str) -> Self {
        self.button_type = Some(button_type);
        self
    }

    /// Renders the `disabled` attribute when set.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builds the markup.
    pub fn render(&self, ui: &UiConfig<'_>) -> Element {
        let classes = ui.button_classes(self.variant, self.size, self.class.as_deref());
        let mut button = Element::new("button")
            .class(classes)
            .attr_opt("type", self.button_type)
            .attr_opt("aria-label", self.aria_label.as_deref())
            .flag("disabled", self.disabled);

        if let Some(icon) = self.icon {
            button = button.child(icon.element("h-4 w-4"));
        }
        if !self.label.is_empty() {
            button = button.text(self.label.as_str());
        }
        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::generate;

    #[test]
    fn test_button_uses_theme_classes() {
        let style = generate(false);
        let ui = UiConfig::new(&style, false);
        let button = Button::new("Save")
            .variant(ButtonVariant::Destructive)
            .size(ButtonSize::Large)
            .class("w-full")
            .render(&ui);

        assert_eq!(
            button.get_attr("class").map(str::to_string),
            Some(ui.button_classes(ButtonVariant::Destructive, ButtonSize::Large, Some("w-full")))
        );
        assert_eq!(button.text_content(), "Save");
    }

    #[test]
    fn test_button_attributes() {
        let style = generate(true);
        let ui = UiConfig::new(&style, true);
        let html = Button::new("")
            .icon(Icon::Menu)
            .aria_label("Open menu")
            .button_type("button")
            .disabled(true)
            .render(&ui)
            .to_string();

        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(html.contains(" disabled"));
        assert!(html.contains(r#"data-lucide="menu""#));
    }
}
