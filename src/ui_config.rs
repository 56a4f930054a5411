//! Class-string accessor over a [`StyleConfig`].
//!
//! [`UiConfig`] is what components read from. It combines style table entries
//! into the class strings a component needs. Caller-supplied extra classes are
//! always appended last.

use crate::style::{
    combine_classes, join_classes, status_tone_classes, ButtonSize, ButtonVariant, CardVariant,
    ColorRole, FontSize, InputState, ModalPart, Radius, Shadow, Spacing, StatusTone, StyleConfig,
    TextTone, Transition,
};

/// Borrowed view of the active style table.
#[derive(Debug, Clone, Copy)]
pub struct UiConfig<'a> {
    style: &'a StyleConfig,
    is_dark_mode: bool,
}

impl<'a> UiConfig<'a> {
    /// Accessor over `style`, generated for `is_dark_mode`.
    #[must_use]
    pub const fn new(style: &'a StyleConfig, is_dark_mode: bool) -> Self {
        Self {
            style,
            is_dark_mode,
        }
    }

    /// The underlying table.
    #[must_use]
    pub const fn style(&self) -> &'a StyleConfig {
        self.style
    }

    /// Whether the table is the dark one.
    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// Size shape, variant colors and the default transition, then `extra`.
    #[must_use]
    pub fn button_classes(
        &self,
        variant: ButtonVariant,
        size: ButtonSize,
        extra: Option<&str>,
    ) -> String {
        let base = join_classes([
            self.style.components.button.get(size),
            self.style.colors.button.get(variant),
            self.style.transitions.get(Transition::Default),
        ]);
        combine_classes(&base, extra)
    }

    /// Variant shape and card colors, then `extra`.
    #[must_use]
    pub fn card_classes(&self, variant: CardVariant, extra: Option<&str>) -> String {
        let base = join_classes([
            self.style.components.card.get(variant),
            self.style.colors.card,
        ]);
        combine_classes(&base, extra)
    }

    /// Text color and type size, then `extra`.
    #[must_use]
    pub fn text_classes(&self, tone: TextTone, size: FontSize, extra: Option<&str>) -> String {
        let base = join_classes([self.style.colors.text.get(tone), self.style.font.get(size)]);
        combine_classes(&base, extra)
    }

    /// Base input classes, the state's classes unless it is the default, then `extra`.
    #[must_use]
    pub fn input_classes(&self, state: InputState, extra: Option<&str>) -> String {
        let inputs = &self.style.components.input;
        let state_classes = match state {
            InputState::Default => "",
            other => inputs.get(other),
        };
        let base = join_classes([inputs.get(InputState::Default), state_classes]);
        combine_classes(&base, extra)
    }

    /// Padding for `size`.
    #[must_use]
    pub const fn spacing_classes(&self, size: Spacing) -> &'static str {
        self.style.spacing.get(size)
    }

    /// Corner radius for `size`.
    #[must_use]
    pub const fn border_radius_classes(&self, size: Radius) -> &'static str {
        self.style.border_radius.get(size)
    }

    /// Shadow for `size`.
    #[must_use]
    pub const fn shadow_classes(&self, size: Shadow) -> &'static str {
        self.style.shadow.get(size)
    }

    /// Transition preset.
    #[must_use]
    pub const fn transition_classes(&self, speed: Transition) -> &'static str {
        self.style.transitions.get(speed)
    }

    /// Semantic color classes.
    #[must_use]
    pub const fn color_classes(&self, role: ColorRole) -> &'static str {
        self.style.colors.get(role)
    }

    /// Modal overlay or content classes.
    #[must_use]
    pub const fn modal_classes(&self, part: ModalPart) -> &'static str {
        self.style.components.modal.get(part)
    }

    /// Pill classes for a status name in the current mode.
    ///
    /// Unknown names use the pending tone.
    #[must_use]
    pub fn status_classes(&self, status: &str) -> &'static str {
        status_tone_classes(StatusTone::from_name(status), self.is_dark_mode)
    }
}
