//! Style table for light and dark modes.
//!
//! [`generate`] maps the dark-mode flag to a complete [`StyleConfig`]: every
//! semantic key resolves to a string of utility classes. The table is pure
//! data; the same flag always yields an equal value, and both modes carry the
//! same set of keys.

pub mod status;
pub mod tokens;

use serde::Serialize;

pub use status::{status_tone_classes, StatusTone};
pub use tokens::{
    ButtonSize, ButtonVariant, CardVariant, ColorRole, FontSize, InputState, ModalPart, Radius,
    Shadow, Spacing, TextTone, Transition,
};

/// Picks the dark or light value.
const fn pick(is_dark: bool, dark: &'static str, light: &'static str) -> &'static str {
    if is_dark {
        dark
    } else {
        light
    }
}

/// Complete set of style classes for one theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Semantic colors, text tones and button colors
    pub colors: ColorClasses,
    /// Padding scale
    pub spacing: SpacingClasses,
    /// Corner radius scale
    pub border_radius: RadiusClasses,
    /// Shadow scale
    pub shadow: ShadowClasses,
    /// Typographic scale
    pub font: FontClasses,
    /// Transition presets
    pub transitions: TransitionClasses,
    /// Per-component shapes
    pub components: ComponentClasses,
}

/// Classes under `colors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorClasses {
    /// Primary action surface
    pub primary: &'static str,
    /// Secondary action surface
    pub secondary: &'static str,
    /// Danger surface
    pub danger: &'static str,
    /// Success surface
    pub success: &'static str,
    /// Warning surface
    pub warning: &'static str,
    /// Informational surface
    pub info: &'static str,
    /// Page background
    pub background: &'static str,
    /// Card and panel surface
    pub card: &'static str,
    /// Border color
    pub border: &'static str,
    /// Text tones
    pub text: TextColorClasses,
    /// Button colors per variant
    pub button: ButtonColorClasses,
}

impl ColorClasses {
    /// Looks up a flat color role.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Danger => self.danger,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Info => self.info,
            ColorRole::Background => self.background,
            ColorRole::Card => self.card,
            ColorRole::Border => self.border,
        }
    }
}

/// Classes under `colors.text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextColorClasses {
    /// Main body text
    pub primary: &'static str,
    /// Labels and supporting text
    pub secondary: &'static str,
    /// Help text and disabled content
    pub muted: &'static str,
}

impl TextColorClasses {
    /// Looks up a text tone.
    #[must_use]
    pub const fn get(&self, tone: TextTone) -> &'static str {
        match tone {
            TextTone::Primary => self.primary,
            TextTone::Secondary => self.secondary,
            TextTone::Muted => self.muted,
        }
    }
}

/// Classes under `colors.button`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonColorClasses {
    /// Filled primary button
    pub primary: &'static str,
    /// Filled neutral button
    pub secondary: &'static str,
    /// Transparent button with border
    pub outline: &'static str,
    /// Transparent button without border
    pub ghost: &'static str,
    /// Destructive action button
    pub destructive: &'static str,
}

impl ButtonColorClasses {
    /// Looks up a button variant.
    #[must_use]
    pub const fn get(&self, variant: ButtonVariant) -> &'static str {
        match variant {
            ButtonVariant::Primary => self.primary,
            ButtonVariant::Secondary => self.secondary,
            ButtonVariant::Outline => self.outline,
            ButtonVariant::Ghost => self.ghost,
            ButtonVariant::Destructive => self.destructive,
        }
    }
}

/// Classes under `spacing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct SpacingClasses {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

impl SpacingClasses {
    /// Looks up a padding size.
    #[must_use]
    pub const fn get(&self, size: Spacing) -> &'static str {
        match size {
            Spacing::Xs => self.xs,
            Spacing::Sm => self.sm,
            Spacing::Md => self.md,
            Spacing::Lg => self.lg,
            Spacing::Xl => self.xl,
        }
    }
}

/// Classes under `borderRadius`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct RadiusClasses {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub full: &'static str,
}

impl RadiusClasses {
    /// Looks up a corner radius.
    #[must_use]
    pub const fn get(&self, size: Radius) -> &'static str {
        match size {
            Radius::Sm => self.sm,
            Radius::Md => self.md,
            Radius::Lg => self.lg,
            Radius::Xl => self.xl,
            Radius::Full => self.full,
        }
    }
}

/// Classes under `shadow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct ShadowClasses {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

impl ShadowClasses {
    /// Looks up a shadow size.
    #[must_use]
    pub const fn get(&self, size: Shadow) -> &'static str {
        match size {
            Shadow::Sm => self.sm,
            Shadow::Md => self.md,
            Shadow::Lg => self.lg,
            Shadow::Xl => self.xl,
        }
    }
}

/// Classes under `font`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct FontClasses {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xxl: &'static str,
    pub heading: &'static str,
}

impl FontClasses {
    /// Looks up a font size.
    #[must_use]
    pub const fn get(&self, size: FontSize) -> &'static str {
        match size {
            FontSize::Xs => self.xs,
            FontSize::Sm => self.sm,
            FontSize::Base => self.base,
            FontSize::Lg => self.lg,
            FontSize::Xl => self.xl,
            FontSize::Xxl => self.xxl,
            FontSize::Heading => self.heading,
        }
    }
}

/// Classes under `transitions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct TransitionClasses {
    pub default: &'static str,
    pub fast: &'static str,
    pub slow: &'static str,
}

impl TransitionClasses {
    /// Looks up a transition speed.
    #[must_use]
    pub const fn get(&self, speed: Transition) -> &'static str {
        match speed {
            Transition::Default => self.default,
            Transition::Fast => self.fast,
            Transition::Slow => self.slow,
        }
    }
}

/// Classes under `components`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentClasses {
    /// Button shapes per size
    pub button: ButtonSizeClasses,
    /// Card shapes per variant
    pub card: CardClasses,
    /// Input base and state classes
    pub input: InputClasses,
    /// Modal overlay and content
    pub modal: ModalClasses,
}

/// Classes under `components.button`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct ButtonSizeClasses {
    pub default: &'static str,
    pub small: &'static str,
    pub large: &'static str,
    pub icon: &'static str,
}

impl ButtonSizeClasses {
    /// Looks up a button size.
    #[must_use]
    pub const fn get(&self, size: ButtonSize) -> &'static str {
        match size {
            ButtonSize::Default => self.default,
            ButtonSize::Small => self.small,
            ButtonSize::Large => self.large,
            ButtonSize::Icon => self.icon,
        }
    }
}

/// Classes under `components.card`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct CardClasses {
    pub default: &'static str,
    pub elevated: &'static str,
    pub bordered: &'static str,
}

impl CardClasses {
    /// Looks up a card variant.
    #[must_use]
    pub const fn get(&self, variant: CardVariant) -> &'static str {
        match variant {
            CardVariant::Default => self.default,
            CardVariant::Elevated => self.elevated,
            CardVariant::Bordered => self.bordered,
        }
    }
}

/// Classes under `components.input`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct InputClasses {
    pub default: &'static str,
    pub error: &'static str,
    pub focus: &'static str,
}

impl InputClasses {
    /// Looks up an input state.
    #[must_use]
    pub const fn get(&self, state: InputState) -> &'static str {
        match state {
            InputState::Default => self.default,
            InputState::Error => self.error,
            InputState::Focus => self.focus,
        }
    }
}

/// Classes under `components.modal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct ModalClasses {
    pub overlay: &'static str,
    pub content: &'static str,
}

impl ModalClasses {
    /// Looks up a modal part.
    #[must_use]
    pub const fn get(&self, part: ModalPart) -> &'static str {
        match part {
            ModalPart::Overlay => self.overlay,
            ModalPart::Content => self.content,
        }
    }
}

/// Builds the style table for the given mode.
#[must_use]
pub const fn generate(is_dark: bool) -> StyleConfig {
    let d = is_dark;
    StyleConfig {
        colors: ColorClasses {
            primary: pick(
                d,
                "bg-blue-600 hover:bg-blue-700 text-white border-blue-600",
                "bg-blue-600 hover:bg-blue-700 text-white border-blue-600",
            ),
            secondary: pick(
                d,
                "bg-gray-700 hover:bg-gray-600 text-gray-100 border-gray-600",
                "bg-gray-100 hover:bg-gray-200 text-gray-800 border-gray-300",
            ),
            danger: pick(
                d,
                "bg-red-700 hover:bg-red-800 text-white border-red-700",
                "bg-red-600 hover:bg-red-700 text-white border-red-600",
            ),
            success: pick(
                d,
                "bg-green-700 hover:bg-green-800 text-white border-green-700",
                "bg-green-600 hover:bg-green-700 text-white border-green-600",
            ),
            warning: pick(
                d,
                "bg-yellow-600 hover:bg-yellow-700 text-white border-yellow-600",
                "bg-yellow-500 hover:bg-yellow-600 text-white border-yellow-500",
            ),
            info: pick(
                d,
                "bg-cyan-700 hover:bg-cyan-800 text-white border-cyan-700",
                "bg-cyan-600 hover:bg-cyan-700 text-white border-cyan-600",
            ),
            background: pick(d, "bg-gray-900 text-white", "bg-white text-gray-900"),
            card: pick(
                d,
                "bg-gray-800 text-gray-100 border-gray-700",
                "bg-white text-gray-900 border-gray-200",
            ),
            border: pick(d, "border-gray-700", "border-gray-200"),
            text: TextColorClasses {
                primary: pick(d, "text-white", "text-gray-900"),
                secondary: pick(d, "text-gray-300", "text-gray-600"),
                muted: pick(d, "text-gray-400", "text-gray-500"),
            },
            button: ButtonColorClasses {
                primary: pick(
                    d,
                    "bg-blue-600 hover:bg-blue-700 text-white border-blue-600",
                    "bg-blue-600 hover:bg-blue-700 text-white border-blue-600",
                ),
                secondary: pick(
                    d,
                    "bg-gray-700 hover:bg-gray-600 text-gray-100 border-gray-600",
                    "bg-gray-100 hover:bg-gray-200 text-gray-800 border-gray-300",
                ),
                outline: pick(
                    d,
                    "bg-transparent hover:bg-gray-800 text-gray-300 border-gray-600 hover:text-white",
                    "bg-transparent hover:bg-gray-50 text-gray-700 border-gray-300 hover:text-gray-900",
                ),
                ghost: pick(
                    d,
                    "bg-transparent hover:bg-gray-800 text-gray-300 hover:text-white",
                    "bg-transparent hover:bg-gray-100 text-gray-700 hover:text-gray-900",
                ),
                destructive: pick(
                    d,
                    "bg-red-700 hover:bg-red-800 text-white border-red-700",
                    "bg-red-600 hover:bg-red-700 text-white border-red-600",
                ),
            },
        },
        spacing: SpacingClasses {
            xs: "p-1",
            sm: "p-2",
            md: "p-4",
            lg: "p-6",
            xl: "p-8",
        },
        border_radius: RadiusClasses {
            sm: "rounded-sm",
            md: "rounded-md",
            lg: "rounded-lg",
            xl: "rounded-xl",
            full: "rounded-full",
        },
        shadow: ShadowClasses {
            sm: "shadow-sm",
            md: "shadow-md",
            lg: "shadow-lg",
            xl: "shadow-xl",
        },
        font: FontClasses {
            xs: "text-xs",
            sm: "text-sm",
            base: "text-base",
            lg: "text-lg",
            xl: "text-xl",
            xxl: "text-2xl",
            heading: "text-xl font-semibold",
        },
        transitions: TransitionClasses {
            default: "transition duration-200 ease-in-out",
            fast: "transition duration-150 ease-in-out",
            slow: "transition duration-300 ease-in-out",
        },
        components: ComponentClasses {
            button: ButtonSizeClasses {
                default: "h-10 px-4 py-2 rounded-md font-medium",
                small: "h-8 px-3 py-1 rounded-md text-sm font-medium",
                large: "h-12 px-6 py-3 rounded-lg text-lg font-medium",
                icon: "h-10 w-10 rounded-md",
            },
            card: CardClasses {
                default: "rounded-lg border shadow-sm",
                elevated: "rounded-lg border shadow-lg",
                bordered: "rounded-lg border-2",
            },
            input: InputClasses {
                default: "h-10 px-3 py-2 rounded-md border bg-background text-foreground placeholder:text-muted-foreground focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
                error: "border-red-500 focus:ring-red-500",
                focus: "focus:ring-2 focus:ring-blue-500 focus:border-blue-500",
            },
            modal: ModalClasses {
                overlay: pick(
                    d,
                    "fixed inset-0 bg-black/80 backdrop-blur-sm",
                    "fixed inset-0 bg-black/50 backdrop-blur-sm",
                ),
                content: pick(
                    d,
                    "bg-gray-800 border-gray-700 text-gray-100",
                    "bg-white border-gray-200 text-gray-900",
                ),
            },
        },
    }
}

/// Appends caller classes after the configured ones.
///
/// Blank custom classes leave the configured string untouched.
#[must_use]
pub fn combine_classes(config_classes: &str, custom_classes: Option<&str>) -> String {
    match custom_classes.map(str::trim) {
        Some(custom) if !custom.is_empty() => format!("{config_classes} {custom}"),
        _ => config_classes.to_string(),
    }
}

/// Joins class fragments with single spaces, skipping blank ones.
#[must_use]
pub fn join_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a responsive class list from a base and per-breakpoint overrides.
#[must_use]
pub fn responsive_classes(
    base: &str,
    sm: Option<&str>,
    md: Option<&str>,
    lg: Option<&str>,
    xl: Option<&str>,
) -> String {
    let mut classes = vec![base.to_string()];
    for (prefix, value) in [("sm", sm), ("md", md), ("lg", lg), ("xl", xl)] {
        if let Some(value) = value {
            classes.push(format!("{prefix}:{value}"));
        }
    }
    classes.join(" ")
}
