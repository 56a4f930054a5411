//! Enumerated style tokens.
//!
//! Every lookup into a [`StyleConfig`](super::StyleConfig) goes through one of
//! these enums, so an unknown key cannot be expressed in Rust code. Text
//! parsing (`FromStr`) exists only for the CLI and HTTP boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a token enum with its canonical key names.
///
/// The first variant listed is the default.
macro_rules! style_token {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $(#[$first_meta:meta])* $first:ident => $first_key:literal,
            $($(#[$vmeta:meta])* $variant:ident => $key:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(#[$first_meta])*
            #[default]
            #[serde(rename = $first_key)]
            $first,
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )*
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [Self] = &[Self::$first, $(Self::$variant),*];

            /// Canonical key name of this token.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::$first => $first_key,
                    $(Self::$variant => $key,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|token| token.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let valid: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                        anyhow::anyhow!(
                            "Unknown {} '{}' (expected one of: {})",
                            $kind,
                            s,
                            valid.join(", ")
                        )
                    })
            }
        }
    };
}

style_token! {
    /// Flat color roles under `colors`.
    ColorRole, "color role" {
        Primary => "primary",
        Secondary => "secondary",
        Danger => "danger",
        Success => "success",
        Warning => "warning",
        Info => "info",
        Background => "background",
        Card => "card",
        Border => "border",
    }
}

style_token! {
    /// Text color tones under `colors.text`.
    TextTone, "text tone" {
        Primary => "primary",
        Secondary => "secondary",
        Muted => "muted",
    }
}

style_token! {
    /// Button color variants under `colors.button`.
    ButtonVariant, "button variant" {
        Primary => "primary",
        Secondary => "secondary",
        Outline => "outline",
        Ghost => "ghost",
        Destructive => "destructive",
    }
}

style_token! {
    /// Button shapes under `components.button`.
    ButtonSize, "button size" {
        Default => "default",
        Small => "small",
        Large => "large",
        Icon => "icon",
    }
}

style_token! {
    /// Card shapes under `components.card`.
    CardVariant, "card variant" {
        Default => "default",
        Elevated => "elevated",
        Bordered => "bordered",
    }
}

style_token! {
    /// Input states under `components.input`.
    InputState, "input state" {
        Default => "default",
        Error => "error",
        Focus => "focus",
    }
}

style_token! {
    /// Modal parts under `components.modal`.
    ModalPart, "modal part" {
        Overlay => "overlay",
        Content => "content",
    }
}

style_token! {
    /// Padding scale under `spacing`. Defaults to `md`.
    Spacing, "spacing size" {
        Md => "md",
        Xs => "xs",
        Sm => "sm",
        Lg => "lg",
        Xl => "xl",
    }
}

style_token! {
    /// Corner radius scale under `borderRadius`. Defaults to `md`.
    Radius, "border radius" {
        Md => "md",
        Sm => "sm",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
}

style_token! {
    /// Shadow scale under `shadow`. Defaults to `md`.
    Shadow, "shadow size" {
        Md => "md",
        Sm => "sm",
        Lg => "lg",
        Xl => "xl",
    }
}

style_token! {
    /// Typographic scale under `font`. Defaults to `base`.
    FontSize, "font size" {
        Base => "base",
        Xs => "xs",
        Sm => "sm",
        Lg => "lg",
        Xl => "xl",
        /// `2xl`
        Xxl => "2xl",
        Heading => "heading",
    }
}

style_token! {
    /// Transition speeds under `transitions`.
    Transition, "transition speed" {
        Default => "default",
        Fast => "fast",
        Slow => "slow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_fallbacks() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
        assert_eq!(CardVariant::default(), CardVariant::Default);
        assert_eq!(TextTone::default(), TextTone::Primary);
        assert_eq!(FontSize::default(), FontSize::Base);
        assert_eq!(Spacing::default(), Spacing::Md);
        assert_eq!(Radius::default(), Radius::Md);
        assert_eq!(Shadow::default(), Shadow::Md);
        assert_eq!(Transition::default(), Transition::Default);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Ghost".parse::<ButtonVariant>().unwrap(), ButtonVariant::Ghost);
        assert_eq!(" 2XL ".parse::<FontSize>().unwrap(), FontSize::Xxl);
        assert_eq!("full".parse::<Radius>().unwrap(), Radius::Full);
    }

    #[test]
    fn test_parse_unknown_names_the_kind() {
        let err = "huge".parse::<Shadow>().unwrap_err().to_string();
        assert!(err.contains("shadow size"));
        assert!(err.contains("huge"));
        assert!(err.contains("xl"));
    }

    #[test]
    fn test_serde_uses_key_names() {
        assert_eq!(serde_json::to_string(&FontSize::Xxl).unwrap(), "\"2xl\"");
        let parsed: CardVariant = serde_json::from_str("\"elevated\"").unwrap();
        assert_eq!(parsed, CardVariant::Elevated);
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        assert_eq!(ColorRole::ALL.len(), 9);
        assert_eq!(ButtonVariant::ALL.len(), 5);
        assert_eq!(FontSize::ALL.len(), 7);
        let mut keys: Vec<&str> = Spacing::ALL.iter().map(|s| s.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Spacing::ALL.len());
    }
}
