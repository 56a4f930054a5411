//! Interface languages and the labels rendered by the presentation layer.
//!
//! Translation loading is owned elsewhere; this module only carries the
//! built-in tables for the strings this crate renders, and the
//! [`LanguageStore`] seam through which the navigation bar switches language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
    /// Malayalam
    Ml,
}

impl Language {
    /// All languages in menu order.
    pub const ALL: [Self; 3] = [Self::En, Self::Hi, Self::Ml];

    /// Two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ml => "ml",
        }
    }

    /// Name of the language in its own script.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::Ml => "മലയാളം",
        }
    }

    /// Label table for this language.
    #[must_use]
    pub const fn translations(self) -> &'static Translations {
        match self {
            Self::En => &ENGLISH,
            Self::Hi => &HINDI,
            Self::Ml => &MALAYALAM,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            "ml" => Ok(Self::Ml),
            other => anyhow::bail!("Unsupported language '{}' (expected en, hi or ml)", other),
        }
    }
}

/// Labels rendered by the navigation bar and showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Translations {
    pub home: &'static str,
    pub dashboard: &'static str,
    pub complaints: &'static str,
    pub ward: &'static str,
    pub maintenance: &'static str,
    pub reports: &'static str,
    pub users: &'static str,
    pub system_config: &'static str,
    pub login: &'static str,
    pub sign_up: &'static str,
    pub profile: &'static str,
    pub logout: &'static str,
    pub register_complaint: &'static str,
    pub dark_mode: &'static str,
    pub language: &'static str,
    pub notifications: &'static str,
    pub no_notifications: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
}

const ENGLISH: Translations = Translations {
    home: "Home",
    dashboard: "Dashboard",
    complaints: "Complaints",
    ward: "Ward Management",
    maintenance: "Maintenance",
    reports: "Reports",
    users: "Users",
    system_config: "System Config",
    login: "Login",
    sign_up: "Sign Up",
    profile: "Profile",
    logout: "Logout",
    register_complaint: "Register Complaint",
    dark_mode: "Dark Mode",
    language: "Language",
    notifications: "Notifications",
    no_notifications: "No notifications",
    open_menu: "Open menu",
    close_menu: "Close menu",
};

const HINDI: Translations = Translations {
    home: "होम",
    dashboard: "डैशबोर्ड",
    complaints: "शिकायतें",
    ward: "वार्ड प्रबंधन",
    maintenance: "रखरखाव",
    reports: "रिपोर्ट",
    users: "उपयोगकर्ता",
    system_config: "सिस्टम कॉन्फ़िगरेशन",
    login: "लॉगिन",
    sign_up: "साइन अप",
    profile: "प्रोफ़ाइल",
    logout: "लॉगआउट",
    register_complaint: "शिकायत दर्ज करें",
    dark_mode: "डार्क मोड",
    language: "भाषा",
    notifications: "सूचनाएं",
    no_notifications: "कोई सूचना नहीं",
    open_menu: "मेनू खोलें",
    close_menu: "मेनू बंद करें",
};

const MALAYALAM: Translations = Translations {
    home: "ഹോം",
    dashboard: "ഡാഷ്ബോർഡ്",
    complaints: "പരാതികൾ",
    ward: "വാർഡ് മാനേജ്മെന്റ്",
    maintenance: "പരിപാലനം",
    reports: "റിപ്പോർട്ടുകൾ",
    users: "ഉപയോക്താക്കൾ",
    system_config: "സിസ്റ്റം ക്രമീകരണം",
    login: "ലോഗിൻ",
    sign_up: "സൈൻ അപ്പ്",
    profile: "പ്രൊഫൈൽ",
    logout: "ലോഗൗട്ട്",
    register_complaint: "പരാതി രജിസ്റ്റർ ചെയ്യുക",
    dark_mode: "ഡാർക്ക് മോഡ്",
    language: "ഭാഷ",
    notifications: "അറിയിപ്പുകൾ",
    no_notifications: "അറിയിപ്പുകളില്ല",
    open_menu: "മെനു തുറക്കുക",
    close_menu: "മെനു അടയ്ക്കുക",
};

/// Read/write access to the current language.
pub trait LanguageStore {
    /// Currently selected language.
    fn current_language(&self) -> Language;

    /// Labels for the current language.
    fn translations(&self) -> &'static Translations {
        self.current_language().translations()
    }

    /// Switches language.
    fn set_language(&mut self, language: Language);
}

/// In-memory language selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageState {
    current: Language,
}

impl LanguageState {
    /// Starts with the given language.
    #[must_use]
    pub const fn new(current: Language) -> Self {
        Self { current }
    }
}

impl LanguageStore for LanguageState {
    fn current_language(&self) -> Language {
        self.current
    }

    fn set_language(&mut self, language: Language) {
        tracing::debug!(from = %self.current, to = %language, "language changed");
        self.current = language;
    }
}
