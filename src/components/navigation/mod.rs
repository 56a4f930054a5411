//! Role-aware navigation bar.
//!
//! The bar has two independent axes of state: signed in or not (owned by the
//! [`AuthStore`]) and mobile menu open or closed (owned by [`MobileMenu`]).
//! User interaction arrives as [`NavAction`]s; markup is produced from a
//! [`NavView`] snapshot.

mod items;
mod menu;
mod view;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Config, SystemConfig};
use crate::dom::{Document, NodeId};
use crate::i18n::{Language, LanguageStore};
use crate::render::Element;
use crate::session::{AuthStore, Notification, User};
use crate::theme::{ThemeContext, ThemeMode, ThemeProvider};

pub use items::{filter_items, is_visible, nav_items, NavItem, MAINTENANCE_TEAM_PATHS};
pub use menu::MobileMenu;

/// Optional parts of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationOptions {
    /// Render the notifications dropdown
    pub show_notifications: bool,
}

impl NavigationOptions {
    /// Options from the `[ui]` config section.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self {
            show_notifications: config.ui.show_notifications,
        }
    }
}

/// Something the user did in the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Menu button pressed
    ToggleMenu,
    /// A link was followed
    Navigate(String),
    /// A language was picked
    SelectLanguage(Language),
    /// The theme switch was flipped
    ToggleTheme,
    /// Logout pressed
    Logout,
}

/// Collaborators a [`NavAction`] may act on.
pub struct NavContext<'a> {
    /// Authentication state
    pub auth: &'a mut dyn AuthStore,
    /// Language selection
    pub language: &'a mut dyn LanguageStore,
    /// Theme state
    pub theme: &'a ThemeProvider,
}

/// Outcome of a handled action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing outside the bar changed
    None,
    /// The host should route to this path
    Navigate(String),
    /// The theme is now in this mode
    ThemeChanged(ThemeMode),
    /// The language is now this one
    LanguageChanged(Language),
    /// The user was signed out
    LoggedOut,
}

/// Everything the bar renders from, borrowed for one render.
#[derive(Debug, Clone, Copy)]
pub struct NavView<'a> {
    /// Signed-in user
    pub user: Option<&'a User>,
    /// Current language
    pub language: Language,
    /// Current theme
    pub theme: &'a ThemeContext,
    /// Branding
    pub system: &'a SystemConfig,
    /// Current route, for the active-item highlight
    pub current_path: &'a str,
    /// Notifications, newest first
    pub notifications: &'a [Notification],
}

/// The navigation bar.
#[derive(Debug)]
pub struct NavigationBar {
    id: NodeId,
    menu: MobileMenu,
    options: NavigationOptions,
}

impl NavigationBar {
    /// Creates a bar with a closed menu in `document`.
    pub fn new(document: &Document, options: NavigationOptions) -> Self {
        let id = NodeId::next();
        Self {
            id,
            menu: MobileMenu::new(document, id),
            options,
        }
    }

    /// Node id of the `<nav>` element; clicks through it count as inside.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The mobile menu.
    #[must_use]
    pub const fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Options the bar was built with.
    #[must_use]
    pub const fn options(&self) -> NavigationOptions {
        self.options
    }

    /// Items the current user may see, labelled in the current language.
    pub fn items(&self, auth: &dyn AuthStore, language: &dyn LanguageStore) -> Vec<NavItem> {
        filter_items(&nav_items(language.translations()), auth.user())
    }

    /// Applies a user action.
    pub fn handle(&self, action: NavAction, cx: &mut NavContext<'_>) -> NavOutcome {
        debug!(?action, "navigation action");
        match action {
            NavAction::ToggleMenu => {
                self.menu.toggle();
                NavOutcome::None
            }
            NavAction::Navigate(path) => {
                self.menu.close();
                NavOutcome::Navigate(path)
            }
            NavAction::SelectLanguage(language) => {
                cx.language.set_language(language);
                NavOutcome::LanguageChanged(language)
            }
            NavAction::ToggleTheme => NavOutcome::ThemeChanged(cx.theme.toggle_dark_mode()),
            NavAction::Logout => {
                cx.auth.logout();
                self.menu.close();
                NavOutcome::LoggedOut
            }
        }
    }

    /// Builds the `<nav>` markup.
    pub fn render(&self, view: &NavView<'_>) -> Element {
        view::render(self, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageState;
    use crate::session::{AuthState, UserRole};
    use crate::theme::{ManualAmbient, MemoryStore};

    struct Fixture {
        document: Document,
        auth: AuthState,
        language: LanguageState,
        theme: ThemeProvider,
    }

    impl Fixture {
        fn new(role: Option<UserRole>) -> Self {
            let document = Document::new();
            let ambient = ManualAmbient::new(None);
            let theme = ThemeProvider::new(MemoryStore::new(), &ambient, document.root.clone());
            let auth = role.map_or_else(AuthState::anonymous, |role| {
                AuthState::signed_in(User::new(role, "Meera"))
            });
            Self {
                document,
                auth,
                language: LanguageState::default(),
                theme,
            }
        }

        fn handle(&mut self, bar: &NavigationBar, action: NavAction) -> NavOutcome {
            let mut cx = NavContext {
                auth: &mut self.auth,
                language: &mut self.language,
                theme: &self.theme,
            };
            bar.handle(action, &mut cx)
        }
    }

    #[test]
    fn test_logout_closes_menu() {
        let mut fx = Fixture::new(Some(UserRole::Citizen));
        let bar = NavigationBar::new(&fx.document, NavigationOptions::default());

        fx.handle(&bar, NavAction::ToggleMenu);
        assert!(bar.menu().is_open());

        assert_eq!(fx.handle(&bar, NavAction::Logout), NavOutcome::LoggedOut);
        assert!(!fx.auth.is_authenticated());
        assert!(!bar.menu().is_open());
        assert_eq!(fx.document.keydown.listener_count(), 0);
    }

    #[test]
    fn test_following_a_link_closes_menu() {
        let mut fx = Fixture::new(Some(UserRole::Citizen));
        let bar = NavigationBar::new(&fx.document, NavigationOptions::default());
        fx.handle(&bar, NavAction::ToggleMenu);

        let outcome = fx.handle(&bar, NavAction::Navigate("/complaints".to_string()));
        assert_eq!(outcome, NavOutcome::Navigate("/complaints".to_string()));
        assert!(!bar.menu().is_open());
    }

    #[test]
    fn test_language_change_leaves_theme_alone() {
        let mut fx = Fixture::new(Some(UserRole::WardOfficer));
        let bar = NavigationBar::new(&fx.document, NavigationOptions::default());
        let before = fx.theme.context();

        fx.handle(&bar, NavAction::SelectLanguage(Language::Ml));
        assert_eq!(fx.language.current_language(), Language::Ml);
        assert_eq!(fx.theme.context(), before);
        assert_eq!(fx.theme.stored_preference(), None);

        let items = bar.items(&fx.auth, &fx.language);
        assert_eq!(items[0].label, Language::Ml.translations().dashboard);
    }

    #[test]
    fn test_theme_toggle_marks_document() {
        let mut fx = Fixture::new(None);
        let bar = NavigationBar::new(&fx.document, NavigationOptions::default());

        let outcome = fx.handle(&bar, NavAction::ToggleTheme);
        assert_eq!(outcome, NavOutcome::ThemeChanged(ThemeMode::Dark));
        assert!(fx.document.root.contains("dark"));
    }

    #[test]
    fn test_click_on_bar_keeps_menu_open() {
        let mut fx = Fixture::new(Some(UserRole::Administrator));
        let bar = NavigationBar::new(&fx.document, NavigationOptions::default());
        fx.handle(&bar, NavAction::ToggleMenu);

        fx.document.click(vec![NodeId::next(), bar.id()]);
        assert!(bar.menu().is_open());
        fx.document.click(vec![NodeId::next()]);
        assert!(!bar.menu().is_open());
    }

    #[test]
    fn test_dropping_bar_releases_listeners() {
        let mut fx = Fixture::new(Some(UserRole::Citizen));
        let bar = NavigationBar::new(&fx.document, NavigationOptions::default());
        fx.handle(&bar, NavAction::ToggleMenu);
        assert_eq!(fx.document.click.listener_count(), 1);

        drop(bar);
        assert_eq!(fx.document.click.listener_count(), 0);
    }
}
