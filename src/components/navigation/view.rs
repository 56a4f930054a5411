//! Navigation bar markup.
//!
//! Dropdowns are `<details>` elements so the page works without scripts.
//! Interactive controls carry a `data-action` attribute naming the
//! [`super::NavAction`] a host should dispatch.

use crate::config::SystemConfig;
use crate::i18n::{Language, Translations};
use crate::render::{Element, Icon};
use crate::session::{unread_count, Notification, User};
use crate::style::{join_classes, ButtonSize, ButtonVariant, ColorRole, FontSize, Shadow, TextTone};
use crate::ui_config::UiConfig;

use super::{filter_items, nav_items, NavItem, NavView, NavigationBar};
use crate::components::Button;

const NAV_BASE: &str = "border-b fixed top-0 left-0 right-0 z-50";
const MOBILE_PANEL_BASE: &str =
    "md:hidden overflow-hidden transition-all duration-300 ease-in-out backdrop-blur-sm";
const MOBILE_LINK: &str = "block px-3 py-2 rounded-md text-base font-medium transition-colors";
const ACTIVE_LINK: &str = "bg-primary text-primary-foreground";
const INACTIVE_LINK: &str = "text-muted-foreground hover:text-foreground hover:bg-accent";
const COUNT_BADGE: &str =
    "h-5 w-5 p-0 flex items-center justify-center text-xs rounded-full bg-red-600 text-white";
const MAX_NOTIFICATIONS: usize = 5;

pub(super) fn render(bar: &NavigationBar, view: &NavView<'_>) -> Element {
    let ui = view.theme.ui();
    let t = view.language.translations();
    let open = bar.menu().is_open();

    let desktop = match view.user {
        Some(user) => authenticated_controls(bar, view, &ui, t, user),
        None => anonymous_controls(view, &ui, t),
    };

    let bar_row = Element::new("div").class("flex justify-between h-16").children([
        Element::new("div")
            .class("flex items-center")
            .child(logo(view.system, &ui)),
        menu_button(&ui, t, open),
        desktop,
    ]);

    let panel = match view.user {
        Some(user) => authenticated_panel(view, &ui, t, user),
        None => anonymous_panel(view, &ui, t),
    };
    let open_classes = match (open, view.user.is_some()) {
        (false, _) => "max-h-0 opacity-0",
        (true, true) => "max-h-screen opacity-100",
        (true, false) => "max-h-96 opacity-100",
    };
    let mobile = Element::new("div")
        .attr("id", "mobile-menu")
        .attr("data-state", if open { "open" } else { "closed" })
        .class(join_classes([MOBILE_PANEL_BASE, open_classes]))
        .child(panel);

    Element::new("nav")
        .attr("data-node", bar.id().to_string())
        .class(join_classes([
            ui.shadow_classes(Shadow::Sm),
            NAV_BASE,
            ui.color_classes(ColorRole::Card),
        ]))
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8")
                .child(bar_row),
        )
        .child(mobile)
}

/// Logo image, or the shield icon, plus the application name.
fn logo(system: &SystemConfig, ui: &UiConfig<'_>) -> Element {
    let size = system.app_logo_size.classes();
    let mark = match system.app_logo_url.as_deref() {
        Some(url) => Element::new("img")
            .attr("src", url)
            .attr("alt", system.app_name.as_str())
            .class(join_classes([size, "object-contain"])),
        None => Icon::Shield.element(&join_classes([size, "text-primary"])),
    };

    Element::new("a")
        .attr("href", "/")
        .attr("data-action", "navigate")
        .class("flex items-center space-x-2")
        .child(mark)
        .child(
            Element::new("span")
                .class(join_classes([
                    "font-bold hidden sm:inline",
                    ui.style().font.lg,
                    ui.style().colors.text.primary,
                ]))
                .text(system.app_name.as_str()),
        )
}

fn menu_button(ui: &UiConfig<'_>, t: &Translations, open: bool) -> Element {
    let (icon, label) = if open {
        (Icon::Close, t.close_menu)
    } else {
        (Icon::Menu, t.open_menu)
    };
    Element::new("div")
        .class("md:hidden flex items-center justify-center")
        .child(
            Button::new("")
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .class("p-2 relative")
                .icon(icon)
                .aria_label(label)
                .button_type("button")
                .render(ui)
                .attr("aria-expanded", open.to_string())
                .attr("aria-controls", "mobile-menu")
                .attr("data-action", "toggle-menu"),
        )
}

fn theme_switch(ui: &UiConfig<'_>, t: &Translations) -> Element {
    let is_dark = ui.is_dark_mode();
    let (icon, track) = if is_dark {
        (Icon::Moon, "bg-primary")
    } else {
        (Icon::Sun, "bg-input")
    };
    Element::new("button")
        .attr("type", "button")
        .attr("role", "switch")
        .attr("aria-checked", is_dark.to_string())
        .attr("aria-label", t.dark_mode)
        .attr("data-action", "toggle-theme")
        .class(join_classes([
            "inline-flex h-6 w-11 items-center rounded-full",
            track,
            ui.style().transitions.default,
        ]))
        .child(icon.element("h-4 w-4 mx-1"))
}

fn language_menu(ui: &UiConfig<'_>, current: Language, variant: ButtonVariant) -> Element {
    let trigger = Element::new("summary")
        .class(ui.button_classes(variant, ButtonSize::Small, Some("list-none cursor-pointer")))
        .child(Icon::Globe.element("h-4 w-4 mr-1 lg:mr-2"))
        .child(
            Element::new("span")
                .class("hidden lg:inline")
                .text(current.code().to_uppercase()),
        )
        .child(Element::new("span").class("lg:hidden").text(current.code()));

    Element::new("details")
        .class("relative")
        .child(trigger)
        .child(language_options(ui, current))
}

fn language_options(ui: &UiConfig<'_>, current: Language) -> Element {
    Element::new("div")
        .attr("role", "menu")
        .class(join_classes([
            "absolute right-0 mt-2 min-w-32 border",
            ui.color_classes(ColorRole::Card),
            ui.style().border_radius.md,
            ui.style().shadow.md,
        ]))
        .children(Language::ALL.into_iter().map(|language| {
            Element::new("button")
                .attr("type", "button")
                .attr("role", "menuitem")
                .attr("data-action", "language")
                .attr("data-value", language.code())
                .attr("aria-current", (language == current).to_string())
                .class("block w-full text-left px-3 py-2 text-sm hover:bg-accent")
                .text(language.native_name())
        }))
}

fn link_button(href: &str, button: Element) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("data-action", "navigate")
        .child(button)
}

fn anonymous_controls(view: &NavView<'_>, ui: &UiConfig<'_>, t: &Translations) -> Element {
    let login = Button::new("")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small)
        .render(ui)
        .child(Element::new("span").class("hidden lg:inline").text(t.login))
        .child(Element::new("span").class("lg:hidden").text("Login"));
    let sign_up = Button::new("")
        .size(ButtonSize::Small)
        .render(ui)
        .child(Element::new("span").class("hidden lg:inline").text(t.sign_up))
        .child(Element::new("span").class("lg:hidden").text("Sign Up"));

    Element::new("div")
        .class("hidden md:flex items-center space-x-2 lg:space-x-4")
        .child(theme_switch(ui, t))
        .child(language_menu(ui, view.language, ButtonVariant::Outline))
        .child(link_button("/login", login))
        .child(link_button("/register", sign_up))
}

fn anonymous_panel(view: &NavView<'_>, ui: &UiConfig<'_>, t: &Translations) -> Element {
    let full_width = |label: &str, variant: ButtonVariant| {
        Button::new(label)
            .variant(variant)
            .class("w-full")
            .render(ui)
    };

    Element::new("div")
        .class(join_classes([
            "px-4 pt-3 pb-4 space-y-3 border-t shadow-lg backdrop-blur-md",
            ui.color_classes(ColorRole::Card),
            ui.color_classes(ColorRole::Border),
        ]))
        .child(dark_mode_row(ui, t, "flex items-center justify-between mb-3"))
        .child(language_menu(ui, view.language, ButtonVariant::Outline))
        .child(
            link_button("/complaint", full_width(t.register_complaint, ButtonVariant::Outline))
                .class("block"),
        )
        .child(link_button("/login", full_width(t.login, ButtonVariant::Outline)).class("block"))
        .child(
            link_button("/register", full_width(t.sign_up, ButtonVariant::Primary)).class("block"),
        )
}

fn dark_mode_row(ui: &UiConfig<'_>, t: &Translations, classes: &str) -> Element {
    Element::new("div")
        .class(classes)
        .child(
            Element::new("span")
                .class(ui.text_classes(TextTone::Primary, FontSize::Sm, Some("font-medium")))
                .text(t.dark_mode),
        )
        .child(theme_switch(ui, t))
}

fn authenticated_controls(
    bar: &NavigationBar,
    view: &NavView<'_>,
    ui: &UiConfig<'_>,
    t: &Translations,
    user: &User,
) -> Element {
    let notifications = if bar.options().show_notifications {
        Some(notifications_menu(ui, t, view.notifications))
    } else {
        None
    };

    Element::new("div")
        .class("hidden md:flex items-center space-x-2 lg:space-x-4")
        .child(theme_switch(ui, t))
        .child_opt(notifications)
        .child(language_menu(ui, view.language, ButtonVariant::Ghost))
        .child(user_menu(ui, t, user))
}

fn notifications_menu(
    ui: &UiConfig<'_>,
    t: &Translations,
    notifications: &[Notification],
) -> Element {
    let unread = unread_count(notifications);
    let mut trigger = Element::new("summary")
        .attr("aria-label", t.notifications)
        .class(ui.button_classes(
            ButtonVariant::Ghost,
            ButtonSize::Small,
            Some("relative list-none cursor-pointer"),
        ))
        .child(Icon::Bell.element("h-5 w-5"));
    if unread > 0 {
        trigger = trigger.child(
            Element::new("span")
                .attr("data-role", "unread-count")
                .class(join_classes(["absolute -top-1 -right-1", COUNT_BADGE]))
                .text(unread.to_string()),
        );
    }

    let body = if notifications.is_empty() {
        vec![Element::new("p")
            .class("text-sm text-muted-foreground")
            .text(t.no_notifications)]
    } else {
        notifications
            .iter()
            .take(MAX_NOTIFICATIONS)
            .map(|notification| {
                let tone = if notification.is_read {
                    "bg-muted/50"
                } else {
                    "bg-blue-50 dark:bg-blue-950"
                };
                Element::new("div")
                    .attr("data-notification", notification.id.as_str())
                    .class(join_classes(["p-2 rounded-md mb-2", tone]))
                    .child(
                        Element::new("p")
                            .class("text-sm font-medium")
                            .text(notification.title.as_str()),
                    )
                    .child(
                        Element::new("p")
                            .class("text-xs text-muted-foreground")
                            .text(notification.message.as_str()),
                    )
            })
            .collect()
    };

    Element::new("details")
        .class("relative")
        .child(trigger)
        .child(
            Element::new("div")
                .attr("role", "menu")
                .class(join_classes([
                    "absolute right-0 mt-2 w-80 p-2 border",
                    ui.color_classes(ColorRole::Card),
                    ui.style().border_radius.md,
                    ui.style().shadow.md,
                ]))
                .child(
                    Element::new("h3")
                        .class("font-semibold text-sm mb-2")
                        .text(t.notifications),
                )
                .children(body),
        )
}

fn avatar(user: &User, size: &str, ring: bool) -> Element {
    let classes = if ring {
        join_classes(["rounded-full overflow-hidden ring-2 ring-border", size])
    } else {
        join_classes(["rounded-full overflow-hidden", size])
    };
    let face = match user.avatar.as_deref() {
        Some(url) => Element::new("img")
            .attr("src", url)
            .attr("alt", user.display_name())
            .class("h-full w-full object-cover"),
        None => Element::new("span")
            .attr("data-role", "avatar-initial")
            .class("flex h-full w-full items-center justify-center bg-primary text-primary-foreground font-semibold")
            .text(user.initial()),
    };
    Element::new("span").class(classes).child(face)
}

fn role_badge(user: &User, extra: &str) -> Element {
    Element::new("span")
        .attr("data-role", "role-badge")
        .class(join_classes([
            "inline-flex items-center rounded-md px-2 py-0.5 text-xs",
            extra,
            user.role.badge_classes(),
        ]))
        .text(user.role.display_label())
}

fn user_summary(user: &User, avatar_size: &str, ring: bool, classes: &str) -> Element {
    Element::new("div")
        .class(classes)
        .child(avatar(user, avatar_size, ring))
        .child(
            Element::new("div")
                .class("flex-1 min-w-0")
                .child(
                    Element::new("p")
                        .class("text-sm font-medium text-foreground truncate")
                        .text(user.display_name()),
                )
                .child(
                    Element::new("p")
                        .class("text-xs text-muted-foreground truncate")
                        .text(user.email.as_deref().unwrap_or("No email")),
                )
                .child(role_badge(user, "mt-1")),
        )
}

fn user_menu(ui: &UiConfig<'_>, t: &Translations, user: &User) -> Element {
    let trigger = Element::new("summary")
        .class(ui.button_classes(
            ButtonVariant::Ghost,
            ButtonSize::Small,
            Some("flex items-center space-x-3 h-auto py-2 px-3 list-none cursor-pointer"),
        ))
        .child(avatar(user, "h-9 w-9", true))
        .child(
            Element::new("div")
                .class("hidden lg:flex flex-col items-start min-w-0")
                .child(
                    Element::new("p")
                        .class("text-sm font-medium text-foreground truncate max-w-32")
                        .text(user.display_name()),
                )
                .child(role_badge(user, "")),
        )
        .child(Icon::ChevronDown.element("h-4 w-4 text-muted-foreground hidden lg:block"));

    Element::new("details")
        .class("relative")
        .child(trigger)
        .child(
            Element::new("div")
                .attr("role", "menu")
                .class(join_classes([
                    "absolute right-0 mt-2 w-56 border",
                    ui.color_classes(ColorRole::Card),
                    ui.style().border_radius.md,
                    ui.style().shadow.md,
                ]))
                .child(user_summary(
                    user,
                    "h-10 w-10",
                    false,
                    "flex items-center space-x-3 p-3 border-b border-border",
                ))
                .child(
                    Element::new("a")
                        .attr("href", "/profile")
                        .attr("data-action", "navigate")
                        .attr("role", "menuitem")
                        .class("flex items-center px-3 py-2 text-sm hover:bg-accent")
                        .child(Icon::User.element("h-4 w-4 mr-3"))
                        .child(Element::new("span").text(t.profile)),
                )
                .child(Element::new("hr").class("border-border"))
                .child(logout_button(
                    t,
                    "flex items-center w-full px-3 py-2 text-sm text-destructive",
                )),
        )
}

fn logout_button(t: &Translations, classes: &str) -> Element {
    Element::new("button")
        .attr("type", "button")
        .attr("role", "menuitem")
        .attr("data-action", "logout")
        .class(classes)
        .child(Icon::LogOut.element("h-4 w-4 mr-3"))
        .child(Element::new("span").text(t.logout))
}

fn mobile_item(item: &NavItem, current_path: &str) -> Element {
    let active = item.path == current_path;
    let mut row = Element::new("div")
        .class("flex items-center space-x-3")
        .child(item.icon.element("h-4 w-4"))
        .child(Element::new("span").text(item.label));
    if let Some(badge) = item.badge.filter(|count| *count > 0) {
        row = row.child(
            Element::new("span")
                .attr("data-role", "item-badge")
                .class(join_classes([COUNT_BADGE, "ml-auto"]))
                .text(badge.to_string()),
        );
    }

    let link = Element::new("a")
        .attr("href", item.path)
        .attr("data-action", "navigate")
        .class(join_classes([
            MOBILE_LINK,
            if active { ACTIVE_LINK } else { INACTIVE_LINK },
        ]));
    let link = if active {
        link.attr("aria-current", "page")
    } else {
        link
    };
    link.child(row)
}

fn authenticated_panel(
    view: &NavView<'_>,
    ui: &UiConfig<'_>,
    t: &'static Translations,
    user: &User,
) -> Element {
    let items = filter_items(&nav_items(t), Some(user));

    let language_trigger = Element::new("summary")
        .class(join_classes([MOBILE_LINK, INACTIVE_LINK, "list-none cursor-pointer"]))
        .child(
            Element::new("div")
                .class("flex items-center space-x-3")
                .child(Icon::Globe.element("h-4 w-4"))
                .child(Element::new("span").text(format!(
                    "{}: {}",
                    t.language,
                    view.language.code().to_uppercase()
                ))),
        );

    Element::new("div")
        .class(join_classes([
            "px-4 pt-3 pb-4 space-y-2 border-t shadow-lg backdrop-blur-md",
            ui.color_classes(ColorRole::Card),
            ui.color_classes(ColorRole::Border),
        ]))
        .child(dark_mode_row(
            ui,
            t,
            "flex items-center justify-between mb-4 pb-2 border-b border-border",
        ))
        .child(
            Element::new("div")
                .attr("data-role", "nav-items")
                .class("space-y-1 mb-4")
                .children(items.iter().map(|item| mobile_item(item, view.current_path))),
        )
        .child(
            Element::new("details")
                .child(language_trigger)
                .child(language_options(ui, view.language)),
        )
        .child(
            Element::new("div")
                .class("border-t border-border pt-4")
                .child(user_summary(
                    user,
                    "h-12 w-12",
                    true,
                    "flex items-center space-x-3 px-3 py-2 mb-3",
                ))
                .child(
                    Element::new("div")
                        .class("space-y-1")
                        .child(
                            Element::new("a")
                                .attr("href", "/profile")
                                .attr("data-action", "navigate")
                                .class(join_classes([
                                    "flex items-center space-x-3 px-3 py-2 rounded-md text-base font-medium",
                                    INACTIVE_LINK,
                                ]))
                                .child(Icon::User.element("h-5 w-5"))
                                .child(Element::new("span").text(t.profile)),
                        )
                        .child(logout_button(
                            t,
                            "flex items-center space-x-3 w-full text-left px-3 py-2 rounded-md text-base font-medium text-destructive hover:bg-destructive/10",
                        )),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::navigation::NavigationOptions;
    use crate::dom::Document;
    use crate::session::UserRole;
    use crate::theme::{ThemeContext, ThemeMode};

    fn render_for(
        user: Option<&User>,
        open: bool,
        options: NavigationOptions,
        notes: &[Notification],
    ) -> Element {
        let document = Document::new();
        let bar = NavigationBar::new(&document, options);
        if open {
            bar.menu().open();
        }
        let theme = ThemeContext::for_mode(ThemeMode::Light);
        let system = SystemConfig::default();
        bar.render(&NavView {
            user,
            language: Language::En,
            theme: &theme,
            system: &system,
            current_path: "/complaints",
            notifications: notes,
        })
    }

    fn note(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("Title {id}"),
            message: "Updated".to_string(),
            is_read,
        }
    }

    #[test]
    fn test_anonymous_bar_has_login_links() {
        let html = render_for(None, false, NavigationOptions::default(), &[]).to_string();
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/register""#));
        assert!(html.contains(r#"href="/complaint""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(html.contains(r#"data-lucide="shield""#));
        assert!(html.contains("Citizen Grievance Portal"));
        assert!(!html.contains(r#"href="/dashboard""#));
    }

    #[test]
    fn test_menu_button_label_follows_state() {
        let user = User::new(UserRole::Citizen, "Anu");
        let nav = render_for(Some(&user), true, NavigationOptions::default(), &[]);
        let button = nav.find_by_attr("data-action", "toggle-menu").unwrap();
        assert_eq!(button.get_attr("aria-label"), Some("Close menu"));
        assert_eq!(button.get_attr("aria-expanded"), Some("true"));

        let panel = nav.find_by_attr("id", "mobile-menu").unwrap();
        assert_eq!(panel.get_attr("data-state"), Some("open"));
        assert!(panel.get_attr("class").unwrap().contains("max-h-screen opacity-100"));
    }

    #[test]
    fn test_active_item_and_role_badge() {
        let user = User::new(UserRole::WardOfficer, "ravi").with_email("ravi@example.org");
        let nav = render_for(Some(&user), false, NavigationOptions::default(), &[]);

        let active = nav.find_by_attr("aria-current", "page").unwrap();
        assert_eq!(active.get_attr("href"), Some("/complaints"));
        assert!(active.get_attr("class").unwrap().contains(ACTIVE_LINK));

        let items = nav.find_by_attr("data-role", "nav-items").unwrap();
        assert!(items.find_by_attr("href", "/ward").is_some());
        assert!(items.find_by_attr("href", "/admin/users").is_none());

        let badge = nav.find_by_attr("data-role", "role-badge").unwrap();
        assert_eq!(badge.text_content(), "WARD OFFICER");
        assert!(badge.get_attr("class").unwrap().contains("bg-blue-100"));

        let initial = nav.find_by_attr("data-role", "avatar-initial").unwrap();
        assert_eq!(initial.text_content(), "R");
        assert!(nav.to_string().contains("ravi@example.org"));
    }

    #[test]
    fn test_notifications_hidden_by_default() {
        let user = User::new(UserRole::Citizen, "Anu");
        let notes = [note("1", false)];
        let html = render_for(Some(&user), false, NavigationOptions::default(), &notes).to_string();
        assert!(!html.contains("data-notification"));
    }

    #[test]
    fn test_notifications_dropdown_limits_and_counts() {
        let user = User::new(UserRole::Citizen, "Anu");
        let notes: Vec<_> = (0..7).map(|i| note(&i.to_string(), i % 2 == 0)).collect();
        let options = NavigationOptions {
            show_notifications: true,
        };
        let nav = render_for(Some(&user), false, options, &notes);

        let count = nav.find_by_attr("data-role", "unread-count").unwrap();
        assert_eq!(count.text_content(), "3");
        assert!(nav.find_by_attr("data-notification", "4").is_some());
        assert!(nav.find_by_attr("data-notification", "5").is_none());

        let empty = render_for(Some(&user), false, options, &[]).to_string();
        assert!(empty.contains("No notifications"));
        assert!(!empty.contains("unread-count"));
    }

    #[test]
    fn test_logo_image_uses_configured_size() {
        let document = Document::new();
        let bar = NavigationBar::new(&document, NavigationOptions::default());
        let theme = ThemeContext::for_mode(ThemeMode::Dark);
        let system = SystemConfig {
            app_name: "Ward Desk".to_string(),
            app_logo_url: Some("/logo.svg".to_string()),
            app_logo_size: crate::config::LogoSize::Large,
        };
        let nav = bar.render(&NavView {
            user: None,
            language: Language::Hi,
            theme: &theme,
            system: &system,
            current_path: "/",
            notifications: &[],
        });

        let img = nav.find_by_attr("src", "/logo.svg").unwrap();
        assert_eq!(img.get_attr("alt"), Some("Ward Desk"));
        assert!(img.get_attr("class").unwrap().contains("h-10 w-10"));
        assert_eq!(nav.get_attr("data-node"), Some(bar.id().to_string().as_str()));

        let switch = nav.find_by_attr("role", "switch").unwrap();
        assert_eq!(switch.get_attr("aria-checked"), Some("true"));
    }
}
