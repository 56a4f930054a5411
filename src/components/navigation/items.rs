//! Navigation entries and role filtering.

use serde::Serialize;

use crate::i18n::Translations;
use crate::render::Icon;
use crate::session::{User, UserRole};

use UserRole::{Administrator, Citizen, Guest, MaintenanceTeam, WardOfficer};

/// One entry in the navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Translated label
    pub label: &'static str,
    /// Route path
    pub path: &'static str,
    /// Leading icon
    pub icon: Icon,
    /// Roles the entry is declared for
    pub roles: &'static [UserRole],
    /// Count shown next to the label when positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

impl NavItem {
    const fn new(
        label: &'static str,
        path: &'static str,
        icon: Icon,
        roles: &'static [UserRole],
    ) -> Self {
        Self {
            label,
            path,
            icon,
            roles,
            badge: None,
        }
    }

    /// Sets the badge count.
    #[must_use]
    pub const fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Paths visible to maintenance staff, whatever the declared roles say.
pub const MAINTENANCE_TEAM_PATHS: [&str; 2] = ["/dashboard", "/complaints"];

/// The full navigation list in display order.
#[must_use]
pub fn nav_items(t: &'static Translations) -> Vec<NavItem> {
    vec![
        NavItem::new(
            t.home,
            "/",
            Icon::Home,
            &[Citizen, WardOfficer, MaintenanceTeam, Administrator, Guest],
        ),
        NavItem::new(
            t.dashboard,
            "/dashboard",
            Icon::BarChart,
            &[Citizen, WardOfficer, MaintenanceTeam, Administrator],
        ),
        NavItem::new(
            t.complaints,
            "/complaints",
            Icon::FileText,
            &[Citizen, WardOfficer, MaintenanceTeam, Administrator],
        ),
        NavItem::new(t.ward, "/ward", Icon::MapPin, &[WardOfficer]),
        NavItem::new(t.maintenance, "/maintenance", Icon::Wrench, &[MaintenanceTeam]),
        NavItem::new(
            t.reports,
            "/reports",
            Icon::TrendingUp,
            &[WardOfficer, Administrator, MaintenanceTeam],
        ),
        NavItem::new(t.users, "/admin/users", Icon::Users, &[Administrator]),
        NavItem::new(t.system_config, "/admin/config", Icon::Database, &[Administrator]),
    ]
}

/// Whether `item` is shown to `user`.
///
/// Nobody sees anything when signed out, and the home entry is hidden once
/// someone is signed in. Maintenance staff see only the dashboard and
/// complaints entries; the declared role list on the other entries is
/// ignored for them.
#[must_use]
pub fn is_visible(item: &NavItem, user: Option<&User>) -> bool {
    let Some(user) = user else {
        return false;
    };
    if item.path == "/" {
        return false;
    }
    if user.role == MaintenanceTeam {
        return MAINTENANCE_TEAM_PATHS.contains(&item.path);
    }
    item.roles.contains(&user.role)
}

/// Entries of `items` visible to `user`, in their original order.
#[must_use]
pub fn filter_items(items: &[NavItem], user: Option<&User>) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| is_visible(item, user))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn paths(items: &[NavItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.path).collect()
    }

    fn visible_for(role: UserRole) -> Vec<&'static str> {
        let user = User::new(role, "Test");
        paths(&filter_items(&nav_items(Language::En.translations()), Some(&user)))
    }

    #[test]
    fn test_signed_out_sees_nothing() {
        assert!(filter_items(&nav_items(Language::En.translations()), None).is_empty());
    }

    #[test]
    fn test_role_visibility() {
        assert_eq!(visible_for(Citizen), ["/dashboard", "/complaints"]);
        assert_eq!(visible_for(WardOfficer), ["/dashboard", "/complaints", "/ward", "/reports"]);
        assert_eq!(
            visible_for(Administrator),
            ["/dashboard", "/complaints", "/reports", "/admin/users", "/admin/config"]
        );
        assert!(visible_for(Guest).is_empty());
    }

    #[test]
    fn test_maintenance_team_ignores_declared_roles() {
        assert_eq!(visible_for(MaintenanceTeam), ["/dashboard", "/complaints"]);

        // even entries declared only for maintenance staff stay hidden
        let user = User::new(MaintenanceTeam, "Crew");
        let items = [
            NavItem::new("Complaints", "/complaints", Icon::FileText, &[Administrator]),
            NavItem::new("Maintenance", "/maintenance", Icon::Wrench, &[MaintenanceTeam]),
            NavItem::new("Dashboard", "/dashboard", Icon::BarChart, &[]),
        ];
        assert_eq!(paths(&filter_items(&items, Some(&user))), ["/complaints", "/dashboard"]);
    }

    #[test]
    fn test_labels_follow_language() {
        let items = nav_items(Language::Hi.translations());
        assert_eq!(items[1].label, Language::Hi.translations().dashboard);
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn test_badge_serialization() {
        let item = nav_items(Language::En.translations())[2].clone().with_badge(3);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["badge"], 3);
        assert_eq!(json["icon"], "file-text");
        assert_eq!(json["roles"][0], "CITIZEN");
    }
}
