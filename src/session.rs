//! Signed-in user, roles and notifications as seen by the presentation layer.
//!
//! Authentication itself happens elsewhere. [`AuthStore`] is the narrow view
//! the navigation bar needs: who is signed in, and a way to sign out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::status::role_color;

/// Closed set of portal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Member of the public filing complaints
    Citizen,
    /// Officer responsible for a ward
    WardOfficer,
    /// Field maintenance staff
    MaintenanceTeam,
    /// Portal administrator
    Administrator,
    /// Anonymous visitor
    Guest,
}

impl UserRole {
    /// Every role.
    pub const ALL: [Self; 5] = [
        Self::Citizen,
        Self::WardOfficer,
        Self::MaintenanceTeam,
        Self::Administrator,
        Self::Guest,
    ];

    /// Wire name (`WARD_OFFICER`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "CITIZEN",
            Self::WardOfficer => "WARD_OFFICER",
            Self::MaintenanceTeam => "MAINTENANCE_TEAM",
            Self::Administrator => "ADMINISTRATOR",
            Self::Guest => "GUEST",
        }
    }

    /// Name shown in badges (`WARD OFFICER`).
    #[must_use]
    pub fn display_label(self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// Badge classes for this role.
    #[must_use]
    pub fn badge_classes(self) -> &'static str {
        role_color(self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown role '{}'", s))
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Role driving navigation filtering
    pub role: UserRole,
    /// Full display name
    pub full_name: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Creates a user with no email or avatar.
    pub fn new(role: UserRole, full_name: impl Into<String>) -> Self {
        Self {
            role,
            full_name: full_name.into(),
            email: None,
            avatar: None,
        }
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Avatar fallback letter: first character of the name, uppercased, or `U`.
    #[must_use]
    pub fn initial(&self) -> String {
        self.full_name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect())
    }

    /// Name to display, `User` when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            "User"
        } else {
            name
        }
    }
}

/// Read access to the authentication state, plus sign-out.
pub trait AuthStore {
    /// The signed-in user, if any.
    fn user(&self) -> Option<&User>;

    /// Whether someone is signed in.
    fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Signs the current user out.
    fn logout(&mut self);
}

/// In-memory authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
}

impl AuthState {
    /// Signed-out state.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Signed-in state.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Signs `user` in, replacing anyone already signed in.
    pub fn login(&mut self, user: User) {
        tracing::debug!(role = %user.role, "user signed in");
        self.user = Some(user);
    }
}

impl AuthStore for AuthState {
    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn logout(&mut self) {
        if self.user.take().is_some() {
            tracing::debug!("user signed out");
        }
    }
}

/// An in-app notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
}

/// Number of unread notifications.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("ward_officer".parse::<UserRole>().unwrap(), UserRole::WardOfficer);
        assert_eq!("Maintenance Team".parse::<UserRole>().unwrap(), UserRole::MaintenanceTeam);
        assert!("mayor".parse::<UserRole>().is_err());
        assert_eq!(UserRole::MaintenanceTeam.display_label(), "MAINTENANCE TEAM");
        assert_eq!(UserRole::Guest.to_string(), "GUEST");
    }

    #[test]
    fn test_role_serde_uses_wire_names() {
        let json = serde_json::to_string(&UserRole::WardOfficer).unwrap();
        assert_eq!(json, "\"WARD_OFFICER\"");
    }

    #[test]
    fn test_role_badges() {
        assert!(UserRole::Administrator.badge_classes().contains("bg-red-100"));
        assert_eq!(UserRole::Citizen.badge_classes(), "bg-muted text-muted-foreground");
    }

    #[test]
    fn test_user_initial_and_name_fallbacks() {
        let user = User::new(UserRole::Citizen, "  asha menon");
        assert_eq!(user.initial(), "A");
        assert_eq!(user.display_name(), "asha menon");

        let blank = User::new(UserRole::Citizen, "");
        assert_eq!(blank.initial(), "U");
        assert_eq!(blank.display_name(), "User");
    }

    #[test]
    fn test_auth_state_login_logout() {
        let mut auth = AuthState::anonymous();
        assert!(!auth.is_authenticated());

        auth.login(User::new(UserRole::Administrator, "Admin"));
        assert!(auth.is_authenticated());
        assert_eq!(auth.user().map(|u| u.role), Some(UserRole::Administrator));

        auth.logout();
        assert!(auth.user().is_none());
    }

    #[test]
    fn test_unread_count() {
        let note = |id: &str, is_read| Notification {
            id: id.to_string(),
            title: "t".to_string(),
            message: "m".to_string(),
            is_read,
        };
        assert_eq!(unread_count(&[]), 0);
        assert_eq!(unread_count(&[note("1", false), note("2", true), note("3", false)]), 2);
    }
}
