//! Badge colors for complaint statuses, priorities, SLA states and roles.
//!
//! Two flavors exist. [`status_tone_classes`] picks explicit light or dark
//! classes for a tone. The `*_color` functions return a single string that
//! carries `dark:` variants, for markup that is styled by the root `dark`
//! class instead of the current flag.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fallback classes for anything unrecognized.
pub const MUTED_BADGE: &str = "bg-muted text-muted-foreground";

const BLUE: &str = "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200";
const YELLOW: &str = "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200";
const GREEN: &str = "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200";
const ORANGE: &str = "bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-200";
const RED: &str = "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200";
const PURPLE: &str = "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200";

/// Status pill tones with mode-specific classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Pending,
    Registered,
    Assigned,
    Progress,
    Resolved,
    Closed,
    Reopened,
}

impl StatusTone {
    /// Parses a tone name, falling back to [`StatusTone::Pending`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "info" => Self::Info,
            "registered" => Self::Registered,
            "assigned" => Self::Assigned,
            "progress" => Self::Progress,
            "resolved" => Self::Resolved,
            "closed" => Self::Closed,
            "reopened" => Self::Reopened,
            _ => Self::Pending,
        }
    }
}

/// Mode-specific classes for a status tone.
#[must_use]
pub const fn status_tone_classes(tone: StatusTone, is_dark: bool) -> &'static str {
    let (dark, light) = match tone {
        StatusTone::Success => ("bg-green-700 text-green-100", "bg-green-100 text-green-800"),
        StatusTone::Warning => ("bg-yellow-700 text-yellow-100", "bg-yellow-100 text-yellow-800"),
        StatusTone::Error => ("bg-red-700 text-red-100", "bg-red-100 text-red-800"),
        StatusTone::Info => ("bg-blue-700 text-blue-100", "bg-blue-100 text-blue-800"),
        StatusTone::Pending => ("bg-gray-700 text-gray-100", "bg-gray-100 text-gray-800"),
        StatusTone::Registered => ("bg-gray-600 text-gray-100", "bg-gray-200 text-gray-700"),
        StatusTone::Assigned => ("bg-blue-600 text-blue-100", "bg-blue-200 text-blue-800"),
        StatusTone::Progress => ("bg-yellow-600 text-yellow-100", "bg-yellow-200 text-yellow-800"),
        StatusTone::Resolved => ("bg-green-600 text-green-100", "bg-green-200 text-green-800"),
        StatusTone::Closed => ("bg-gray-800 text-gray-100", "bg-gray-300 text-gray-800"),
        StatusTone::Reopened => ("bg-red-600 text-red-100", "bg-red-200 text-red-800"),
    };
    if is_dark {
        dark
    } else {
        light
    }
}

/// Complaint status badge.
#[must_use]
pub fn status_color(status: &str) -> &'static str {
    match status.trim().to_ascii_uppercase().as_str() {
        "ASSIGNED" => BLUE,
        "IN_PROGRESS" => YELLOW,
        "RESOLVED" => GREEN,
        "REOPENED" => PURPLE,
        _ => MUTED_BADGE,
    }
}

/// Complaint priority badge.
#[must_use]
pub fn priority_color(priority: &str) -> &'static str {
    match priority.trim().to_ascii_uppercase().as_str() {
        "LOW" => GREEN,
        "MEDIUM" => YELLOW,
        "HIGH" => ORANGE,
        "CRITICAL" => RED,
        _ => MUTED_BADGE,
    }
}

/// SLA state badge.
#[must_use]
pub fn sla_color(sla: &str) -> &'static str {
    match sla.trim().to_ascii_uppercase().as_str() {
        "ON_TIME" => GREEN,
        "WARNING" => YELLOW,
        "OVERDUE" => RED,
        _ => MUTED_BADGE,
    }
}

/// User role badge.
#[must_use]
pub fn role_color(role: &str) -> &'static str {
    match role.trim().to_ascii_uppercase().as_str() {
        "ADMINISTRATOR" => RED,
        "WARD_OFFICER" => BLUE,
        "MAINTENANCE_TEAM" => GREEN,
        "GUEST" => PURPLE,
        _ => MUTED_BADGE,
    }
}

/// Which badge family a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// Complaint status
    #[default]
    Status,
    /// Complaint priority
    Priority,
    /// SLA state
    Sla,
    /// User role
    Role,
}

impl FromStr for ColorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "priority" => Ok(Self::Priority),
            "sla" => Ok(Self::Sla),
            "role" => Ok(Self::Role),
            other => anyhow::bail!(
                "Unknown color kind '{}' (expected status, priority, sla or role)",
                other
            ),
        }
    }
}

/// Badge classes for `value` within the given family.
#[must_use]
pub fn theme_aware_color(value: &str, kind: ColorKind) -> &'static str {
    match kind {
        ColorKind::Status => status_color(value),
        ColorKind::Priority => priority_color(value),
        ColorKind::Sla => sla_color(value),
        ColorKind::Role => role_color(value),
    }
}
