//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::path::Path;
use std::process::Command;

use civic_ui::session::{Notification, User, UserRole};
use tempfile::TempDir;

/// Path to the civic-ui binary
pub fn civic_ui_bin() -> String {
    std::env::var("CARGO_BIN_EXE_civic-ui").unwrap_or_else(|_| "target/debug/civic-ui".to_string())
}

/// Creates an empty config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to share state between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(civic_ui_bin());
    cmd.env("CIVIC_UI_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// A signed-in user with a predictable name and email.
pub fn test_user(role: UserRole) -> User {
    User::new(role, "Priya Menon").with_email("priya@example.org")
}

/// Seven notifications, the first three unread.
pub fn test_notifications() -> Vec<Notification> {
    (1..=7)
        .map(|n| Notification {
            id: format!("n{n}"),
            title: format!("Complaint #{n} updated"),
            message: format!("Status changed for complaint {n}"),
            is_read: n > 3,
        })
        .collect()
}
