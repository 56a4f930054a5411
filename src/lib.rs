//! Civic UI Library
//!
//! Theme-aware presentation layer for the citizen grievance portal: a light
//! and dark style table, class builders over it, a theme provider that
//! persists the user's choice and follows the OS otherwise, and a role-aware
//! navigation bar rendered to HTML.

pub mod cli;
pub mod components;
pub mod config;
pub mod constants;
pub mod dom;
pub mod events;
pub mod i18n;
pub mod render;
pub mod session;
pub mod style;
pub mod theme;
pub mod ui_config;

#[cfg(feature = "web")]
pub mod web;
