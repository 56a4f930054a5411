//! Themed components.
//!
//! Every component reads its classes from a [`UiConfig`](crate::ui_config::UiConfig)
//! and returns an [`Element`](crate::render::Element) tree.

pub mod button;
pub mod card;
pub mod navigation;
pub mod showcase;

pub use button::Button;
pub use card::{titled_card, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use navigation::{
    filter_items, nav_items, NavAction, NavContext, NavItem, NavOutcome, NavView, NavigationBar,
    NavigationOptions,
};
pub use showcase::{page, showcase};
