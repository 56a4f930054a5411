//! Markup output.

pub mod html;
pub mod icon;

pub use html::{Element, Node};
pub use icon::Icon;
