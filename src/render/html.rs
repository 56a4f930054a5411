//! Minimal HTML tree.
//!
//! Text and attribute values are escaped when the tree is written out, so
//! user-provided strings (names, emails, notification text) can be passed in
//! as-is.

use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A piece of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element and its subtree
    Element(Element),
    /// Escaped text
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => f.write_str(&html_escape::encode_text(text)),
        }
    }
}

/// An HTML element built by chaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Empty element with tag `tag`.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets `class`; blank class strings are dropped.
    #[must_use]
    pub fn class(self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref().trim();
        if classes.is_empty() {
            self
        } else {
            self.attr("class", classes)
        }
    }

    /// Sets an attribute, replacing an earlier value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.retain(|(existing, _)| *existing != name);
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Sets an attribute when `value` is present.
    #[must_use]
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Adds a valueless attribute such as `disabled`.
    /// Sets a valueless attribute when `enabled`.
    #[must_use]
    pub fn flag(mut self, name: &'static str, enabled: bool) -> Self {
        if enabled {
            self.attrs.retain(|(existing, _)| *existing != name);
            self.attrs.push((name, None));
        }
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends `child` when present.
    #[must_use]
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends several children in order.
    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text node.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of an attribute; valueless attributes read as `""`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    /// Child nodes in order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Depth-first search for the first element with `attr` equal to `value`.
    #[must_use]
    pub fn find_by_attr(&self, attr: &str, value: &str) -> Option<&Self> {
        if self.get_attr(attr) == Some(value) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.find_by_attr(attr, value),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text content of the subtree, unescaped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            match value {
                Some(value) => write!(
                    f,
                    " {name}=\"{}\"",
                    html_escape::encode_double_quoted_attribute(value)
                )?,
                None => write!(f, " {name}")?,
            }
        }
        f.write_str(">")?;

        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_elements() {
        let html = Element::new("div")
            .class("flex items-center")
            .child(Element::new("span").text("Hi"))
            .child(Element::new("img").attr("src", "/logo.png"))
            .to_string();
        assert_eq!(
            html,
            r#"<div class="flex items-center"><span>Hi</span><img src="/logo.png"></div>"#
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let html = Element::new("p")
            .attr("title", r#"a "quoted" <value>"#)
            .text("<script>alert(1)</script> & co")
            .to_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; co"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_blank_class_and_flags() {
        let element = Element::new("button")
            .class("   ")
            .flag("disabled", true)
            .flag("hidden", false);
        assert_eq!(element.get_attr("class"), None);
        assert_eq!(element.get_attr("disabled"), Some(""));
        assert_eq!(element.to_string(), "<button disabled></button>");
    }

    #[test]
    fn test_attr_replaces_and_find() {
        let tree = Element::new("nav").child(
            Element::new("a")
                .attr("href", "/old")
                .attr("href", "/dashboard")
                .text("Dashboard"),
        );
        let link = tree.find_by_attr("href", "/dashboard").unwrap();
        assert_eq!(link.tag(), "a");
        assert_eq!(link.text_content(), "Dashboard");
        assert!(tree.find_by_attr("href", "/old").is_none());
    }
}
