//! Minimal HTML building blocks: safe markup strings, ordered attribute maps
//! and tag rendering.
//!
//! All escaping happens here. Callers hand over raw text and attribute values
//! and get back [`Markup`], which is always safe to emit as-is.

use std::fmt;
use std::ops::{Add, AddAssign};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::value::{to_text, Value};

/// Attributes rendered as `name="name"` when truthy and omitted otherwise.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "async",
    "autofocus",
    "checked",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "multiple",
    "novalidate",
    "open",
    "readonly",
    "required",
    "selected",
];

/// A fragment of HTML that is already escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Markup with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Escape text content.
    pub fn escape(text: &str) -> Self {
        Self(html_escape::encode_text(text).into_owned())
    }

    /// Wrap HTML that is already known to be safe.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Append another fragment.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// The HTML as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The HTML as an owned string.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Add for Markup {
    type Output = Markup;

    fn add(mut self, rhs: Markup) -> Markup {
        self.push(&rhs);
        self
    }
}

impl AddAssign for Markup {
    fn add_assign(&mut self, rhs: Markup) {
        self.push(&rhs);
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        iter.into_iter().fold(Markup::empty(), Add::add)
    }
}

/// HTML attributes in insertion order.
///
/// Setting a key that already exists replaces its value in place, so merging
/// never reorders the attributes a tag was built with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, Value>);

impl Attributes {
    /// An empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Merge `other` on top; its values win on conflicts.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn merged(mut self, other: &Attributes) -> Self {
        self.merge(other);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as ` name="value"` pairs with a leading space per attribute.
    ///
    /// Names that could break out of the tag are dropped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            if value.is_null() {
                continue;
            }
            if !is_valid_name(name) {
                warn!(name = name.as_str(), "dropping invalid attribute name");
                continue;
            }
            if BOOLEAN_ATTRIBUTES.contains(&name.as_str()) {
                if is_truthy(value) {
                    out.push_str(&format!(" {name}=\"{name}\""));
                }
                continue;
            }
            let text = match value {
                Value::Array(items) => items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(to_text)
                    .collect::<Vec<_>>()
                    .join(" "),
                other => to_text(other),
            };
            out.push_str(&format!(
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(&text)
            ));
        }
        out
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// An attribute name must be non-empty and free of whitespace, quotes, `>`,
/// `/`, `=` and control characters.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// An element with content: `<name attrs>body</name>`.
pub fn content_tag(name: &str, attrs: &Attributes, body: &Markup) -> Markup {
    Markup(format!("<{name}{}>{body}</{name}>", attrs.render()))
}

/// A void element: `<name attrs />`.
pub fn tag(name: &str, attrs: &Attributes) -> Markup {
    Markup(format!("<{name}{} />", attrs.render()))
}
