//! Form tag helpers built on [`crate::markup`].
//!
//! Each input helper starts from its base attributes (`type`, `name`, `id`,
//! `value`) and merges the caller's attributes on top, so a caller-supplied
//! `name` replaces the base one without moving it.

use crate::markup::{content_tag, tag, Attributes, Markup};
use crate::types::Choice;
use crate::value::{to_text, Value};

/// Turn a field name into a DOM id: `]` is dropped and every character outside
/// `[-a-zA-Z0-9:.]` becomes `_`.
pub fn sanitize_to_id(name: &str) -> String {
    name.chars()
        .filter(|&c| c != ']')
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Label text derived from an attribute name: `full_name` → `full name`,
/// `owner_id` → `owner`.
pub fn humanize(attr: &str) -> String {
    let trimmed = attr.trim_start_matches('_');
    let base = trimmed.strip_suffix("_id").unwrap_or(trimmed);
    base.replace('_', " ").to_lowercase()
}

fn input_tag(kind: &str, name: &str, value: Option<&Value>, options: &Attributes) -> Markup {
    let attrs = Attributes::new()
        .with("type", kind)
        .with("name", name)
        .with("id", sanitize_to_id(name))
        .with("value", value.cloned().unwrap_or(Value::Null))
        .merged(options);
    tag("input", &attrs)
}

/// `<input type="text">`; an absent value omits the `value` attribute.
pub fn text_field_tag(name: &str, value: Option<&Value>, options: &Attributes) -> Markup {
    input_tag("text", name, value, options)
}

/// `<input type="hidden">`.
pub fn hidden_field_tag(name: &str, value: &Value, options: &Attributes) -> Markup {
    input_tag("hidden", name, Some(value), options)
}

/// `<input type="checkbox">`, marked checked when `checked` is set.
pub fn check_box_tag(name: &str, value: &Value, checked: bool, options: &Attributes) -> Markup {
    let mut attrs = Attributes::new()
        .with("type", "checkbox")
        .with("name", name)
        .with("id", sanitize_to_id(name))
        .with("value", value.clone())
        .merged(options);
    if checked {
        attrs.set("checked", true);
    }
    tag("input", &attrs)
}

/// `<input type="radio">` with id `{name}_{value}`.
pub fn radio_button_tag(name: &str, value: &Value, checked: bool, options: &Attributes) -> Markup {
    let text = to_text(value);
    let mut attrs = Attributes::new()
        .with("type", "radio")
        .with("name", name)
        .with("id", format!("{}_{}", sanitize_to_id(name), sanitize_to_id(&text)))
        .with("value", text)
        .merged(options);
    if checked {
        attrs.set("checked", true);
    }
    tag("input", &attrs)
}

/// `<label for="…">` around already-built content.
pub fn label_tag(for_name: &str, content: &Markup, options: &Attributes) -> Markup {
    let attrs = Attributes::new()
        .with("for", sanitize_to_id(for_name))
        .merged(options);
    content_tag("label", &attrs, content)
}

/// `<textarea>` holding the escaped value.
pub fn text_area_tag(name: &str, value: Option<&Value>, options: &Attributes) -> Markup {
    let attrs = Attributes::new()
        .with("name", name)
        .with("id", sanitize_to_id(name))
        .merged(options);
    let body = value.map(|v| Markup::escape(&to_text(v))).unwrap_or_default();
    content_tag("textarea", &attrs, &body)
}

/// Leading option of a select that carries no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Placeholder {
    Blank,
    Prompt(String),
}

/// `<select>` around pre-rendered option tags, with an optional placeholder
/// option first.
pub fn select_tag(
    name: &str,
    option_tags: &Markup,
    placeholder: Option<&Placeholder>,
    options: &Attributes,
) -> Markup {
    let mut body = match placeholder {
        Some(Placeholder::Blank) => option_tag("", "", false),
        Some(Placeholder::Prompt(prompt)) => option_tag("", prompt, false),
        None => Markup::empty(),
    };
    body.push(option_tags);
    let attrs = Attributes::new()
        .with("name", name)
        .with("id", sanitize_to_id(name))
        .merged(options);
    content_tag("select", &attrs, &body)
}

fn option_tag(value: &str, label: &str, selected: bool) -> Markup {
    let mut attrs = Attributes::new().with("value", value);
    if selected {
        attrs.set("selected", true);
    }
    content_tag("option", &attrs, &Markup::escape(label))
}

/// One `<option>` per choice; a choice is selected when its value text
/// equals the text of `selected` (or of any element when `selected` is an
/// array).
pub fn options_for_select(choices: &[Choice], selected: Option<&Value>) -> Markup {
    let selected: Vec<String> = match selected {
        Some(Value::Array(items)) => items.iter().map(to_text).collect(),
        Some(value) => vec![to_text(value)],
        None => Vec::new(),
    };
    choices
        .iter()
        .map(|choice| {
            let value = to_text(&choice.value);
            let is_selected = selected.contains(&value);
            option_tag(&value, &choice.label, is_selected)
        })
        .collect()
}

/// `<a href="url">title</a>` with extra attributes after `href`.
pub fn link_to(title: &str, url: &str, options: &Attributes) -> Markup {
    let attrs = Attributes::new().with("href", url).merged(options);
    content_tag("a", &attrs, &Markup::escape(title))
}
