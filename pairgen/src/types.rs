//! Typed field options, one shape per rendering mode.
//!
//! Every shape serializes to/from YAML or JSON. [`FieldSpec`] is tagged by
//! `kind`, so a list of field rows can live in a plain config file:
//!
//! ```yaml
//! - kind: text_field
//!   attr: full_name
//!   prefix: user
//! - kind: select
//!   attr: scheduler
//!   collection: [[1, Tom], [2, Dick], [3, Harry]]
//!   prompt: Pick Me
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PairError, Result};
use crate::markup::Attributes;
use crate::value::{to_text, Value};

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Presentation options shared by every mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairOptions {
    /// Label cell text; defaults to the humanized attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Inline help appended to the content cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Attributes for the content cell itself.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub dd_options: Attributes,
}

/// Chainable setters for the presentation options of any mode.
pub trait WithPairOptions: Sized {
    fn pair_options_mut(&mut self) -> &mut PairOptions;

    fn label(mut self, label: impl Into<String>) -> Self {
        self.pair_options_mut().label = Some(label.into());
        self
    }

    fn help(mut self, help: impl Into<String>) -> Self {
        self.pair_options_mut().help = Some(help.into());
        self
    }

    fn dd_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.pair_options_mut().dd_options.set(name, value);
        self
    }
}

impl WithPairOptions for PairOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        self
    }
}

/// Options for read-only text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlainTextOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub pair: PairOptions,
}

impl PlainTextOptions {
    /// Show the named attribute of the backing object.
    pub fn attr(attr: impl Into<String>) -> Self {
        Self {
            attr: Some(attr.into()),
            ..Self::default()
        }
    }

    /// Show a fixed value.
    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl WithPairOptions for PlainTextOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        &mut self.pair
    }
}

/// Options for an anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkOptions {
    /// Only used for the default label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
    pub title: String,
    pub url: String,
    /// Extra attributes for the anchor.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub field_options: Attributes,
    #[serde(flatten)]
    pub pair: PairOptions,
}

impl LinkOptions {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            attr: None,
            title: title.into(),
            url: url.into(),
            field_options: Attributes::new(),
            pair: PairOptions::default(),
        }
    }

    pub fn field_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field_options.set(name, value);
        self
    }

    /// Attribute whose humanized name becomes the default label.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attr = Some(attr.into());
        self
    }
}

impl WithPairOptions for LinkOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        &mut self.pair
    }
}

/// Options shared by every form input mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputOptions {
    /// Attribute to read and the base of the field's name and id.
    pub attr: String,
    /// Explicit value; wins over the backing object whenever present.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Namespace for the name (`prefix[attr]`) and id (`prefix_attr`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Extra attributes merged onto the generated field.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub field_options: Attributes,
    #[serde(flatten)]
    pub pair: PairOptions,
}

impl InputOptions {
    pub fn new(attr: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            value: None,
            prefix: None,
            disabled: false,
            field_options: Attributes::new(),
            pair: PairOptions::default(),
        }
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn field_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field_options.set(name, value);
        self
    }

    /// Wire name: `prefix[attr]`, or `attr` without a prefix.
    pub fn name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}[{}]", self.attr),
            None => self.attr.clone(),
        }
    }

    /// Id key: `prefix_attr`, or `attr` without a prefix.
    pub fn attribute(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}_{}", self.attr),
            None => self.attr.clone(),
        }
    }
}

impl WithPairOptions for InputOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        &mut self.pair
    }
}

/// Options for a `<select>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOptions {
    #[serde(flatten)]
    pub input: InputOptions,
    pub collection: Collection,
    /// Leading option text with an empty value. Takes the placeholder slot
    /// over `include_blank`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default)]
    pub include_blank: bool,
}

impl SelectOptions {
    pub fn new(input: InputOptions, collection: impl Into<Collection>) -> Self {
        Self {
            input,
            collection: collection.into(),
            prompt: None,
            include_blank: false,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn include_blank(mut self, include_blank: bool) -> Self {
        self.include_blank = include_blank;
        self
    }
}

impl WithPairOptions for SelectOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        &mut self.input.pair
    }
}

/// Options for a checkbox with its hidden unchecked companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxOptions {
    #[serde(flatten)]
    pub input: InputOptions,
    /// Value submitted when checked; `true` unless set to something truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_value: Option<Value>,
    /// Value submitted when unchecked; `false` unless set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unchecked_value: Option<Value>,
}

impl CheckboxOptions {
    pub fn new(input: InputOptions) -> Self {
        Self {
            input,
            checked_value: None,
            unchecked_value: None,
        }
    }

    pub fn checked_value(mut self, value: impl Into<Value>) -> Self {
        self.checked_value = Some(value.into());
        self
    }

    pub fn unchecked_value(mut self, value: impl Into<Value>) -> Self {
        self.unchecked_value = Some(value.into());
        self
    }
}

impl WithPairOptions for CheckboxOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        &mut self.input.pair
    }
}

/// Options for a radio button group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOptions {
    #[serde(flatten)]
    pub input: InputOptions,
    pub collection: Collection,
}

impl RadioOptions {
    pub fn new(input: InputOptions, collection: impl Into<Collection>) -> Self {
        Self {
            input,
            collection: collection.into(),
        }
    }
}

impl WithPairOptions for RadioOptions {
    fn pair_options_mut(&mut self) -> &mut PairOptions {
        &mut self.input.pair
    }
}

/// One entry of a select or radio collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub value: Value,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// A bare value that doubles as its own label.
    pub fn scalar(value: impl Into<Value>) -> Self {
        let value = value.into();
        let label = to_text(&value);
        Self { value, label }
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

impl TryFrom<Value> for Choice {
    type Error = PairError;

    /// Accepts a scalar or a `[value, label]` pair with a scalar label.
    fn try_from(entry: Value) -> Result<Self> {
        match entry {
            Value::Array(mut pair) if pair.len() == 2 && is_scalar(&pair[1]) => {
                let label = to_text(&pair[1]);
                let value = pair.swap_remove(0);
                Ok(Choice { value, label })
            }
            scalar if is_scalar(&scalar) => Ok(Choice::scalar(scalar)),
            other => Err(PairError::MalformedChoice {
                entry: other.to_string(),
            }),
        }
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.value, &self.label).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entry = Value::deserialize(deserializer)?;
        Choice::try_from(entry).map_err(serde::de::Error::custom)
    }
}

/// Ordered choices for a select or radio group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<Choice>);

impl Collection {
    /// Bare values, each its own label.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self(values.into_iter().map(Choice::scalar).collect())
    }

    /// `(value, label)` pairs.
    pub fn from_pairs<I, V, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<Value>,
        L: Into<String>,
    {
        Self(pairs.into_iter().map(|(v, l)| Choice::new(v, l)).collect())
    }

    pub fn choices(&self) -> &[Choice] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Choice>> for Collection {
    fn from(choices: Vec<Choice>) -> Self {
        Self(choices)
    }
}

impl FromIterator<Choice> for Collection {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for Collection {
    type Error = PairError;

    /// Accepts a JSON array of entries; every entry must be well formed.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(entries) => entries.into_iter().map(Choice::try_from).collect(),
            other => Err(PairError::MalformedChoice {
                entry: other.to_string(),
            }),
        }
    }
}

/// A single field row in any of the supported modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    PlainText(PlainTextOptions),
    Link(LinkOptions),
    Date(InputOptions),
    Select(SelectOptions),
    Checkbox(CheckboxOptions),
    TextField(InputOptions),
    TextArea(InputOptions),
    Radio(RadioOptions),
}

impl FieldSpec {
    /// The `kind` tag of this spec.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::PlainText(_) => "plain_text",
            FieldSpec::Link(_) => "link",
            FieldSpec::Date(_) => "date",
            FieldSpec::Select(_) => "select",
            FieldSpec::Checkbox(_) => "checkbox",
            FieldSpec::TextField(_) => "text_field",
            FieldSpec::TextArea(_) => "text_area",
            FieldSpec::Radio(_) => "radio",
        }
    }

    pub fn pair_options_mut(&mut self) -> &mut PairOptions {
        match self {
            FieldSpec::PlainText(options) => &mut options.pair,
            FieldSpec::Link(options) => &mut options.pair,
            FieldSpec::Date(input) | FieldSpec::TextField(input) | FieldSpec::TextArea(input) => {
                &mut input.pair
            }
            FieldSpec::Select(select) => &mut select.input.pair,
            FieldSpec::Checkbox(checkbox) => &mut checkbox.input.pair,
            FieldSpec::Radio(radio) => &mut radio.input.pair,
        }
    }

    /// Input options for the form modes; `None` for plain text and links.
    pub fn input_mut(&mut self) -> Option<&mut InputOptions> {
        match self {
            FieldSpec::PlainText(_) | FieldSpec::Link(_) => None,
            FieldSpec::Date(input) | FieldSpec::TextField(input) | FieldSpec::TextArea(input) => {
                Some(input)
            }
            FieldSpec::Select(select) => Some(&mut select.input),
            FieldSpec::Checkbox(checkbox) => Some(&mut checkbox.input),
            FieldSpec::Radio(radio) => Some(&mut radio.input),
        }
    }
}
