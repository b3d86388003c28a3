//! PairGenerator: renders one label/content pair per call.
//!
//! A generator holds an optional reference to the backing object and the
//! class configuration. Every mode call resolves its value, name and id from
//! the options it is given, builds the mode's content through
//! [`crate::helpers`], and wraps it in a `<dt>`/`<dd>` pair.

use std::fmt;

use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::helpers::{
    check_box_tag, hidden_field_tag, humanize, label_tag, link_to, options_for_select,
    radio_button_tag, select_tag, text_area_tag, text_field_tag, Placeholder,
};
use crate::markup::{content_tag, Attributes, Markup};
use crate::source::AttributeSource;
use crate::types::{
    CheckboxOptions, FieldSpec, InputOptions, LinkOptions, PairOptions, PlainTextOptions,
    RadioOptions, SelectOptions,
};
use crate::value::{opt_to_text, to_text, Value};

/// A rendered label cell and content cell.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPair {
    /// The `<dt>` element.
    pub label: Markup,
    /// The `<dd>` element.
    pub content: Markup,
}

impl FieldPair {
    pub fn into_markup(self) -> Markup {
        self.label + self.content
    }
}

impl fmt::Display for FieldPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.content)
    }
}

/// Generates field pairs for one backing object.
///
/// ```rust
/// use pairgen::{InputOptions, PairGenerator, Record, WithPairOptions};
///
/// let user = Record::new().with("full_name", "Ada Lovelace");
/// let pairs = PairGenerator::new(&user);
/// let html = pairs.text_field(&InputOptions::new("full_name").prefix("user").help("As on your passport"));
/// assert!(html.to_string().contains(r#"name="user[full_name]""#));
/// ```
#[derive(Clone)]
pub struct PairGenerator<'a> {
    obj: Option<&'a dyn AttributeSource>,
    config: GeneratorConfig,
}

impl<'a> PairGenerator<'a> {
    /// A generator reading attributes from `obj`.
    pub fn new<S: AttributeSource>(obj: &'a S) -> Self {
        Self {
            obj: Some(obj),
            config: GeneratorConfig::default(),
        }
    }

    /// A generator without a backing object; only explicit values render.
    pub fn detached() -> Self {
        Self {
            obj: None,
            config: GeneratorConfig::default(),
        }
    }

    /// Replace the class-token configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// The backing object this generator was built with.
    pub fn obj(&self) -> Option<&'a dyn AttributeSource> {
        self.obj
    }

    /// The class-token configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render any field spec through its mode.
    pub fn render(&self, spec: &FieldSpec) -> FieldPair {
        match spec {
            FieldSpec::PlainText(options) => self.plain_text(options),
            FieldSpec::Link(options) => self.link(options),
            FieldSpec::Date(options) => self.date(options),
            FieldSpec::Select(options) => self.select(options),
            FieldSpec::Checkbox(options) => self.checkbox(options),
            FieldSpec::TextField(options) => self.text_field(options),
            FieldSpec::TextArea(options) => self.text_area(options),
            FieldSpec::Radio(options) => self.radio(options),
        }
    }

    /// The resolved value as escaped text.
    pub fn plain_text(&self, options: &PlainTextOptions) -> FieldPair {
        let value = self.resolve_value(options.value.as_ref(), options.attr.as_deref());
        let content = Markup::escape(&opt_to_text(value.as_ref()));
        self.pair("plain_text", options.attr.as_deref(), &options.pair, content)
    }

    /// An anchor built from `title` and `url`.
    pub fn link(&self, options: &LinkOptions) -> FieldPair {
        let content = link_to(&options.title, &options.url, &options.field_options);
        self.pair("link", options.attr.as_deref(), &options.pair, content)
    }

    /// A text input carrying the datepicker class.
    pub fn date(&self, options: &InputOptions) -> FieldPair {
        let mut attrs = field_attributes(options);
        let mut classes = attrs.get("class").map(class_tokens).unwrap_or_default();
        classes.push(self.config.datepicker_class.clone());
        attrs.set("class", classes.join(" "));

        let value = self.input_value(options);
        let content = text_field_tag(&options.attribute(), value.as_ref(), &attrs);
        self.pair("date", Some(&options.attr), &options.pair, content)
    }

    /// A select with one option per collection entry.
    pub fn select(&self, options: &SelectOptions) -> FieldPair {
        let input = &options.input;
        let value = self.input_value(input);
        let option_tags = options_for_select(options.collection.choices(), value.as_ref());
        let placeholder = match (&options.prompt, options.include_blank) {
            (Some(prompt), _) => Some(Placeholder::Prompt(prompt.clone())),
            (None, true) => Some(Placeholder::Blank),
            (None, false) => None,
        };
        let attrs = field_attributes(input);
        let content = select_tag(
            &input.attribute(),
            &option_tags,
            placeholder.as_ref(),
            &attrs,
        );
        self.pair("select", Some(&input.attr), &input.pair, content)
    }

    /// A hidden input with the unchecked value followed by the checkbox.
    ///
    /// The checkbox is checked when the resolved value and the checked value
    /// have the same text, so `5` matches `"5"` but not `"05"`.
    pub fn checkbox(&self, options: &CheckboxOptions) -> FieldPair {
        let input = &options.input;
        let unchecked = options.unchecked_value.clone().unwrap_or(Value::Bool(false));
        let checked_value = match &options.checked_value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Value::Bool(true),
            Some(value) => value.clone(),
        };
        let value = self.input_value(input);
        let is_checked = opt_to_text(value.as_ref()) == to_text(&checked_value);

        let attrs = field_attributes(input);
        let name = attrs.get("name").cloned().unwrap_or_else(|| input.name().into());
        let disabled = attrs.get("disabled").cloned().unwrap_or(Value::Bool(input.disabled));
        let hidden_attrs = Attributes::new()
            .with("name", name)
            .with("id", Value::Null)
            .with("disabled", disabled);
        let hidden = hidden_field_tag(&input.attribute(), &unchecked, &hidden_attrs);

        let checkbox = check_box_tag(&input.attribute(), &checked_value, is_checked, &attrs);
        self.pair("checkbox", Some(&input.attr), &input.pair, hidden + checkbox)
    }

    /// A single-line text input.
    pub fn text_field(&self, options: &InputOptions) -> FieldPair {
        let value = self.input_value(options);
        let attrs = field_attributes(options);
        let content = text_field_tag(&options.attribute(), value.as_ref(), &attrs);
        self.pair("text_field", Some(&options.attr), &options.pair, content)
    }

    /// A multi-line text input.
    pub fn text_area(&self, options: &InputOptions) -> FieldPair {
        let value = self.input_value(options);
        let attrs = field_attributes(options);
        let content = text_area_tag(&options.attribute(), value.as_ref(), &attrs);
        self.pair("text_area", Some(&options.attr), &options.pair, content)
    }

    /// An ordered list of labelled radio buttons sharing one name.
    ///
    /// Unlike the checkbox, a radio is checked on exact value equality:
    /// `2` does not match `"2"`.
    pub fn radio(&self, options: &RadioOptions) -> FieldPair {
        let input = &options.input;
        let attribute = input.attribute();
        let resolved = self.input_value(input).unwrap_or(Value::Null);
        let attrs = field_attributes(input);
        let label_attrs = Attributes::new().with("class", self.config.radio_label_class.as_str());

        let items: Markup = options
            .collection
            .choices()
            .iter()
            .map(|choice| {
                let checked = choice.value == resolved;
                let button = radio_button_tag(&attribute, &choice.value, checked, &attrs);
                let for_name = format!("{attribute}_{}", to_text(&choice.value));
                let label = label_tag(&for_name, &(button + Markup::escape(&choice.label)), &label_attrs);
                content_tag("li", &Attributes::new(), &label)
            })
            .collect();

        let list_attrs = Attributes::new().with("class", self.config.radio_list_class.as_str());
        let content = content_tag("ol", &list_attrs, &items);
        self.pair("radio", Some(&input.attr), &input.pair, content)
    }

    fn input_value(&self, options: &InputOptions) -> Option<Value> {
        self.resolve_value(options.value.as_ref(), Some(&options.attr))
    }

    /// An explicit value wins; otherwise read the attribute from the object.
    fn resolve_value(&self, explicit: Option<&Value>, attr: Option<&str>) -> Option<Value> {
        if let Some(value) = explicit {
            return Some(value.clone());
        }
        let attr = attr?;
        let value = self.obj.and_then(|obj| obj.read_attribute(attr));
        if value.is_none() {
            debug!(attr, "backing object does not expose attribute; rendering empty");
        }
        value
    }

    fn pair(
        &self,
        mode: &str,
        attr: Option<&str>,
        options: &PairOptions,
        mut content: Markup,
    ) -> FieldPair {
        let label_text = match &options.label {
            Some(label) => label.clone(),
            None => attr.map(humanize).unwrap_or_default(),
        };
        if let Some(help) = &options.help {
            let help_attrs = Attributes::new().with("class", self.config.help_class.as_str());
            content += content_tag("span", &help_attrs, &Markup::escape(help));
        }
        trace!(mode, attr, "rendered field pair");
        FieldPair {
            label: content_tag("dt", &Attributes::new(), &Markup::escape(&label_text)),
            content: content_tag("dd", &options.dd_options, &content),
        }
    }
}

impl fmt::Debug for PairGenerator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairGenerator")
            .field("has_obj", &self.obj.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// `{disabled, name}` with the caller's field options merged on top.
fn field_attributes(options: &InputOptions) -> Attributes {
    Attributes::new()
        .with("disabled", options.disabled)
        .with("name", options.name())
        .merged(&options.field_options)
}

fn class_tokens(value: &Value) -> Vec<String> {
    let tokens = match value {
        Value::Array(items) => items.iter().map(to_text).collect(),
        other => vec![to_text(other)],
    };
    tokens
        .into_iter()
        .flat_map(|token| token.split_whitespace().map(String::from).collect::<Vec<_>>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Record;
    use crate::types::{Collection, WithPairOptions};
    use serde_json::json;

    fn test_object() -> Record {
        Record::new()
            .with("id", 1)
            .with("full_name", "foo bar")
            .with("date", "2013-05-13")
            .with("featured", true)
            .with("scheduler", 2)
    }

    #[test]
    fn obj_is_kept() {
        let obj = test_object();
        let generator = PairGenerator::new(&obj);
        let kept = generator.obj().unwrap();
        assert_eq!(kept.read_attribute("id"), Some(json!(1)));
        assert!(PairGenerator::detached().obj().is_none());
    }

    #[test]
    fn plain_text_pair() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).plain_text(&PlainTextOptions::attr("id"));
        assert_eq!(pair.label.as_str(), "<dt>id</dt>");
        assert_eq!(pair.content.as_str(), "<dd>1</dd>");
        assert_eq!(pair.to_string(), "<dt>id</dt><dd>1</dd>");
    }

    #[test]
    fn missing_attribute_renders_empty() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).plain_text(&PlainTextOptions::attr("nickname"));
        assert_eq!(pair.content.as_str(), "<dd></dd>");

        let detached = PairGenerator::detached().text_field(&InputOptions::new("full_name"));
        assert!(!detached.content.as_str().contains("value="));
    }

    #[test]
    fn falsy_explicit_value_wins() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj)
            .text_field(&InputOptions::new("full_name").value(false));
        assert!(pair.content.as_str().contains("value=\"false\""));
    }

    #[test]
    fn text_field_markup() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).text_field(&InputOptions::new("full_name"));
        assert_eq!(
            pair.to_string(),
            "<dt>full name</dt><dd><input type=\"text\" name=\"full_name\" id=\"full_name\" value=\"foo bar\" /></dd>"
        );
    }

    #[test]
    fn disabled_and_field_options() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).text_field(
            &InputOptions::new("full_name")
                .disabled(true)
                .field_option("name", "override")
                .field_option("placeholder", "Your name"),
        );
        let html = pair.content.as_str();
        assert!(html.contains("disabled=\"disabled\""));
        assert!(html.contains("name=\"override\""));
        assert!(html.contains("placeholder=\"Your name\""));
    }

    #[test]
    fn date_class_is_additive() {
        let obj = test_object();
        let generator = PairGenerator::new(&obj);
        let plain = generator.date(&InputOptions::new("date"));
        assert!(plain.content.as_str().contains("class=\"datepicker\""));

        let extra = generator.date(&InputOptions::new("date").field_option("class", "flibberty"));
        assert!(extra.content.as_str().contains("class=\"flibberty datepicker\""));
    }

    #[test]
    fn select_prompt_wins_over_blank() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).select(
            &SelectOptions::new(
                InputOptions::new("scheduler"),
                Collection::from_pairs([(1, "Tom"), (2, "Dick")]),
            )
            .prompt("Pick Me")
            .include_blank(true),
        );
        let html = pair.content.as_str();
        assert_eq!(html.matches("value=\"\"").count(), 1);
        assert!(html.contains("<option value=\"\">Pick Me</option>"));
        assert!(html.contains("<option value=\"2\" selected=\"selected\">Dick</option>"));
    }

    #[test]
    fn checkbox_defaults() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).checkbox(&CheckboxOptions::new(InputOptions::new("featured")));
        assert_eq!(
            pair.content.as_str(),
            "<dd><input type=\"hidden\" name=\"featured\" value=\"false\" />\
             <input type=\"checkbox\" name=\"featured\" id=\"featured\" value=\"true\" checked=\"checked\" /></dd>"
        );
    }

    #[test]
    fn checkbox_compares_text() {
        let obj = Record::new().with("featured", "5");
        let generator = PairGenerator::new(&obj);
        let checked = generator.checkbox(
            &CheckboxOptions::new(InputOptions::new("featured")).checked_value(5),
        );
        assert!(checked.content.as_str().contains("checked=\"checked\""));

        let obj = Record::new().with("featured", "05");
        let unchecked = PairGenerator::new(&obj).checkbox(
            &CheckboxOptions::new(InputOptions::new("featured")).checked_value(5),
        );
        assert!(!unchecked.content.as_str().contains("checked=\"checked\""));
    }

    #[test]
    fn checkbox_hidden_follows_prefix_and_disabled() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).checkbox(
            &CheckboxOptions::new(InputOptions::new("featured").prefix("foo").disabled(true))
                .unchecked_value("no"),
        );
        assert!(pair
            .content
            .as_str()
            .starts_with("<dd><input type=\"hidden\" name=\"foo[featured]\" value=\"no\" disabled=\"disabled\" />"));
    }

    #[test]
    fn radio_compares_raw_values() {
        let obj = Record::new().with("scheduler", "2");
        let pair = PairGenerator::new(&obj).radio(&RadioOptions::new(
            InputOptions::new("scheduler"),
            Collection::from_pairs([(1, "Tom"), (2, "Dick")]),
        ));
        assert!(!pair.content.as_str().contains("checked"));
    }

    #[test]
    fn radio_markup() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).radio(&RadioOptions::new(
            InputOptions::new("scheduler"),
            Collection::from_pairs([(1, "Tom"), (2, "Dick")]),
        ));
        assert_eq!(
            pair.content.as_str(),
            "<dd><ol class=\"unstyled\">\
             <li><label for=\"scheduler_1\" class=\"radio\"><input type=\"radio\" name=\"scheduler\" id=\"scheduler_1\" value=\"1\" />Tom</label></li>\
             <li><label for=\"scheduler_2\" class=\"radio\"><input type=\"radio\" name=\"scheduler\" id=\"scheduler_2\" value=\"2\" checked=\"checked\" />Dick</label></li>\
             </ol></dd>"
        );
    }

    #[test]
    fn help_and_dd_options() {
        let obj = test_object();
        let pair = PairGenerator::new(&obj).plain_text(
            &PlainTextOptions::attr("id")
                .help("the <id>")
                .dd_option("class", "special-fluffy-dd"),
        );
        assert_eq!(
            pair.content.as_str(),
            "<dd class=\"special-fluffy-dd\">1<span class=\"help-inline\">the &lt;id&gt;</span></dd>"
        );
    }

    #[test]
    fn config_changes_class_tokens() {
        let obj = test_object();
        let config = GeneratorConfig {
            help_class: "form-text".into(),
            datepicker_class: "js-date".into(),
            ..GeneratorConfig::default()
        };
        let generator = PairGenerator::new(&obj).with_config(config);
        let date = generator.date(&InputOptions::new("date").help("yyyy-mm-dd"));
        assert!(date.content.as_str().contains("class=\"js-date\""));
        assert!(date.content.as_str().contains("<span class=\"form-text\">"));
    }

    #[test]
    fn link_label_defaults_to_empty() {
        let pair = PairGenerator::detached().link(&LinkOptions::new("foo", "http://example.com"));
        assert_eq!(pair.label.as_str(), "<dt></dt>");
    }

    #[test]
    fn link_label_humanizes_attr() {
        let pair = PairGenerator::detached()
            .link(&LinkOptions::new("foo", "http://example.com").attr("home_page"));
        assert_eq!(pair.label.as_str(), "<dt>home page</dt>");
        assert_eq!(
            pair.content.as_str(),
            "<dd><a href=\"http://example.com\">foo</a></dd>"
        );
    }

    #[test]
    fn checkbox_hidden_shares_overridden_name() {
        let pair = PairGenerator::detached().checkbox(&CheckboxOptions::new(
            InputOptions::new("f").field_option("name", "other"),
        ));
        assert_eq!(
            pair.content.as_str(),
            "<dd><input type=\"hidden\" name=\"other\" value=\"false\" />\
             <input type=\"checkbox\" name=\"other\" id=\"f\" value=\"true\" /></dd>"
        );
    }

    #[test]
    fn date_skips_empty_class_tokens() {
        let pair = PairGenerator::detached().date(
            &InputOptions::new("date").field_option("class", json!(["a", null, "", " b "])),
        );
        assert!(pair.content.as_str().contains("class=\"a b datepicker\""));
    }

    #[test]
    fn render_dispatches_by_kind() {
        let obj = test_object();
        let generator = PairGenerator::new(&obj);
        let spec = FieldSpec::TextArea(InputOptions::new("full_name"));
        assert_eq!(generator.render(&spec), generator.text_area(&InputOptions::new("full_name")));
    }

    #[test]
    fn concurrent_calls_render_identically() {
        let obj = test_object();
        let generator = PairGenerator::new(&obj);
        let options = InputOptions::new("full_name");
        let expected = generator.text_field(&options);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| PairGenerator::new(&obj).text_field(&options)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
