//! Widgets for rendering filter panel inputs.

mod date_range;

pub use date_range::{DateRange, DateRangePicker, OpensSide};

use std::collections::HashMap;

/// Attributes that can be applied to a widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: HashMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: HashMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{v}""#))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for widgets that render filter panel inputs.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Renders the widget with the full value list of its field.
    ///
    /// Single-value widgets ignore everything past the first value; group
    /// widgets (checkbox groups) mark every matching option.
    fn render_group(&self, name: &str, values: &[String], attrs: &WidgetAttrs) -> String {
        self.render(name, values.first().map(String::as_str), attrs)
    }

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// A plain text input widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl TextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "form-control".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let extra_attrs: String = attrs
            .attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "class" && k.as_str() != "id")
            .map(|(k, v)| format!(r#" {k}="{v}""#))
            .collect();

        format!(
            r#"<input type="text" class="{}" id="{}" name="{}"{}{}{extra_attrs}>"#,
            class, id, name, value_attr, placeholder_attr
        )
    }
}

/// A hidden input widget.
///
/// Used for the anti-forgery token and for the editor content holders that
/// are populated right before the enclosing form submits.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let extra_attrs = if attrs.attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", attrs.to_html())
        };
        format!(r#"<input type="hidden" name="{name}"{value_attr}{extra_attrs}>"#)
    }

    fn input_type(&self) -> &str {
        "hidden"
    }
}

/// A group of checkboxes sharing one field name.
///
/// Every checked box contributes its own `(name, value)` pair when the form
/// is serialized, which is how a field becomes multi-valued.
#[derive(Debug, Clone, Default)]
pub struct CheckboxGroup {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Whether to display inline.
    pub inline: bool,
}

impl CheckboxGroup {
    /// Creates a new checkbox group with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            inline: false,
        }
    }

    /// Makes the checkboxes display inline.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

impl Widget for CheckboxGroup {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let values: Vec<String> = value.map(|v| vec![v.to_string()]).unwrap_or_default();
        self.render_group(name, &values, attrs)
    }

    fn render_group(&self, name: &str, values: &[String], _attrs: &WidgetAttrs) -> String {
        let wrapper_class = if self.inline {
            "form-check form-check-inline"
        } else {
            "form-check"
        };

        let mut html = String::new();

        for (i, (opt_value, label)) in self.choices.iter().enumerate() {
            let id = format!("id_{name}_{i}");
            let checked = values.iter().any(|v| v == opt_value);
            let checked_attr = if checked { " checked" } else { "" };

            html.push_str(&format!(
                r#"<div class="{}">
  <input class="form-check-input" type="checkbox" id="{}" name="{}" value="{}"{checked_attr}>
  <label class="form-check-label" for="{}">{}</label>
</div>
"#,
                wrapper_class,
                id,
                name,
                html_escape(opt_value),
                id,
                html_escape(label)
            ));
        }

        html
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
