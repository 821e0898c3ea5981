//! Form model and filter panel rendering.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;

use crate::error::{FormError, Result, ValidationErrors};
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

/// One named control of a form, together with its current values.
///
/// A control normally holds at most one value; a checkbox group holds one
/// value per checked box, in document order.
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Current values in document order.
    pub values: Vec<String>,
    /// Help text.
    pub help_text: Option<String>,
    /// Validators.
    pub validators: Vec<Box<dyn Validator>>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("values", &self.values)
            .field("help_text", &self.help_text)
            .finish_non_exhaustive()
    }
}

impl FormField {
    /// Creates a new field.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            widget: Box::new(widget),
            values: Vec::new(),
            help_text: None,
            validators: Vec::new(),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Sets an initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values = vec![value.into()];
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Renders the field's control with its current values.
    pub fn render_control(&self) -> String {
        self.widget.render_group(&self.name, &self.values, &self.attrs)
    }
}

/// An ordered collection of form fields.
///
/// Field order is document order; serialization walks it front to back.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fields in document order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the first field with the given name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Replaces the value of the first field with the given name.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.values = vec![value.into()];
        Ok(())
    }

    /// Appends a value to the first field with the given name.
    ///
    /// This is how a checkbox group accumulates checked boxes.
    pub fn push_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.values.push(value.into());
        Ok(())
    }

    /// Clears all values of the first field with the given name.
    pub fn clear_value(&mut self, name: &str) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.values.clear();
        Ok(())
    }

    /// Serializes the form into ordered `(name, value)` pairs.
    ///
    /// Pairs appear in document order; a field with several values
    /// contributes one pair per value. Empty values are skipped.
    pub fn serialize(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for field in &self.fields {
            for value in &field.values {
                if !value.is_empty() {
                    pairs.push((field.name.clone(), value.clone()));
                }
            }
        }
        pairs
    }

    /// Runs every field's validators against its current values.
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            for value in &field.values {
                for validator in &field.validators {
                    if let Err(msg) = validator.validate(value) {
                        errors.add(&field.name, msg);
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Renders one field with its label, control, errors, and help text.
pub fn render_field(field: &FormField, errors: &[String]) -> String {
    let id = format!("id_{}", field.name);
    let label_text = field.label.clone();

    let control_html = field.render_control();
    let help_text = field.help_text.clone();

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&control_html)
        .children(errors, |error, div: Element<Div>| {
            div.class("invalid-feedback").text(error)
        })
        .when(help_text.is_some(), |d| {
            d.child::<Div, _>(|h| {
                h.class("form-text")
                    .text(help_text.as_deref().unwrap_or(""))
            })
        })
        .render()
}

/// Renders the whole filter panel as a form.
///
/// The controls live inside a collapsible container so the page can fold
/// the panel away while results render; the submit control carries the id
/// the search controller is triggered by.
pub fn render_filter_panel(form: &Form, errors: &ValidationErrors) -> String {
    let mut panel = html! {
        form.method("get")
    }
    .attr("id", "search-filters");

    panel = panel.child::<Div, _>(|fields_container| {
        let mut fields_container = fields_container
            .class("collapse show")
            .attr("id", "fieldsContainer");
        for field in form.fields() {
            let field_errors = errors.get(&field.name).cloned().unwrap_or_default();
            let field_html = render_field(field, &field_errors);
            fields_container = fields_container.child::<Div, _>(|d| d.raw(&field_html));
        }
        fields_container
    });

    panel = panel.child::<Div, _>(|d| {
        let btn = html! {
            button.type_("button").class("btn btn-primary") {
                "Search"
            }
        }
        .attr("id", "form-submit");
        d.raw(btn.render())
    });

    panel.render()
}

/// A builder for assembling a form field by field.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormField>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the assembled form.
    pub fn build(self) -> Form {
        Form {
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{CheckboxGroup, TextInput};

    fn sample_form() -> Form {
        FormBuilder::new()
            .field(FormField::new("nct-id", "NCT ID", TextInput::new()))
            .field(FormField::new(
                "status",
                "Status",
                CheckboxGroup::new(vec![
                    ("recruiting", "Recruiting"),
                    ("completed", "Completed"),
                ]),
            ))
            .build()
    }

    #[test]
    fn test_serialize_document_order() {
        let mut form = sample_form();
        form.set_value("nct-id", "NCT0001").unwrap();
        form.push_value("status", "recruiting").unwrap();
        form.push_value("status", "completed").unwrap();

        let pairs = form.serialize();
        assert_eq!(
            pairs,
            vec![
                ("nct-id".to_string(), "NCT0001".to_string()),
                ("status".to_string(), "recruiting".to_string()),
                ("status".to_string(), "completed".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_skips_empty_values() {
        let mut form = sample_form();
        form.set_value("nct-id", "").unwrap();
        form.push_value("status", "recruiting").unwrap();

        let pairs = form.serialize();
        assert_eq!(
            pairs,
            vec![("status".to_string(), "recruiting".to_string())]
        );
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut form = sample_form();
        assert!(matches!(
            form.set_value("phase", "1"),
            Err(crate::FormError::UnknownField(_))
        ));
    }

    #[test]
    fn test_render_filter_panel() {
        let form = sample_form();
        let html = render_filter_panel(&form, &ValidationErrors::new());
        assert!(html.contains(r#"id="search-filters""#));
        assert!(html.contains(r#"id="fieldsContainer""#));
        assert!(html.contains(r#"id="form-submit""#));
        assert!(html.contains(r#"name="status""#));
    }

    #[test]
    fn test_render_field_with_errors() {
        let field = FormField::new("start-date", "Start Date", TextInput::new());
        let html = render_field(&field, &["Enter a valid date range.".to_string()]);
        assert!(html.contains("invalid-feedback"));
        assert!(html.contains("Enter a valid date range."));
    }
}
