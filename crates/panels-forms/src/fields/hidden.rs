//! Hidden field helper.

use crate::form::FormField;
use crate::widgets::HiddenInput;

/// Creates a hidden field.
pub fn hidden_field(name: &str, initial: Option<&str>) -> FormField {
    let mut field = FormField::new(name, "", HiddenInput);

    if let Some(value) = initial {
        field = field.value(value);
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_field() {
        let field = hidden_field("csrfmiddlewaretoken", Some("abc123"));
        assert_eq!(field.name, "csrfmiddlewaretoken");
        assert_eq!(field.values, vec!["abc123".to_string()]);
    }

    #[test]
    fn test_hidden_field_without_initial() {
        let field = hidden_field("newslettercontent", None);
        assert!(field.values.is_empty());
    }
}
