//! Checkbox group field helper.

use crate::form::FormField;
use crate::widgets::CheckboxGroup;

/// Creates a multi-valued choice field rendered as a checkbox group.
///
/// Each checked box contributes one `(name, value)` pair to the serialized
/// form, so several checked choices become one multi-valued payload entry.
pub fn choice_group_field(
    name: &str,
    label: &str,
    choices: Vec<(impl Into<String>, impl Into<String>)>,
) -> FormField {
    FormField::new(name, label, CheckboxGroup::new(choices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_group_field() {
        let field = choice_group_field(
            "phase",
            "Phase",
            vec![("1", "Phase 1"), ("2", "Phase 2"), ("3", "Phase 3")],
        );
        assert_eq!(field.name, "phase");
        assert_eq!(field.widget.input_type(), "checkbox");
    }
}
