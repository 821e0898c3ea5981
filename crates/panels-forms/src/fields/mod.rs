//! Field helpers for assembling the panel forms.

mod checkbox;
mod date_range;
mod hidden;

pub use checkbox::choice_group_field;
pub use date_range::{date_range_field, trial_date_fields};
pub use hidden::hidden_field;

use crate::form::FormField;
use crate::widgets::TextInput;

/// Creates a plain text filter field.
pub fn text_field(name: &str, label: &str) -> FormField {
    FormField::new(name, label, TextInput::new())
}
