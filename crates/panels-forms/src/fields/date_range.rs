//! Date-range field helpers.

use crate::form::FormField;
use crate::validation::DateRangeValidator;
use crate::widgets::{DateRangePicker, OpensSide};

/// Creates a date-range text field with a picker opening on the given side.
pub fn date_range_field(name: &str, label: &str, opens: OpensSide) -> FormField {
    FormField::new(name, label, DateRangePicker::new(opens)).validator(DateRangeValidator::new())
}

/// Returns the four date-range fields of the trial search panel.
///
/// Start-oriented fields open their picker to the right, end-oriented
/// fields to the left. Each binding writes into its own input only.
pub fn trial_date_fields() -> Vec<FormField> {
    vec![
        date_range_field("start-date", "Start Date", OpensSide::Right),
        date_range_field("first-posted", "First Posted", OpensSide::Right),
        date_range_field("last-update", "Last Update", OpensSide::Left),
        date_range_field("end-date", "End Date", OpensSide::Left),
    ]
}
