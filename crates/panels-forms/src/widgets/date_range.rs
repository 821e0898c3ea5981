//! Date-range picker widget and value type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

use super::{html_escape, Widget, WidgetAttrs};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// An inclusive date range as confirmed in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses a range from its `MM/DD/YYYY - MM/DD/YYYY` input form.
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, " - ");
        let (start, end) = match (parts.next(), parts.next()) {
            (Some(start), Some(end)) => (start.trim(), end.trim()),
            _ => return Err(FormError::InvalidDateRange(value.to_string())),
        };

        let start = NaiveDate::parse_from_str(start, DATE_FORMAT)
            .map_err(|_| FormError::InvalidDateRange(value.to_string()))?;
        let end = NaiveDate::parse_from_str(end, DATE_FORMAT)
            .map_err(|_| FormError::InvalidDateRange(value.to_string()))?;

        Ok(Self { start, end })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Which side of its input the picker popup opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpensSide {
    /// Popup opens to the right (start-oriented fields).
    #[default]
    Right,
    /// Popup opens to the left (end-oriented fields).
    Left,
}

impl OpensSide {
    /// Returns the side as the picker's configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// A date-range picker bound to one text input.
///
/// The picker never writes the input from a partial selection; the only way
/// a value reaches the input is [`DateRangePicker::confirm`], which formats
/// a full range. Bindings are independent of each other.
#[derive(Debug, Clone, Default)]
pub struct DateRangePicker {
    /// Side the popup opens on.
    pub opens: OpensSide,
}

impl DateRangePicker {
    /// Creates a picker opening on the given side.
    pub fn new(opens: OpensSide) -> Self {
        Self { opens }
    }

    /// Creates a picker for a start-oriented field.
    pub fn opens_right() -> Self {
        Self::new(OpensSide::Right)
    }

    /// Creates a picker for an end-oriented field.
    pub fn opens_left() -> Self {
        Self::new(OpensSide::Left)
    }

    /// Formats a confirmed range as the value to write into the input.
    pub fn confirm(&self, range: DateRange) -> String {
        range.to_string()
    }
}

impl Widget for DateRangePicker {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "form-control date-range-input".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        format!(
            r#"<input type="text" class="{}" id="{}" name="{}" placeholder="Pick a Date Range" data-opens="{}" data-drops="auto" data-auto-update-input="false"{}>"#,
            class,
            id,
            name,
            self.opens.as_str(),
            value_attr
        )
    }
}
