//! Search request payload.

use serde::Serialize;
use serde_json::json;

/// Field name the anti-forgery token travels under.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Field name carrying the requested page.
pub const PAGE_FIELD: &str = "page";

/// Value of one payload entry: a single string or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A field that occurred once.
    Single(String),
    /// A field that occurred several times, values in document order.
    Many(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                *self = Self::Many(vec![std::mem::take(first), value]);
            }
            Self::Many(values) => values.push(value),
        }
    }
}

/// The payload of one search request.
///
/// Built fresh on every explicit submission; a pagination activation reuses
/// the last payload with only the page overwritten. The token and the page
/// are fixed slots; everything else is an ordered entry list keyed by field
/// name, where a repeated name accumulates an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPayload {
    token: String,
    page: usize,
    entries: Vec<(String, FieldValue)>,
}

impl SearchPayload {
    /// Builds a payload from serialized form fields, with `page` set to 1.
    ///
    /// Pairs with an empty value contribute nothing. The first occurrence
    /// of a name creates its entry; later occurrences append to it.
    pub fn from_fields(token: impl Into<String>, fields: &[(String, String)]) -> Self {
        let mut entries: Vec<(String, FieldValue)> = Vec::new();

        for (name, value) in fields {
            if value.is_empty() {
                continue;
            }
            match entries.iter_mut().find(|(n, _)| n == name) {
                Some((_, existing)) => existing.push(value.clone()),
                None => entries.push((name.clone(), FieldValue::Single(value.clone()))),
            }
        }

        Self {
            token: token.into(),
            page: 1,
            entries,
        }
    }

    /// Returns the anti-forgery token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the requested page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Overwrites only the page, leaving every other entry untouched.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Returns the entry for a field name, if present.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the ordered field entries.
    pub fn entries(&self) -> &[(String, FieldValue)] {
        &self.entries
    }

    /// Flattens the payload into ordered query pairs.
    ///
    /// The token and page come first; a multi-valued entry emits one pair
    /// per value, in order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (CSRF_FIELD.to_string(), self.token.clone()),
            (PAGE_FIELD.to_string(), self.page.to_string()),
        ];

        for (name, value) in &self.entries {
            match value {
                FieldValue::Single(v) => pairs.push((name.clone(), v.clone())),
                FieldValue::Many(vs) => {
                    for v in vs {
                        pairs.push((name.clone(), v.clone()));
                    }
                }
            }
        }

        pairs
    }

    /// Returns the payload as a JSON object snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(CSRF_FIELD.to_string(), json!(self.token));
        map.insert(PAGE_FIELD.to_string(), json!(self.page));
        for (name, value) in &self.entries {
            map.insert(
                name.clone(),
                serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
            );
        }
        serde_json::Value::Object(map)
    }
}
