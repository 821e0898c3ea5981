//! Incoming response type.

use std::collections::HashMap;

use crate::error::{ClientError, Result};

/// An incoming response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 200 OK response.
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// Creates a response with HTML content.
    pub fn html(body: impl Into<String>) -> Self {
        let body_str = body.into();
        Self {
            status: 200,
            headers: [(
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )]
            .into_iter()
            .collect(),
            body: body_str.into_bytes(),
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the status code.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns whether the status is a success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body as text, or an error for non-UTF-8 bodies.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.clone()).map_err(|_| ClientError::InvalidBody)
    }

    /// Decodes the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Returns whether the response declares an HTML content type.
    pub fn is_html(&self) -> bool {
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == "content-type")
            .is_some_and(|(_, v)| v.starts_with("text/html"))
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_html() {
        let res = Response::html("<div class=\"row\"></div>");
        assert_eq!(res.status, 200);
        assert!(res.is_success());
        assert!(res.is_html());
        assert_eq!(res.text().unwrap(), "<div class=\"row\"></div>");
    }

    #[test]
    fn test_response_failure_status() {
        let res = Response::new(500);
        assert!(!res.is_success());
    }

    #[test]
    fn test_response_json() {
        let res = Response::ok()
            .header("Content-Type", "application/json")
            .body(r#"{"count": 3}"#);
        let value: serde_json::Value = res.json().unwrap();
        assert_eq!(value["count"], 3);
    }

    #[test]
    fn test_response_invalid_text() {
        let res = Response::ok().body(vec![0xff, 0xfe]);
        assert!(res.text().is_err());
    }
}
