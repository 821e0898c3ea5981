//! Rich-text editor capability and submission adapter.

use serde::Serialize;

use crate::error::Result;
use crate::form::Form;

/// Capability interface over a hosted rich-text editor.
///
/// The editor itself is an external widget; this layer only needs its
/// current content, serialized as HTML and extracted as plain text.
pub trait RichTextEditor {
    /// Returns the current content as serialized HTML.
    fn content_html(&self) -> String;

    /// Returns the current content as plain text.
    fn content_text(&self) -> String;

    /// Moves input focus into the editor.
    fn focus(&mut self);
}

/// Toolbar configuration handed to the hosted editor.
///
/// Controls are grouped into rows the way the composer page lays them out;
/// names follow the hosted editor's control identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct EditorConfig {
    /// Editor theme name.
    pub theme: String,
    /// Toolbar control rows.
    pub toolbar: Vec<Vec<String>>,
}

impl EditorConfig {
    /// Returns the newsletter composer's toolbar configuration.
    pub fn newsletter() -> Self {
        let rows: Vec<Vec<&str>> = vec![
            vec!["bold", "italic", "underline", "strike"],
            vec!["blockquote", "code-block"],
            vec!["header-1", "header-2"],
            vec!["list-ordered", "list-bullet"],
            vec!["script-sub", "script-super"],
            vec!["indent-dec", "indent-inc"],
            vec!["direction-rtl"],
            vec!["size"],
            vec!["header"],
            vec!["color", "background"],
            vec!["font"],
            vec!["align"],
            vec!["clean"],
            vec!["link", "formula", "image", "video", "code-block"],
        ];

        Self {
            theme: "snow".to_string(),
            toolbar: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    /// Serializes the configuration for the hosting page.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Prepares a freshly constructed editor the way the composer page does:
/// input focus moves straight into it.
pub fn mount_editor(editor: &mut dyn RichTextEditor) {
    editor.focus();
}

/// Mirrors editor content into two hidden form fields before submission.
///
/// The copy happens synchronously inside the submit handling, so the
/// holders carry the content exactly as of the submission attempt. The
/// enclosing form then submits natively; nothing here is asynchronous.
#[derive(Debug, Clone)]
pub struct EditorSubmitAdapter {
    /// Name of the hidden field receiving the serialized HTML.
    pub html_holder: String,
    /// Name of the hidden field receiving the plain text.
    pub text_holder: String,
}

impl EditorSubmitAdapter {
    /// Creates an adapter writing into the two named hidden fields.
    pub fn new(html_holder: impl Into<String>, text_holder: impl Into<String>) -> Self {
        Self {
            html_holder: html_holder.into(),
            text_holder: text_holder.into(),
        }
    }

    /// Copies the editor's current content into the holder fields.
    ///
    /// Call once per submission attempt, before the form is allowed to
    /// proceed. Fails if either holder field is missing from the form.
    pub fn before_submit(&self, editor: &dyn RichTextEditor, form: &mut Form) -> Result<()> {
        form.set_value(&self.html_holder, editor.content_html())?;
        form.set_value(&self.text_holder, editor.content_text())?;
        Ok(())
    }
}
