//! # panels-forms
//!
//! Filter-form model and widget bindings for the trial panels UI.
//!
//! This crate provides:
//! - An ordered form model whose serialization preserves document order
//! - Widgets for the filter panel (text, hidden, checkbox groups,
//!   date-range pickers)
//! - Field validators
//! - The rich-text editor capability and its submission adapter
//! - The Yes/No switch label mirror
//!
//! ## Serializing a filter form
//!
//! ```rust
//! use panels_forms::{Form, FormBuilder, FormField};
//! use panels_forms::fields::{choice_group_field, text_field};
//!
//! let mut form = FormBuilder::new()
//!     .field(text_field("nct-id", "NCT ID"))
//!     .field(choice_group_field("status", "Status", vec![
//!         ("recruiting", "Recruiting"),
//!         ("completed", "Completed"),
//!     ]))
//!     .build();
//!
//! form.push_value("status", "recruiting").unwrap();
//! form.push_value("status", "completed").unwrap();
//!
//! // Empty fields are skipped; repeated names stay in document order.
//! let pairs = form.serialize();
//! assert_eq!(pairs.len(), 2);
//! ```
//!
//! ## Mirroring editor content before submission
//!
//! ```rust
//! use panels_forms::{EditorSubmitAdapter, FormBuilder, RichTextEditor};
//! use panels_forms::fields::hidden_field;
//!
//! struct Composer;
//!
//! impl RichTextEditor for Composer {
//!     fn content_html(&self) -> String { "<p>Hi</p>".to_string() }
//!     fn content_text(&self) -> String { "Hi".to_string() }
//!     fn focus(&mut self) {}
//! }
//!
//! let mut form = FormBuilder::new()
//!     .field(hidden_field("newslettercontent", None))
//!     .field(hidden_field("textcontent", None))
//!     .build();
//!
//! let adapter = EditorSubmitAdapter::new("newslettercontent", "textcontent");
//! adapter.before_submit(&Composer, &mut form).unwrap();
//! assert_eq!(form.field("newslettercontent").unwrap().values[0], "<p>Hi</p>");
//! ```

mod editor;
mod error;
pub mod fields;
mod form;
mod switch;
pub mod validation;
pub mod widgets;

pub use editor::{mount_editor, EditorConfig, EditorSubmitAdapter, RichTextEditor};
pub use error::{FormError, Result, ValidationErrors};
pub use form::{render_field, render_filter_panel, Form, FormBuilder, FormField};
pub use switch::SwitchLabel;
