//! # panels-search
//!
//! The incremental trial search cycle: payload building, pagination state,
//! and result rendering.
//!
//! This crate provides:
//! - [`SearchPayload`] — the anti-forgery token, the 1-based page, and the
//!   ordered, possibly multi-valued filter entries of one request
//! - [`SearchController`] — owns the pending payload and drives the
//!   request/response/render cycle against a [`Transport`] and a
//!   [`SearchSurface`]
//! - [`ResultFragment`] — the server-rendered markup plus the pagination
//!   controls discovered inside it
//! - The staggered fade schedule for revealing result rows
//!
//! ## The activation cycle
//!
//! A submission builds a fresh payload from the filter form; a pagination
//! activation reuses it with only the page overwritten:
//!
//! ```rust
//! use panels_search::SearchPayload;
//!
//! let fields = vec![
//!     ("status".to_string(), "open".to_string()),
//!     ("tag".to_string(), String::new()),
//!     ("tag".to_string(), "urgent".to_string()),
//! ];
//! let mut payload = SearchPayload::from_fields("token", &fields);
//! assert_eq!(payload.page(), 1);
//!
//! payload.set_page(5);
//! assert_eq!(payload.page(), 5);
//! assert_eq!(
//!     payload.to_query_pairs(),
//!     vec![
//!         ("csrfmiddlewaretoken".to_string(), "token".to_string()),
//!         ("page".to_string(), "5".to_string()),
//!         ("status".to_string(), "open".to_string()),
//!         ("tag".to_string(), "urgent".to_string()),
//!     ]
//! );
//! ```
//!
//! [`Transport`]: panels_client::Transport

mod controller;
mod error;
mod fragment;
mod payload;
pub mod stagger;
mod surface;

pub use controller::{SearchController, Trigger};
pub use error::{Result, SearchError};
pub use fragment::{ResultFragment, PAGINATION_CLASS};
pub use payload::{FieldValue, SearchPayload, CSRF_FIELD, PAGE_FIELD};
pub use surface::SearchSurface;
