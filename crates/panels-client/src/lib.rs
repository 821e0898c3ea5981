//! # panels-client
//!
//! Request/response types and the transport seam for the trial panels UI.
//!
//! This crate provides:
//! - An ordered query encoding that preserves repeated names, the wire
//!   form of multi-valued filter fields
//! - GET-shaped [`Request`] and [`Response`] types
//! - The [`Transport`] capability trait the search controller sends
//!   through
//!
//! ## Quick Start
//!
//! ```rust
//! use panels_client::Request;
//!
//! let req = Request::get("/admin/ajax/search/")
//!     .query_param("csrfmiddlewaretoken", "token")
//!     .query_param("page", "1")
//!     .query_param("status", "recruiting")
//!     .query_param("status", "completed");
//!
//! assert_eq!(
//!     req.url(),
//!     "/admin/ajax/search/?csrfmiddlewaretoken=token&page=1&status=recruiting&status=completed"
//! );
//! ```

mod error;
pub mod query;
mod request;
mod response;
mod transport;

pub use error::{ClientError, Result};
pub use request::{Method, Request};
pub use response::Response;
pub use transport::{BoxFuture, Transport};
