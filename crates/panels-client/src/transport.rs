//! Transport seam for issuing requests.

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;

/// A boxed future for async transport operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Capability interface over whatever actually carries the request.
///
/// The panel issues one request per search activation and awaits a single
/// response; it configures no timeout of its own. Implementations wrap a
/// real HTTP client, or a scripted double in tests.
///
/// # Example
///
/// ```rust
/// use panels_client::{BoxFuture, Request, Response, Result, Transport};
///
/// struct CannedTransport {
///     body: String,
/// }
///
/// impl Transport for CannedTransport {
///     fn send<'a>(&'a self, _req: &'a Request) -> BoxFuture<'a, Result<Response>> {
///         Box::pin(async move { Ok(Response::html(self.body.clone())) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and resolves with the response.
    fn send<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, Result<Response>>;
}
