//! The search controller.

use panels_client::{Request, Transport};
use panels_forms::Form;
use tracing::{debug, warn};

use crate::error::{Result, SearchError};
use crate::fragment::ResultFragment;
use crate::payload::SearchPayload;
use crate::stagger::fade_schedule;
use crate::surface::SearchSurface;

/// What activated the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The designated submit control.
    Submit,
    /// A pagination control carrying this page number.
    Paginate(usize),
}

/// Drives the incremental search request/response cycle.
///
/// The controller owns the pending payload: the last payload built by an
/// explicit submission, reused by pagination activations with only the
/// page overwritten. The endpoint and the anti-forgery token are injected
/// by the hosting page at construction.
pub struct SearchController {
    endpoint: String,
    csrf_token: String,
    transport: Box<dyn Transport>,
    pending: Option<SearchPayload>,
}

impl SearchController {
    /// Creates a controller for the given endpoint and token.
    pub fn new(
        endpoint: impl Into<String>,
        csrf_token: impl Into<String>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            csrf_token: csrf_token.into(),
            transport,
            pending: None,
        }
    }

    /// Returns the pending payload, if a search has been submitted.
    pub fn pending(&self) -> Option<&SearchPayload> {
        self.pending.as_ref()
    }

    /// Runs one full activation cycle.
    ///
    /// Shows the loading indicator, scrolls to the results, collapses the
    /// filter panel if expanded, resolves the payload from the trigger,
    /// fetches the fragment, renders it with the staggered fade, and hides
    /// the indicator again. On any failure the indicator is still hidden
    /// and the surface shows an error state.
    pub async fn activate(
        &mut self,
        trigger: Trigger,
        form: &Form,
        surface: &mut dyn SearchSurface,
    ) -> Result<ResultFragment> {
        surface.show_loading();
        surface.scroll_to_results();

        if surface.filters_expanded() {
            surface.collapse_filters();
        }

        let result = self.run(trigger, form, surface).await;
        surface.hide_loading();

        if let Err(err) = &result {
            warn!(error = %err, "search activation failed");
            surface.show_error("Search failed. Please try again.");
        }

        result
    }

    async fn run(
        &mut self,
        trigger: Trigger,
        form: &Form,
        surface: &mut dyn SearchSurface,
    ) -> Result<ResultFragment> {
        match trigger {
            Trigger::Submit => {
                let fields = form.serialize();
                self.pending = Some(SearchPayload::from_fields(&self.csrf_token, &fields));
            }
            Trigger::Paginate(page) => match self.pending.as_mut() {
                Some(payload) => payload.set_page(page),
                None => return Err(SearchError::NoPendingSearch),
            },
        }

        let payload = self.pending.as_ref().ok_or(SearchError::NoPendingSearch)?;

        let request = Request::get(&self.endpoint)
            .header("Accept", "text/html")
            .query_pairs(payload.to_query_pairs());
        debug!(url = %request.url(), page = payload.page(), "issuing search request");

        let response = self.transport.send(&request).await?;
        if !response.is_success() {
            return Err(SearchError::Status(response.status));
        }

        let body = response.text()?;
        let fragment = ResultFragment::new(body);

        surface.replace_results(fragment.html());
        for (index, duration) in fade_schedule(surface.result_row_len()) {
            surface.reveal_child(index, duration);
        }

        debug!(
            controls = fragment.pagination_targets().len(),
            "rendered search results"
        );
        Ok(fragment)
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("endpoint", &self.endpoint)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
