//! Integration tests for the search activation cycle.

use std::sync::{Arc, Mutex};

use panels_client::{BoxFuture, ClientError, Request, Response, Transport};
use panels_forms::fields::{choice_group_field, text_field};
use panels_forms::{Form, FormBuilder};
use panels_search::{SearchController, SearchError, SearchSurface, Trigger};

/// Surface double that records every call in order.
#[derive(Default)]
struct RecordingSurface {
    events: Vec<String>,
    expanded: bool,
    results: String,
}

impl RecordingSurface {
    fn with_expanded_filters() -> Self {
        Self {
            expanded: true,
            ..Self::default()
        }
    }
}

impl SearchSurface for RecordingSurface {
    fn show_loading(&mut self) {
        self.events.push("show-loading".to_string());
    }

    fn hide_loading(&mut self) {
        self.events.push("hide-loading".to_string());
    }

    fn scroll_to_results(&mut self) {
        self.events.push("scroll".to_string());
    }

    fn filters_expanded(&self) -> bool {
        self.expanded
    }

    fn collapse_filters(&mut self) {
        self.expanded = false;
        self.events.push("collapse-filters".to_string());
    }

    fn replace_results(&mut self, html: &str) {
        self.results = html.to_string();
        self.events.push("replace-results".to_string());
    }

    fn result_row_len(&self) -> usize {
        self.results.matches("class=\"card\"").count()
    }

    fn reveal_child(&mut self, index: usize, duration_ms: u64) {
        self.events.push(format!("reveal {index} {duration_ms}"));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(format!("error: {message}"));
    }
}

/// Transport double answering every request with one HTML body.
struct CannedTransport {
    body: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedTransport {
    fn new(body: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                body: body.to_string(),
                requests: Arc::clone(&requests),
            },
            requests,
        )
    }
}

impl Transport for CannedTransport {
    fn send<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, panels_client::Result<Response>> {
        self.requests.lock().unwrap().push(req.url());
        Box::pin(async move { Ok(Response::html(self.body.clone())) })
    }
}

/// Transport double that always fails.
struct FailingTransport;

impl Transport for FailingTransport {
    fn send<'a>(&'a self, _req: &'a Request) -> BoxFuture<'a, panels_client::Result<Response>> {
        Box::pin(async move { Err(ClientError::Transport("connection reset".to_string())) })
    }
}

/// Transport double answering with a fixed status code.
struct StatusTransport(u16);

impl Transport for StatusTransport {
    fn send<'a>(&'a self, _req: &'a Request) -> BoxFuture<'a, panels_client::Result<Response>> {
        let status = self.0;
        Box::pin(async move { Ok(Response::new(status)) })
    }
}

fn filter_form() -> Form {
    let mut form = FormBuilder::new()
        .field(text_field("q", "Keywords"))
        .field(choice_group_field(
            "status",
            "Status",
            vec![("recruiting", "Recruiting"), ("completed", "Completed")],
        ))
        .build();
    form.set_value("q", "amyloid").unwrap();
    form.push_value("status", "recruiting").unwrap();
    form.push_value("status", "completed").unwrap();
    form
}

const RESULTS_BODY: &str = r#"<div class="row">
  <div class="card">NCT01</div>
  <div class="card">NCT02</div>
  <div class="card">NCT03</div>
</div>
<button class="search-submit" value="1">1</button>
<button class="search-submit" value="2">2</button>"#;

#[tokio::test]
async fn submit_builds_fresh_payload() {
    let (transport, requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::default();

    controller
        .activate(Trigger::Submit, &filter_form(), &mut surface)
        .await
        .unwrap();

    let payload = controller.pending().unwrap();
    assert_eq!(
        payload.to_json(),
        serde_json::json!({
            "csrfmiddlewaretoken": "tok",
            "page": 1,
            "q": "amyloid",
            "status": ["recruiting", "completed"],
        })
    );

    let urls = requests.lock().unwrap();
    assert_eq!(
        urls[0],
        "/admin/ajax/search/?csrfmiddlewaretoken=tok&page=1&q=amyloid&status=recruiting&status=completed"
    );
}

#[tokio::test]
async fn empty_fields_are_excluded() {
    let (transport, _requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::default();

    let mut form = FormBuilder::new()
        .field(text_field("status", "Status"))
        .field(text_field("tag", "Tag"))
        .field(text_field("tag", "Tag"))
        .build();
    form.set_value("status", "open").unwrap();
    // One tag control stays empty; the other carries a value.
    form.push_value("tag", "urgent").unwrap();

    controller
        .activate(Trigger::Submit, &form, &mut surface)
        .await
        .unwrap();

    assert_eq!(
        controller.pending().unwrap().to_json(),
        serde_json::json!({
            "csrfmiddlewaretoken": "tok",
            "page": 1,
            "status": "open",
            "tag": ["urgent"],
        })
    );
}

#[tokio::test]
async fn pagination_overwrites_only_page() {
    let (transport, requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::default();
    let form = filter_form();

    controller
        .activate(Trigger::Submit, &form, &mut surface)
        .await
        .unwrap();
    controller
        .activate(Trigger::Paginate(5), &form, &mut surface)
        .await
        .unwrap();

    let payload = controller.pending().unwrap();
    assert_eq!(payload.page(), 5);
    assert_eq!(
        payload.to_json(),
        serde_json::json!({
            "csrfmiddlewaretoken": "tok",
            "page": 5,
            "q": "amyloid",
            "status": ["recruiting", "completed"],
        })
    );

    let urls = requests.lock().unwrap();
    assert!(urls[1].contains("page=5"));
    assert!(urls[1].contains("q=amyloid"));
    assert!(urls[1].contains("status=recruiting&status=completed"));
}

#[tokio::test]
async fn pagination_without_submission_fails_fast() {
    let (transport, requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::default();

    let err = controller
        .activate(Trigger::Paginate(2), &filter_form(), &mut surface)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::NoPendingSearch));
    assert!(requests.lock().unwrap().is_empty());
    assert!(surface.events.contains(&"hide-loading".to_string()));
    assert!(surface.events.iter().any(|e| e.starts_with("error:")));
}

#[tokio::test]
async fn successful_cycle_event_order() {
    let (transport, _requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::with_expanded_filters();

    controller
        .activate(Trigger::Submit, &filter_form(), &mut surface)
        .await
        .unwrap();

    assert_eq!(
        surface.events,
        vec![
            "show-loading",
            "scroll",
            "collapse-filters",
            "replace-results",
            "reveal 0 200",
            "reveal 1 200",
            "reveal 2 320",
            "hide-loading",
        ]
    );
    assert_eq!(surface.results, RESULTS_BODY);
}

#[tokio::test]
async fn collapsed_filters_stay_untouched() {
    let (transport, _requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::default();

    controller
        .activate(Trigger::Submit, &filter_form(), &mut surface)
        .await
        .unwrap();

    assert!(!surface.events.contains(&"collapse-filters".to_string()));
}

#[tokio::test]
async fn transport_failure_hides_loading_and_shows_error() {
    let mut controller =
        SearchController::new("/admin/ajax/search/", "tok", Box::new(FailingTransport));
    let mut surface = RecordingSurface::default();

    let err = controller
        .activate(Trigger::Submit, &filter_form(), &mut surface)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Client(_)));
    assert_eq!(
        surface.events.last().map(String::as_str),
        Some("error: Search failed. Please try again.")
    );
    assert!(surface.events.contains(&"hide-loading".to_string()));
    assert!(!surface.events.contains(&"replace-results".to_string()));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mut controller =
        SearchController::new("/admin/ajax/search/", "tok", Box::new(StatusTransport(500)));
    let mut surface = RecordingSurface::default();

    let err = controller
        .activate(Trigger::Submit, &filter_form(), &mut surface)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Status(500)));
}

#[tokio::test]
async fn rendered_fragment_reports_pagination_targets() {
    let (transport, _requests) = CannedTransport::new(RESULTS_BODY);
    let mut controller = SearchController::new("/admin/ajax/search/", "tok", Box::new(transport));
    let mut surface = RecordingSurface::default();

    let fragment = controller
        .activate(Trigger::Submit, &filter_form(), &mut surface)
        .await
        .unwrap();

    // These are the controls a direct binder would re-attach to; a
    // delegating host just feeds their values back as Trigger::Paginate.
    assert_eq!(fragment.pagination_targets(), vec![1, 2]);

    controller
        .activate(Trigger::Paginate(2), &filter_form(), &mut surface)
        .await
        .unwrap();
    assert_eq!(controller.pending().unwrap().page(), 2);
}
