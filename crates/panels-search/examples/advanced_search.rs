//! Advanced search demo.
//!
//! Drives a full search cycle against a canned transport and prints what
//! a hosting page would do at each step:
//!
//! ```bash
//! cargo run -p panels-search --example advanced_search
//! ```

use panels_client::{BoxFuture, Request, Response, Transport};
use panels_forms::fields::{choice_group_field, text_field, trial_date_fields};
use panels_forms::FormBuilder;
use panels_search::{SearchController, SearchSurface, Trigger};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Transport answering every request with one canned fragment.
struct CannedTransport;

impl Transport for CannedTransport {
    fn send<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, panels_client::Result<Response>> {
        println!("GET {}", req.url());
        Box::pin(async move {
            Ok(Response::html(
                r#"<div class="row">
  <div class="card">NCT04241068 — Donepezil, Phase 3, Recruiting</div>
  <div class="card">NCT05026866 — Lecanemab, Phase 3, Recruiting</div>
  <div class="card">NCT03887455 — Aducanumab, Phase 3, Completed</div>
</div>
<button class="search-submit" value="1">1</button>
<button class="search-submit" value="2">2</button>"#,
            ))
        })
    }
}

/// Surface that narrates every call instead of touching a document.
struct PrintSurface;

impl SearchSurface for PrintSurface {
    fn show_loading(&mut self) {
        println!("[surface] loading indicator on");
    }

    fn hide_loading(&mut self) {
        println!("[surface] loading indicator off");
    }

    fn scroll_to_results(&mut self) {
        println!("[surface] scrolling to results");
    }

    fn filters_expanded(&self) -> bool {
        true
    }

    fn collapse_filters(&mut self) {
        println!("[surface] collapsing filter panel");
    }

    fn replace_results(&mut self, html: &str) {
        println!("[surface] results replaced ({} bytes)", html.len());
    }

    fn result_row_len(&self) -> usize {
        3
    }

    fn reveal_child(&mut self, index: usize, duration_ms: u64) {
        println!("[surface] fade in child {index} over {duration_ms}ms");
    }

    fn show_error(&mut self, message: &str) {
        println!("[surface] error: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut builder = FormBuilder::new()
        .field(text_field("q", "Keywords"))
        .field(choice_group_field(
            "status",
            "Status",
            vec![
                ("recruiting", "Recruiting"),
                ("completed", "Completed"),
                ("terminated", "Terminated"),
            ],
        ));
    // The pickers stay blank here, so they contribute nothing to the payload.
    for field in trial_date_fields() {
        builder = builder.field(field);
    }
    let mut form = builder.build();

    form.set_value("q", "amyloid").unwrap();
    form.push_value("status", "recruiting").unwrap();
    form.push_value("status", "completed").unwrap();

    let mut controller =
        SearchController::new("/admin/ajax/search/", "demo-token", Box::new(CannedTransport));
    let mut surface = PrintSurface;

    let fragment = controller
        .activate(Trigger::Submit, &form, &mut surface)
        .await?;
    println!("pagination controls: {:?}", fragment.pagination_targets());

    controller
        .activate(Trigger::Paginate(2), &form, &mut surface)
        .await?;
    println!(
        "pending payload after paging: {}",
        controller.pending().map(|p| p.to_json()).unwrap_or_default()
    );

    Ok(())
}
