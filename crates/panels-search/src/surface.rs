//! Page surface capability consumed by the search controller.

/// Capability interface over the page hosting the search results.
///
/// The controller drives the page exclusively through this trait: the
/// loading indicator, the scroll, the filter-disclosure panel, the result
/// container, and the error state. Implementations wrap the real document
/// in a host, or record calls in tests.
///
/// Pagination activations travel the other way: the host listens on the
/// stable result container (event delegation, so handlers survive content
/// replacement) and calls back into the controller with the activated
/// control's page number.
pub trait SearchSurface {
    /// Makes the loading indicator visible.
    fn show_loading(&mut self);

    /// Hides the loading indicator.
    fn hide_loading(&mut self);

    /// Smooth-scrolls the viewport to the top of the result container.
    fn scroll_to_results(&mut self);

    /// Returns whether the filter-disclosure panel is currently expanded.
    fn filters_expanded(&self) -> bool;

    /// Collapses the filter-disclosure panel.
    fn collapse_filters(&mut self);

    /// Replaces the result container's content with the given markup.
    fn replace_results(&mut self, html: &str);

    /// Returns the number of direct children of the rendered result row.
    fn result_row_len(&self) -> usize;

    /// Reveals the child at `index` with a fade of the given duration.
    fn reveal_child(&mut self, index: usize, duration_ms: u64);

    /// Shows a visible error state in place of results.
    fn show_error(&mut self, message: &str);
}
