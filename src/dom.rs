/// The seam between the controller and the host page.
///
/// Implementations are expected to be cheap handles (a wasm `web_sys::Document` wrapper,
/// a layout tree, a test sim). The controller never inspects elements beyond what this
/// trait exposes: selector resolution, top-offset measurement, the document scroll
/// position, and click-listener registration.
///
/// Click dispatch stays on the adapter side: `bind_click` only registers interest in an
/// element and returns a detach handle. When the host page delivers a click on that
/// element, the adapter calls [`crate::ScrollToSection::on_click`].
pub trait Document {
    /// A resolved element handle.
    type Element: Clone;

    /// A detach handle for a click registration.
    ///
    /// The controller stores it and passes it back to [`Document::unbind_click`] before
    /// installing a new binding, so listeners never accumulate across rebinds.
    type ClickBinding;

    /// Resolves a CSS selector to its first matching element, `None` on zero matches.
    fn query_first(&self, selector: &str) -> Option<Self::Element>;

    /// The whole-document root element (the default scroll target).
    fn root(&self) -> Self::Element;

    /// The element's current top offset relative to the document, in pixels.
    ///
    /// Measured fresh on every call; the controller relies on this for dynamic layouts.
    fn element_top(&self, element: &Self::Element) -> u64;

    /// The current document scroll offset.
    fn scroll_offset(&self) -> u64;

    /// Sets the document scroll offset. The host may clamp to its scrollable extent.
    fn set_scroll_offset(&mut self, offset: u64);

    /// Registers a click listener on `element` and returns its detach handle.
    fn bind_click(&mut self, element: &Self::Element) -> Self::ClickBinding;

    /// Releases a previously registered click listener.
    fn unbind_click(&mut self, binding: Self::ClickBinding);

    /// Whether a selector matches at least one element.
    fn exists(&self, selector: &str) -> bool {
        self.query_first(selector).is_some()
    }
}
