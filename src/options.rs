use alloc::string::String;
use alloc::sync::Arc;

use crate::scroll_to_section::ScrollToSection;
use crate::{Document, Easing};

/// A callback fired just before a click-triggered scroll starts.
///
/// Receives the controller, so it can read the current configuration or the freshly
/// computed destination.
pub type OnBeforeScroll<D> = Arc<dyn Fn(&ScrollToSection<D>) + Send + Sync>;

/// A callback fired once when a scroll animation reaches its destination.
///
/// A superseded animation (a second click mid-flight) fires no completion; only the
/// animation that actually lands does.
pub type OnComplete<D> = Arc<dyn Fn(&ScrollToSection<D>) + Send + Sync>;

/// Configuration for [`ScrollToSection`].
///
/// All fields are optional and merged over documented defaults at construction; they
/// remain mutable afterwards through the controller's accessors. Callbacks are stored
/// in `Arc`s so options stay cheap to clone.
pub struct ScrollOptions<D: Document> {
    /// CSS selector for the click source. `None` installs no click binding.
    pub anchor: Option<String>,
    /// CSS selector for the scroll target. `None` means the whole-document root.
    pub section: Option<String>,
    /// Pixels added to the target's top offset when computing the destination.
    /// May be negative; the destination saturates at zero.
    pub offset: i64,
    /// Animation duration in milliseconds. Zero applies the destination immediately.
    pub duration_ms: u64,
    /// Easing curve for the scroll tween.
    pub easing: Easing,
    /// Fired before each click-triggered scroll.
    pub on_before_scroll: Option<OnBeforeScroll<D>>,
    /// Fired when a scroll animation completes.
    pub on_complete: Option<OnComplete<D>>,
}

impl<D: Document> ScrollOptions<D> {
    /// Creates options with the defaults: no anchor, root target, zero offset,
    /// 400 ms duration, no-op callbacks.
    pub fn new() -> Self {
        Self {
            anchor: None,
            section: None,
            offset: 0,
            duration_ms: 400,
            easing: Easing::default(),
            on_before_scroll: None,
            on_complete: None,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_before_scroll(
        mut self,
        f: impl Fn(&ScrollToSection<D>) + Send + Sync + 'static,
    ) -> Self {
        self.on_before_scroll = Some(Arc::new(f));
        self
    }

    pub fn with_on_complete(
        mut self,
        f: impl Fn(&ScrollToSection<D>) + Send + Sync + 'static,
    ) -> Self {
        self.on_complete = Some(Arc::new(f));
        self
    }
}

impl<D: Document> Default for ScrollOptions<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> Clone for ScrollOptions<D> {
    fn clone(&self) -> Self {
        Self {
            anchor: self.anchor.clone(),
            section: self.section.clone(),
            offset: self.offset,
            duration_ms: self.duration_ms,
            easing: self.easing,
            on_before_scroll: self.on_before_scroll.clone(),
            on_complete: self.on_complete.clone(),
        }
    }
}

impl<D: Document> core::fmt::Debug for ScrollOptions<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("anchor", &self.anchor)
            .field("section", &self.section)
            .field("offset", &self.offset)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
