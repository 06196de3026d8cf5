use alloc::string::String;
use alloc::sync::Arc;

use crate::{Document, Easing, OnComplete, ScrollOptions, Tween};

/// Whether construction-time target resolution succeeded.
///
/// `Unbound` is terminal for a given construction: a controller whose section selector
/// matched nothing stays inert until a fresh controller is built with a valid one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindState {
    Bound,
    Unbound,
}

/// A headless scroll-to-section controller.
///
/// Owns a [`Document`] handle, the merged [`ScrollOptions`], and the resolved
/// anchor/target elements. The host adapter drives it by calling:
/// - [`ScrollToSection::on_click`] when the bound anchor element is clicked
/// - [`ScrollToSection::tick`] each frame/timer tick while `is_animating()`
///
/// Construction never fails. An unresolvable section selector is logged and leaves the
/// controller in [`BindState::Unbound`]: no click binding is installed and clicks are
/// ignored.
pub struct ScrollToSection<D: Document> {
    doc: D,
    options: ScrollOptions<D>,
    anchor_el: Option<D::Element>,
    target_el: Option<D::Element>,
    binding: Option<D::ClickBinding>,
    tween: Option<Tween>,
    last_destination: Option<u64>,
    state: BindState,
}

impl<D: Document> ScrollToSection<D> {
    /// Creates a controller, resolving the section selector immediately.
    ///
    /// `options.section = None` targets the whole-document root, which always resolves.
    pub fn new(doc: D, options: ScrollOptions<D>) -> Self {
        let target_el = match &options.section {
            Some(selector) => doc.query_first(selector),
            None => Some(doc.root()),
        };

        let mut c = Self {
            doc,
            options,
            anchor_el: None,
            target_el,
            binding: None,
            tween: None,
            last_destination: None,
            state: BindState::Unbound,
        };

        if c.target_el.is_some() {
            c.state = BindState::Bound;
            c.rebind_anchor();
            scdebug!(
                anchor = c.options.anchor.as_deref().unwrap_or(""),
                section = c.options.section.as_deref().unwrap_or(":root"),
                "ScrollToSection::new"
            );
        } else {
            scwarn!(
                selector = c.options.section.as_deref().unwrap_or(""),
                "invalid section selector, operation: ScrollToSection::new"
            );
        }

        c
    }

    pub fn state(&self) -> BindState {
        self.state
    }

    pub fn is_bound(&self) -> bool {
        self.state == BindState::Bound
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The destination computed by the most recent scroll trigger, if any.
    ///
    /// Transient: recomputed fresh on every click/scroll.
    pub fn last_destination(&self) -> Option<u64> {
        self.last_destination
    }

    pub fn options(&self) -> &ScrollOptions<D> {
        &self.options
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_document(mut self) -> D {
        if let Some(binding) = self.binding.take() {
            self.doc.unbind_click(binding);
        }
        self.doc
    }

    /// Handles a click on the bound anchor element.
    ///
    /// Returns `true` when the click was consumed: the before-scroll callback has run,
    /// the scroll has been triggered, and the adapter should suppress the default
    /// navigation (`preventDefault` where available, else the legacy return-value
    /// flag). Returns `false` when no binding is installed, leaving the default action
    /// to proceed.
    pub fn on_click(&mut self, now_ms: u64) -> bool {
        if self.binding.is_none() {
            return false;
        }

        sctrace!(now_ms, "anchor click");
        if let Some(cb) = self.options.on_before_scroll.clone() {
            cb(self);
        }
        self.scroll(now_ms);
        true
    }

    /// Triggers the scroll toward the current target.
    ///
    /// The target's top offset is measured fresh on every call, so dynamic layouts are
    /// picked up. Destination = top offset + configured pixel offset, saturating at
    /// zero. With a zero duration the destination is applied immediately and the
    /// completion callback fires synchronously; otherwise a tween is started, or an
    /// in-flight one is retargeted (last trigger wins).
    ///
    /// Returns the destination, or `None` when the target is unresolved.
    pub fn scroll(&mut self, now_ms: u64) -> Option<u64> {
        let Some(target) = self.target_el.as_ref() else {
            scwarn!("unresolved target, operation: ScrollToSection::scroll");
            return None;
        };

        let top = self.doc.element_top(target);
        let destination = if self.options.offset >= 0 {
            top.saturating_add(self.options.offset as u64)
        } else {
            top.saturating_sub(self.options.offset.unsigned_abs())
        };
        self.last_destination = Some(destination);
        scdebug!(
            top,
            destination,
            duration_ms = self.options.duration_ms,
            "scroll start"
        );

        if self.options.duration_ms == 0 {
            self.tween = None;
            self.doc.set_scroll_offset(destination);
            self.complete();
            return Some(destination);
        }

        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, destination, self.options.duration_ms),
            None => {
                let from = self.doc.scroll_offset();
                self.tween = Some(Tween::new(
                    from,
                    destination,
                    now_ms,
                    self.options.duration_ms,
                    self.options.easing,
                ));
            }
        }
        Some(destination)
    }

    /// Advances an in-flight animation.
    ///
    /// Samples the tween at `now_ms`, writes the document scroll offset, and returns
    /// the new offset. When the tween finishes it is cleared and the completion
    /// callback fires exactly once. Returns `None` while idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;

        let off = tween.sample(now_ms);
        self.doc.set_scroll_offset(off);

        if tween.is_done(now_ms) {
            self.tween = None;
            sctrace!(now_ms, off, "scroll complete");
            self.complete();
        }

        Some(self.doc.scroll_offset())
    }

    pub fn anchor(&self) -> Option<&str> {
        self.options.anchor.as_deref()
    }

    /// Sets the anchor selector, re-resolves the element, and rebinds the click
    /// listener. The previous binding is always released first.
    pub fn set_anchor(&mut self, anchor: impl Into<String>) -> &mut Self {
        self.options.anchor = Some(anchor.into());
        self.rebind_anchor();
        self
    }

    pub fn section(&self) -> Option<&str> {
        self.options.section.as_deref()
    }

    /// Sets the section selector and re-resolves the target element.
    ///
    /// An unresolvable selector is logged and leaves the target unresolved: subsequent
    /// scrolls no-op until a resolvable section is set. The bind state is unchanged.
    pub fn set_section(&mut self, section: impl Into<String>) -> &mut Self {
        let section = section.into();
        self.target_el = self.doc.query_first(&section);
        if self.target_el.is_none() {
            scwarn!(
                selector = section.as_str(),
                "invalid section selector, operation: ScrollToSection::set_section"
            );
        }
        self.options.section = Some(section);
        self
    }

    pub fn offset(&self) -> i64 {
        self.options.offset
    }

    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        self.options.offset = offset;
        self
    }

    pub fn duration(&self) -> u64 {
        self.options.duration_ms
    }

    pub fn set_duration(&mut self, duration_ms: u64) -> &mut Self {
        self.options.duration_ms = duration_ms;
        self
    }

    pub fn easing(&self) -> Easing {
        self.options.easing
    }

    pub fn set_easing(&mut self, easing: Easing) -> &mut Self {
        self.options.easing = easing;
        self
    }

    /// The completion callback, if one is set.
    pub fn callback(&self) -> Option<OnComplete<D>> {
        self.options.on_complete.clone()
    }

    pub fn set_callback(&mut self, f: impl Fn(&Self) + Send + Sync + 'static) -> &mut Self {
        self.options.on_complete = Some(Arc::new(f));
        self
    }

    pub fn set_before_scroll(&mut self, f: impl Fn(&Self) + Send + Sync + 'static) -> &mut Self {
        self.options.on_before_scroll = Some(Arc::new(f));
        self
    }

    /// Releases any existing click binding, then resolves the anchor selector and
    /// binds again. An Unbound controller never installs a binding.
    fn rebind_anchor(&mut self) {
        if let Some(binding) = self.binding.take() {
            self.doc.unbind_click(binding);
        }

        if self.state != BindState::Bound {
            return;
        }

        self.anchor_el = match &self.options.anchor {
            Some(selector) => self.doc.query_first(selector),
            None => None,
        };
        if let Some(el) = &self.anchor_el {
            self.binding = Some(self.doc.bind_click(el));
        }
    }

    fn complete(&mut self) {
        if let Some(cb) = self.options.on_complete.clone() {
            cb(self);
        }
    }
}

impl<D: Document> core::fmt::Debug for ScrollToSection<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollToSection")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("tween", &self.tween)
            .field("last_destination", &self.last_destination)
            .finish_non_exhaustive()
    }
}
