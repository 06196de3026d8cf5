//! A headless scroll-to-section controller.
//!
//! Bind an anchor element to a target section: a click on the anchor tweens the document
//! scroll offset to the section's top (plus a configurable pixel offset) and fires
//! before/complete callbacks.
//!
//! This crate is UI-agnostic. It holds no real DOM objects; a host adapter implements the
//! [`Document`] trait (selector queries, top-offset measurement, scroll offset get/set,
//! click bind/unbind) and drives the controller by calling:
//! - `on_click(now_ms)` when the bound anchor element is clicked
//! - `tick(now_ms)` each frame/timer tick while an animation is in flight
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dom;
mod options;
mod scroll_to_section;
mod tween;


pub use dom::Document;
pub use options::{OnBeforeScroll, OnComplete, ScrollOptions};
pub use scroll_to_section::{BindState, ScrollToSection};
pub use tween::{Easing, Tween};
