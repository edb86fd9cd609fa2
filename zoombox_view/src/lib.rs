// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoombox_view --heading-base-level=0

//! Zoombox View: the viewport transform behind a zoomable picture box.
//!
//! This crate provides a small, headless model of one bitmap placed inside a
//! rectangular container, with the on-screen rectangle expressed in
//! container-local pixels. It focuses on:
//! - Fitting the image into the container without cropping (letterboxing).
//! - Validating zoom factors against a ceiling and minimum on-screen size.
//! - Zooming around an anchor (pointer, container center or image center) so
//!   that the anchor stays visually fixed.
//! - Translating the image during a drag gesture.
//! - Sizing the container for the [`LayoutMode`] in use.
//!
//! It does **not** decode, own or paint images, and it does not know about
//! any widget toolkit. Callers are expected to:
//! - Hold a single [`Viewport`] per widget and replace it with the values the
//!   operations return.
//! - Wire pointer, wheel and resize events into those operations at a higher
//!   layer (see `zoombox_widget`).
//! - Paint the image into [`Viewport::bounds`], using
//!   [`Viewport::visible_source_rect`] to skip what the container clips.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use zoombox_view::{AnchorMode, Viewport, ZoomLimits, clamp_zoom};
//!
//! // An 800x600 image in a 400x400 client area is fitted to half size.
//! let vp = Viewport::attach(Size::new(800.0, 600.0), Size::new(400.0, 400.0)).unwrap();
//! assert_eq!(vp.zoom(), 0.5);
//! assert_eq!(vp.bounds(), Rect::new(0.0, 50.0, 400.0, 350.0));
//!
//! // Zoom to 100% around the image center, within the default limits.
//! let zoom = clamp_zoom(1.0, &ZoomLimits::default(), vp.source());
//! let vp = vp.apply_zoom(zoom, AnchorMode::ImageCenter, Point::ZERO);
//! assert_eq!(vp.bounds(), Rect::new(-200.0, -100.0, 600.0, 500.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and the image is axis-aligned; there is no rotation.
//! - [`Viewport`] is a `Copy` value and every operation returns a new one, so
//!   the math can be tested without any event plumbing.
//! - The zoom used as the base of a zoom step is derived from the current
//!   bounds, not from the cached factor, so bounds moved by other means stay
//!   consistent.
//! - Minimum on-screen dimensions take priority over the maximum zoom factor
//!   in [`clamp_zoom`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod drag;
mod error;
mod layout;
mod modes;
mod viewport;
mod zoom;

pub use drag::DragSession;
pub use error::InvalidImage;
pub use layout::apply_layout_mode;
pub use modes::{AnchorMode, LayoutMode};
pub use viewport::{Viewport, ViewportDebugInfo, center_bounds, resolve_anchor};
pub use zoom::{ZOOM_EPSILON, ZoomLimits, clamp_zoom, fit_to_container};
