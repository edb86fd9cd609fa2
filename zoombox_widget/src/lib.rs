// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoombox_widget --heading-base-level=0

//! Zoombox Widget: an event-driven picture box over [`zoombox_view`].
//!
//! [`ZoomViewer`] is the thin shell a host toolkit talks to. It owns one
//! [`zoombox_view::Viewport`], turns pointer, wheel and resize events into
//! viewport operations, and reports the results through a [`ViewerHost`]:
//! - Mouse wheel zooms around the configured [`zoombox_view::AnchorMode`],
//!   using the multiplier `1 + delta / wheel_divisor`.
//! - A primary-button drag pans the image.
//! - Attaching an image lays it out according to the
//!   [`zoombox_view::LayoutMode`]: native size in a scrollable container, or
//!   stretched to fit while keeping its aspect ratio.
//! - Every change of the image rectangle produces one redraw request covering
//!   the old and new rectangles.
//!
//! The viewer is toolkit-agnostic. Hosts either call the `on_*` handlers
//! directly or forward `ui-events` pointer events through
//! [`ZoomViewer::handle_pointer_event`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use zoombox_widget::{ViewerConfig, ZoomViewer};
//! use zoombox_view::LayoutMode;
//!
//! let mut damage = Vec::new();
//! let config = ViewerConfig::default().with_layout_mode(LayoutMode::RatioStretch);
//! let mut viewer = ZoomViewer::with_config(config, |r: Rect| damage.push(r)).unwrap();
//!
//! viewer.on_resize(Size::new(400.0, 400.0));
//! viewer.on_attach_image("photo.png", Size::new(800.0, 600.0)).unwrap();
//! assert_eq!(viewer.current_zoom(), 0.5);
//! assert_eq!(viewer.container_size(), Size::new(400.0, 300.0));
//!
//! // One wheel notch away from the user zooms in by 3% around the pointer.
//! assert!(viewer.on_pointer_wheel(Point::new(200.0, 150.0), 120.0));
//! assert!(viewer.current_zoom() > 0.5);
//! ```
//!
//! ## Logging
//!
//! Attach, detach and layout changes are logged at `debug` level through
//! `tracing`; zoom and drag steps at `trace`; rejected images and settings at
//! `warn`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
pub mod events;
mod host;
mod viewer;

pub use config::{ConfigError, ViewerConfig};
pub use host::ViewerHost;
pub use viewer::{PaintTarget, ZoomViewer};
