// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to [`ZoomViewer`] handlers.

use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerScrollEvent};

use crate::host::ViewerHost;
use crate::viewer::ZoomViewer;

/// Wheel units reported for one notch (one line) of a classic mouse wheel.
pub const WHEEL_DELTA_PER_LINE: f64 = 120.0;

/// Logical pixels of precise scrolling that count as one notch.
pub const PIXELS_PER_LINE: f64 = 20.0;

/// Lines that count as one page of scrolling.
pub const LINES_PER_PAGE: f64 = 10.0;

impl<I, H: ViewerHost> ZoomViewer<I, H> {
    /// Routes a pointer event to the matching handler.
    ///
    /// Down, move and up use the logical pointer position, which is expected
    /// to be relative to the container's client origin. Scrolls go through
    /// [`scroll_wheel_units`]; a cancel ends any drag session. Returns `true`
    /// when the viewer state changed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) => match e.button {
                Some(button) => self.on_pointer_down(e.state.logical_point(), button),
                None => false,
            },
            PointerEvent::Move(e) => self.on_pointer_move(e.current.logical_point()),
            PointerEvent::Up(e) => self.on_pointer_up(e.state.logical_point()),
            PointerEvent::Scroll(e) => {
                self.on_pointer_wheel(e.state.logical_point(), scroll_wheel_units(e))
            }
            PointerEvent::Cancel(_) => self.cancel_drag(),
            _ => false,
        }
    }
}

/// Converts a scroll event into classic wheel units along the vertical axis.
///
/// `ui-events` deltas are a navigation direction: positive `y` moves the view
/// down the content, which is the wheel rolled towards the user. Classic wheel
/// units are positive away from the user, so the sign flips.
pub fn scroll_wheel_units(event: &PointerScrollEvent) -> f64 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical::<f64>(event.state.scale_factor);
            -logical.y * WHEEL_DELTA_PER_LINE / PIXELS_PER_LINE
        }
        delta => wheel_units(delta),
    }
}

/// Converts line and page deltas into classic wheel units, positive away
/// from the user.
///
/// Pixel deltas need the event's scale factor; use [`scroll_wheel_units`]
/// for those. Here they yield `0.0`.
pub fn wheel_units(delta: &ScrollDelta) -> f64 {
    match delta {
        ScrollDelta::LineDelta(_, y) => -f64::from(*y) * WHEEL_DELTA_PER_LINE,
        ScrollDelta::PageDelta(_, y) => -f64::from(*y) * WHEEL_DELTA_PER_LINE * LINES_PER_PAGE,
        ScrollDelta::PixelDelta(_) => 0.0,
    }
}
