// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: incremental pointer deltas for panning the image.
//!
//! ## Usage
//!
//! 1) Begin a session with [`DragSession::begin`] at the pointer-press position.
//! 2) On each move event, call [`DragSession::update`] and feed the returned
//!    delta to [`crate::Viewport::translate`].
//! 3) Drop the session on pointer release; there is nothing else to tear down.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use zoombox_view::{DragSession, Viewport};
//!
//! let mut vp = Viewport::attach(Size::new(800.0, 600.0), Size::new(400.0, 400.0)).unwrap();
//! let mut drag = DragSession::begin(Point::new(10.0, 20.0));
//!
//! // Move to (15, 25): the image follows by (5, 5).
//! vp = vp.translate(drag.update(Point::new(15.0, 25.0)));
//! assert_eq!(vp.bounds().origin(), Point::new(5.0, 55.0));
//! ```

use kurbo::{Point, Vec2};

/// An active drag gesture.
///
/// A session only exists between pointer press and release; holding an
/// `Option<DragSession>` is how a caller tracks whether a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    last: Point,
}

impl DragSession {
    /// Starts a session at the pointer-press position.
    #[must_use]
    pub fn begin(pos: Point) -> Self {
        Self { last: pos }
    }

    /// Records a new pointer position and returns the movement since the
    /// previous one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_is_measured_from_press() {
        let mut drag = DragSession::begin(Point::new(10.0, 20.0));

        assert_eq!(drag.update(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn updates_track_incremental_deltas() {
        let mut drag = DragSession::begin(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(drag.update(Point::new(10.0, 10.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn negative_and_zero_deltas() {
        let mut drag = DragSession::begin(Point::new(100.0, 100.0));

        assert_eq!(drag.update(Point::new(90.0, 85.0)), Vec2::new(-10.0, -15.0));
        assert_eq!(drag.update(Point::new(90.0, 85.0)), Vec2::ZERO);
    }
}
