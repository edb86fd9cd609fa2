// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Callbacks a [`crate::ZoomViewer`] issues towards its host toolkit.
///
/// The viewer calls these synchronously from inside its event handlers. Any
/// `FnMut(Rect)` closure is a host that only handles redraws.
pub trait ViewerHost {
    /// Invalidates `region`, in container-local coordinates.
    ///
    /// The region covers the old and new image rectangles, clipped to the
    /// container, so the host can repaint only what changed.
    fn request_redraw(&mut self, region: Rect);

    /// Asks the host to resize the container to `size`.
    ///
    /// Issued when the layout mode computes a container size different from
    /// the current one. The host answers with [`crate::ZoomViewer::on_resize`]
    /// once the new size is in effect. The default ignores the request.
    fn request_resize(&mut self, size: Size) {
        let _ = size;
    }
}

impl<F: FnMut(Rect)> ViewerHost for F {
    fn request_redraw(&mut self, region: Rect) {
        self(region);
    }
}
