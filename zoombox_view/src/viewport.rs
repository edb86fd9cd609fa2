// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::error::InvalidImage;
use crate::layout::apply_layout_mode;
use crate::modes::{AnchorMode, LayoutMode};
use crate::zoom::{ZOOM_EPSILON, ZoomLimits, clamp_zoom, fit_to_container, has_area};

/// On-screen placement of a single bitmap inside a container.
///
/// `Viewport` is a small value type: every operation returns an updated copy
/// instead of mutating in place, so the caller decides when a change becomes
/// visible. It tracks:
/// - the current zoom factor,
/// - the image rectangle in container-local coordinates,
/// - the container (client area) size,
/// - the source image's native pixel size.
///
/// Outside of a drag, `bounds.width() == round(source.width * zoom)` and the
/// same holds for the height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    zoom: f64,
    bounds: Rect,
    container: Size,
    source: Size,
}

impl Viewport {
    /// Viewport with no image attached: identity zoom and an empty rectangle.
    pub const EMPTY: Self = Self {
        zoom: 1.0,
        bounds: Rect::ZERO,
        container: Size::ZERO,
        source: Size::ZERO,
    };

    /// Creates a viewport for a freshly attached image, fitted and centered in
    /// `container`.
    ///
    /// Returns [`InvalidImage`] if `source` is not a finite, positive size.
    pub fn attach(source: Size, container: Size) -> Result<Self, InvalidImage> {
        let source = InvalidImage::check(source)?;
        let empty = Self {
            container,
            source,
            ..Self::EMPTY
        };
        Ok(empty.fitted())
    }

    /// Returns `true` when no image is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !has_area(self.source)
    }

    /// Returns the zoom factor most recently applied.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the zoom factor implied by the current bounds.
    ///
    /// This is what [`Viewport::apply_zoom`] scales from, so externally moved
    /// or resized bounds stay consistent.
    #[must_use]
    pub fn effective_zoom(&self) -> f64 {
        if self.is_empty() || self.bounds.width() <= 0.0 {
            self.zoom
        } else {
            self.bounds.width() / self.source.width
        }
    }

    /// Returns the image rectangle in container-local coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Returns the source image's native pixel size, or zero when detached.
    #[must_use]
    pub fn source(&self) -> Size {
        self.source
    }

    /// Returns a copy with a new container size.
    ///
    /// Zoom and bounds are kept; callers re-center or re-fit as they see fit.
    #[must_use]
    pub fn with_container(&self, container: Size) -> Self {
        Self { container, ..*self }
    }

    /// Returns a copy whose bounds are replaced as-is.
    ///
    /// The zoom factor is left alone; [`Viewport::effective_zoom`] follows the
    /// new bounds.
    #[must_use]
    pub fn with_bounds(&self, bounds: Rect) -> Self {
        Self { bounds, ..*self }
    }

    /// Returns a copy zoomed to letterbox the image in the container, centered.
    #[must_use]
    pub fn fitted(&self) -> Self {
        self.centered_at(fit_to_container(self.source, self.container))
    }

    /// Returns a copy at `zoom`, centered in the container.
    ///
    /// The zoom is taken as given; validate it with [`crate::clamp_zoom`] first.
    #[must_use]
    pub fn centered_at(&self, zoom: f64) -> Self {
        if self.is_empty() {
            return Self {
                container: self.container,
                ..Self::EMPTY
            };
        }
        Self {
            zoom,
            bounds: center_bounds(self.source, zoom, self.container),
            ..*self
        }
    }

    /// Returns a copy laid out according to `mode`.
    ///
    /// [`LayoutMode::Scrollable`] shows the image at its native size and sizes
    /// the container to match. [`LayoutMode::RatioStretch`] aspect-corrects
    /// the container with [`apply_layout_mode`] and fits the image into it.
    /// Either layout zoom is validated against `limits`, so a tiny image is
    /// shown at its minimum size and a huge stretch stops at the ceiling; the
    /// image is centered in whatever slack remains.
    #[must_use]
    pub fn laid_out(&self, mode: LayoutMode, limits: &ZoomLimits) -> Self {
        if self.is_empty() {
            return *self;
        }
        match mode {
            LayoutMode::Scrollable => {
                let zoom = clamp_zoom(1.0, limits, self.source);
                let shown = scaled_size(self.source, zoom);
                let container = apply_layout_mode(mode, shown, self.container);
                self.with_container(container).centered_at(zoom)
            }
            LayoutMode::RatioStretch => {
                let container = apply_layout_mode(mode, self.source, self.container);
                let fit = fit_to_container(self.source, container);
                let zoom = clamp_zoom(fit, limits, self.source);
                self.with_container(container).centered_at(zoom)
            }
        }
    }

    /// Returns a copy zoomed to `new_zoom` around the point selected by `mode`.
    ///
    /// The anchor is resolved against the bounds before the update and keeps
    /// its on-screen position (up to pixel rounding); the image scales around
    /// it rather than around its top-left corner. Changes within
    /// [`ZOOM_EPSILON`] of the effective zoom leave the bounds untouched but
    /// still record `new_zoom`.
    ///
    /// `pointer` is only consulted for [`AnchorMode::MousePosition`]. With no
    /// image attached, or a zoom that is not finite and positive, the viewport
    /// is returned unchanged.
    #[must_use]
    pub fn apply_zoom(&self, new_zoom: f64, mode: AnchorMode, pointer: Point) -> Self {
        if self.is_empty() || !new_zoom.is_finite() || new_zoom <= 0.0 {
            return *self;
        }
        let anchor = resolve_anchor(mode, self.bounds, self.container, pointer);
        let previous = self.effective_zoom();
        let mut next = Self {
            zoom: new_zoom,
            ..*self
        };
        if (new_zoom - previous).abs() <= ZOOM_EPSILON {
            return next;
        }

        let ratio = new_zoom / previous;
        let anchor = anchor.to_vec2();
        let shift = anchor - anchor * ratio;
        let origin = self.bounds.origin() + Vec2::new(shift.x.round(), shift.y.round());
        next.bounds = Rect::from_origin_size(origin, scaled_size(self.source, new_zoom));
        next
    }

    /// Returns a copy with the bounds moved by `delta`; the size is unchanged.
    #[must_use]
    pub fn translate(&self, delta: Vec2) -> Self {
        if self.is_empty() || delta == Vec2::ZERO {
            return *self;
        }
        Self {
            bounds: self.bounds + delta,
            ..*self
        }
    }

    /// Converts a container-local point into source pixel coordinates.
    ///
    /// Returns `None` when no image is attached or the bounds are degenerate.
    #[must_use]
    pub fn control_to_image(&self, pt: Point) -> Option<Point> {
        let (sx, sy) = self.axis_scales()?;
        let local = pt - self.bounds.origin();
        Some(Point::new(local.x / sx, local.y / sy))
    }

    /// Converts a source pixel coordinate into a container-local point.
    ///
    /// Returns `None` when no image is attached or the bounds are degenerate.
    #[must_use]
    pub fn image_to_control(&self, pt: Point) -> Option<Point> {
        let (sx, sy) = self.axis_scales()?;
        Some(self.bounds.origin() + Vec2::new(pt.x * sx, pt.y * sy))
    }

    /// Returns the part of the source image visible inside the container.
    ///
    /// This is the source rectangle a painter blits into the visible part of
    /// [`Viewport::bounds`]. It is [`Rect::ZERO`] when nothing is visible.
    #[must_use]
    pub fn visible_source_rect(&self) -> Rect {
        let client = self.container.to_rect();
        let visible = self.bounds.intersect(client);
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return Rect::ZERO;
        }
        match (
            self.control_to_image(visible.origin()),
            self.control_to_image(Point::new(visible.x1, visible.y1)),
        ) {
            (Some(p0), Some(p1)) => Rect::from_points(p0, p1),
            _ => Rect::ZERO,
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            zoom: self.zoom,
            effective_zoom: self.effective_zoom(),
            bounds: self.bounds,
            container: self.container,
            source: self.source,
            visible_source_rect: self.visible_source_rect(),
        }
    }

    fn axis_scales(&self) -> Option<(f64, f64)> {
        if self.is_empty() || self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0 {
            return None;
        }
        Some((
            self.bounds.width() / self.source.width,
            self.bounds.height() / self.source.height,
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Returns the rectangle of `source` scaled by `zoom`, centered in `container`.
///
/// The scaled size is rounded to whole pixels and the offset uses integer
/// division semantics (truncation toward zero). The offset is negative when
/// the image is larger than the container; it is then clipped while painting,
/// not resized.
#[must_use]
pub fn center_bounds(source: Size, zoom: f64, container: Size) -> Rect {
    let size = scaled_size(source, zoom);
    let x = ((container.width - size.width) / 2.0).trunc();
    let y = ((container.height - size.height) / 2.0).trunc();
    Rect::from_origin_size((x, y), size)
}

/// Resolves the zoom pivot for `mode`, relative to the origin of `bounds`.
///
/// `control` is the container size and `pointer` the pointer location in
/// container-local coordinates.
#[must_use]
pub fn resolve_anchor(mode: AnchorMode, bounds: Rect, control: Size, pointer: Point) -> Point {
    match mode {
        AnchorMode::ControlCenter => Point::new(
            control.width / 2.0 - bounds.x0,
            control.height / 2.0 - bounds.y0,
        ),
        AnchorMode::ImageCenter => Point::new(bounds.width() / 2.0, bounds.height() / 2.0),
        AnchorMode::MousePosition => Point::new(pointer.x - bounds.x0, pointer.y - bounds.y0),
    }
}

fn scaled_size(source: Size, zoom: f64) -> Size {
    Size::new(
        (source.width * zoom).round(),
        (source.height * zoom).round(),
    )
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Zoom factor most recently applied.
    pub zoom: f64,
    /// Zoom factor implied by the current bounds.
    pub effective_zoom: f64,
    /// Image rectangle in container-local coordinates.
    pub bounds: Rect,
    /// Container size.
    pub container: Size,
    /// Source image size in pixels.
    pub source: Size,
    /// Visible part of the source image, in source pixels.
    pub visible_source_rect: Rect,
}
