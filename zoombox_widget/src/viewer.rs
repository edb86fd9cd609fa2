// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace, warn};
use ui_events::pointer::PointerButton;
use zoombox_view::{
    AnchorMode, DragSession, InvalidImage, LayoutMode, Viewport, ZoomLimits, clamp_zoom,
    fit_to_container,
};

use crate::config::{ConfigError, ViewerConfig};
use crate::host::ViewerHost;

/// A zoomable, draggable picture box.
///
/// `ZoomViewer` is the event-driven shell around a [`Viewport`]. The host
/// toolkit feeds it pointer, wheel and resize events; the viewer updates its
/// single viewport and reports changes back through a [`ViewerHost`].
///
/// `I` is the caller's paintable image handle. The viewer stores it and hands
/// it back for painting, but never decodes, copies or releases it.
///
/// Every handler returns `true` when the viewer state changed.
#[derive(Debug)]
pub struct ZoomViewer<I, H> {
    config: ViewerConfig,
    host: H,
    image: Option<I>,
    viewport: Viewport,
    drag: Option<DragSession>,
    /// Last known pointer position, used to anchor programmatic zooms.
    last_pointer: Point,
}

/// What the paint routine needs to draw the current frame.
#[derive(Clone, Copy, Debug)]
pub struct PaintTarget<'a, I> {
    /// The attached image.
    pub image: &'a I,
    /// Full on-screen image rectangle, possibly extending past the container.
    pub bounds: Rect,
    /// Part of [`PaintTarget::bounds`] inside the container.
    pub destination: Rect,
    /// Part of the source image that maps onto [`PaintTarget::destination`],
    /// in source pixels.
    pub source: Rect,
}

impl<I, H: ViewerHost> ZoomViewer<I, H> {
    /// Creates an empty viewer with the default configuration.
    pub fn new(host: H) -> Self {
        Self {
            config: ViewerConfig::default(),
            host,
            image: None,
            viewport: Viewport::EMPTY,
            drag: None,
            last_pointer: Point::ZERO,
        }
    }

    /// Creates an empty viewer with `config`, which must pass
    /// [`ViewerConfig::validate`].
    pub fn with_config(config: ViewerConfig, host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(host)
        })
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the attached image, if any.
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Returns the current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the image rectangle in container-local coordinates.
    ///
    /// This is [`Rect::ZERO`] while no image is attached.
    pub fn current_bounds(&self) -> Rect {
        self.viewport.bounds()
    }

    /// Returns the current zoom factor.
    pub fn current_zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Returns the container size the viewer is laid out for.
    pub fn container_size(&self) -> Size {
        self.viewport.container()
    }

    /// Returns `true` while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns what the paint routine should draw, or `None` when there is
    /// nothing visible.
    pub fn paint_target(&self) -> Option<PaintTarget<'_, I>> {
        let image = self.image.as_ref()?;
        let bounds = self.viewport.bounds();
        let destination = bounds.intersect(self.viewport.container().to_rect());
        if destination.width() <= 0.0 || destination.height() <= 0.0 {
            return None;
        }
        Some(PaintTarget {
            image,
            bounds,
            destination,
            source: self.viewport.visible_source_rect(),
        })
    }

    /// Attaches `image`, whose native pixel size is `size`, and lays it out.
    ///
    /// Returns the previously attached image. A degenerate `size` is rejected
    /// with [`InvalidImage`] and leaves the viewer untouched.
    pub fn on_attach_image(&mut self, image: I, size: Size) -> Result<Option<I>, InvalidImage> {
        let attached = match Viewport::attach(size, self.viewport.container()) {
            Ok(vp) => vp,
            Err(err) => {
                warn!(width = size.width, height = size.height, "rejected image");
                return Err(err);
            }
        };
        debug!(width = size.width, height = size.height, "attached image");
        self.drag = None;
        let previous = self.image.replace(image);
        let laid_out = attached.laid_out(self.config.layout_mode, &self.config.limits());
        let old_bounds = self.viewport.bounds();
        self.commit(laid_out);
        if old_bounds == laid_out.bounds() {
            // Same rectangle, new pixels.
            self.invalidate(old_bounds, old_bounds);
        }
        Ok(previous)
    }

    /// Detaches the current image and returns it.
    pub fn on_detach_image(&mut self) -> Option<I> {
        let image = self.image.take()?;
        debug!("detached image");
        self.drag = None;
        self.commit(Viewport::EMPTY.with_container(self.viewport.container()));
        Some(image)
    }

    /// Handles a change of the container's client size.
    ///
    /// In [`LayoutMode::Scrollable`] the image keeps its zoom and is
    /// re-centered. In [`LayoutMode::RatioStretch`] the container is
    /// aspect-corrected and the image re-fitted.
    pub fn on_resize(&mut self, size: Size) -> bool {
        if size == self.viewport.container() {
            return false;
        }
        trace!(width = size.width, height = size.height, "resize");
        // The host already has `size`; only a layout that disagrees with it
        // turns into a resize request.
        self.viewport = self.viewport.with_container(size);
        if self.viewport.is_empty() {
            return true;
        }
        let next = match self.config.layout_mode {
            LayoutMode::Scrollable => self.viewport.centered_at(self.viewport.zoom()),
            LayoutMode::RatioStretch => self
                .viewport
                .laid_out(LayoutMode::RatioStretch, &self.config.limits()),
        };
        self.commit(next);
        true
    }

    /// Handles a pointer press at `position` (container-local).
    ///
    /// A primary-button press starts a drag session when dragging is enabled
    /// and an image is attached.
    pub fn on_pointer_down(&mut self, position: Point, button: PointerButton) -> bool {
        self.last_pointer = position;
        if button != PointerButton::Primary
            || !self.config.enable_dragging
            || self.image.is_none()
        {
            return false;
        }
        trace!(x = position.x, y = position.y, "drag start");
        self.drag = Some(DragSession::begin(position));
        true
    }

    /// Handles pointer movement; translates the image during a drag.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        self.last_pointer = position;
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let delta = drag.update(position);
        trace!(dx = delta.x, dy = delta.y, "drag");
        let next = self.viewport.translate(delta);
        self.commit(next)
    }

    /// Handles a pointer release; applies the last movement and ends any drag.
    pub fn on_pointer_up(&mut self, position: Point) -> bool {
        self.last_pointer = position;
        let Some(mut drag) = self.drag.take() else {
            return false;
        };
        let next = self.viewport.translate(drag.update(position));
        self.commit(next);
        trace!("drag end");
        true
    }

    /// Ends any drag session without applying further movement.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Handles a wheel event at `position` with the raw wheel `delta`
    /// (120 units per notch, positive away from the user).
    ///
    /// The zoom is multiplied by [`ViewerConfig::wheel_zoom_factor`].
    pub fn on_pointer_wheel(&mut self, position: Point, delta: f64) -> bool {
        self.last_pointer = position;
        if !self.config.enable_wheel_zoom || delta == 0.0 {
            return false;
        }
        let requested = self.viewport.zoom() * self.config.wheel_zoom_factor(delta);
        self.zoom_around(requested, position)
    }

    /// Sets the zoom factor programmatically.
    ///
    /// The factor is clamped to the configured limits and applied around the
    /// configured anchor; [`AnchorMode::MousePosition`] uses the last pointer
    /// position the viewer saw.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.zoom_around(zoom, self.last_pointer)
    }

    /// Multiplies the zoom factor by `factor`, as [`ZoomViewer::set_zoom`].
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        self.set_zoom(self.viewport.zoom() * factor)
    }

    /// Zooms so the whole image fits the container, and centers it.
    pub fn fit(&mut self) -> bool {
        if self.viewport.is_empty() {
            return false;
        }
        let fit = fit_to_container(self.viewport.source(), self.viewport.container());
        let zoom = clamp_zoom(fit, &self.config.limits(), self.viewport.source());
        debug!(zoom, "fit to container");
        self.commit(self.viewport.centered_at(zoom))
    }

    /// Shows the image at its native size (within limits), centered.
    pub fn actual_size(&mut self) -> bool {
        if self.viewport.is_empty() {
            return false;
        }
        let zoom = clamp_zoom(1.0, &self.config.limits(), self.viewport.source());
        self.commit(self.viewport.centered_at(zoom))
    }

    /// Enables or disables dragging.
    ///
    /// This is checked when a drag starts; an active drag is not aborted.
    pub fn set_enable_dragging(&mut self, enabled: bool) {
        self.config.enable_dragging = enabled;
    }

    /// Enables or disables wheel zoom.
    pub fn set_enable_wheel_zoom(&mut self, enabled: bool) {
        self.config.enable_wheel_zoom = enabled;
    }

    /// Sets the zoom anchor mode.
    pub fn set_anchor_mode(&mut self, mode: AnchorMode) {
        self.config.anchor_mode = mode;
    }

    /// Sets the wheel divisor.
    pub fn set_wheel_divisor(&mut self, divisor: u32) -> Result<(), ConfigError> {
        self.replace_config(self.config.with_wheel_divisor(divisor))
    }

    /// Sets the zoom limits and re-clamps the current zoom into them.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) -> Result<(), ConfigError> {
        let config = self
            .config
            .with_max_zoom(limits.max_zoom)
            .with_min_image_size(limits.min_image_width, limits.min_image_height);
        self.replace_config(config)
    }

    /// Sets the layout mode and lays the attached image out again.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.config.layout_mode == mode {
            return;
        }
        self.config.layout_mode = mode;
        self.relayout();
    }

    /// Replaces the whole configuration.
    ///
    /// The zoom is re-clamped, and the image laid out again if the layout mode
    /// changed. Invalid configurations are rejected and leave the viewer as is.
    pub fn set_config(&mut self, config: ViewerConfig) -> Result<(), ConfigError> {
        self.replace_config(config)
    }

    fn replace_config(&mut self, config: ViewerConfig) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected configuration");
            return Err(err);
        }
        let previous = core::mem::replace(&mut self.config, config);
        if previous.layout_mode != config.layout_mode {
            self.relayout();
        } else if previous.limits() != config.limits() {
            self.zoom_around(self.viewport.zoom(), self.last_pointer);
        }
        Ok(())
    }

    fn relayout(&mut self) {
        if self.viewport.is_empty() {
            return;
        }
        debug!(mode = ?self.config.layout_mode, "layout");
        let limits = self.config.limits();
        self.commit(self.viewport.laid_out(self.config.layout_mode, &limits));
    }

    fn zoom_around(&mut self, requested: f64, pointer: Point) -> bool {
        if self.viewport.is_empty() || !requested.is_finite() {
            return false;
        }
        let zoom = clamp_zoom(requested, &self.config.limits(), self.viewport.source());
        trace!(requested, zoom, "zoom");
        let next = self
            .viewport
            .apply_zoom(zoom, self.config.anchor_mode, pointer);
        self.commit(next)
    }

    /// Installs `next` and tells the host what changed.
    fn commit(&mut self, next: Viewport) -> bool {
        let prev = core::mem::replace(&mut self.viewport, next);
        if prev == next {
            return false;
        }
        if prev.container() != next.container() {
            self.host.request_resize(next.container());
        }
        if prev.bounds() != next.bounds() {
            self.invalidate(prev.bounds(), next.bounds());
        }
        true
    }

    fn invalidate(&mut self, old: Rect, new: Rect) {
        let region = if old.area() <= 0.0 {
            new
        } else if new.area() <= 0.0 {
            old
        } else {
            old.union(new)
        };
        let region = region.intersect(self.viewport.container().to_rect());
        if region.width() > 0.0 && region.height() > 0.0 {
            self.host.request_redraw(region);
        }
    }
}
