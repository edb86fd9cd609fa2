// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Zoom changes smaller than this are treated as no change at all.
pub const ZOOM_EPSILON: f64 = 0.001;

/// Limits applied when validating a requested zoom factor.
///
/// The minimum dimensions are in on-screen pixels and keep the image from
/// shrinking into an unusably small render; the maximum is a plain factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest on-screen image width, in pixels. At least 1.
    pub min_image_width: u32,
    /// Smallest on-screen image height, in pixels. At least 1.
    pub min_image_height: u32,
    /// Largest zoom factor, unless a minimum dimension forces a larger one.
    pub max_zoom: f64,
}

impl ZoomLimits {
    /// Creates limits, raising zero minimum dimensions to 1 pixel.
    #[must_use]
    pub fn new(min_image_width: u32, min_image_height: u32, max_zoom: f64) -> Self {
        Self {
            min_image_width: min_image_width.max(1),
            min_image_height: min_image_height.max(1),
            max_zoom,
        }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::new(10, 10, 64.0)
    }
}

/// Returns the zoom factor that letterboxes `source` inside `container`.
///
/// The relatively wider side fills the container exactly and the other side
/// ends up no larger than the container, so nothing is cropped. A container or
/// source without area yields the identity zoom `1.0`.
#[must_use]
pub fn fit_to_container(source: Size, container: Size) -> f64 {
    if !has_area(source) || !has_area(container) {
        return 1.0;
    }
    let source_aspect = source.width / source.height;
    let container_aspect = container.width / container.height;
    if source_aspect > container_aspect {
        container.width / source.width
    } else {
        container.height / source.height
    }
}

/// Validates a requested zoom factor against `limits`.
///
/// The ceiling is applied first, then each minimum-dimension floor. Floors win:
/// they may raise the result above [`ZoomLimits::max_zoom`]. Without a source
/// image the identity zoom `1.0` is returned.
#[must_use]
pub fn clamp_zoom(requested: f64, limits: &ZoomLimits, source: Size) -> f64 {
    if !has_area(source) {
        return 1.0;
    }
    let mut zoom = requested.min(limits.max_zoom);
    let min_width = f64::from(limits.min_image_width);
    let min_height = f64::from(limits.min_image_height);
    if source.width * zoom < min_width {
        zoom = min_width / source.width;
    }
    if source.height * zoom < min_height {
        zoom = min_height / source.height;
    }
    zoom
}

pub(crate) fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
