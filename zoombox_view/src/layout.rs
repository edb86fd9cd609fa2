// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Size;

use crate::modes::LayoutMode;
use crate::zoom::has_area;

/// Computes the container size `mode` asks for.
///
/// - [`LayoutMode::Scrollable`]: exactly the source's native size.
/// - [`LayoutMode::RatioStretch`]: the largest size inside `container` with the
///   source's aspect ratio. The dimension that would overflow is shrunk and
///   rounded to whole pixels, mirroring [`crate::fit_to_container`].
///
/// Without a source image, or for a container without area in
/// [`LayoutMode::RatioStretch`], `container` is returned unchanged.
#[must_use]
pub fn apply_layout_mode(mode: LayoutMode, source: Size, container: Size) -> Size {
    if !has_area(source) {
        return container;
    }
    match mode {
        LayoutMode::Scrollable => source,
        LayoutMode::RatioStretch => {
            if !has_area(container) {
                return container;
            }
            let source_aspect = source.width / source.height;
            let width_for_height = container.height * source_aspect;
            let height_for_width = container.width / source_aspect;
            // A container that already rounds to the aspect ratio is kept, so
            // laying out again never creeps by a pixel.
            if (width_for_height - container.width).abs() <= 0.5
                || (height_for_width - container.height).abs() <= 0.5
            {
                return container;
            }
            if width_for_height < container.width {
                Size::new(width_for_height.round(), container.height)
            } else {
                Size::new(container.width, height_for_width.round())
            }
        }
    }
}
