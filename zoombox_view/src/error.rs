// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned when an image with degenerate pixel dimensions is attached.
///
/// Every ratio in the viewport math divides by the source dimensions, so a
/// source must be finite and strictly positive on both axes.
#[derive(Clone, Copy, PartialEq)]
pub struct InvalidImage {
    /// The rejected source size.
    pub size: Size,
}

impl InvalidImage {
    /// Checks `size` and returns it unchanged if it can back a viewport.
    pub fn check(size: Size) -> Result<Size, Self> {
        let valid = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        if valid { Ok(size) } else { Err(Self { size }) }
    }
}

impl fmt::Debug for InvalidImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvalidImage {{ width: {:?}, height: {:?} }}",
            self.size.width, self.size.height
        )
    }
}

impl fmt::Display for InvalidImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image size {}x{} is not a positive pixel size",
            self.size.width, self.size.height
        )
    }
}

impl core::error::Error for InvalidImage {}
