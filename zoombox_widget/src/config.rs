// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use zoombox_view::{AnchorMode, LayoutMode, ZoomLimits};

/// Host-facing settings of a [`crate::ZoomViewer`].
///
/// The defaults are the ones a plain picture box starts with: dragging and
/// wheel zoom enabled, zoom up to 64x, never smaller than 10x10 pixels on
/// screen, a wheel divisor of 4000 (one 120-unit notch zooms by 3%), zooming
/// around the pointer, and the scrollable layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Whether a primary-button press starts a drag session.
    pub enable_dragging: bool,
    /// Whether wheel events change the zoom factor.
    pub enable_wheel_zoom: bool,
    /// Largest zoom factor, unless a minimum dimension forces a larger one.
    pub max_zoom: f64,
    /// Smallest on-screen image width, in pixels.
    pub min_image_width: u32,
    /// Smallest on-screen image height, in pixels.
    pub min_image_height: u32,
    /// Wheel delta units per 100% of zoom change.
    pub wheel_divisor: u32,
    /// Point kept fixed while zooming.
    pub anchor_mode: AnchorMode,
    /// How the container is sized for the attached image.
    pub layout_mode: LayoutMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            enable_dragging: true,
            enable_wheel_zoom: true,
            max_zoom: 64.0,
            min_image_width: 10,
            min_image_height: 10,
            wheel_divisor: 4000,
            anchor_mode: AnchorMode::MousePosition,
            layout_mode: LayoutMode::Scrollable,
        }
    }
}

impl ViewerConfig {
    /// Sets whether dragging is enabled.
    #[must_use]
    pub fn with_dragging(mut self, enabled: bool) -> Self {
        self.enable_dragging = enabled;
        self
    }

    /// Sets whether wheel zoom is enabled.
    #[must_use]
    pub fn with_wheel_zoom(mut self, enabled: bool) -> Self {
        self.enable_wheel_zoom = enabled;
        self
    }

    /// Sets the maximum zoom factor.
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the minimum on-screen image size, in pixels.
    #[must_use]
    pub fn with_min_image_size(mut self, width: u32, height: u32) -> Self {
        self.min_image_width = width;
        self.min_image_height = height;
        self
    }

    /// Sets the wheel divisor.
    #[must_use]
    pub fn with_wheel_divisor(mut self, divisor: u32) -> Self {
        self.wheel_divisor = divisor;
        self
    }

    /// Sets the zoom anchor mode.
    #[must_use]
    pub fn with_anchor_mode(mut self, mode: AnchorMode) -> Self {
        self.anchor_mode = mode;
        self
    }

    /// Sets the layout mode.
    #[must_use]
    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Checks that the numeric settings can drive the viewport math.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_zoom.is_finite() || self.max_zoom <= 0.0 {
            return Err(ConfigError::NonPositiveMaxZoom(self.max_zoom));
        }
        if self.min_image_width == 0 || self.min_image_height == 0 {
            return Err(ConfigError::ZeroMinimumDimension);
        }
        if self.wheel_divisor == 0 {
            return Err(ConfigError::ZeroWheelDivisor);
        }
        Ok(())
    }

    /// Returns the zoom limits described by this configuration.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.min_image_width, self.min_image_height, self.max_zoom)
    }

    /// Converts a wheel delta into a relative zoom multiplier,
    /// `1 + delta / wheel_divisor`.
    #[must_use]
    pub fn wheel_zoom_factor(&self, delta: f64) -> f64 {
        1.0 + delta / f64::from(self.wheel_divisor.max(1))
    }
}

/// Error returned when a [`ViewerConfig`] holds unusable values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The maximum zoom factor is zero, negative, or not finite.
    NonPositiveMaxZoom(f64),
    /// A minimum on-screen image dimension is zero.
    ZeroMinimumDimension,
    /// The wheel divisor is zero.
    ZeroWheelDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMaxZoom(zoom) => {
                write!(f, "maximum zoom factor must be positive and finite, got {zoom}")
            }
            Self::ZeroMinimumDimension => {
                f.write_str("minimum image width and height must be at least 1 pixel")
            }
            Self::ZeroWheelDivisor => f.write_str("wheel divisor must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {}
