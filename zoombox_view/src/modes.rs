// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which point stays visually fixed while the zoom factor changes.
///
/// This enum is consulted by [`crate::resolve_anchor`] and
/// [`crate::Viewport::apply_zoom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorMode {
    /// Zoom around the pointer position inside the control.
    ///
    /// This is what makes wheel zoom feel like "zoom into what I point at".
    #[default]
    MousePosition,
    /// Zoom around the center of the control's client area.
    ControlCenter,
    /// Zoom around the center of the image's current on-screen rectangle.
    ImageCenter,
}

/// How the container is sized relative to the attached image.
///
/// This mode is consulted by [`crate::apply_layout_mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// The container takes the image's native pixel size.
    ///
    /// No scaling is applied; scrolling, if any, is the host container's job.
    #[default]
    Scrollable,
    /// The container shrinks to the largest size that fits its current bounds
    /// while preserving the image aspect ratio, and the image is scaled to fill it.
    RatioStretch,
}
