//! Rendering: rasterization primitives, the output figure, and the
//! renderer that turns a scene into a static composite or a frame
//! sequence.

mod artifact;
mod figure;
pub mod primitives;
mod renderer;

pub use artifact::{Artifact, Axis, Snapshot};
pub use figure::Figure;
pub(crate) use renderer::{compose_static, frame_snapshots, padded_bounds};

use crate::color::Rgba;

/// Output surface configuration.
///
/// Builder-style setters; the defaults give a 640x480 white canvas with a
/// 40 pixel margin and blue as the color for entries added without one.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Margin between the surface edge and the plot area, in pixels.
    pub margin: u32,
    /// Scatter marker diameter in pixels.
    pub point_size: f32,
    /// Canvas background color.
    pub background: Rgba,
    /// Color used for entries whose color is `None`.
    pub default_color: Rgba,
    /// Color of the plot frame and axis labels.
    pub axis_color: Rgba,
    /// Opacity applied to polygon patch fills.
    pub patch_alpha: f32,
}

impl RenderOptions {
    /// Create options with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 40,
            point_size: 5.0,
            background: Rgba::WHITE,
            default_color: Rgba::BLUE,
            axis_color: Rgba::new(64, 64, 64, 255),
            patch_alpha: 0.4,
        }
    }

    /// Set the surface dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the plot area.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the scatter marker diameter.
    #[must_use]
    pub fn point_size(mut self, size: f32) -> Self {
        self.point_size = size.max(1.0);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set the color for entries added without one.
    #[must_use]
    pub fn default_color(mut self, color: Rgba) -> Self {
        self.default_color = color;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}
