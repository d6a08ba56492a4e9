//! The output surface: a framebuffer with a data viewport and axes.
//!
//! A `Figure` owns the pixel buffer for one composite image or one
//! animation frame. It projects data coordinates through its viewport
//! scales and rasterizes artifacts. Consuming the figure with
//! [`Figure::into_framebuffer`] hands the pixel resource to an encoder,
//! so it is released on every export path.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Bounds, Point};
use crate::render::artifact::{Artifact, Axis};
use crate::render::primitives::{
    draw_glyph, draw_line, draw_marker, fill_polygon, GLYPH_HEIGHT, GLYPH_WIDTH, GLYPH_X, GLYPH_Y,
};
use crate::render::RenderOptions;
use crate::scale::LinearScale;

/// Pixel scale factor for axis label glyphs.
const LABEL_SCALE: u32 = 2;

/// A composed output surface with labeled axes.
#[derive(Debug, Clone)]
pub struct Figure {
    fb: Framebuffer,
    options: RenderOptions,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl Figure {
    /// Create a fresh surface for the given viewport.
    ///
    /// The viewport is the data-coordinate box mapped onto the plot area
    /// (the surface minus its margins); pixel y is inverted so data y
    /// grows upward. The plot frame is drawn immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero
    /// or the margins leave no plot area.
    pub fn new(options: RenderOptions, viewport: Bounds) -> Result<Self> {
        let RenderOptions {
            width,
            height,
            margin,
            ..
        } = options;
        if width <= 2 * margin || height <= 2 * margin {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut fb = Framebuffer::new(width, height)?;
        fb.clear(options.background);

        let m = margin as f32;
        let x_scale = LinearScale::from_bounds_x(&viewport, (m, width as f32 - m));
        // Inverted: pixel y grows downward
        let y_scale = LinearScale::from_bounds_y(&viewport, (height as f32 - m, m));

        let mut figure = Self {
            fb,
            options,
            x_scale,
            y_scale,
        };
        figure.draw_plot_frame();
        Ok(figure)
    }

    /// Rasterize one artifact onto the surface.
    pub fn draw(&mut self, artifact: &Artifact) {
        match artifact {
            Artifact::Scatter { points, color } => {
                for p in points {
                    let (px, py) = self.project(*p);
                    draw_marker(&mut self.fb, px, py, self.options.point_size, *color);
                }
            }
            Artifact::SegmentCollection { segments, color } => {
                for seg in segments {
                    let (x0, y0) = self.project(seg.start);
                    let (x1, y1) = self.project(seg.end);
                    draw_line(
                        &mut self.fb,
                        x0.round() as i32,
                        y0.round() as i32,
                        x1.round() as i32,
                        y1.round() as i32,
                        *color,
                    );
                }
            }
            Artifact::PolygonPatch { polygon, color } => {
                let projected: Vec<(f32, f32)> = polygon
                    .vertices()
                    .iter()
                    .map(|&v| self.project(v))
                    .collect();
                fill_polygon(&mut self.fb, &projected, *color);
            }
            Artifact::AxisLabel { axis } => self.draw_axis_label(*axis),
        }
    }

    /// Rasterize a set of artifacts, compositing by layer: polygon
    /// patches first, then scatters and segment collections, then axis
    /// labels. Within a layer, artifact order is preserved.
    pub fn render_all(&mut self, artifacts: &[Artifact]) {
        for z in 0..=2 {
            for artifact in artifacts.iter().filter(|a| a.z_order() == z) {
                self.draw(artifact);
            }
        }
    }

    /// The underlying pixel buffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the figure and release its pixel buffer to the caller.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Project a data-coordinate point to pixel coordinates.
    fn project(&self, p: Point) -> (f32, f32) {
        (self.x_scale.scale(p.x), self.y_scale.scale(p.y))
    }

    fn draw_plot_frame(&mut self) {
        let m = self.options.margin as i32;
        let right = self.options.width as i32 - m;
        let bottom = self.options.height as i32 - m;
        let color = self.options.axis_color;

        draw_line(&mut self.fb, m, m, right, m, color);
        draw_line(&mut self.fb, m, bottom, right, bottom, color);
        draw_line(&mut self.fb, m, m, m, bottom, color);
        draw_line(&mut self.fb, right, m, right, bottom, color);
    }

    fn draw_axis_label(&mut self, axis: Axis) {
        let glyph_w = GLYPH_WIDTH * LABEL_SCALE;
        let glyph_h = GLYPH_HEIGHT * LABEL_SCALE;
        let RenderOptions {
            width,
            height,
            margin,
            axis_color,
            ..
        } = self.options;

        match axis {
            Axis::X => {
                // Centered under the plot area, in the bottom margin
                let x = (width / 2).saturating_sub(glyph_w / 2);
                let y = height - margin + (margin.saturating_sub(glyph_h)) / 2;
                draw_glyph(&mut self.fb, x, y, LABEL_SCALE, axis_color, &GLYPH_X);
            }
            Axis::Y => {
                // Centered left of the plot area, in the left margin
                let x = margin.saturating_sub(glyph_w) / 2;
                let y = (height / 2).saturating_sub(glyph_h / 2);
                draw_glyph(&mut self.fb, x, y, LABEL_SCALE, axis_color, &GLYPH_Y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::{Polygon, Segment};

    fn unit_viewport() -> Bounds {
        let mut bounds = Bounds::EMPTY;
        bounds.expand(Point::new(0.0, 0.0));
        bounds.expand(Point::new(1.0, 1.0));
        bounds
    }

    fn small_options() -> RenderOptions {
        RenderOptions::new().dimensions(200, 160).margin(20)
    }

    #[test]
    fn test_new_clears_to_background() {
        let figure = Figure::new(small_options(), unit_viewport()).unwrap();
        // A pixel well inside the plot area is background
        assert_eq!(figure.framebuffer().get_pixel(100, 80), Some(Rgba::WHITE));
    }

    #[test]
    fn test_margin_must_leave_plot_area() {
        let opts = RenderOptions::new().dimensions(30, 30).margin(20);
        assert!(matches!(
            Figure::new(opts, unit_viewport()),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_plot_frame_drawn() {
        let figure = Figure::new(small_options(), unit_viewport()).unwrap();
        let axis_color = small_options().axis_color;
        // Margin corner lies on the frame
        assert_eq!(figure.framebuffer().get_pixel(20, 20), Some(axis_color));
        assert_eq!(figure.framebuffer().get_pixel(100, 20), Some(axis_color));
    }

    #[test]
    fn test_scatter_is_projected_into_plot_area() {
        let mut figure = Figure::new(small_options(), unit_viewport()).unwrap();
        figure.draw(&Artifact::Scatter {
            points: vec![Point::new(0.5, 0.5)],
            color: Rgba::RED,
        });
        // Center of the viewport lands at the center of the plot area
        assert_eq!(figure.framebuffer().get_pixel(100, 80), Some(Rgba::RED));
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let mut figure = Figure::new(small_options(), unit_viewport()).unwrap();
        figure.draw(&Artifact::Scatter {
            points: vec![Point::new(0.5, 1.0)],
            color: Rgba::RED,
        });
        // Max data y maps to the top of the plot area
        let top_hit = (18..=24).any(|y| figure.framebuffer().get_pixel(100, y) == Some(Rgba::RED));
        assert!(top_hit);
    }

    #[test]
    fn test_segment_drawn() {
        let mut figure = Figure::new(small_options(), unit_viewport()).unwrap();
        figure.draw(&Artifact::SegmentCollection {
            segments: vec![Segment::from_coords(0.0, 0.5, 1.0, 0.5)],
            color: Rgba::BLACK,
        });
        assert_eq!(figure.framebuffer().get_pixel(100, 80), Some(Rgba::BLACK));
    }

    #[test]
    fn test_render_all_puts_patches_below() {
        let mut figure = Figure::new(small_options(), unit_viewport()).unwrap();
        let patch = Artifact::PolygonPatch {
            polygon: Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap(),
            color: Rgba::GREEN.with_alpha(255),
        };
        let scatter = Artifact::Scatter {
            points: vec![Point::new(0.5, 0.5)],
            color: Rgba::RED,
        };
        // Scatter listed first, patch second; the patch must still end up
        // underneath the marker.
        figure.render_all(&[scatter, patch]);
        assert_eq!(figure.framebuffer().get_pixel(100, 80), Some(Rgba::RED));
    }

    #[test]
    fn test_axis_labels_ink_in_margins() {
        let mut figure = Figure::new(small_options(), unit_viewport()).unwrap();
        let axis_color = small_options().axis_color;
        figure.draw(&Artifact::AxisLabel { axis: Axis::X });
        figure.draw(&Artifact::AxisLabel { axis: Axis::Y });

        let fb = figure.framebuffer();
        // Rows strictly below the bottom frame line hold only label ink
        let bottom_margin_ink = (0..200)
            .any(|x| (141..160).any(|y| fb.get_pixel(x, y) == Some(axis_color)));
        let left_margin_ink =
            (0..20).any(|x| (0..160).any(|y| fb.get_pixel(x, y) == Some(axis_color)));
        assert!(bottom_margin_ink);
        assert!(left_margin_ink);
    }

    #[test]
    fn test_into_framebuffer_releases_pixels() {
        let figure = Figure::new(small_options(), unit_viewport()).unwrap();
        let fb = figure.into_framebuffer();
        assert_eq!(fb.width(), 200);
        assert_eq!(fb.height(), 160);
    }
}
