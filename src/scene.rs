//! The scene: accumulated geometry, frame boundaries, and every
//! user-facing operation.
//!
//! A [`Scene`] owns one [`Layer`] per primitive kind plus a frame counter
//! kept in lockstep with the layers' boundary marks: `new_frame` marks
//! all three layers and bumps the counter in one operation, so each layer
//! always carries exactly as many marks as there are frames.

use std::path::Path;
use std::time::Duration;

use log::debug;

use crate::animate::Animation;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, Point, Polygon, Segment};
use crate::layer::Layer;
use crate::output::{PngEncoder, TerminalEncoder};
use crate::persist;
use crate::render::{self, RenderOptions, Snapshot};

/// An incrementally built 2D scene that can be rendered as a static
/// composite or replayed frame by frame as an animation.
///
/// ```
/// use frameviz::prelude::*;
///
/// let mut scene = Scene::new();
/// scene.add_points([(0.0, 0.0), (1.0, 1.0)], Some(Rgba::RED));
/// scene.new_frame();
/// scene.add_line_segments([((0.0, 0.0), (1.0, 1.0))], None);
/// scene.new_frame();
/// assert_eq!(scene.frame_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scene {
    points: Layer<Vec<Point>>,
    segments: Layer<Vec<Segment>>,
    polygons: Layer<Vec<Polygon>>,
    frame_count: usize,
    animation: Option<Animation>,
    options: RenderOptions,
}

impl Scene {
    /// Create an empty scene with default render options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create an empty scene with the given render options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            points: Layer::new(),
            segments: Layer::new(),
            polygons: Layer::new(),
            frame_count: 0,
            animation: None,
            options,
        }
    }

    /// The scene's render options.
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Add one point-set entry: a batch of points drawn as markers of one
    /// color. `None` draws in the default color.
    pub fn add_points<I, P>(&mut self, points: I, color: Option<Rgba>)
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        self.points.push(points, color);
    }

    /// Add one segment-set entry: a batch of line segments drawn in one
    /// color.
    pub fn add_line_segments<I, S>(&mut self, segments: I, color: Option<Rgba>)
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().map(Into::into).collect();
        self.segments.push(segments, color);
    }

    /// Add one polygon-set entry: a batch of polygons, each given as an
    /// open vertex ring, filled semi-transparently in one color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if any ring has fewer than 3
    /// vertices; the scene is left unmodified.
    pub fn add_polygons<I, R, P>(&mut self, polygons: I, color: Option<Rgba>) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let polygons: Vec<Polygon> = polygons
            .into_iter()
            .map(Polygon::new)
            .collect::<Result<_>>()?;
        self.polygons.push(polygons, color);
        Ok(())
    }

    /// Record a frame boundary across all layers and advance the frame
    /// counter. A boundary with no new entries is a legal, empty frame.
    pub fn new_frame(&mut self) {
        self.points.mark_frame();
        self.segments.mark_frame();
        self.polygons.mark_frame();
        self.frame_count += 1;
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Whether the scene holds no geometry at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty() && self.polygons.is_empty()
    }

    /// Reset the whole scene: every layer's entries, marks, and cursor,
    /// the frame counter, and the retained animation handle.
    pub fn clear(&mut self) {
        self.points.reset();
        self.segments.reset();
        self.polygons.reset();
        self.frame_count = 0;
        self.animation = None;
        debug!("scene cleared");
    }

    /// The extent of all geometry in the scene.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::EMPTY;
        for entry in self.points.entries() {
            for p in &entry.shapes {
                bounds.expand(*p);
            }
        }
        for entry in self.segments.entries() {
            for seg in &entry.shapes {
                bounds.expand(seg.start);
                bounds.expand(seg.end);
            }
        }
        for entry in self.polygons.entries() {
            for polygon in &entry.shapes {
                for p in polygon.vertices() {
                    bounds.expand(*p);
                }
            }
        }
        bounds
    }

    /// Build the ordered per-frame snapshot sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFrames`] if no frame boundary was recorded.
    pub fn frame_snapshots(&mut self) -> Result<Vec<Snapshot>> {
        render::frame_snapshots(self)
    }

    /// Render the static composite and display it in the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be created.
    pub fn show(&self) -> Result<()> {
        let figure = render::compose_static(self)?;
        TerminalEncoder::new().print(figure.framebuffer());
        Ok(())
    }

    /// Render the static composite and export it as a PNG image.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, file creation, or encoding fails.
    pub fn save_picture<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let figure = render::compose_static(self)?;
        let fb = figure.into_framebuffer();
        PngEncoder::write_to_file(&fb, path)
    }

    /// Build the animation, play it once in the terminal, and retain it
    /// as the scene's current animation handle.
    ///
    /// See [`crate::DEFAULT_FRAME_INTERVAL`] for the conventional
    /// interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFrames`] if no frame boundary was recorded.
    pub fn make_gif(&mut self, interval: Duration) -> Result<&Animation> {
        let animation = Animation::build(self, interval)?;
        animation.play();
        Ok(self.animation.insert(animation))
    }

    /// Export the retained animation as an animated GIF.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAnimation`] if [`Scene::make_gif`] has not been
    /// called, or an encoding error otherwise.
    pub fn save_gif<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.animation.as_ref().ok_or(Error::NoAnimation)?.save(path)
    }

    /// The retained animation handle, if one was built.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Save the scene's point data as plot text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the scene holds segment or
    /// polygon entries; only point data has a text format.
    pub fn save_plot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save_plot(self, path.as_ref())
    }

    /// Clear the scene and reload point data from plot text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the path does not exist,
    /// [`Error::PlotFormat`] or [`Error::InvalidColor`] on malformed
    /// content, and [`Error::Unsupported`] if the file carries more than
    /// point data.
    pub fn open_plot<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        persist::open_plot(self, path.as_ref())
    }

    /// The point layer: stored entries and frame marks.
    #[must_use]
    pub fn points_layer(&self) -> &Layer<Vec<Point>> {
        &self.points
    }

    /// The segment layer: stored entries and frame marks.
    #[must_use]
    pub fn segments_layer(&self) -> &Layer<Vec<Segment>> {
        &self.segments
    }

    /// The polygon layer: stored entries and frame marks.
    #[must_use]
    pub fn polygons_layer(&self) -> &Layer<Vec<Polygon>> {
        &self.polygons
    }

    pub(crate) fn points_layer_mut(&mut self) -> &mut Layer<Vec<Point>> {
        &mut self.points
    }

    pub(crate) fn segments_layer_mut(&mut self) -> &mut Layer<Vec<Segment>> {
        &mut self.segments
    }

    pub(crate) fn polygons_layer_mut(&mut self) -> &mut Layer<Vec<Polygon>> {
        &mut self.polygons
    }
}
