//! Scene rendering: static composites and animation frame sequences.

use log::debug;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, Point, Polygon, Segment};
use crate::layer::Entry;
use crate::render::artifact::{Artifact, Axis, Snapshot};
use crate::render::figure::Figure;
use crate::render::RenderOptions;
use crate::scene::Scene;

/// Fraction of the data extent added on every side when autoscaling.
const AUTOSCALE_PADDING: f32 = 0.05;

/// The autoscaled viewport for a scene: all geometry plus padding, or the
/// unit square when the scene holds no geometry.
pub(crate) fn padded_bounds(scene: &Scene) -> Bounds {
    scene.bounds().padded(AUTOSCALE_PADDING)
}

/// Compose the static figure: every entry of every layer on one
/// autoscaled surface.
///
/// Entries are collected in fixed layer order (points, segments,
/// polygons); polygon patches are composited below the other artifacts.
pub(crate) fn compose_static(scene: &Scene) -> Result<Figure> {
    let options = scene.options();
    let mut figure = Figure::new(options, padded_bounds(scene))?;

    let mut artifacts: Snapshot = vec![
        Artifact::AxisLabel { axis: Axis::X },
        Artifact::AxisLabel { axis: Axis::Y },
    ];
    for entry in scene.points_layer().entries() {
        artifacts.push(scatter_artifact(entry, options));
    }
    for entry in scene.segments_layer().entries() {
        artifacts.push(segment_artifact(entry, options));
    }
    for entry in scene.polygons_layer().entries() {
        artifacts.extend(patch_artifacts(entry, options));
    }

    debug!(
        "composing static figure: {} artifacts, {}x{}",
        artifacts.len(),
        options.width,
        options.height
    );
    figure.render_all(&artifacts);
    Ok(figure)
}

/// Build the ordered per-frame snapshot sequence for animation playback.
///
/// Every snapshot is cumulative: frame `n` contains everything from
/// frames `0..=n` plus the two persistent axis labels. Layer cursors are
/// rewound first, so the sequence can be rebuilt any number of times.
///
/// # Errors
///
/// Returns [`Error::NoFrames`] if no frame boundary has been recorded.
pub(crate) fn frame_snapshots(scene: &mut Scene) -> Result<Vec<Snapshot>> {
    let frame_count = scene.frame_count();
    if frame_count == 0 {
        return Err(Error::NoFrames);
    }

    let options = scene.options();
    scene.points_layer_mut().rewind();
    scene.segments_layer_mut().rewind();
    scene.polygons_layer_mut().rewind();

    let mut current: Snapshot = vec![
        Artifact::AxisLabel { axis: Axis::X },
        Artifact::AxisLabel { axis: Axis::Y },
    ];
    let mut snapshots = Vec::with_capacity(frame_count);

    for frame in 0..frame_count {
        for entry in scene.points_layer_mut().advance_to(frame) {
            current.push(scatter_artifact(entry, options));
        }
        for entry in scene.segments_layer_mut().advance_to(frame) {
            current.push(segment_artifact(entry, options));
        }
        let patches: Vec<Artifact> = scene
            .polygons_layer_mut()
            .advance_to(frame)
            .iter()
            .flat_map(|entry| patch_artifacts(entry, options))
            .collect();
        current.extend(patches);

        snapshots.push(current.clone());
    }

    debug!("built {} animation snapshots", snapshots.len());
    Ok(snapshots)
}

fn resolve(color: Option<Rgba>, options: RenderOptions) -> Rgba {
    color.unwrap_or(options.default_color)
}

fn scatter_artifact(entry: &Entry<Vec<Point>>, options: RenderOptions) -> Artifact {
    Artifact::Scatter {
        points: entry.shapes.clone(),
        color: resolve(entry.color, options),
    }
}

fn segment_artifact(entry: &Entry<Vec<Segment>>, options: RenderOptions) -> Artifact {
    Artifact::SegmentCollection {
        segments: entry.shapes.clone(),
        color: resolve(entry.color, options),
    }
}

/// One patch artifact per polygon in the entry, all sharing the entry's
/// color with the configured fill opacity applied.
fn patch_artifacts(entry: &Entry<Vec<Polygon>>, options: RenderOptions) -> Vec<Artifact> {
    let color = resolve(entry.color, options).scale_alpha(options.patch_alpha);
    entry
        .shapes
        .iter()
        .map(|polygon| Artifact::PolygonPatch {
            polygon: polygon.clone(),
            color,
        })
        .collect()
}
