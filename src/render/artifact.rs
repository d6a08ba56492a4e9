//! Drawable artifacts and animation snapshots.
//!
//! An [`Artifact`] is one drawable unit produced from a stored entry: a
//! scatter of points, a collection of segments, a single filled polygon
//! patch, or an axis label. A [`Snapshot`] is everything visible at one
//! animation frame; snapshots are cumulative across frames.

use crate::color::Rgba;
use crate::geometry::{Point, Polygon, Segment};

/// Which axis a label artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

/// One drawable unit on the output surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// All points of one point-set entry, drawn as markers of one color.
    Scatter {
        /// Marker positions in data coordinates.
        points: Vec<Point>,
        /// Resolved draw color.
        color: Rgba,
    },
    /// All segments of one segment-set entry, drawn in one color.
    SegmentCollection {
        /// Segments in data coordinates.
        segments: Vec<Segment>,
        /// Resolved draw color.
        color: Rgba,
    },
    /// One filled, semi-transparent polygon. Always composited below
    /// scatter and segment artifacts.
    PolygonPatch {
        /// The polygon ring in data coordinates.
        polygon: Polygon,
        /// Resolved fill color, alpha already applied.
        color: Rgba,
    },
    /// An axis label. Present in every animation snapshot.
    AxisLabel {
        /// The labeled axis.
        axis: Axis,
    },
}

impl Artifact {
    /// Compositing layer of this artifact. Lower values are drawn first.
    #[must_use]
    pub fn z_order(&self) -> u8 {
        match self {
            Self::PolygonPatch { .. } => 0,
            Self::Scatter { .. } | Self::SegmentCollection { .. } => 1,
            Self::AxisLabel { .. } => 2,
        }
    }
}

/// Everything visible at one animation frame, in draw order.
pub type Snapshot = Vec<Artifact>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_order_layers() {
        let patch = Artifact::PolygonPatch {
            polygon: Polygon::new([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap(),
            color: Rgba::RED,
        };
        let scatter = Artifact::Scatter {
            points: vec![Point::ORIGIN],
            color: Rgba::BLUE,
        };
        let label = Artifact::AxisLabel { axis: Axis::X };

        assert!(patch.z_order() < scatter.z_order());
        assert!(scatter.z_order() < label.z_order());
    }
}
