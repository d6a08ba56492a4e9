//! # Frameviz
//!
//! A small frame-by-frame 2D geometry visualizer. Callers add points,
//! line segments, and polygons to a [`Scene`](scene::Scene) across
//! discrete frames; the scene renders either a static composite or an
//! animated replay, with three output paths:
//!
//! - terminal display (ASCII/Unicode/ANSI) via [`Scene::show`](scene::Scene::show)
//! - PNG export via [`Scene::save_picture`](scene::Scene::save_picture)
//! - animated GIF export via [`Scene::make_gif`](scene::Scene::make_gif)
//!   and [`Scene::save_gif`](scene::Scene::save_gif)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frameviz::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> frameviz::Result<()> {
//! let mut scene = Scene::new();
//! scene.add_points([(0.0, 0.0), (1.0, 1.0)], Some(Rgba::RED));
//! scene.new_frame();
//! scene.add_points([(2.0, 2.0)], Some(Rgba::BLUE));
//! scene.new_frame();
//!
//! scene.save_picture("composite.png")?;
//! scene.make_gif(Duration::from_millis(600))?;
//! scene.save_gif("replay.gif")?;
//! # Ok(())
//! # }
//! ```
//!
//! Rendering is pure Rust: geometry is rasterized into an RGBA
//! [`Framebuffer`](framebuffer::Framebuffer) and handed to the PNG, GIF,
//! or terminal encoder.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Typed geometric primitives (points, segments, polygons).
pub mod geometry;

/// Frame-tracked geometry storage.
pub mod layer;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Scene and Rendering Modules
// ============================================================================

/// The scene facade: geometry accumulation, frames, and all operations.
pub mod scene;

/// Rendering: primitives, figures, and the static/animated renderers.
pub mod render;

/// Animation playback and export.
pub mod animate;

/// Output encoders (PNG, GIF, terminal).
pub mod output;

mod persist;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for frameviz operations.
pub mod error;

pub use animate::DEFAULT_FRAME_INTERVAL;
pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use frameviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animate::{Animation, DEFAULT_FRAME_INTERVAL};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Bounds, Point, Polygon, Segment};
    pub use crate::output::{GifEncoder, PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{Artifact, Axis, RenderOptions, Snapshot};
    pub use crate::scene::Scene;
}

// ============================================================================
// Tests
// ============================================================================
