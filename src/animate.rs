//! Animation playback and export.
//!
//! An [`Animation`] is the realized animation object: the rasterized
//! frame sequence plus the per-frame display interval. It is built once
//! per `make_gif` call and retained by the scene as its current animation
//! handle; GIF export requires the handle to exist.

use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::output::{GifEncoder, TerminalEncoder};
use crate::render::{self, Figure};
use crate::scene::Scene;

/// Default per-frame display interval.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(600);

/// A realized animation: rendered frames and their display interval.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Framebuffer>,
    interval: Duration,
}

impl Animation {
    /// Rasterize the scene's frame snapshots into an animation.
    ///
    /// All frames share one autoscaled viewport so geometry stays put
    /// across the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoFrames`] if the scene has no recorded
    /// frames.
    pub(crate) fn build(scene: &mut Scene, interval: Duration) -> Result<Self> {
        let snapshots = render::frame_snapshots(scene)?;
        let options = scene.options();
        let viewport = render::padded_bounds(scene);

        let mut frames = Vec::with_capacity(snapshots.len());
        for snapshot in &snapshots {
            let mut figure = Figure::new(options, viewport)?;
            figure.render_all(snapshot);
            frames.push(figure.into_framebuffer());
        }

        debug!("rasterized {} animation frames", frames.len());
        Ok(Self { frames, interval })
    }

    /// Number of frames in the sequence.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Per-frame display interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The rendered frames, in playback order.
    #[must_use]
    pub fn frames(&self) -> &[Framebuffer] {
        &self.frames
    }

    /// Play the sequence once in the terminal with the default encoder.
    pub fn play(&self) {
        self.play_with(&TerminalEncoder::new());
    }

    /// Play the sequence once in the terminal, redrawing in place and
    /// pausing for the frame interval between frames.
    pub fn play_with(&self, encoder: &TerminalEncoder) {
        let mut rewind_lines = 0usize;
        for fb in &self.frames {
            let text = encoder.render(fb);
            if rewind_lines > 0 {
                print!("\x1b[{rewind_lines}A");
            }
            print!("{text}");
            let _ = io::stdout().flush();
            rewind_lines = text.lines().count();
            thread::sleep(self.interval);
        }
    }

    /// Encode the sequence to an animated GIF file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or GIF encoding fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        GifEncoder::write_to_file(&self.frames, self.interval, path)
    }
}
