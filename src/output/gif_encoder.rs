//! Animated GIF output encoder.
//!
//! Encodes a rendered frame sequence as an infinitely looping GIF using
//! the `image` crate's GIF codec.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use image::codecs::gif::{GifEncoder as ImageGifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// GIF encoder for frame-sequence output.
pub struct GifEncoder;

impl GifEncoder {
    /// Write a frame sequence to an animated GIF file.
    ///
    /// Every frame is shown for `interval`; the animation loops forever.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or GIF encoding fails, or if
    /// `frames` is empty.
    pub fn write_to_file<P: AsRef<Path>>(
        frames: &[Framebuffer],
        interval: Duration,
        path: P,
    ) -> Result<()> {
        if frames.is_empty() {
            return Err(Error::NoFrames);
        }

        let file = File::create(path)?;
        let mut encoder = ImageGifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite)?;

        let delay = Delay::from_saturating_duration(interval);
        for fb in frames {
            let (width, height) = (fb.width(), fb.height());
            let buffer = RgbaImage::from_raw(width, height, fb.pixels().to_vec())
                .ok_or(Error::InvalidDimensions { width, height })?;
            encoder.encode_frame(Frame::from_parts(buffer, 0, 0, delay))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn solid_frame(color: Rgba) -> Framebuffer {
        let mut fb = Framebuffer::new(16, 16).unwrap();
        fb.clear(color);
        fb
    }

    #[test]
    fn test_gif_write_to_file() {
        let frames = vec![solid_frame(Rgba::RED), solid_frame(Rgba::BLUE)];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        GifEncoder::write_to_file(&frames, Duration::from_millis(100), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        // GIF89a magic
        assert_eq!(&written[0..6], b"GIF89a");
    }

    #[test]
    fn test_gif_rejects_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.gif");
        let result = GifEncoder::write_to_file(&[], Duration::from_millis(100), &path);
        assert!(matches!(result, Err(Error::NoFrames)));
    }
}
