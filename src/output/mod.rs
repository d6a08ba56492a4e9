//! Output encoders (PNG, GIF, terminal).

mod gif_encoder;
mod png_encoder;
mod terminal;

pub use gif_encoder::GifEncoder;
pub use png_encoder::PngEncoder;
pub use terminal::{TerminalEncoder, TerminalMode};
