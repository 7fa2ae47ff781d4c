//! In-memory pixel buffers for the remap.
//!
//! The source is the decoded cubemap, validated once and then sampled at
//! random. The destination is allocated up front and filled row by row.

mod source;
mod canvas;

use thiserror::Error;

pub use source::SourceImage;
pub use canvas::{DestinationImage, RGB_CHANNELS};

/// Errors from constructing a source buffer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    #[error("Source image has no pixels: {0}x{1}")]
    EmptySource(u32, u32),
    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
    #[error("Pixel buffer length {actual} != expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
