//! Image file I/O around the in-memory remap.

mod png;

pub use png::{load_source_image, save_png, CodecError, PngOptions};
