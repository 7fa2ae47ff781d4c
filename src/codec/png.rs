//! Decoding cubemap sources and writing equirectangular PNGs.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageEncoder;
use thiserror::Error;

use crate::raster::{DestinationImage, RasterError, SourceImage};

/// Errors that can occur while reading or writing images.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid source image: {0}")]
    Raster(#[from] RasterError),
}

/// Options for PNG output.
#[derive(Debug, Clone, Copy)]
pub struct PngOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Decodes a cubemap image from disk.
///
/// Images with an alpha channel are kept as RGBA8, everything else is
/// converted to RGB8. Higher bit depths are reduced to 8 bits.
pub fn load_source_image(path: &Path) -> Result<SourceImage, CodecError> {
    let decoded = image::open(path)?;
    let source = if decoded.color().has_alpha() {
        SourceImage::from_rgba_image(decoded.to_rgba8())?
    } else {
        SourceImage::from_rgb_image(decoded.to_rgb8())?
    };

    log::debug!(
        "decoded {}: {}x{}, {} channels",
        path.display(),
        source.width(),
        source.height(),
        source.channels()
    );
    Ok(source)
}

/// Writes an RGB canvas as an 8-bit PNG, creating the parent directory if needed.
pub fn save_png(
    canvas: &DestinationImage,
    path: &Path,
    options: &PngOptions,
) -> Result<(), CodecError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgb8,
    )?;

    log::debug!("wrote {}x{} PNG to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
