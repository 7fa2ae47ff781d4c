//! Per-pixel remap from a cubemap source onto an equirectangular canvas.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{intersect_cube, CubeLayout, HorizontalCross, SphericalCoord};
use crate::raster::{DestinationImage, SourceImage, RGB_CHANNELS};

/// Errors that can occur while remapping.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid output dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Ray for output pixel ({column}, {row}) missed every cube face")]
    DegenerateRay { column: u32, row: u32 },
}

/// Options for the remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Split rows across the rayon thread pool.
    pub parallel: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            width: 2048,
            height: 1024,
            parallel: true,
        }
    }
}

impl TransformOptions {
    /// Creates options for a `width` x `height` output with parallel rows.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Computes the source position `(u, v)` sampled by output pixel `(column, row)`.
///
/// Runs the full chain: equirectangular angles, unit-cube intersection, then
/// placement through `layout`.
pub fn output_pixel_to_source_uv<L: CubeLayout + ?Sized>(
    column: u32,
    row: u32,
    width: u32,
    height: u32,
    layout: &L,
) -> Result<(f64, f64), TransformError> {
    let direction = SphericalCoord::from_equirect_pixel(column, row, width, height).to_direction();
    let hit = intersect_cube(direction).ok_or(TransformError::DegenerateRay { column, row })?;
    Ok(layout.place(hit))
}

/// Remaps a horizontal-cross cubemap onto an equirectangular canvas.
pub fn cross_to_equirect(
    source: &SourceImage,
    options: &TransformOptions,
) -> Result<DestinationImage, TransformError> {
    remap_with_layout(source, options, &HorizontalCross)
}

/// Remaps a cubemap laid out by `layout` onto an equirectangular canvas.
///
/// Every output pixel is written exactly once. Sequential and parallel runs
/// produce identical bytes.
pub fn remap_with_layout<L: CubeLayout + Sync + ?Sized>(
    source: &SourceImage,
    options: &TransformOptions,
    layout: &L,
) -> Result<DestinationImage, TransformError> {
    let TransformOptions {
        width,
        height,
        parallel,
    } = *options;
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions(width, height));
    }

    log::debug!(
        "remapping {}x{} ({} channels) onto {}x{} (parallel: {})",
        source.width(),
        source.height(),
        source.channels(),
        width,
        height,
        parallel
    );
    let start = Instant::now();

    let mut output = DestinationImage::new(width, height);
    let row_len = output.row_len();
    let rows = output.as_raw_mut();

    if parallel {
        rows.par_chunks_exact_mut(row_len)
            .enumerate()
            .try_for_each(|(row, out)| fill_row(source, layout, row as u32, width, height, out))?;
    } else {
        rows.chunks_exact_mut(row_len)
            .enumerate()
            .try_for_each(|(row, out)| fill_row(source, layout, row as u32, width, height, out))?;
    }

    log::debug!("remap finished in {:.2?}", start.elapsed());
    Ok(output)
}

fn fill_row<L: CubeLayout + ?Sized>(
    source: &SourceImage,
    layout: &L,
    row: u32,
    width: u32,
    height: u32,
    out: &mut [u8],
) -> Result<(), TransformError> {
    for (column, pixel) in (0..width).zip(out.chunks_exact_mut(RGB_CHANNELS)) {
        let (u, v) = output_pixel_to_source_uv(column, row, width, height, layout)?;
        pixel.copy_from_slice(source.sample_nearest(u, v));
    }
    Ok(())
}
