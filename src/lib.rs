//! Cube-cross cubemap to equirectangular panorama remapping.
//!
//! Every output pixel is turned into a viewing ray, the ray is intersected
//! with the unit cube, and the hit is looked up in the unfolded cross image
//! with nearest-neighbor sampling.

pub mod geometry;
pub mod raster;
pub mod pipeline;
pub mod codec;

pub use geometry::{CubeFace, CubeLayout, FaceHit, HorizontalCross, SphericalCoord};
pub use raster::{DestinationImage, SourceImage};
pub use pipeline::{cross_to_equirect, remap_with_layout, TransformError, TransformOptions};
pub use codec::{load_source_image, save_png, CodecError, PngOptions};
