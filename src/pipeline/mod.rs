//! Remap pipeline: pixel → angles → cube face → cubemap sample.

mod transform;

pub use transform::{
    cross_to_equirect, output_pixel_to_source_uv, remap_with_layout, TransformError,
    TransformOptions,
};
