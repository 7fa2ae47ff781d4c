//! Cube geometry for panorama remapping.
//!
//! Maps equirectangular pixels to viewing rays, intersects those rays with
//! the unit cube and places the face-local coordinate inside a cubemap image.

mod face;
mod equirect;
mod intersect;
mod layout;

pub use face::{CubeFace, UvAxis};
pub use equirect::SphericalCoord;
pub use intersect::{intersect_cube, intersect_face, FaceHit, PARALLEL_EPSILON};
pub use layout::{CubeLayout, HorizontalCross};
