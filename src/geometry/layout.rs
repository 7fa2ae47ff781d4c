//! Placement of cube faces inside an unfolded cubemap image.

use super::face::CubeFace;
use super::intersect::FaceHit;

/// Maps a face-local coordinate to a normalized position in a cubemap image.
///
/// Implementors must return coordinates in [0, 1] x [0, 1] for locals in the
/// same range.
pub trait CubeLayout {
    /// Returns `(u, v)` with `u` across and `v` down the whole image.
    fn place(&self, hit: FaceHit) -> (f64, f64);
}

/// Affine placement of one face: `u = u0 + ku * x`, `v = v0 + kv * y`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    u0: f64,
    ku: f64,
    v0: f64,
    kv: f64,
}

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

// Indexed by `CubeFace::index`. Side faces in the middle row flip local-y
// except Back; Top and Bottom share the second column.
#[rustfmt::skip]
const HORIZONTAL_CROSS: [Placement; 6] = [
    // Front
    Placement { u0: 0.5, ku: 0.25, v0: TWO_THIRDS, kv: -ONE_THIRD },
    // Back
    Placement { u0: 0.0, ku: 0.25, v0: ONE_THIRD, kv: ONE_THIRD },
    // Top
    Placement { u0: 0.5, ku: -0.25, v0: 0.0, kv: ONE_THIRD },
    // Bottom
    Placement { u0: 0.25, ku: 0.25, v0: TWO_THIRDS, kv: ONE_THIRD },
    // Right
    Placement { u0: 0.75, ku: 0.25, v0: TWO_THIRDS, kv: -ONE_THIRD },
    // Left
    Placement { u0: 0.25, ku: 0.25, v0: TWO_THIRDS, kv: -ONE_THIRD },
];

/// 4 x 3 horizontal cross: Back, Left, Front, Right across the middle row,
/// Top above and Bottom below the second cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalCross;

impl HorizontalCross {
    /// Grid cell `(column, row)` a face occupies.
    pub fn cell(face: CubeFace) -> (u32, u32) {
        match face {
            CubeFace::Back => (0, 1),
            CubeFace::Left => (1, 1),
            CubeFace::Front => (2, 1),
            CubeFace::Right => (3, 1),
            CubeFace::Top => (1, 0),
            CubeFace::Bottom => (1, 2),
        }
    }
}

impl CubeLayout for HorizontalCross {
    #[inline]
    fn place(&self, hit: FaceHit) -> (f64, f64) {
        let p = HORIZONTAL_CROSS[hit.face.index()];
        (p.u0 + hit.x * p.ku, p.v0 + hit.y * p.kv)
    }
}
