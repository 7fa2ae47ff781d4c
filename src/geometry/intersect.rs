//! Ray/unit-cube intersection from the cube center.

use glam::DVec3;

use super::face::CubeFace;

/// Rays with |dot(normal, ray)| at or below this are treated as parallel to a face.
pub const PARALLEL_EPSILON: f64 = 1e-7;

/// The face a ray leaves the cube through, with the face-local coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    pub face: CubeFace,
    /// Local x in [0, 1].
    pub x: f64,
    /// Local y in [0, 1].
    pub y: f64,
}

impl FaceHit {
    pub fn new(face: CubeFace, x: f64, y: f64) -> Self {
        Self { face, x, y }
    }
}

#[inline]
fn within_face(value: f64) -> bool {
    (-1.0..=1.0).contains(&value)
}

/// Intersects a unit ray from the origin with a single face of the cube.
///
/// Returns `None` if the ray is parallel to the face plane, points away from
/// it, or crosses the plane outside the face square.
pub fn intersect_face(face: CubeFace, ray: DVec3) -> Option<FaceHit> {
    let normal = face.normal();
    let denom = normal.dot(ray);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    // Plane point equals the normal for a cube spanning [-1, 1].
    let t = normal.dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let hit = ray * t;
    let (u, v) = face.uv_axes();
    if !within_face(hit[u.component]) || !within_face(hit[v.component]) {
        return None;
    }

    Some(FaceHit::new(face, u.local(hit), v.local(hit)))
}

/// Finds the cube face hit by `direction` cast from the cube center.
///
/// `direction` need not be normalized. Returns `None` only for degenerate
/// input (zero length or non-finite components).
pub fn intersect_cube(direction: DVec3) -> Option<FaceHit> {
    let length = direction.length();
    if !(length.is_finite() && length > 0.0) {
        return None;
    }
    let ray = direction / length;

    CubeFace::all()
        .into_iter()
        .find_map(|face| intersect_face(face, ray))
}
