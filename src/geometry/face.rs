//! Cube face identification and per-face axis conventions.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Identifies which face of the unit cube a ray hits.
///
/// Discriminants follow the order in which faces are tested for intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    Front = 0,
    /// -X face
    Back = 1,
    /// +Y face
    Top = 2,
    /// -Y face
    Bottom = 3,
    /// +Z face
    Right = 4,
    /// -Z face
    Left = 5,
}

/// How one face-local coordinate is read off a point on the face plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvAxis {
    /// Component of the hit point (0 = x, 1 = y, 2 = z).
    pub component: usize,
    /// Whether the local coordinate runs against that component.
    pub flipped: bool,
}

impl UvAxis {
    const fn new(component: usize, flipped: bool) -> Self {
        Self { component, flipped }
    }

    /// Maps the selected component of `hit` from [-1, 1] to [0, 1].
    #[inline]
    pub fn local(self, hit: DVec3) -> f64 {
        let t = (hit[self.component] + 1.0) / 2.0;
        if self.flipped {
            1.0 - t
        } else {
            t
        }
    }
}

struct FaceSpec {
    normal: DVec3,
    u: UvAxis,
    v: UvAxis,
}

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

// Indexed by `CubeFace::index`.
const FACE_SPECS: [FaceSpec; 6] = [
    FaceSpec {
        normal: DVec3::new(1.0, 0.0, 0.0),
        u: UvAxis::new(Z, false),
        v: UvAxis::new(Y, false),
    },
    FaceSpec {
        normal: DVec3::new(-1.0, 0.0, 0.0),
        u: UvAxis::new(Z, true),
        v: UvAxis::new(Y, true),
    },
    FaceSpec {
        normal: DVec3::new(0.0, 1.0, 0.0),
        u: UvAxis::new(X, true),
        v: UvAxis::new(Z, true),
    },
    FaceSpec {
        normal: DVec3::new(0.0, -1.0, 0.0),
        u: UvAxis::new(X, false),
        v: UvAxis::new(Z, false),
    },
    FaceSpec {
        normal: DVec3::new(0.0, 0.0, 1.0),
        u: UvAxis::new(X, true),
        v: UvAxis::new(Y, false),
    },
    FaceSpec {
        normal: DVec3::new(0.0, 0.0, -1.0),
        u: UvAxis::new(X, false),
        v: UvAxis::new(Y, false),
    },
];

impl CubeFace {
    /// Returns all six faces in intersection-test order.
    pub const fn all() -> [CubeFace; 6] {
        [
            CubeFace::Front,
            CubeFace::Back,
            CubeFace::Top,
            CubeFace::Bottom,
            CubeFace::Right,
            CubeFace::Left,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal. Since the cube spans [-1, 1], this is also a
    /// point on the face plane.
    #[inline]
    pub fn normal(self) -> DVec3 {
        FACE_SPECS[self.index()].normal
    }

    /// Axis conventions for (local-x, local-y) on this face.
    #[inline]
    pub fn uv_axes(self) -> (UvAxis, UvAxis) {
        let spec = &FACE_SPECS[self.index()];
        (spec.u, spec.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_faces() {
        let faces = CubeFace::all();
        assert_eq!(faces.len(), 6);
        for (i, face) in faces.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_normals_are_distinct_unit_axes() {
        for a in CubeFace::all() {
            let n = a.normal();
            assert!((n.length() - 1.0).abs() < 1e-12);
            for b in CubeFace::all() {
                if a != b {
                    assert_ne!(n, b.normal(), "{:?} and {:?} share a normal", a, b);
                }
            }
        }
    }

    #[test]
    fn test_uv_axes_lie_in_face_plane() {
        for face in CubeFace::all() {
            let (u, v) = face.uv_axes();
            let n = face.normal();
            assert_ne!(u.component, v.component);
            assert_eq!(n[u.component], 0.0, "{:?} u axis is the normal", face);
            assert_eq!(n[v.component], 0.0, "{:?} v axis is the normal", face);
        }
    }

    #[test]
    fn test_face_center_maps_to_half() {
        for face in CubeFace::all() {
            let (u, v) = face.uv_axes();
            let center = face.normal();
            assert_eq!(u.local(center), 0.5);
            assert_eq!(v.local(center), 0.5);
        }
    }

    #[test]
    fn test_flipped_axis() {
        let hit = DVec3::new(-1.0, 0.0, 1.0);
        // Top: local-x = 1 - (x+1)/2, local-y = 1 - (z+1)/2
        let (u, v) = CubeFace::Top.uv_axes();
        assert_eq!(u.local(hit), 1.0);
        assert_eq!(v.local(hit), 0.0);
        // Bottom reads the same components unflipped
        let (u, v) = CubeFace::Bottom.uv_axes();
        assert_eq!(u.local(hit), 0.0);
        assert_eq!(v.local(hit), 1.0);
    }
}
