//! Equirectangular pixel to spherical angle mapping.

use std::f64::consts::PI;

use glam::DVec3;

/// A direction on the unit sphere as longitude/latitude angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
    /// Longitude in [-π, π).
    pub theta: f64,
    /// Latitude in [-π/2, π/2].
    pub phi: f64,
}

impl SphericalCoord {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Maps a pixel of a `width` x `height` equirectangular canvas to angles.
    ///
    /// Columns map linearly to longitude starting at -π. Rows map through the
    /// arcsine, so row 0 is the north pole. Pixel corners are sampled, not
    /// centers.
    pub fn from_equirect_pixel(column: u32, row: u32, width: u32, height: u32) -> Self {
        let x_norm = (2.0 * column as f64 / width as f64) - 1.0;
        let y_norm = 1.0 - (2.0 * row as f64 / height as f64);

        Self::new(x_norm * PI, y_norm.asin())
    }

    /// Converts to a unit direction, +Y up, theta = 0 pointing along +X.
    pub fn to_direction(self) -> DVec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        DVec3::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_angles_stay_in_range() {
        let (w, h) = (64, 32);
        for row in 0..h {
            for column in 0..w {
                let c = SphericalCoord::from_equirect_pixel(column, row, w, h);
                assert!(c.theta >= -PI && c.theta < PI, "theta {} out of range", c.theta);
                assert!(c.phi.abs() <= FRAC_PI_2 + 1e-15, "phi {} out of range", c.phi);
            }
        }
    }

    #[test]
    fn test_corner_and_center_pixels() {
        let top_left = SphericalCoord::from_equirect_pixel(0, 0, 2048, 1024);
        assert_eq!(top_left.theta, -PI);
        assert!((top_left.phi - FRAC_PI_2).abs() < 1e-15);

        let center = SphericalCoord::from_equirect_pixel(1024, 512, 2048, 1024);
        assert_eq!(center.theta, 0.0);
        assert_eq!(center.phi, 0.0);
    }

    #[test]
    fn test_direction_is_unit_length() {
        for &(theta, phi) in &[(0.0, 0.0), (1.0, 0.3), (-2.5, -1.2), (PI - 1e-3, 1.5)] {
            let d = SphericalCoord::new(theta, phi).to_direction();
            assert!((d.length() - 1.0).abs() < 1e-12, "direction {:?} not unit", d);
        }
    }

    #[test]
    fn test_direction_axes() {
        let forward = SphericalCoord::new(0.0, 0.0).to_direction();
        assert!((forward - DVec3::X).length() < 1e-12);

        let up = SphericalCoord::new(0.0, FRAC_PI_2).to_direction();
        assert!((up - DVec3::Y).length() < 1e-12);

        let side = SphericalCoord::new(FRAC_PI_2, 0.0).to_direction();
        assert!((side - DVec3::Z).length() < 1e-12);
    }
}
