#![warn(missing_docs)]

//! Math types for the explo estimation kernel.
//!
//! Thin wrappers around nalgebra providing the world frame used throughout
//! the workspace: x points east, y points north, z points up, and the
//! surface datum sits at z = 0. Angles are carried in degrees at the API
//! boundary and converted here.

use nalgebra::Vector3;

/// A point in 3D world space (metres).
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D world space.
pub type Vec3 = Vector3<f64>;

/// Unit vector for a compass bearing and a plunge below horizontal.
///
/// `azimuth_deg` is measured clockwise from north, `plunge_deg` downward
/// from the horizontal plane, so the result is
/// `(sin az · cos pl, cos az · cos pl, −sin pl)`.
pub fn bearing_vector(azimuth_deg: f64, plunge_deg: f64) -> Vec3 {
    let (sin_az, cos_az) = azimuth_deg.to_radians().sin_cos();
    let (sin_pl, cos_pl) = plunge_deg.to_radians().sin_cos();
    Vec3::new(sin_az * cos_pl, cos_az * cos_pl, -sin_pl)
}

/// Horizontal unit vector for a compass bearing.
pub fn horizontal_bearing(azimuth_deg: f64) -> Vec3 {
    bearing_vector(azimuth_deg, 0.0)
}

/// Project a point onto the surface datum (z = 0).
pub fn on_surface(p: &Point3) -> Point3 {
    Point3::new(p.x, p.y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_bearing() {
        let v = horizontal_bearing(0.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
        assert!(v.z.abs() < 1e-12);
    }

    #[test]
    fn test_east_bearing() {
        let v = horizontal_bearing(90.0);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
    }

    #[test]
    fn test_vertical_plunge() {
        let v = bearing_vector(123.0, 90.0);
        assert!(v.x.abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!((v.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bearing_is_unit() {
        for az in [0.0, 37.0, 145.0, 270.0, 359.0] {
            for pl in [0.0, 15.0, 45.0, 60.0, 90.0] {
                let v = bearing_vector(az, pl);
                assert!((v.norm() - 1.0).abs() < 1e-12, "az={az} pl={pl}");
            }
        }
    }

    #[test]
    fn test_on_surface() {
        let p = on_surface(&Point3::new(3.0, -4.0, -120.0));
        assert_eq!(p, Point3::new(3.0, -4.0, 0.0));
    }
}
