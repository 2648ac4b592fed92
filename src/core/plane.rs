//! Plane construction and the z-solve used for per-pixel sampling.

use crate::core::vec::Vec3i;

/// A plane in `normal . p + offset = 0` form.
///
/// The normal keeps the un-normalized cross-product magnitude; only its
/// direction and the matching offset matter to the z-solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plane {
    pub normal: Vec3i,
    pub offset: i64,
}

impl Plane {
    /// Build the plane through three points.
    ///
    /// Returns `None` when the points are collinear (zero normal); callers
    /// must skip such faces rather than divide by a zero normal later.
    pub fn from_points(p0: Vec3i, p1: Vec3i, p2: Vec3i) -> Option<Plane> {
        let normal = (p1 - p0).cross(p2 - p0);
        if normal.is_zero() {
            return None;
        }
        let offset = -normal.dot(p0);
        Some(Plane { normal, offset })
    }

    /// Solve the plane equation for z at screen coordinate `(x, y)`.
    ///
    /// Returns `None` when the plane is parallel to the viewing axis
    /// (`normal.z == 0`), where no unique z exists. The result is rounded
    /// to the integer lattice the renderer compares on.
    pub fn z_at(&self, x: i32, y: i32) -> Option<i32> {
        if self.normal.z == 0 {
            return None;
        }
        let numer =
            -(self.offset + self.normal.x as i64 * x as i64 + self.normal.y as i64 * y as i64);
        let z = numer as f64 / self.normal.z as f64;
        Some(z.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_aligned_quad_has_axis_normal() {
        // Quad in the z = 7 plane.
        let p = Plane::from_points(
            Vec3i::new(0, 0, 7),
            Vec3i::new(4, 0, 7),
            Vec3i::new(4, 4, 7),
        )
        .unwrap();
        assert_eq!(p.normal.x, 0);
        assert_eq!(p.normal.y, 0);
        assert_ne!(p.normal.z, 0);
        assert_eq!(p.z_at(2, 2), Some(7));
    }

    #[test]
    fn collinear_points_are_rejected() {
        let p = Plane::from_points(
            Vec3i::new(0, 0, 0),
            Vec3i::new(1, 1, 1),
            Vec3i::new(3, 3, 3),
        );
        assert_eq!(p, None);
    }

    #[test]
    fn vertical_plane_has_no_z_solution() {
        // Plane x = 0 contains the z axis.
        let p = Plane::from_points(
            Vec3i::new(0, 0, 0),
            Vec3i::new(0, 1, 0),
            Vec3i::new(0, 0, 1),
        )
        .unwrap();
        assert_eq!(p.z_at(5, 5), None);
    }

    #[test]
    fn slanted_plane_z_is_rounded() {
        // Plane through (0,0,0), (2,0,1), (0,2,0): z = x/2.
        let p = Plane::from_points(
            Vec3i::new(0, 0, 0),
            Vec3i::new(2, 0, 1),
            Vec3i::new(0, 2, 0),
        )
        .unwrap();
        assert_eq!(p.z_at(2, 0), Some(1));
        assert_eq!(p.z_at(1, 0), Some(1)); // 0.5 rounds away from zero
        assert_eq!(p.z_at(4, 9), Some(2));
    }
}
