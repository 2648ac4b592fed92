//! 3D vector primitives.
//!
//! Vertex storage is integer (`Vec3i`) because the renderer compares screen
//! coordinates on an integer lattice, but rotation needs real trigonometry,
//! so the rotation path goes through `Vec3f` and rounds back.

use crate::types::Euler;

/// Integer 3D vector. This is the vertex storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Floating 3D vector used for rotation math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3f {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3i {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Dot product, widened to avoid overflow on cross-product inputs.
    pub fn dot(self, rhs: Vec3i) -> i64 {
        self.x as i64 * rhs.x as i64 + self.y as i64 * rhs.y as i64 + self.z as i64 * rhs.z as i64
    }

    pub fn cross(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }

    pub fn to_f(self) -> Vec3f {
        Vec3f::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Rotate about `center` by fixed-axis Euler angles and round each
    /// component back to the integer lattice.
    ///
    /// Rounding is `f64::round`, i.e. half away from zero; repeated
    /// application accumulates at most a small bounded error per component,
    /// which callers that need exact restoration must tolerate.
    pub fn rotated_about(self, center: Vec3i, angles: Euler) -> Vec3i {
        self.to_f().rotated_about(center.to_f(), angles).round()
    }
}

impl Vec3f {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Vec3f) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Round each component half away from zero.
    pub fn round(self) -> Vec3i {
        Vec3i::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.z.round() as i32,
        )
    }

    /// Rotate about `center` by Euler angles applied as elemental rotations
    /// about the fixed x, then y, then z axes (not body-frame composition).
    pub fn rotated_about(self, center: Vec3f, angles: Euler) -> Vec3f {
        let p = self - center;

        let (sx, cx) = angles.x.sin_cos();
        let (sy, cy) = angles.y.sin_cos();
        let (sz, cz) = angles.z.sin_cos();

        // About x.
        let p = Vec3f::new(p.x, p.y * cx - p.z * sx, p.y * sx + p.z * cx);
        // About y.
        let p = Vec3f::new(p.x * cy + p.z * sy, p.y, -p.x * sy + p.z * cy);
        // About z.
        let p = Vec3f::new(p.x * cz - p.y * sz, p.x * sz + p.y * cz, p.z);

        p + center
    }
}

impl std::ops::Add for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Add for Vec3f {
    type Output = Vec3f;

    fn add(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3f {
    type Output = Vec3f;

    fn sub(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
