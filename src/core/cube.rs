//! Axis-aligned cube with a fixed, documented vertex order.

use crate::core::model::{Face, Model, Quad};
use crate::core::vec::Vec3i;
use crate::types::{Euler, FaceColor};

/// Vertex-to-corner mapping, with x right, y up, z away from the camera:
///
/// ```text
///        p3 ─────── p2          front face (z = center.z - half):
///       / |        / |            p0 bottom-left   p1 bottom-right
///     p7 ─────── p6  |            p2 top-right     p3 top-left
///      |  |       |  |          back face (z = center.z + half):
///      | p0 ──────|─ p1           p4..p7 in the same x/y pattern
///      | /        | /
///     p4 ─────── p5
/// ```
///
/// Face declaration order (front, left, back, right, top, bottom) fixes
/// both the palette assignment and the hidden-surface tie-break order.
const FACE_TABLE: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 4, 7, 3],
    [4, 5, 6, 7],
    [5, 1, 2, 6],
    [7, 6, 2, 3],
    [0, 4, 5, 1],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    center: Vec3i,
    size: i32,
    /// Current (display) geometry.
    vertices: [Vec3i; 8],
    /// Unrotated snapshot backing `rotate_to`.
    reference: [Vec3i; 8],
    faces: [Face; 6],
}

impl Cube {
    /// Build a cube of edge length `size` centered on `center`.
    ///
    /// The 8 corners sit at every sign combination of `center ± size/2`
    /// per axis, in the order documented on [`FACE_TABLE`].
    pub fn new(center: Vec3i, size: i32) -> Self {
        let h = size / 2;
        let vertices = [
            center + Vec3i::new(-h, -h, -h), // p0
            center + Vec3i::new(h, -h, -h),  // p1
            center + Vec3i::new(h, h, -h),   // p2
            center + Vec3i::new(-h, h, -h),  // p3
            center + Vec3i::new(-h, -h, h),  // p4
            center + Vec3i::new(h, -h, h),   // p5
            center + Vec3i::new(h, h, h),    // p6
            center + Vec3i::new(-h, h, h),   // p7
        ];
        let mut faces = [Face::new([0; 4], FaceColor::palette(0)); 6];
        for (i, indices) in FACE_TABLE.iter().enumerate() {
            faces[i] = Face::new(*indices, FaceColor::palette(i));
        }
        Self {
            center,
            size,
            vertices,
            reference: vertices,
            faces,
        }
    }

    /// Tag every face with the same color. Mostly useful for tests and
    /// single-texture rendering.
    pub fn with_uniform_color(mut self, color: FaceColor) -> Self {
        for face in &mut self.faces {
            face.color = color;
        }
        self
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn vertices(&self) -> &[Vec3i; 8] {
        &self.vertices
    }
}

impl Model for Cube {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face(&self, i: usize) -> (Quad, FaceColor) {
        let f = &self.faces[i];
        (
            [
                self.vertices[f.indices[0]],
                self.vertices[f.indices[1]],
                self.vertices[f.indices[2]],
                self.vertices[f.indices[3]],
            ],
            f.color,
        )
    }

    fn center(&self) -> Vec3i {
        self.center
    }

    fn rotate_by(&mut self, angles: Euler) {
        for v in &mut self.vertices {
            *v = v.rotated_about(self.center, angles);
        }
    }

    fn rotate_to(&mut self, angles: Euler) {
        for (v, r) in self.vertices.iter_mut().zip(self.reference.iter()) {
            *v = r.rotated_about(self.center, angles);
        }
    }

    fn translate_by(&mut self, delta: Vec3i) {
        self.center = self.center + delta;
        for v in &mut self.vertices {
            *v = *v + delta;
        }
        for r in &mut self.reference {
            *r = *r + delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_reference_valid_corners() {
        let cube = Cube::new(Vec3i::default(), 10);
        for i in 0..cube.face_count() {
            let (quad, _) = cube.face(i);
            // Every face vertex is one of the 8 corners.
            for v in quad {
                assert!(cube.vertices().contains(&v));
            }
        }
    }

    #[test]
    fn opposite_faces_share_no_vertex() {
        // (front, back), (left, right), (top, bottom) by declaration order.
        for (a, b) in [(0, 2), (1, 3), (4, 5)] {
            let set_a = FACE_TABLE[a];
            for idx in FACE_TABLE[b] {
                assert!(!set_a.contains(&idx));
            }
        }
    }
}
