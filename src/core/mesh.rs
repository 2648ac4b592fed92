//! Arbitrary quad-faced mesh, usually produced by the file loader.

use crate::core::model::{Face, Model, Quad};
use crate::core::vec::Vec3i;
use crate::types::{Euler, FaceColor};

/// A loaded solid: dynamic vertex list plus an explicit face-to-index table.
///
/// Invariants (the loader's responsibility, not checked per frame):
/// every face's 4 indices are in range, and every face stays planar under
/// rigid rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    center: Vec3i,
    /// Current (display) geometry.
    vertices: Vec<Vec3i>,
    /// Unrotated snapshot backing `rotate_to`.
    reference: Vec<Vec3i>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from placed vertices and a face table.
    ///
    /// Returns `None` when any face index is out of range; callers that
    /// parse untrusted files should surface that as a load error.
    pub fn new(center: Vec3i, vertices: Vec<Vec3i>, faces: Vec<Face>) -> Option<Self> {
        let n = vertices.len();
        if faces.iter().any(|f| f.indices.iter().any(|&i| i >= n)) {
            return None;
        }
        Some(Self {
            center,
            reference: vertices.clone(),
            vertices,
            faces,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vec3i] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

impl Model for Mesh {
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
