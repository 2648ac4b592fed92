//! The renderer-facing object seam.
//!
//! Both rotation flavors live here because they have different drift
//! characteristics and must never share a code path: `rotate_by` compounds
//! incremental deltas on the display geometry, while `rotate_to` always
//! rebuilds the display geometry from an immutable reference snapshot, so
//! absolute orientations (e.g. from a sensor) are never double-applied.

use crate::core::vec::Vec3i;
use crate::types::{Euler, FaceColor};

/// Four vertices in rectangle-traversal order.
pub type Quad = [Vec3i; 4];

/// A quad face: four vertex indices plus a display color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 4],
    pub color: FaceColor,
}

impl Face {
    pub fn new(indices: [usize; 4], color: FaceColor) -> Self {
        Self { indices, color }
    }
}

/// A renderable solid: an ordered set of quad faces plus rigid transforms.
pub trait Model {
    fn face_count(&self) -> usize;

    /// Face `i`'s vertices (current display geometry) and color tag.
    fn face(&self, i: usize) -> (Quad, FaceColor);

    fn center(&self) -> Vec3i;

    /// Apply an incremental rotation about the object's center.
    /// Repeated calls accumulate orientation.
    fn rotate_by(&mut self, angles: Euler);

    /// Set an absolute orientation, recomputed fresh from the reference
    /// geometry. Repeated calls never compound.
    fn rotate_to(&mut self, angles: Euler);

    /// Shift the object (center, display and reference geometry) by a fixed
    /// offset. The reference set moves too so later `rotate_to` calls stay
    /// centered correctly.
    fn translate_by(&mut self, delta: Vec3i);
}
