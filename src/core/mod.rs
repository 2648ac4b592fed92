//! Core module - pure geometry, object model and hidden-surface renderer.
//!
//! Everything here is deterministic and free of I/O so it can be tested
//! headlessly; the terminal and file-system layers live in `term` and
//! `loader`.

pub mod cube;
pub mod mesh;
pub mod model;
pub mod plane;
pub mod quad;
pub mod render;
pub mod vec;

// Re-export commonly used types
pub use cube::Cube;
pub use mesh::Mesh;
pub use model::{Face, Model, Quad};
pub use plane::Plane;
pub use quad::quad_contains;
pub use render::{render, PixelSink};
pub use vec::{Vec3f, Vec3i};
