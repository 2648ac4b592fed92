//! tui-cube: a spinning 3D cube (or arbitrary quad mesh) rendered on the
//! terminal.
//!
//! Hidden surfaces are removed analytically: every screen cell is tested
//! against every face with a ray/plane intersection plus a point-in-quad
//! check, and the nearest candidate wins. No rasterizer, no depth buffer.

pub mod cli;
pub mod core;
pub mod drive;
pub mod loader;
pub mod term;
pub mod types;
