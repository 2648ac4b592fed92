//! Hidden-surface renderer.
//!
//! No rasterizer and no depth buffer: every screen cell is tested against
//! every face analytically. A candidate z comes from solving the face's
//! plane equation at the cell, containment comes from the 2D quad test, and
//! the visible face is picked per cell.
//!
//! Depth contract: **larger z wins**. The camera sits at the origin looking
//! down +z with the object beyond it, and vertex generation plus the display
//! mapping are calibrated against that rule (see the full-screen cube test);
//! do not flip it without re-validating end to end.

use crate::core::model::Model;
use crate::core::plane::Plane;
use crate::core::quad::quad_contains;
use crate::core::vec::Vec3i;
use crate::types::{FaceColor, ScreenBounds};

/// Receives the visible-pixel stream in object-space coordinates.
///
/// Background cells are never emitted; the sink keeps whatever it was
/// cleared to.
pub trait PixelSink {
    fn set_cell(&mut self, x: i32, y: i32, color: FaceColor);
}

/// Collecting sink for tests and headless use.
impl PixelSink for Vec<(i32, i32, FaceColor)> {
    fn set_cell(&mut self, x: i32, y: i32, color: FaceColor) {
        self.push((x, y, color));
    }
}

/// Render one full pass of `model` over `bounds` into `sink`.
///
/// Cost is O(width x height x faces); always completes the pass it started.
/// Per-face geometric failures (degenerate plane, plane parallel to the
/// viewing axis) only remove that face from that cell, never abort.
pub fn render<M: Model + ?Sized, S: PixelSink>(model: &M, bounds: ScreenBounds, sink: &mut S) {
    let faces = model.face_count();
    for y in bounds.min_y..=bounds.max_y {
        for x in bounds.min_x..=bounds.max_x {
            let mut winner: Option<(i32, FaceColor)> = None;
            for i in 0..faces {
                let (quad, color) = model.face(i);
                let Some(plane) = Plane::from_points(quad[0], quad[1], quad[2]) else {
                    continue;
                };
                let Some(z) = plane.z_at(x, y) else {
                    continue;
                };
                if !quad_contains(Vec3i::new(x, y, z), quad) {
                    continue;
                }
                // Strict comparison keeps the earlier-declared face on
                // exactly equal depth, so shared edges resolve the same way
                // on every pass.
                match winner {
                    Some((best_z, _)) if z <= best_z => {}
                    _ => winner = Some((z, color)),
                }
            }
            if let Some((_, color)) = winner {
                sink.set_cell(x, y, color);
            }
        }
    }
}
