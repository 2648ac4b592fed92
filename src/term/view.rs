//! SceneView: maps the renderer's object-space pixel stream onto the
//! terminal grid.
//!
//! The renderer emits `(x, y, color)` with y growing up and the origin at
//! screen center; the view flips y, recenters, and compresses the vertical
//! axis by the character-cell aspect ratio so the cube looks square instead
//! of stretched. The renderer itself never learns about any of this.

use crate::core::PixelSink;
use crate::term::fb::{Cell, FrameBuffer, Rgb};
use crate::types::{FaceColor, ScreenBounds, FACE_GLYPHS};

/// Terminal character cells are roughly twice as tall as wide.
pub const DEFAULT_CHAR_ASPECT: f64 = 2.0;

/// Foreground tints assigned to the default face glyphs, in palette order.
const GLYPH_TINTS: [Rgb; 6] = [
    Rgb::new(120, 200, 255),
    Rgb::new(255, 180, 100),
    Rgb::new(150, 255, 150),
    Rgb::new(255, 120, 160),
    Rgb::new(230, 230, 120),
    Rgb::new(190, 150, 255),
];

pub struct SceneView {
    fb: FrameBuffer,
    /// Height/width ratio of one character cell; object-space y is divided
    /// by this before hitting a row.
    char_aspect: f64,
}

impl SceneView {
    pub fn new(char_aspect: f64) -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
            char_aspect,
        }
    }

    /// Start a frame targeting a `width x height` cell grid.
    pub fn begin_frame(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
        self.fb.clear();
    }

    /// Object-space bounds whose cells all land on the current grid.
    ///
    /// The vertical range is stretched by the aspect factor so compressed
    /// rows are still fully sampled.
    pub fn bounds(&self) -> ScreenBounds {
        let w = self.fb.width() as i32;
        let h = (self.fb.height() as f64 * self.char_aspect).ceil() as i32;
        ScreenBounds::centered(w, h.max(1))
    }

    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    fn tint(color: FaceColor) -> Rgb {
        FACE_GLYPHS
            .iter()
            .position(|&g| g == color.0)
            .map(|i| GLYPH_TINTS[i])
            .unwrap_or_default()
    }
}

impl PixelSink for SceneView {
    fn set_cell(&mut self, x: i32, y: i32, color: FaceColor) {
        let col = x + self.fb.width() as i32 / 2;
        // y grows up in object space, rows grow down; compress by aspect.
        let row = self.fb.height() as i32 / 2 - (y as f64 / self.char_aspect).round() as i32;
        if col < 0 || row < 0 {
            return;
        }
        self.fb.set(
            col as u16,
            row as u16,
            Cell {
                ch: color.0,
                fg: Self::tint(color),
            },
        );
    }
}
