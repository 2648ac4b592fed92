//! Shared value types and constants.
//! This module contains pure data types with no external dependencies.

/// Target frame rate when none is given on the command line.
pub const DEFAULT_FPS: u32 = 40;

/// Default cube edge length in object-space pixels.
pub const DEFAULT_SIZE: i32 = 40;

/// Default cube distance from the camera along +z.
pub const DEFAULT_CZ: i32 = 250;

/// Default per-axis rotation speeds, radians per second.
pub const DEFAULT_SPEED_X: f64 = 0.7;
pub const DEFAULT_SPEED_Y: f64 = 0.4;
pub const DEFAULT_SPEED_Z: f64 = 0.6;

/// Random rotation-speed bias range (multiplier applied per axis).
pub const RANDOM_BIAS_MIN: f64 = 0.75;
pub const RANDOM_BIAS_MAX: f64 = 2.25;

/// Glyphs assigned to the six cube faces, and cycled through for mesh
/// faces that do not carry their own tag.
pub const FACE_GLYPHS: [char; 6] = ['~', '.', '=', '@', '%', '|'];

/// Display color tag carried by a face.
///
/// The renderer treats this as an opaque token; the terminal view decides
/// which glyph and tint a tag maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceColor(pub char);

impl FaceColor {
    /// Palette color for face `i` (wraps past the palette length).
    pub fn palette(i: usize) -> Self {
        FaceColor(FACE_GLYPHS[i % FACE_GLYPHS.len()])
    }
}

/// Euler angles in radians, applied about the fixed x, then y, then z axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const ZERO: Euler = Euler {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::Neg for Euler {
    type Output = Euler;

    fn neg(self) -> Euler {
        Euler::new(-self.x, -self.y, -self.z)
    }
}

/// Inclusive object-space pixel bounds for one render pass.
///
/// This is the explicit render context handed to the renderer instead of
/// screen-dimension globals. The origin sits at the middle of the screen;
/// x grows right, y grows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl ScreenBounds {
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Symmetric bounds covering `width` columns and `height` rows
    /// centered on the origin.
    pub fn centered(width: i32, height: i32) -> Self {
        Self {
            min_x: -width / 2,
            max_x: width - width / 2 - 1,
            min_y: -height / 2,
            max_y: height - height / 2 - 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
