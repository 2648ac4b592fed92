//! Command-line surface.
//!
//! Parsing and validation happen entirely out here; the core only ever sees
//! the resulting values.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{
    DEFAULT_CZ, DEFAULT_FPS, DEFAULT_SIZE, DEFAULT_SPEED_X, DEFAULT_SPEED_Y, DEFAULT_SPEED_Z,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Cube edge length in object-space pixels (ignored with --mesh).
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: i32,

    /// Render a quad mesh from this file instead of the built-in cube.
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Mesh bounding-box width after placement.
    #[arg(long, default_value_t = 60)]
    pub width: i32,

    /// Mesh bounding-box height after placement.
    #[arg(long, default_value_t = 60)]
    pub height: i32,

    /// Mesh bounding-box depth after placement.
    #[arg(long, default_value_t = 60)]
    pub depth: i32,

    /// Object center x.
    #[arg(long, default_value_t = 0)]
    pub cx: i32,

    /// Object center y.
    #[arg(long, default_value_t = 0)]
    pub cy: i32,

    /// Object center z (distance from the camera).
    #[arg(long, default_value_t = DEFAULT_CZ)]
    pub cz: i32,

    /// Rotation speed about x, radians per second.
    #[arg(long = "speed-x", short = 'x', default_value_t = DEFAULT_SPEED_X, allow_hyphen_values = true)]
    pub speed_x: f64,

    /// Rotation speed about y, radians per second.
    #[arg(long = "speed-y", short = 'y', default_value_t = DEFAULT_SPEED_Y, allow_hyphen_values = true)]
    pub speed_y: f64,

    /// Rotation speed about z, radians per second.
    #[arg(long = "speed-z", short = 'z', default_value_t = DEFAULT_SPEED_Z, allow_hyphen_values = true)]
    pub speed_z: f64,

    /// Multiply each rotation speed by a random bias.
    #[arg(long)]
    pub random: bool,

    /// Replay absolute orientations from a file of `rx ry rz` lines
    /// instead of spinning.
    #[arg(long)]
    pub angles: Option<PathBuf>,

    /// Target frames per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Stop after this many frames.
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Override the detected terminal width, in columns.
    #[arg(long)]
    pub cols: Option<u16>,

    /// Override the detected terminal height, in rows.
    #[arg(long)]
    pub rows: Option<u16>,

    /// Character cell height/width ratio used for aspect correction.
    #[arg(long, default_value_t = crate::term::DEFAULT_CHAR_ASPECT)]
    pub char_aspect: f64,

    /// Pixels moved per frame along x when bouncing.
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    pub move_x: i32,

    /// Pixels moved per frame along y when bouncing.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub move_y: i32,

    /// Pixels moved per frame along z when bouncing.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub move_z: i32,

    /// Flip the movement direction every N frames; 0 keeps the object
    /// centered.
    #[arg(long, default_value_t = 0)]
    pub bounce_every: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let args = Args::parse_from(["tui-cube"]);
        assert_eq!(args.size, DEFAULT_SIZE);
        assert_eq!(args.fps, DEFAULT_FPS);
        assert_eq!(args.cz, DEFAULT_CZ);
        assert_eq!(args.bounce_every, 0);
        assert!(args.mesh.is_none());
        assert!(!args.random);
    }

    #[test]
    fn speeds_accept_negative_values() {
        let args = Args::parse_from(["tui-cube", "--speed-x", "-0.9", "--fps", "25"]);
        assert_eq!(args.speed_x, -0.9);
        assert_eq!(args.fps, 25);
    }

    #[test]
    fn mesh_path_and_placement_flags() {
        let args = Args::parse_from([
            "tui-cube", "--mesh", "m.qm", "--width", "30", "--cz", "120",
        ]);
        assert_eq!(args.mesh.as_deref().unwrap().to_str(), Some("m.qm"));
        assert_eq!(args.width, 30);
        assert_eq!(args.cz, 120);
    }
}
