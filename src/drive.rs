//! Frame-driver collaborators: orientation sources and screen-bounce
//! movement.
//!
//! Orientation is always *absolute* (consumed through `Model::rotate_to`) so
//! a source that reports ground truth, like a tilt sensor, can never be
//! double-applied. Incremental `rotate_by` stays available on the model for
//! callers that only have deltas.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use rand::Rng;

use crate::core::Vec3i;
use crate::types::{Euler, RANDOM_BIAS_MAX, RANDOM_BIAS_MIN};

/// Supplies one absolute orientation per frame. May block while sampling
/// and may fail; the frame driver retries and then falls back to the
/// last-known-good reading.
pub trait OrientationSource {
    fn next(&mut self) -> Result<Euler>;
}

/// Free-running spin: orientation grows linearly with the frame count at
/// per-axis speeds (radians per second).
#[derive(Debug, Clone)]
pub struct Spin {
    speeds: Euler,
    frame_period: f64,
    frame: u64,
}

impl Spin {
    pub fn new(speeds: Euler, frame_period: Duration) -> Self {
        Self {
            speeds,
            frame_period: frame_period.as_secs_f64(),
            frame: 0,
        }
    }

    /// Multiply each axis speed by a random bias so consecutive runs do not
    /// all spin the same way.
    pub fn randomized(mut self, rng: &mut impl Rng) -> Self {
        self.speeds.x *= rng.gen_range(RANDOM_BIAS_MIN..RANDOM_BIAS_MAX);
        self.speeds.y *= rng.gen_range(RANDOM_BIAS_MIN..RANDOM_BIAS_MAX);
        self.speeds.z *= rng.gen_range(RANDOM_BIAS_MIN..RANDOM_BIAS_MAX);
        self
    }

    pub fn speeds(&self) -> Euler {
        self.speeds
    }
}

impl OrientationSource for Spin {
    fn next(&mut self) -> Result<Euler> {
        let t = self.frame as f64 * self.frame_period;
        self.frame += 1;
        Ok(Euler::new(
            self.speeds.x * t,
            self.speeds.y * t,
            self.speeds.z * t,
        ))
    }
}

/// Absolute orientations replayed from a text file of `rx ry rz` lines
/// (radians). Fails once the file is exhausted, which exercises the frame
/// driver's last-known-good fallback.
pub struct AngleFile {
    lines: std::io::Lines<BufReader<File>>,
    lineno: usize,
}

impl AngleFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening angle file {}", path.display()))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            lineno: 0,
        })
    }
}

impl OrientationSource for AngleFile {
    fn next(&mut self) -> Result<Euler> {
        loop {
            self.lineno += 1;
            let line = self
                .lines
                .next()
                .ok_or_else(|| anyhow!("angle file exhausted"))??;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let mut angle = |axis: &str| -> Result<f64> {
                fields
                    .next()
                    .ok_or_else(|| anyhow!("angle line {} missing {axis}", self.lineno))?
                    .parse::<f64>()
                    .with_context(|| format!("angle line {}: bad {axis}", self.lineno))
            };
            let x = angle("rx")?;
            let y = angle("ry")?;
            let z = angle("rz")?;
            return Ok(Euler::new(x, y, z));
        }
    }
}

/// Screen-bounce movement: a fixed per-frame translation whose direction
/// flips every `every` frames. `every == 0` disables movement and keeps the
/// object where it is.
#[derive(Debug, Clone)]
pub struct BouncePath {
    delta: Vec3i,
    every: u32,
    frame: u32,
}

impl BouncePath {
    pub fn new(delta: Vec3i, every: u32) -> Self {
        Self {
            delta,
            every,
            frame: 0,
        }
    }

    /// Translation to apply this frame, if any.
    pub fn step(&mut self) -> Option<Vec3i> {
        if self.every == 0 {
            return None;
        }
        if self.frame == self.every {
            self.frame = 0;
            self.delta = Vec3i::new(-self.delta.x, -self.delta.y, -self.delta.z);
        }
        self.frame += 1;
        Some(self.delta)
    }
}
