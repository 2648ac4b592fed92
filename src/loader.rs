//! Mesh file loader.
//!
//! Line-based text format:
//!
//! ```text
//! # comment
//! v  x y z          vertex position (floats accepted)
//! f  i0 i1 i2 i3 [glyph]   quad face as vertex indices, optional color tag
//! ```
//!
//! Faces must list their vertices in rectangle-traversal order and stay
//! planar; faces without a glyph cycle through the default palette. After
//! parsing, geometry is scaled per axis to the requested width/height/depth
//! (bounding-box normalization; zero-extent axes are left alone) and
//! recentered on the requested center. Any malformed input is a hard error:
//! the program cannot render without a valid model, so load failures are
//! fatal at startup rather than degraded per frame.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::core::{Face, Mesh, Vec3f, Vec3i};
use crate::types::FaceColor;

/// Where and how large the loaded mesh should end up.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub center: Vec3i,
    /// Target bounding-box extents per axis, in object-space pixels.
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

pub fn load_mesh(path: &Path, placement: Placement) -> Result<Mesh> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading mesh file {}", path.display()))?;
    parse_mesh(&text, placement).with_context(|| format!("parsing mesh file {}", path.display()))
}

/// Parse and place mesh text. Split from `load_mesh` so tests can feed
/// strings directly.
pub fn parse_mesh(text: &str, placement: Placement) -> Result<Mesh> {
    let mut raw_vertices: Vec<Vec3f> = Vec::new();
    let mut faces: Vec<Face> = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let lineno = lineno + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let mut coord = |axis: &str| -> Result<f64> {
                    fields
                        .next()
                        .ok_or_else(|| anyhow!("line {lineno}: vertex missing {axis} coordinate"))?
                        .parse::<f64>()
                        .with_context(|| format!("line {lineno}: bad {axis} coordinate"))
                };
                let x = coord("x")?;
                let y = coord("y")?;
                let z = coord("z")?;
                raw_vertices.push(Vec3f::new(x, y, z));
            }
            Some("f") => {
                let mut indices = [0usize; 4];
                for slot in &mut indices {
                    *slot = fields
                        .next()
                        .ok_or_else(|| {
                            anyhow!("line {lineno}: face needs exactly 4 vertex indices")
                        })?
                        .parse::<usize>()
                        .with_context(|| format!("line {lineno}: bad face index"))?;
                }
                let color = match fields.next() {
                    Some(tag) => {
                        let mut chars = tag.chars();
                        let glyph = chars.next().unwrap();
                        if chars.next().is_some() {
                            bail!("line {lineno}: face glyph must be a single character");
                        }
                        FaceColor(glyph)
                    }
                    None => FaceColor::palette(faces.len()),
                };
                for &i in &indices {
                    if i >= raw_vertices.len() {
                        bail!(
                            "line {lineno}: face index {i} out of range ({} vertices declared so far)",
                            raw_vertices.len()
                        );
                    }
                }
                faces.push(Face::new(indices, color));
            }
            Some(other) => bail!("line {lineno}: unknown record '{other}'"),
            None => unreachable!("blank lines are skipped"),
        }
    }

    if faces.is_empty() {
        bail!("mesh defines no faces");
    }

    let vertices = place(&raw_vertices, placement);
    Mesh::new(placement.center, vertices, faces)
        .ok_or_else(|| anyhow!("face index out of range after placement"))
}

/// Scale the raw geometry to the placement extents and recenter it.
fn place(raw: &[Vec3f], placement: Placement) -> Vec<Vec3i> {
    let mut min = Vec3f::new(f64::MAX, f64::MAX, f64::MAX);
    let mut max = Vec3f::new(f64::MIN, f64::MIN, f64::MIN);
    for v in raw {
        min = Vec3f::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
        max = Vec3f::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
    }

    let scale_axis = |extent: f64, target: i32| -> f64 {
        if extent > 0.0 {
            target as f64 / extent
        } else {
            1.0
        }
    };
    let sx = scale_axis(max.x - min.x, placement.width);
    let sy = scale_axis(max.y - min.y, placement.height);
    let sz = scale_axis(max.z - min.z, placement.depth);

    let mid = Vec3f::new(
        (min.x + max.x) / 2.0,
        (min.y + max.y) / 2.0,
        (min.z + max.z) / 2.0,
    );
    let center = placement.center.to_f();

    raw.iter()
        .map(|v| {
            Vec3f::new(
                (v.x - mid.x) * sx + center.x,
                (v.y - mid.y) * sy + center.y,
                (v.z - mid.z) * sz + center.z,
            )
            .round()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_placement() -> Placement {
        Placement {
            center: Vec3i::new(0, 0, 20),
            width: 10,
            height: 10,
            depth: 10,
        }
    }

    #[test]
    fn parses_quad_with_glyph_and_default_palette() {
        let text = "\
# a single square
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 0 1 2 3 *
f 3 2 1 0
";
        let mesh = parse_mesh(text, unit_placement()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces()[0].color, FaceColor('*'));
        assert_eq!(mesh.faces()[1].color, FaceColor::palette(1));
    }

    #[test]
    fn placement_scales_and_centers() {
        let text = "\
v 0 0 0
v 2 0 0
v 2 2 0
v 0 2 0
f 0 1 2 3
";
        let mesh = parse_mesh(text, unit_placement()).unwrap();
        // 2x2 quad scaled to 10x10 and centered on (0, 0, 20); z extent is
        // zero so that axis keeps its coordinates relative to the center.
        assert!(mesh.vertices().contains(&Vec3i::new(-5, -5, 20)));
        assert!(mesh.vertices().contains(&Vec3i::new(5, 5, 20)));
    }

    #[test]
    fn index_out_of_range_names_the_line() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 0 1 2 9\n";
        let err = parse_mesh(text, unit_placement()).unwrap_err();
        assert!(err.to_string().contains("line 4"), "got: {err}");
    }

    #[test]
    fn malformed_vertex_is_rejected() {
        let err = parse_mesh("v 1 two 3\n", unit_placement()).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"), "got: {err:#}");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse_mesh("# nothing here\n", unit_placement()).is_err());
    }
}
