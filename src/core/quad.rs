//! Point-in-quad containment test.
//!
//! The candidate point is already known to lie on the quad's plane (it came
//! out of `Plane::z_at` for that same plane), so the test reduces to 2D:
//! drop the coordinate with the largest-magnitude normal component and check
//! edge-sign consistency in the remaining axis pair.

use crate::core::vec::Vec3i;

/// Which coordinate to drop when flattening to 2D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropAxis {
    X,
    Y,
    Z,
}

fn dominant_axis(normal: Vec3i) -> DropAxis {
    let ax = (normal.x as i64).abs();
    let ay = (normal.y as i64).abs();
    let az = (normal.z as i64).abs();
    if ax >= ay && ax >= az {
        DropAxis::X
    } else if ay >= az {
        DropAxis::Y
    } else {
        DropAxis::Z
    }
}

fn flatten(v: Vec3i, drop: DropAxis) -> (i64, i64) {
    match drop {
        DropAxis::X => (v.y as i64, v.z as i64),
        DropAxis::Y => (v.x as i64, v.z as i64),
        DropAxis::Z => (v.x as i64, v.y as i64),
    }
}

/// True when `p`, a point on the quad's plane, lies inside the quad
/// `q0..q3` given in rectangle-traversal order.
///
/// Boundary points are inclusive: a point exactly on an edge or corner
/// counts as inside. Two faces sharing an edge can therefore both claim a
/// boundary pixel; the renderer's strict depth comparison resolves the tie
/// deterministically in declaration order.
pub fn quad_contains(p: Vec3i, quad: [Vec3i; 4]) -> bool {
    let normal = (quad[1] - quad[0]).cross(quad[2] - quad[0]);
    let drop = dominant_axis(normal);

    let pt = flatten(p, drop);
    let mut pos = false;
    let mut neg = false;
    for i in 0..4 {
        let a = flatten(quad[i], drop);
        let b = flatten(quad[(i + 1) % 4], drop);
        let cross = (b.0 - a.0) * (pt.1 - a.1) - (b.1 - a.1) * (pt.0 - a.0);
        if cross > 0 {
            pos = true;
        } else if cross < 0 {
            neg = true;
        }
        // cross == 0: on the edge line, allowed either way.
    }
    !(pos && neg)
}
