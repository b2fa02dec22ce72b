//! Shrake & Rupley point-sampling engine (spec.md §4.4).
//!
//! Each atom's expanded sphere carries a fixed, deterministic set of test
//! points (see [`crate::sphere_points::golden_spiral`]). A point is buried
//! if it falls strictly inside any neighbor's expanded sphere; the area
//! is the exposed fraction times the full sphere area.

use crate::geometry::Radii;
use crate::neighbor::NeighborList;

/// Centers at `|x_i - x_j| < COINCIDENT_EPSILON` are treated as the same
/// point (spec.md §9 Open Question, resolved, mirroring
/// `lee_richards.rs`): the smaller sphere (tie: lower index) is fully
/// buried by the larger. Without this guard, a point sampled on atom
/// `i`'s own expanded sphere sits exactly on a same-radius neighbor's
/// sphere too, and the strict `<` burial test never fires.
const COINCIDENT_EPSILON: f64 = 1e-9;

/// Computes SASA for atom `i` via Shrake & Rupley sampling.
///
/// `sphere_points` is the shared, precomputed unit-sphere direction set
/// (the same `n_points`-sized table for every atom, per spec.md §4.4) so
/// the result does not depend on per-atom regeneration order.
pub fn atom_area(
    i: usize,
    points: &[[f64; 3]],
    radii: &Radii,
    probe_radius: f64,
    neighbors: &NeighborList,
    sphere_points: &[[f64; 3]],
) -> f64 {
    let s_i = radii[i] + probe_radius;
    let [xi, yi, zi] = points[i];

    for &j in &neighbors.of(i).indices {
        let ju = j as usize;
        let [xj, yj, zj] = points[ju];
        let d = ((xi - xj).powi(2) + (yi - yj).powi(2) + (zi - zj).powi(2)).sqrt();
        if d < COINCIDENT_EPSILON {
            let s_j = radii[ju] + probe_radius;
            let smaller_is_i = s_i < s_j || (s_i == s_j && i < ju);
            if smaller_is_i {
                return 0.0;
            }
        }
    }

    let mut nb = neighbors.of(i).clone();
    nb.sort_by_distance();

    let neighbor_geom: Vec<(f64, f64, f64, f64)> = nb
        .indices
        .iter()
        .map(|&j| {
            let ju = j as usize;
            let [xj, yj, zj] = points[ju];
            (xj, yj, zj, radii[ju] + probe_radius)
        })
        .collect();

    let n_points = sphere_points.len();
    if n_points == 0 {
        return 0.0;
    }

    let mut exposed = 0usize;
    'points: for dir in sphere_points {
        let px = xi + s_i * dir[0];
        let py = yi + s_i * dir[1];
        let pz = zi + s_i * dir[2];
        for &(xj, yj, zj, s_j) in &neighbor_geom {
            let dx = px - xj;
            let dy = py - yj;
            let dz = pz - zj;
            if dx * dx + dy * dy + dz * dz < s_j * s_j {
                continue 'points;
            }
        }
        exposed += 1;
    }

    let full_area = 4.0 * std::f64::consts::PI * s_i * s_i;
    full_area * (exposed as f64 / n_points as f64)
}
