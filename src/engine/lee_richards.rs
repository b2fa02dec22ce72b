//! Lee & Richards slicing engine (spec.md §4.3).
//!
//! Each atom's expanded sphere is sliced along z; the exposed arc on each
//! slice is integrated, with a slant correction between consecutive
//! slices and an explicit polar-cap closure at the two ends, since the
//! slice centers used here sit strictly inside `(z_i - s_i, z_i + s_i)`
//! and never reach the poles themselves.

use std::f64::consts::PI;

use crate::geometry::Radii;
use crate::neighbor::NeighborList;

/// Centers at `|x_i - x_j| < COINCIDENT_EPSILON` are treated as the same
/// point (spec.md §9 Open Question, resolved): the smaller sphere (tie:
/// lower index) is fully buried by the larger.
const COINCIDENT_EPSILON: f64 = 1e-9;

/// One interval of angle, in radians, covered on an atom's circle.
#[derive(Clone, Copy)]
struct Interval {
    start: f64,
    end: f64,
}

/// Total angle (radians) covered by the union of `intervals`, each
/// already normalized to `start, end` with `0 <= start < 2*PI` and
/// `start <= end <= start + 2*PI`. Handles wraparound by splitting any
/// interval crossing `2*PI` into two pieces before sorting and sweeping
/// (spec.md §9 REDESIGN FLAG).
fn covered_angle(mut intervals: Vec<Interval>) -> f64 {
    if intervals.is_empty() {
        return 0.0;
    }
    let two_pi = 2.0 * PI;
    let mut split = Vec::with_capacity(intervals.len() + 1);
    for iv in intervals.drain(..) {
        if iv.end > two_pi {
            split.push(Interval { start: iv.start, end: two_pi });
            split.push(Interval { start: 0.0, end: iv.end - two_pi });
        } else {
            split.push(iv);
        }
    }
    split.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());

    let mut total = 0.0;
    let mut cur_start = split[0].start;
    let mut cur_end = split[0].end;
    for iv in &split[1..] {
        if iv.start <= cur_end {
            cur_end = cur_end.max(iv.end);
        } else {
            total += cur_end - cur_start;
            cur_start = iv.start;
            cur_end = iv.end;
        }
    }
    total += cur_end - cur_start;
    total.min(two_pi)
}

/// Computes the exposed arc length of atom `i`'s circle at height `z`,
/// given the list of `(x_j, y_j, z_j, s_j)` neighbor circles that
/// intersect this slice. Returns `None` if the slice is fully buried.
fn exposed_arc(
    xi: f64,
    yi: f64,
    a_i: f64,
    neighbors_at_slice: &[(f64, f64, f64)],
) -> Option<f64> {
    let mut intervals = Vec::with_capacity(neighbors_at_slice.len());
    for &(xj, yj, a_j) in neighbors_at_slice {
        let dx = xj - xi;
        let dy = yj - yi;
        let d = (dx * dx + dy * dy).sqrt();

        if d >= a_i + a_j {
            continue; // circles don't overlap
        }
        if d + a_i <= a_j {
            return None; // atom i's whole circle sits inside j's: fully buried
        }
        if d + a_j <= a_i {
            continue; // j's circle sits inside i's: no coverage of i's boundary
        }
        if d < 1e-12 {
            // Concentric circles of near-equal radius with partial overlap
            // is geometrically degenerate; treat as fully buried to avoid
            // a division by (near) zero in the arccos argument below.
            return None;
        }
        let cos_alpha = ((a_i * a_i + d * d - a_j * a_j) / (2.0 * a_i * d)).clamp(-1.0, 1.0);
        let alpha = cos_alpha.acos();
        let center = dy.atan2(dx);
        let mut start = center - alpha;
        let two_pi = 2.0 * PI;
        start = start.rem_euclid(two_pi);
        intervals.push(Interval {
            start,
            end: start + 2.0 * alpha,
        });
    }
    let covered = covered_angle(intervals);
    Some((2.0 * PI - covered) * a_i)
}

/// Computes SASA for atom `i` via Lee & Richards slicing.
pub fn atom_area(
    i: usize,
    points: &[[f64; 3]],
    radii: &Radii,
    probe_radius: f64,
    neighbors: &NeighborList,
    n_slices: usize,
) -> f64 {
    let s_i = radii[i] + probe_radius;
    let [xi, yi, zi] = points[i];

    // Degenerate coincident-center guard (spec.md §9 Open Question).
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

    let dz = 2.0 * s_i / n_slices as f64;
    let half_cap = dz / 2.0;

    // Precompute neighbor (z_j, s_j) once; filter per slice by |z - z_j| < s_j.
    let nb = neighbors.of(i);
    let nb_geom: Vec<(f64, f64, f64, f64)> = nb
        .indices
        .iter()
        .map(|&j| {
            let ju = j as usize;
            let [xj, yj, zj] = points[ju];
            (xj, yj, zj, radii[ju] + probe_radius)
        })
        .collect();

    let mut total = 0.0;
    let mut prev_a: Option<f64> = None;
    let mut first_arc_fraction = 1.0;
    let mut last_arc_fraction = 1.0;
    let mut any_slice_buried = false;

    for k in 0..n_slices {
        let z = zi - s_i + dz * (k as f64 + 0.5);
        let dzp = z - zi;
        let a_i = (s_i * s_i - dzp * dzp).max(0.0).sqrt();
        if a_i <= 0.0 {
            prev_a = Some(0.0);
            continue;
        }

        let at_slice: Vec<(f64, f64, f64)> = nb_geom
            .iter()
            .filter(|&&(_, _, zj, s_j)| (z - zj).abs() < s_j)
            .map(|&(xj, yj, zj, s_j)| {
                let dzj = z - zj;
                (xj, yj, (s_j * s_j - dzj * dzj).max(0.0).sqrt())
            })
            .collect();

        let arc_len = match exposed_arc(xi, yi, a_i, &at_slice) {
            Some(len) => len,
            None => {
                any_slice_buried = true;
                0.0
            }
        };

        let slant = match prev_a {
            Some(pa) => (1.0 + ((a_i - pa) / dz).powi(2)).sqrt(),
            None => 1.0,
        };
        total += arc_len * dz * slant;

        let fraction = if a_i > 0.0 {
            (arc_len / (2.0 * PI * a_i)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if k == 0 {
            first_arc_fraction = fraction;
        }
        if k == n_slices - 1 {
            last_arc_fraction = fraction;
        }

        prev_a = Some(a_i);
    }

    if any_slice_buried && n_slices <= 1 {
        // A single-slice atom that is detected fully buried has no
        // meaningful partial cap; short circuit to zero.
        return 0.0;
    }

    // Polar cap closure: the small spherical cap beyond each outermost
    // slice center, reduced by the burial fraction observed there.
    let cap_area = 2.0 * PI * s_i * half_cap;
    total += cap_area * first_arc_fraction;
    total += cap_area * last_arc_fraction;

    let max_area = 4.0 * PI * s_i * s_i;
    total.clamp(0.0, max_area)
}
