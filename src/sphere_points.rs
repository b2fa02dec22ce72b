//! Deterministic, approximately-uniform point sets on the unit sphere,
//! used by Shrake & Rupley (spec.md §4.4).
//!
//! Generated purely from `n_points` via a golden-spiral construction: no
//! RNG, no seed, no state cached across calls. Two calculations with the
//! same `n_points` always use bit-identical directions, independent of
//! thread count or call order (spec.md §9 Open Question, resolved:
//! fixed, not regenerated).

use std::f64::consts::PI;

/// Golden angle, radians — the irrational angular increment that gives
/// golden-spiral point sets their even coverage.
const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79 /* sqrt(5) */);

/// Returns `n` unit vectors approximately uniformly distributed on S^2.
pub fn golden_spiral(n: usize) -> Vec<[f64; 3]> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![[0.0, 0.0, 1.0]];
    }
    let mut points = Vec::with_capacity(n);
    let n_f = n as f64;
    for k in 0..n {
        // z ranges over (-1, 1), evenly spaced so each point covers equal
        // surface area in z.
        let z = 1.0 - (2.0 * k as f64 + 1.0) / n_f;
        let r_xy = (1.0 - z * z).max(0.0).sqrt();
        let theta = GOLDEN_ANGLE * k as f64;
        points.push([r_xy * theta.cos(), r_xy * theta.sin(), z]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_requested_count() {
        assert_eq!(golden_spiral(100).len(), 100);
        assert_eq!(golden_spiral(0).len(), 0);
        assert_eq!(golden_spiral(1).len(), 1);
    }

    #[test]
    fn every_point_is_unit_length() {
        for p in golden_spiral(257) {
            let norm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "norm = {norm}");
        }
    }

    #[test]
    fn is_deterministic_across_calls() {
        assert_eq!(golden_spiral(64), golden_spiral(64));
    }
}
