//! The `calc` entry point: wires the spatial index, neighbor list, and
//! the selected per-atom engine together behind a fixed-range thread
//! pool (spec.md §5).
//!
//! Dispatch deliberately does not use `rayon`'s work-stealing scheduler
//! here: spec.md §8 property 7 requires the result be bit-identical
//! regardless of `n_threads`, which requires each worker to own a fixed,
//! contiguous, reproducible range of atom indices rather than pulling
//! work from a shared queue in whatever order happens to drain.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::{lee_richards, shrake_rupley};
use crate::error::{Result, SasaError};
use crate::geometry::{PointSet, Radii};
use crate::neighbor::NeighborList;
use crate::params::{Algorithm, Parameters};
use crate::result::SasaResult;
use crate::spatial::CellList;
use crate::sphere_points::golden_spiral;

/// Splits `n` items into at most `n_threads` contiguous, near-equal
/// ranges. Always covers `0..n` exactly once, in order.
fn split_ranges(n: usize, n_threads: usize) -> Vec<usize> {
    let n_threads = n_threads.max(1).min(n.max(1));
    let base = n / n_threads;
    let rem = n % n_threads;
    (0..n_threads)
        .map(|t| base + if t < rem { 1 } else { 0 })
        .filter(|&len| len > 0)
        .collect()
}

/// Runs a full SASA calculation.
pub fn calc(points: &PointSet, radii: &Radii, params: &Parameters) -> Result<SasaResult> {
    params.validate()?;

    let n = points.len();
    if n != radii.len() {
        return Err(SasaError::InvalidInput(format!(
            "point set has {n} atoms but radii has {}",
            radii.len()
        )));
    }

    let cells = CellList::build(points, radii, params.probe_radius)?;
    let neighbors = NeighborList::build(points, radii, params.probe_radius, &cells)?;
    let pts = points.as_slice();

    let sphere_points = match params.algorithm {
        Algorithm::ShrakeRupley { n_points } => golden_spiral(n_points),
        Algorithm::LeeRichards { .. } => Vec::new(),
    };

    let mut areas = vec![0.0f64; n];
    let failed = AtomicBool::new(false);
    let chunk_lens = split_ranges(n, params.n_threads);

    std::thread::scope(|scope| {
        let mut remaining = areas.as_mut_slice();
        let mut start = 0usize;
        for len in chunk_lens {
            let (chunk, rest) = remaining.split_at_mut(len);
            remaining = rest;
            let range_start = start;
            start += len;

            let radii = &radii;
            let neighbors = &neighbors;
            let sphere_points = &sphere_points;
            let failed = &failed;
            let algorithm = params.algorithm;
            let probe_radius = params.probe_radius;

            scope.spawn(move || {
                for (offset, out) in chunk.iter_mut().enumerate() {
                    if failed.load(Ordering::Relaxed) {
                        return;
                    }
                    let i = range_start + offset;
                    let area = match algorithm {
                        Algorithm::LeeRichards { n_slices } => {
                            lee_richards::atom_area(i, pts, radii, probe_radius, neighbors, n_slices)
                        }
                        Algorithm::ShrakeRupley { .. } => shrake_rupley::atom_area(
                            i,
                            pts,
                            radii,
                            probe_radius,
                            neighbors,
                            sphere_points,
                        ),
                    };
                    if !area.is_finite() || area < 0.0 {
                        failed.store(true, Ordering::Relaxed);
                        return;
                    }
                    *out = area;
                }
            });
        }
    });

    if failed.load(Ordering::Relaxed) {
        return Err(SasaError::WorkerFailed(
            "a worker produced a non-finite or negative area".into(),
        ));
    }

    Ok(SasaResult::new(areas, *params))
}
