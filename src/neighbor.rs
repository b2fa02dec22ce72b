//! Per-atom neighbor lists, built from a [`CellList`].
//!
//! For every atom `i`, the set of atoms `j` such that
//! `|x_i - x_j| < R[i] + R[j] + 2*r_p` (spec.md §3/§4.2), stored as
//! parallel per-atom arrays of indices, distances, and reciprocal
//! distances.

use crate::error::{Result, SasaError};
use crate::geometry::{PointSet, Radii};
use crate::spatial::CellList;

/// Neighbor candidates for one atom: indices, distances, reciprocal
/// distances, all index-aligned and in the order pairs were discovered
/// during the cell-list traversal.
#[derive(Debug, Clone, Default)]
pub struct AtomNeighbors {
    /// Indices of neighboring atoms (never contains `i` itself).
    pub indices: Vec<u32>,
    /// Euclidean distance to each neighbor.
    pub distances: Vec<f64>,
    /// Reciprocal distance (`1 / distance`) to each neighbor.
    pub inv_distances: Vec<f64>,
}

impl AtomNeighbors {
    fn push(&mut self, j: u32, d: f64) {
        self.indices.push(j);
        self.distances.push(d);
        self.inv_distances.push(1.0 / d);
    }

    /// Number of neighbors.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the atom has no neighbors.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sorts neighbors by increasing distance, in place. Used by Shrake &
    /// Rupley's early-exit optimization (spec.md §4.4): testing the
    /// nearest, most-likely-covering neighbor first rejects quickly.
    pub fn sort_by_distance(&mut self) {
        let mut order: Vec<usize> = (0..self.indices.len()).collect();
        order.sort_by(|&a, &b| self.distances[a].partial_cmp(&self.distances[b]).unwrap());
        self.indices = order.iter().map(|&k| self.indices[k]).collect();
        self.inv_distances = order.iter().map(|&k| self.inv_distances[k]).collect();
        self.distances = order.iter().map(|&k| self.distances[k]).collect();
    }
}

/// The full per-atom neighbor list, `L` in spec.md §3.
#[derive(Debug, Clone)]
pub struct NeighborList {
    per_atom: Vec<AtomNeighbors>,
}

impl NeighborList {
    /// Builds the neighbor list by walking every cell and its forward
    /// neighbor cells exactly once (spec.md §4.2): for cell `c` and atom
    /// `i` in `c`, for every neighbor cell `c'` of `c` and atom `j` in
    /// `c'` with `j > i` (when `c' == c`) or unconditionally (when
    /// `c' != c`), test the squared-distance cutoff and append the pair
    /// symmetrically. Squared distance defers the square root until a
    /// pair passes the cutoff.
    pub fn build(
        points: &PointSet,
        radii: &Radii,
        probe_radius: f64,
        cells: &CellList,
    ) -> Result<Self> {
        let n = points.len();
        if n != radii.len() {
            return Err(SasaError::InvalidInput(format!(
                "point set has {n} atoms but radii has {}",
                radii.len()
            )));
        }
        let pts = points.as_slice();
        let mut per_atom = vec![AtomNeighbors::default(); n];

        for c in 0..cells.n_cells() {
            let here = cells.cells_of(c);
            if here.is_empty() {
                continue;
            }
            for nc in cells.neighbors(c) {
                let there = cells.cells_of(nc);
                for &i in here {
                    for &j in there {
                        if nc == c && j <= i {
                            continue;
                        }
                        if nc != c && i == j {
                            continue;
                        }
                        let (iu, ju) = (i as usize, j as usize);
                        let cutoff = radii[iu] + radii[ju] + 2.0 * probe_radius;
                        let dx = pts[iu][0] - pts[ju][0];
                        let dy = pts[iu][1] - pts[ju][1];
                        let dz = pts[iu][2] - pts[ju][2];
                        let d2 = dx * dx + dy * dy + dz * dz;
                        if d2 < cutoff * cutoff {
                            let d = d2.sqrt();
                            per_atom[iu].push(j, d);
                            per_atom[ju].push(i, d);
                        }
                    }
                }
            }
        }

        if per_atom.iter().all(|a| a.is_empty()) && n > 1 {
            tracing::warn!("neighbor list is empty for all {n} atoms");
        }

        Ok(NeighborList { per_atom })
    }

    /// Neighbor data for atom `i`.
    pub fn of(&self, i: usize) -> &AtomNeighbors {
        &self.per_atom[i]
    }

    /// Number of atoms this neighbor list covers.
    pub fn len(&self) -> usize {
        self.per_atom.len()
    }

    /// True when there are no atoms.
    pub fn is_empty(&self) -> bool {
        self.per_atom.is_empty()
    }
}
