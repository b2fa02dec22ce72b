//! Uniform cell list: bins atom indices into cubic cells of side `d`.
//!
//! Construction is a two-pass count-then-scatter build into a flat,
//! CSR-style bucket layout (no `Vec<Vec<_>>`, no per-cell heap
//! fragmentation) — the same shape as the teacher crate's
//! `SpatialHashGrid::rebuild` (`swarm/grid.rs`), adapted from a hashed
//! bucket table to an exact 3-D indexed grid: spec.md §3 requires that
//! every atom index appears in exactly one cell with no collisions,
//! which a hash table cannot guarantee.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;

use crate::error::{Result, SasaError};
use crate::geometry::{PointSet, Radii};
use crate::spatial::offsets::FORWARD_NEIGHBOR_OFFSETS;

/// Small padding added to the bounding box so every point falls strictly
/// inside it (spec.md §4.1 step 1).
const BBOX_EPSILON: f64 = 1e-6;

/// A uniform grid over an atom's padded bounding box.
pub struct CellList {
    origin: [f64; 3],
    cell_size: f64,
    dims: [usize; 3],
    /// Start offset of each cell's bucket in `data`.
    offsets: Vec<u32>,
    /// Count of atoms in each cell's bucket.
    counts: Vec<u32>,
    /// Flattened, per-cell-contiguous atom indices.
    data: Vec<u32>,
}

impl CellList {
    /// Builds a cell list over `points`, sized so that `d = 2*(r_max + r_p)`
    /// (spec.md §4.1 step 2): any pair of atoms that could be in contact
    /// lies in the same cell or one of the 26 adjacent cells.
    pub fn build(points: &PointSet, radii: &Radii, probe_radius: f64) -> Result<Self> {
        let n = points.len();
        if n == 0 {
            return Err(SasaError::InvalidInput("empty point set".into()));
        }
        let r_max = radii.max().ok_or_else(|| {
            SasaError::InvalidInput("empty radii".into())
        })?;
        for (i, &r) in radii.as_slice().iter().enumerate() {
            if !(r > 0.0) || !r.is_finite() {
                return Err(SasaError::InvalidInput(format!(
                    "radius at index {i} must be > 0, got {r}"
                )));
            }
        }
        let cell_size = 2.0 * (r_max + probe_radius);
        if !(cell_size > 0.0) || !cell_size.is_finite() {
            return Err(SasaError::InvalidParameters(format!(
                "degenerate cell size {cell_size}"
            )));
        }

        let pts = points.as_slice();
        let mut min = pts[0];
        let mut max = pts[0];
        for p in pts.iter() {
            for axis in 0..3 {
                if !p[axis].is_finite() {
                    return Err(SasaError::InvalidInput(format!(
                        "non-finite coordinate at axis {axis}"
                    )));
                }
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        let origin = [
            min[0] - BBOX_EPSILON,
            min[1] - BBOX_EPSILON,
            min[2] - BBOX_EPSILON,
        ];
        let extent = [
            (max[0] - min[0]) + 2.0 * BBOX_EPSILON,
            (max[1] - min[1]) + 2.0 * BBOX_EPSILON,
            (max[2] - min[2]) + 2.0 * BBOX_EPSILON,
        ];
        let dims = [
            ((extent[0] / cell_size).ceil() as usize).max(1),
            ((extent[1] / cell_size).ceil() as usize).max(1),
            ((extent[2] / cell_size).ceil() as usize).max(1),
        ];
        let n_cells = dims[0]
            .checked_mul(dims[1])
            .and_then(|v| v.checked_mul(dims[2]))
            .ok_or_else(|| SasaError::MemoryExhausted("cell list grid dimensions".into()))?;

        if dims[0].max(dims[1]).max(dims[2]) > 1_000_000 {
            tracing::warn!(
                dims = ?dims,
                "suspiciously large bounding box for cell list: {} x {} x {} cells",
                dims[0], dims[1], dims[2]
            );
        }

        let cell_of = |p: &[f64; 3]| -> [usize; 3] {
            [
                (((p[0] - origin[0]) / cell_size).floor() as isize).clamp(0, dims[0] as isize - 1)
                    as usize,
                (((p[1] - origin[1]) / cell_size).floor() as isize).clamp(0, dims[1] as isize - 1)
                    as usize,
                (((p[2] - origin[2]) / cell_size).floor() as isize).clamp(0, dims[2] as isize - 1)
                    as usize,
            ]
        };
        let cell_index = |c: [usize; 3]| -> usize { (c[2] * dims[1] + c[1]) * dims[0] + c[0] };

        // Pass 1 (count): each atom's cell index is independent of every
        // other atom's, so this runs data-parallel; the count itself is
        // accumulated through atomic per-cell counters since many atoms can
        // land in the same cell concurrently.
        let atom_cell: Vec<usize> = pts.par_iter().map(|p| cell_index(cell_of(p))).collect();

        let atomic_counts: Vec<AtomicU32> = (0..n_cells).map(|_| AtomicU32::new(0)).collect();
        atom_cell.par_iter().for_each(|&c| {
            atomic_counts[c].fetch_add(1, Ordering::Relaxed);
        });
        let counts: Vec<u32> = atomic_counts
            .into_iter()
            .map(AtomicU32::into_inner)
            .collect();

        // The prefix sum over cells is cheap (O(n_cells), not O(n_atoms))
        // and inherently sequential, so it stays single-threaded.
        let mut offsets = vec![0u32; n_cells];
        let mut running = 0u32;
        for (c, cnt) in counts.iter().enumerate() {
            offsets[c] = running;
            running += cnt;
        }

        // Pass 2 (scatter): each atom claims its bucket slot via an atomic
        // per-cell cursor seeded from `offsets`, so concurrent writers to
        // the same cell never collide on a slot.
        let atomic_cursor: Vec<AtomicU32> = offsets.iter().map(|_| AtomicU32::new(0)).collect();
        let atomic_data: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(0)).collect();
        atom_cell.par_iter().enumerate().for_each(|(i, &c)| {
            let slot = offsets[c] + atomic_cursor[c].fetch_add(1, Ordering::Relaxed);
            atomic_data[slot as usize].store(i as u32, Ordering::Relaxed);
        });
        let data: Vec<u32> = atomic_data.into_iter().map(AtomicU32::into_inner).collect();

        Ok(CellList {
            origin,
            cell_size,
            dims,
            offsets,
            counts,
            data,
        })
    }

    /// Total number of cells in the grid.
    pub fn n_cells(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Grid dimensions `(n_x, n_y, n_z)`.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Atom indices stored in cell `cell_index`.
    pub fn cells_of(&self, cell_index: usize) -> &[u32] {
        let start = self.offsets[cell_index] as usize;
        let end = start + self.counts[cell_index] as usize;
        &self.data[start..end]
    }

    /// Up to 14 neighbor cell indices for `cell_index` (self + 13 forward
    /// half-space neighbors), skipping any that fall outside the grid.
    pub fn neighbors(&self, cell_index: usize) -> impl Iterator<Item = usize> + '_ {
        let [nx, ny, nz] = self.dims;
        let cz = cell_index / (nx * ny);
        let rem = cell_index % (nx * ny);
        let cy = rem / nx;
        let cx = rem % nx;

        FORWARD_NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy, dz)| {
            let x = cx as i32 + dx;
            let y = cy as i32 + dy;
            let z = cz as i32 + dz;
            if x < 0 || y < 0 || z < 0 {
                return None;
            }
            let (x, y, z) = (x as usize, y as usize, z as usize);
            if x >= nx || y >= ny || z >= nz {
                return None;
            }
            Some((z * ny + y) * nx + x)
        })
    }

    /// Cell side length.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid origin (padded bounding-box minimum corner).
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }
}
