//! Numerical solvent accessible surface area (SASA) engine.
//!
//! Computes per-atom SASA with either the Lee & Richards slicing
//! algorithm or the Shrake & Rupley point-sampling algorithm, accelerated
//! by a cell-list spatial index and a neighbor list built on top of it.
//! Parsing structure files, assigning atomic radii, and formatting
//! results are all out of scope: callers supply coordinates and radii,
//! and get back per-atom areas.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod neighbor;
pub mod params;
pub mod result;
pub mod spatial;
pub mod sphere_points;

pub use engine::calc;
pub use error::{Result, SasaError};
pub use geometry::{PointSet, Radii};
pub use neighbor::NeighborList;
pub use params::{Algorithm, Parameters};
pub use result::SasaResult;

/// Initializes a `tracing` subscriber from `RUST_LOG` (or `level` if no
/// environment filter is set). Safe to call more than once; later calls
/// are no-ops.
pub fn init_tracing(level: Option<&str>) {
    let filter = level.unwrap_or("warn");
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_single_atom() {
        let ps = PointSet::Owned(vec![[0.0, 0.0, 0.0]]);
        let radii = Radii::new(vec![2.0]);
        let params = Parameters::lee_richards();
        let result = calc(&ps, &radii, &params).unwrap();
        let expected = 4.0 * std::f64::consts::PI * 3.4 * 3.4;
        assert!((result.total - expected).abs() / expected < 0.01);
    }
}
