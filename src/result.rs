//! The output of a calculation (spec.md §4.6).

use serde::{Deserialize, Serialize};

use crate::params::Parameters;

/// Per-atom areas plus the parameters that produced them.
///
/// Aggregation beyond the per-atom total (grouping by residue or chain,
/// formatting) is out of scope here; callers build that on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SasaResult {
    /// Per-atom solvent accessible surface area, index-aligned with the
    /// input `PointSet`/`Radii`, in square ångströms.
    pub areas: Vec<f64>,
    /// Sum of `areas`, computed by summing in atom-index order so the
    /// value is identical regardless of `n_threads` (spec.md §8, property 7).
    pub total: f64,
    /// The parameters this result was computed with.
    pub parameters: Parameters,
}

impl SasaResult {
    pub(crate) fn new(areas: Vec<f64>, parameters: Parameters) -> Self {
        let total = areas.iter().sum();
        SasaResult {
            areas,
            total,
            parameters,
        }
    }
}
