//! Calculation parameters and algorithm selection.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SasaError};

/// Default probe radius, ångström (water), matching FreeSASA's
/// `FREESASA_DEF_PROBE_RADIUS`.
pub const DEFAULT_PROBE_RADIUS: f64 = 1.4;

/// Default Lee & Richards slice count.
pub const DEFAULT_LR_N_SLICES: usize = 20;

/// Default Shrake & Rupley point count.
pub const DEFAULT_SR_N_POINTS: usize = 100;

/// Algorithm selection, modeled as a tagged variant so each algorithm's
/// resolution parameter is type-checked rather than sharing a generic
/// "resolution" field that could disagree with the chosen algorithm
/// (REDESIGN FLAG, spec.md §9).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Lee & Richards slicing, with `n_slices` planes per atom.
    LeeRichards {
        /// Number of z-slices per atom's expanded sphere. Must be >= 1.
        n_slices: usize,
    },
    /// Shrake & Rupley point sampling, with `n_points` test directions.
    ShrakeRupley {
        /// Number of sample points per atom's expanded sphere. Must be >= 1.
        n_points: usize,
    },
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::LeeRichards {
            n_slices: DEFAULT_LR_N_SLICES,
        }
    }
}

/// Immutable parameters for a single SASA calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Which algorithm to run, and at what resolution.
    pub algorithm: Algorithm,
    /// Probe (solvent) radius, ångström. Must be > 0.
    pub probe_radius: f64,
    /// Number of worker threads used by the engine. Must be >= 1.
    pub n_threads: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            algorithm: Algorithm::default(),
            probe_radius: DEFAULT_PROBE_RADIUS,
            n_threads: 1,
        }
    }
}

impl Parameters {
    /// Builds parameters for Shrake & Rupley with the default point count.
    pub fn shrake_rupley() -> Self {
        Parameters {
            algorithm: Algorithm::ShrakeRupley {
                n_points: DEFAULT_SR_N_POINTS,
            },
            ..Default::default()
        }
    }

    /// Builds parameters for Lee & Richards with the default slice count.
    pub fn lee_richards() -> Self {
        Parameters {
            algorithm: Algorithm::LeeRichards {
                n_slices: DEFAULT_LR_N_SLICES,
            },
            ..Default::default()
        }
    }

    /// Sets the probe radius (builder style).
    pub fn with_probe_radius(mut self, r: f64) -> Self {
        self.probe_radius = r;
        self
    }

    /// Sets the thread count (builder style).
    pub fn with_n_threads(mut self, n: usize) -> Self {
        self.n_threads = n;
        self
    }

    /// Validates the parameters, per spec.md §7's `InvalidParameters` kind.
    pub fn validate(&self) -> Result<()> {
        if !(self.probe_radius > 0.0) || !self.probe_radius.is_finite() {
            return Err(SasaError::InvalidParameters(format!(
                "probe_radius must be > 0, got {}",
                self.probe_radius
            )));
        }
        if self.n_threads < 1 {
            return Err(SasaError::InvalidParameters(format!(
                "n_threads must be >= 1, got {}",
                self.n_threads
            )));
        }
        match self.algorithm {
            Algorithm::LeeRichards { n_slices } if n_slices < 1 => {
                Err(SasaError::InvalidParameters(format!(
                    "lr_n_slices must be >= 1, got {n_slices}"
                )))
            }
            Algorithm::ShrakeRupley { n_points } if n_points < 1 => {
                Err(SasaError::InvalidParameters(format!(
                    "sr_n_points must be >= 1, got {n_points}"
                )))
            }
            _ => Ok(()),
        }
    }
}
