//! The coordinate container and per-atom radii.
//!
//! `PointSet` is either owned or borrowed, per the REDESIGN FLAG in
//! spec.md §9: ownership is a type-level distinction rather than a
//! runtime flag on a raw buffer.

use rayon::prelude::*;

/// An ordered sequence of 3-D points, ångström units, contiguous storage.
///
/// Indices are stable for the lifetime of the `PointSet`: the engine and
/// its collaborators refer to atoms purely by position in this sequence.
#[derive(Debug, Clone)]
pub enum PointSet<'a> {
    /// The container owns its buffer.
    Owned(Vec<[f64; 3]>),
    /// The container borrows a buffer supplied by the caller (e.g. a
    /// structure provider that already holds the coordinates).
    Borrowed(&'a [[f64; 3]]),
}

impl<'a> PointSet<'a> {
    /// Builds an owned point set from a flat `xyz` buffer of length `3N`.
    pub fn from_flat(xyz: &[f64]) -> Self {
        let points = xyz
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        PointSet::Owned(points)
    }

    /// Wraps an existing slice without copying.
    pub fn borrowed(points: &'a [[f64; 3]]) -> Self {
        PointSet::Borrowed(points)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when the point set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the underlying contiguous buffer.
    pub fn as_slice(&self) -> &[[f64; 3]] {
        match self {
            PointSet::Owned(v) => v,
            PointSet::Borrowed(s) => s,
        }
    }

    /// Appends a point, promoting a borrowed set to owned on first use.
    pub fn push(&mut self, point: [f64; 3]) {
        match self {
            PointSet::Owned(v) => v.push(point),
            PointSet::Borrowed(s) => {
                let mut v = s.to_vec();
                v.push(point);
                *self = PointSet::Owned(v);
            }
        }
    }

    /// Applies `f` to every point in parallel. Promotes a borrowed set to
    /// owned (a transform cannot mutate the caller's buffer).
    pub fn transform_all<F>(&mut self, f: F)
    where
        F: Fn([f64; 3]) -> [f64; 3] + Sync,
    {
        if let PointSet::Borrowed(s) = self {
            *self = PointSet::Owned(s.to_vec());
        }
        if let PointSet::Owned(v) = self {
            v.par_iter_mut().for_each(|p| *p = f(*p));
        }
    }

    /// Translates every point by `delta`, in place.
    pub fn translate(&mut self, delta: [f64; 3]) {
        self.transform_all(|p| [p[0] + delta[0], p[1] + delta[1], p[2] + delta[2]]);
    }
}

/// Per-atom van der Waals radii, ångström, index-aligned with a `PointSet`.
///
/// Does not include the probe radius — the probe is added at engine time
/// (see [`crate::params::Parameters`]).
#[derive(Debug, Clone)]
pub struct Radii(Vec<f64>);

impl Radii {
    /// Wraps an owned vector of radii.
    pub fn new(radii: Vec<f64>) -> Self {
        Radii(radii)
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the radii as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The largest radius, or `None` if empty.
    pub fn max(&self) -> Option<f64> {
        self.0.iter().cloned().fold(None, |acc, r| {
            Some(acc.map_or(r, |m: f64| m.max(r)))
        })
    }
}

impl std::ops::Index<usize> for Radii {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}
