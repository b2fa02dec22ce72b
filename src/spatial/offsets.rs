//! The fixed 14-entry forward-neighbor offset table.
//!
//! "Forward" means: self, plus the 13 cells whose `(dx, dy, dz)` lies in a
//! fixed half-space of the 26-neighborhood. Visiting self + these 13 for
//! every cell covers every unordered pair of cells exactly once, with no
//! double-counting and no missed pairs (spec.md §4.1).
//!
//! Precomputed once as a `const` table rather than recomputed per cell,
//! per the REDESIGN FLAG in spec.md §9.

/// A single `(dx, dy, dz)` cell offset.
pub type Offset = (i32, i32, i32);

/// Self, plus the 13 forward half-space neighbors.
///
/// The half-space is chosen by lexicographic sign: `dz > 0`, or
/// `dz == 0 && dy > 0`, or `dz == 0 && dy == 0 && dx > 0`, plus self
/// (`0, 0, 0`). This is one valid choice of "forward" among several
/// equivalent ones; any half-space that partitions the 26-neighborhood
/// into 13+13 plus self works identically.
pub const FORWARD_NEIGHBOR_OFFSETS: [Offset; 14] = [
    (0, 0, 0),
    (1, 0, 0),
    (-1, 1, 0),
    (0, 1, 0),
    (1, 1, 0),
    (-1, -1, 1),
    (0, -1, 1),
    (1, -1, 1),
    (-1, 0, 1),
    (0, 0, 1),
    (1, 0, 1),
    (-1, 1, 1),
    (0, 1, 1),
    (1, 1, 1),
];
