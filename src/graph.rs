//! Quartic circulant graphs \(C_n(3,a) = \mathrm{Cay}(\mathbb{Z}_n, \{\pm 3, \pm a\})\).
//!
//! A graph only exists for parameters where the four steps `+3, -3, +a, -a` are pairwise
//! distinct modulo `n` and generate \(\mathbb{Z}_n\). Invalid parameters are rejected at
//! construction time with a [`ValidationError`] naming the reason; a constructed
//! [`CirculantGraph`] is immutable and always 4-regular and connected.

use std::fmt;
use thiserror::Error;

use crate::bitset::VertexSet;

/// The fixed primary step of the connection set.
pub const PRIMARY_STEP: usize = 3;

/// Every vertex of a valid graph has exactly this many distinct neighbors.
pub const DEGREE: usize = 4;

// ============================================================================
// Validation errors
// ============================================================================

/// Why a `(n, a)` pair does not define a quartic circulant graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ValidationErrorKind {
    /// `gcd(3, a, n) != 1`, so the steps do not generate \(\mathbb{Z}_n\).
    #[error("gcd(3, a, n) != 1, the graph is disconnected")]
    Disconnected,
    /// A step is zero, coincides with `±3`, or is its own inverse.
    #[error("a step is 0, coincides with ±3, or is its own inverse mod n")]
    DegenerateStep,
    /// Some vertex ended up with fewer than four distinct neighbors.
    #[error("a vertex has fewer than 4 distinct neighbors")]
    IrregularDegree,
}

/// Construction-time failure for one `(n, a)` pair.
///
/// `a` is the caller's value before normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("C_{n}(3,{a}) is not a valid quartic circulant graph: {kind}")]
pub struct ValidationError {
    /// The specific reason.
    pub kind: ValidationErrorKind,
    /// Requested vertex count.
    pub n: usize,
    /// Requested secondary step.
    pub a: i64,
}

// ============================================================================
// CirculantGraph
// ============================================================================

/// The 4-regular circulant graph on \(\mathbb{Z}_n\) with connection set `{±3, ±a}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CirculantGraph {
    n: usize,
    a: usize,
}

impl CirculantGraph {
    /// Validates `(n, a)` and builds `C_n(3,a)`. `a` is normalized into `[0, n-1]` first.
    ///
    /// # Errors
    /// - [`ValidationErrorKind::DegenerateStep`] if `n < 4`, if `6 ≡ 0 (mod n)` (the fixed
    ///   step is its own inverse, so `n = 6` never works), or if `a ≡ 0`, `a ≡ ±3` or
    ///   `2a ≡ 0 (mod n)`.
    /// - [`ValidationErrorKind::Disconnected`] if `gcd(3, a, n) != 1`.
    /// - [`ValidationErrorKind::IrregularDegree`] if a vertex still lacks four distinct
    ///   neighbors after the checks above.
    pub fn new(n: usize, a: i64) -> Result<Self, ValidationError> {
        let fail = |kind| ValidationError { kind, n, a };

        if n < DEGREE || (2 * PRIMARY_STEP) % n == 0 {
            return Err(fail(ValidationErrorKind::DegenerateStep));
        }

        let modulus = i64::try_from(n).map_err(|_| fail(ValidationErrorKind::DegenerateStep))?;
        let step = a.rem_euclid(modulus) as usize;

        if !is_connected(n, step) {
            return Err(fail(ValidationErrorKind::Disconnected));
        }
        if step == 0 || step == PRIMARY_STEP || step == n - PRIMARY_STEP || (2 * step) % n == 0 {
            return Err(fail(ValidationErrorKind::DegenerateStep));
        }

        let graph = Self { n, a: step };
        if (0..n).any(|v| !graph.has_distinct_neighbors(v)) {
            return Err(fail(ValidationErrorKind::IrregularDegree));
        }
        Ok(graph)
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Normalized secondary step in `[1, n-1]`.
    #[inline(always)]
    pub fn a(&self) -> usize {
        self.a
    }

    /// The four neighbors `x+3, x-3, x+a, x-a (mod n)` of `vertex`, in that order.
    #[inline(always)]
    pub fn neighbors(&self, vertex: usize) -> [usize; DEGREE] {
        debug_assert!(vertex < self.n, "vertex {vertex} out of range");
        let n = self.n;
        let primary = PRIMARY_STEP % n;
        [
            (vertex + primary) % n,
            (vertex + n - primary) % n,
            (vertex + self.a) % n,
            (vertex + n - self.a) % n,
        ]
    }

    /// Returns whether `u` and `v` are adjacent.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// The set of all vertices.
    pub fn vertices(&self) -> VertexSet {
        VertexSet::full(self.n)
    }

    /// Builds a seed set over this graph's vertices.
    ///
    /// # Panics
    /// Panics if a vertex is `>= n`.
    pub fn vertex_set<I>(&self, vertices: I) -> VertexSet
    where
        I: IntoIterator<Item = usize>,
    {
        VertexSet::from_vertices(self.n, vertices)
    }

    fn has_distinct_neighbors(&self, vertex: usize) -> bool {
        let nb = self.neighbors(vertex);
        (0..DEGREE).all(|i| ((i + 1)..DEGREE).all(|j| nb[i] != nb[j]))
    }
}

impl fmt::Display for CirculantGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C_{}(3,{})", self.n, self.a)
    }
}

// ============================================================================
// Parameter enumeration
// ============================================================================

#[inline]
fn gcd(mut x: usize, mut y: usize) -> usize {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

/// Returns `true` iff `gcd(3, a, n) == 1`, i.e. `C_n(3,a)` is connected.
pub fn is_connected(n: usize, a: usize) -> bool {
    gcd(gcd(PRIMARY_STEP, a), n) == 1
}

/// Tries every `a` in `[1, n-1]`, ascending, yielding the graph or the reason it is invalid.
pub fn scan_steps(n: usize) -> impl Iterator<Item = Result<CirculantGraph, ValidationError>> {
    (1..n).filter_map(move |a| i64::try_from(a).ok().map(|a| CirculantGraph::new(n, a)))
}

/// All `a` in `[1, n-1]` for which `C_n(3,a)` is valid, ascending.
///
/// Both `a` and `n - a` appear since they describe the same graph.
pub fn valid_steps(n: usize) -> Vec<usize> {
    scan_steps(n).filter_map(Result::ok).map(|g| g.a).collect()
}

/// Every valid graph with `n_min <= n <= n_max`, ordered by `(n, a)`.
pub fn valid_graphs(n_min: usize, n_max: usize) -> Vec<CirculantGraph> {
    (n_min..=n_max)
        .flat_map(scan_steps)
        .filter_map(Result::ok)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
