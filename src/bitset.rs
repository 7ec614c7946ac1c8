//! Fixed-width vertex bitsets.
//!
//! Seed sets, candidate sets and infected sets are all subsets of `{0, .., n-1}`.
//! They are stored as packed `u64` words so that membership is a shift and a mask,
//! iteration is ascending by construction, and two sets over the same universe
//! compare and hash by their bits alone.

use std::fmt;

const WORD_BITS: usize = 64;

#[inline(always)]
const fn word_count(universe: usize) -> usize {
    universe.div_ceil(WORD_BITS)
}

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << (v % WORD_BITS)
}

// ============================================================================
// VertexSet
// ============================================================================

/// A subset of the vertex set `{0, .., universe-1}`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VertexSet {
    words: Box<[u64]>,
    universe: usize,
    len: usize,
}

impl VertexSet {
    /// Creates an empty set over `universe` vertices.
    pub fn empty(universe: usize) -> Self {
        Self {
            words: vec![0u64; word_count(universe)].into_boxed_slice(),
            universe,
            len: 0,
        }
    }

    /// Creates the set containing every vertex of the universe.
    pub fn full(universe: usize) -> Self {
        let mut words = vec![u64::MAX; word_count(universe)].into_boxed_slice();
        let tail = universe % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self {
            words,
            universe,
            len: universe,
        }
    }

    /// Builds a set from vertex ids. Repeated ids are counted once.
    ///
    /// # Panics
    /// Panics if any vertex is `>= universe`.
    pub fn from_vertices<I>(universe: usize, vertices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::empty(universe);
        for v in vertices {
            set.insert(v);
        }
        set
    }

    /// Number of vertices in the underlying universe.
    #[inline(always)]
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Number of vertices in the set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every vertex of the universe is in the set.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.universe
    }

    /// Returns whether `v` is in the set. Out-of-range vertices are never members.
    #[inline(always)]
    pub fn contains(&self, v: usize) -> bool {
        v < self.universe && (self.words[v / WORD_BITS] & bit(v)) != 0
    }

    /// Adds `v`; returns `true` if it was not already present.
    ///
    /// # Panics
    /// Panics if `v >= universe`.
    #[inline]
    pub fn insert(&mut self, v: usize) -> bool {
        assert!(
            v < self.universe,
            "vertex {v} outside universe of {} vertices",
            self.universe
        );
        let word = &mut self.words[v / WORD_BITS];
        let mask = bit(v);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.len += 1;
        true
    }

    /// Returns `true` if every vertex of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        if other.universe > self.universe {
            return other.iter().all(|v| self.contains(v));
        }
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(&mine, &theirs)| theirs & !mine == 0)
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Returns the members as an ascending `Vec`.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the sorted bracketed list form, e.g. `[0, 2, 5]`.
impl fmt::Display for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`VertexSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + offset)
    }
}

// ============================================================================
// Tests
// ============================================================================
