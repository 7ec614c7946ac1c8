//! Structured seed-set candidates for the heuristic phase of the search.
//!
//! Four deterministic strategies exploit the rotational symmetry of \(C_n(3,a)\) and its two
//! step lengths; uniform random subsets fill the remaining budget. Candidates are returned in
//! strategy order with duplicates removed, so the first contagious candidate a caller finds is
//! reproducible for a given generator state.

use std::collections::HashSet;

use rand::Rng;

use crate::bitset::VertexSet;
use crate::graph::{CirculantGraph, PRIMARY_STEP};

// ============================================================================
// Configuration
// ============================================================================

/// Rotational offsets tried by the evenly-spaced strategy.
const SPACED_OFFSETS: usize = 3;
/// Starting vertices tried by the consecutive-run strategy.
const RUN_STARTS: usize = 5;
/// Starting vertices tried by the step-alternation strategy.
const ALTERNATION_STARTS: usize = 3;
/// Starting vertices tried by the bounded-distance strategy.
const DISTANCE_STARTS: usize = 2;

/// Limits on how many candidates one [`generate`] call produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateConfig {
    /// Hard cap on the total number of candidates returned.
    pub max_candidates: usize,
    /// Number of random subsets drawn after the structured strategies.
    pub max_random: usize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            max_candidates: 100,
            max_random: 50,
        }
    }
}

impl CandidateConfig {
    /// The larger budget used when confirming that a claimed size is achievable.
    pub const fn verification() -> Self {
        Self {
            max_candidates: 200,
            max_random: 200,
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Ordered, de-duplicated candidate collection bounded by `max_candidates`.
struct CandidateList {
    ordered: Vec<VertexSet>,
    seen: HashSet<VertexSet>,
    cap: usize,
}

impl CandidateList {
    fn new(cap: usize) -> Self {
        Self {
            ordered: Vec::new(),
            seen: HashSet::new(),
            cap,
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.ordered.len() >= self.cap
    }

    /// Keeps `set` if it has exactly `size` members, is new, and the cap allows it.
    fn offer(&mut self, set: VertexSet, size: usize) -> bool {
        if self.is_full() || set.len() != size || self.seen.contains(&set) {
            return false;
        }
        self.seen.insert(set.clone());
        self.ordered.push(set);
        true
    }
}

/// Produces up to `cfg.max_candidates` distinct `size`-subsets of the vertices of `graph`.
///
/// Strategy order:
/// 1. evenly spaced vertices with spacing `n / size`, for up to three offsets;
/// 2. `size` consecutive vertices from up to five starts;
/// 3. alternating `+3` / `+a` walks of `size - 1` steps from up to three starts;
/// 4. the start plus `a`, `3`, `a + 3` (in that order) until `size` members, from two starts;
/// 5. `cfg.max_random` uniform random subsets drawn from `rng`.
///
/// Sets that come out smaller than `size` (because of wrap-around collisions) are dropped.
/// Returns nothing when `size` is `0` or exceeds `n`.
pub fn generate<R: Rng + ?Sized>(
    graph: &CirculantGraph,
    size: usize,
    cfg: &CandidateConfig,
    rng: &mut R,
) -> Vec<VertexSet> {
    let n = graph.n();
    let mut list = CandidateList::new(cfg.max_candidates);
    if size == 0 || size > n {
        return list.ordered;
    }

    evenly_spaced(graph, size, &mut list);
    consecutive_runs(graph, size, &mut list);
    step_alternation(graph, size, &mut list);
    bounded_distance(graph, size, &mut list);
    random_subsets(graph, size, cfg.max_random, rng, &mut list);

    list.ordered
}

fn evenly_spaced(graph: &CirculantGraph, size: usize, list: &mut CandidateList) {
    let n = graph.n();
    let spacing = n / size;
    for offset in 0..spacing.min(SPACED_OFFSETS) {
        let set = graph.vertex_set((0..size).map(|i| (offset + i * spacing) % n));
        list.offer(set, size);
    }
}

fn consecutive_runs(graph: &CirculantGraph, size: usize, list: &mut CandidateList) {
    let n = graph.n();
    for start in 0..n.min(RUN_STARTS) {
        let set = graph.vertex_set((0..size).map(|i| (start + i) % n));
        list.offer(set, size);
    }
}

fn step_alternation(graph: &CirculantGraph, size: usize, list: &mut CandidateList) {
    let n = graph.n();
    for start in 0..n.min(ALTERNATION_STARTS) {
        let mut set = VertexSet::empty(n);
        set.insert(start);
        let mut current = start;
        for i in 0..size - 1 {
            let step = if i % 2 == 0 { PRIMARY_STEP } else { graph.a() };
            current = (current + step) % n;
            set.insert(current);
        }
        list.offer(set, size);
    }
}

fn bounded_distance(graph: &CirculantGraph, size: usize, list: &mut CandidateList) {
    let n = graph.n();
    let a = graph.a();
    for start in 0..n.min(DISTANCE_STARTS) {
        let mut set = VertexSet::empty(n);
        set.insert(start);
        for dist in [a, PRIMARY_STEP, a + PRIMARY_STEP] {
            if set.len() >= size {
                break;
            }
            set.insert((start + dist) % n);
        }
        list.offer(set, size);
    }
}

fn random_subsets<R: Rng + ?Sized>(
    graph: &CirculantGraph,
    size: usize,
    draws: usize,
    rng: &mut R,
    list: &mut CandidateList,
) {
    for _ in 0..draws {
        if list.is_full() {
            break;
        }
        let picks = rand::seq::index::sample(rng, graph.n(), size);
        list.offer(graph.vertex_set(picks.iter()), size);
    }
}

// ============================================================================
// Tests
// ============================================================================
