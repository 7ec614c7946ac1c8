//! 2-neighbor threshold bootstrap percolation.
//!
//! Rounds are synchronous: a healthy vertex becomes infected in round `r + 1` iff at least
//! [`THRESHOLD`] of its neighbors were infected at the start of round `r`. Infection is
//! absorbing, so the infected set only grows and the process reaches a fixed point after at
//! most `n` rounds.
//!
//! [`PercolationState`] keeps a per-vertex count of infected neighbors and only inspects the
//! neighbors of the previous round's newly infected vertices. A vertex can only cross the
//! threshold when one of its neighbors was just infected, so this visits exactly the
//! vertices a full sweep would infect, and a complete run costs `O(n)` instead of `O(n²)`.

use crate::bitset::VertexSet;
use crate::graph::CirculantGraph;

/// Number of infected neighbors needed to infect a healthy vertex.
pub const THRESHOLD: u8 = 2;

// ============================================================================
// PercolationState
// ============================================================================

/// The infected set of one percolation run, advanced one round at a time.
#[derive(Clone, Debug)]
pub struct PercolationState {
    infected: VertexSet,
    /// `infected_neighbors[v]` = number of neighbors of `v` in `infected`.
    infected_neighbors: Vec<u8>,
    /// Vertices infected in the most recent round (the seed itself in round 0).
    frontier: Vec<usize>,
    round: usize,
}

impl PercolationState {
    /// Starts a run from `seed` at round 0.
    ///
    /// # Panics
    /// Panics if `seed` is not a set over exactly the graph's `n` vertices.
    pub fn new(graph: &CirculantGraph, seed: &VertexSet) -> Self {
        assert_eq!(
            seed.universe(),
            graph.n(),
            "seed universe does not match {graph}"
        );

        let mut infected_neighbors = vec![0u8; graph.n()];
        for v in seed {
            for w in graph.neighbors(v) {
                infected_neighbors[w] += 1;
            }
        }
        Self {
            infected: seed.clone(),
            infected_neighbors,
            frontier: seed.to_vec(),
            round: 0,
        }
    }

    /// Current infected set.
    #[inline]
    pub fn infected(&self) -> &VertexSet {
        &self.infected
    }

    /// Number of rounds applied so far, counting only rounds that infected something.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns `true` once a round has produced no new infections.
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Returns `true` if every vertex is infected.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.infected.is_full()
    }

    /// Applies one synchronous round and returns how many vertices it infected.
    ///
    /// All threshold tests read the counters as they stood at the start of the round;
    /// the counters are only bumped after the whole round is decided.
    pub fn step(&mut self, graph: &CirculantGraph) -> usize {
        let mut newly = Vec::new();
        for &v in &self.frontier {
            for w in graph.neighbors(v) {
                if self.infected_neighbors[w] >= THRESHOLD && self.infected.insert(w) {
                    newly.push(w);
                }
            }
        }

        for &v in &newly {
            for w in graph.neighbors(v) {
                self.infected_neighbors[w] += 1;
            }
        }

        let added = newly.len();
        if added > 0 {
            self.round += 1;
        }
        self.frontier = newly;
        added
    }

    /// Steps until no round adds a vertex.
    pub fn run_to_fixed_point(&mut self, graph: &CirculantGraph) {
        while !self.is_stable() {
            self.step(graph);
        }
    }

    /// Consumes the state and returns the infected set.
    pub fn into_infected(self) -> VertexSet {
        self.infected
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Returns `true` iff `seed` eventually infects every vertex of `graph`.
///
/// # Panics
/// Panics if `seed` is not a set over exactly the graph's `n` vertices.
pub fn run(graph: &CirculantGraph, seed: &VertexSet) -> bool {
    closure(graph, seed).is_full()
}

/// Returns the fixed point reached from `seed`.
pub fn closure(graph: &CirculantGraph, seed: &VertexSet) -> VertexSet {
    let mut state = PercolationState::new(graph, seed);
    state.run_to_fixed_point(graph);
    state.into_infected()
}

/// Returns the infected set after every round, starting with the seed itself.
///
/// A snapshot is appended only for rounds that infected at least one vertex, so the last
/// entry is the fixed point and consecutive entries are strictly increasing.
pub fn trace(graph: &CirculantGraph, seed: &VertexSet) -> Vec<VertexSet> {
    let mut state = PercolationState::new(graph, seed);
    let mut snapshots = vec![state.infected().clone()];
    while state.step(graph) > 0 {
        snapshots.push(state.infected().clone());
    }
    snapshots
}

/// Number of rounds until `seed` infects every vertex, or `None` if it never does.
pub fn rounds_to_percolate(graph: &CirculantGraph, seed: &VertexSet) -> Option<usize> {
    let mut state = PercolationState::new(graph, seed);
    state.run_to_fixed_point(graph);
    state.is_complete().then_some(state.round())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn graph(n: usize, a: i64) -> CirculantGraph {
        CirculantGraph::new(n, a).unwrap()
    }

    /// Plain full-sweep reference: every healthy vertex is tested every round.
    fn sweep_closure(g: &CirculantGraph, seed: &VertexSet) -> Vec<VertexSet> {
        let mut infected = seed.clone();
        let mut rounds = vec![infected.clone()];
        loop {
            let newly: Vec<usize> = (0..g.n())
                .filter(|&v| !infected.contains(v))
                .filter(|&v| {
                    g.neighbors(v).iter().filter(|&&w| infected.contains(w)).count() >= 2
                })
                .collect();
            if newly.is_empty() {
                return rounds;
            }
            for v in newly {
                infected.insert(v);
            }
            rounds.push(infected.clone());
        }
    }

    #[test]
    fn c5_1_two_seeds_percolate() {
        let g = graph(5, 1);
        assert!(run(&g, &g.vertex_set([0, 1])));
        assert_eq!(rounds_to_percolate(&g, &g.vertex_set([0, 1])), Some(1));
    }

    #[test]
    fn single_seed_never_spreads() {
        let g = graph(5, 1);
        let t = trace(&g, &g.vertex_set([0]));
        assert_eq!(t.len(), 1);
        assert!(!run(&g, &g.vertex_set([0])));
    }

    #[test]
    fn c12_1_seed_0_2_percolates() {
        let g = graph(12, 1);
        assert!(run(&g, &g.vertex_set([0, 2])));
    }

    #[test]
    fn c12_1_first_round_is_synchronous() {
        let g = graph(12, 1);
        let t = trace(&g, &g.vertex_set([0, 2]));
        assert_eq!(t[1].to_vec(), vec![0, 1, 2, 3, 11]);
    }

    #[test]
    fn c12_2_adjacent_pair_stalls() {
        let g = graph(12, 2);
        assert!(!run(&g, &g.vertex_set([0, 1])));
    }

    #[test]
    fn c12_2_three_consecutive_percolate() {
        let g = graph(12, 2);
        assert!(run(&g, &g.vertex_set([0, 1, 2])));
    }

    #[test]
    fn c12_2_opposite_pair_stalls() {
        let g = graph(12, 2);
        assert!(!run(&g, &g.vertex_set([0, 6])));
    }

    #[test]
    fn trace_ends_at_closure() {
        let g = graph(12, 2);
        let seed = g.vertex_set([0, 1]);
        let t = trace(&g, &seed);
        assert_eq!(t.first(), Some(&seed));
        assert_eq!(t.last(), Some(&closure(&g, &seed)));
    }

    #[test]
    fn fixed_point_is_stable() {
        let g = graph(12, 2);
        let fixed = closure(&g, &g.vertex_set([0, 1]));
        let again = trace(&g, &fixed);
        assert_eq!(again, vec![fixed]);
    }

    #[test]
    fn incremental_rounds_match_full_sweep() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
        for g in crate::graph::valid_graphs(5, 30) {
            for k in 2..=4.min(g.n()) {
                let picks = rand::seq::index::sample(&mut rng, g.n(), k);
                let seed = g.vertex_set(picks.iter());
                assert_eq!(trace(&g, &seed), sweep_closure(&g, &seed), "{g} seed {seed}");
            }
        }
    }

    #[test]
    fn empty_seed_stays_empty() {
        let g = graph(7, 2);
        let t = trace(&g, &VertexSet::empty(7));
        assert_eq!(t.len(), 1);
        assert!(t[0].is_empty());
    }

    #[test]
    #[should_panic(expected = "seed universe does not match C_12(3,1)")]
    fn seed_over_a_larger_universe_is_rejected() {
        let g = graph(12, 1);
        let _ = run(&g, &VertexSet::from_vertices(20, [0, 2]));
    }

    #[test]
    #[should_panic(expected = "seed universe does not match")]
    fn seed_over_a_smaller_universe_is_rejected() {
        let g = graph(12, 2);
        let _ = trace(&g, &VertexSet::from_vertices(5, [0, 1, 2]));
    }

    #[test]
    fn full_seed_is_complete_at_round_zero() {
        let g = graph(7, 2);
        assert_eq!(rounds_to_percolate(&g, &g.vertices()), Some(0));
    }
}
