//! Size-increasing search for a minimum contagious set.
//!
//! For each size `k = 2, 3, ..` the search first enumerates every `k`-subset when the graph and
//! `k` are small enough, then falls back to structured and random candidates. The first
//! contagious set encountered wins, so the result depends only on the graph and the
//! [`SearchConfig`].
//!
//! Outside the exhaustive regime the reported `m2` is an upper bound: it is the smallest size
//! at which a contagious set was *found*. [`SearchResult::exhaustively_verified`] says when it
//! is exact.

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use tracing::{debug, info};

use crate::bitset::VertexSet;
use crate::candidates::{self, CandidateConfig};
use crate::combinations::{binomial, Combinations};
use crate::graph::CirculantGraph;
use crate::percolation;

/// No seed smaller than this can percolate: a lone vertex never has two infected neighbors.
pub const MIN_CONTAGIOUS_SIZE: usize = 2;

// ============================================================================
// Configuration
// ============================================================================

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest size to try; `None` means `n`.
    pub max_size: Option<usize>,
    /// Exhaustive enumeration is only used when `n` is at most this.
    pub exhaustive_max_n: usize,
    /// Exhaustive enumeration is only used for sizes up to this.
    pub exhaustive_max_size: usize,
    /// Cap on subsets examined by one exhaustive pass.
    pub max_combinations: usize,
    /// Budget of the heuristic phase.
    pub candidates: CandidateConfig,
    /// Seed of the generator behind the random candidates.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_size: None,
            exhaustive_max_n: 12,
            exhaustive_max_size: 4,
            max_combinations: 5000,
            candidates: CandidateConfig::default(),
            seed: 42,
        }
    }
}

impl SearchConfig {
    #[inline]
    fn is_exhaustive(&self, n: usize, size: usize) -> bool {
        n <= self.exhaustive_max_n && size <= self.exhaustive_max_size
    }
}

// ============================================================================
// Result
// ============================================================================

/// The best contagious set found for one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Size of `witness`: the infection number when `exhaustively_verified`, otherwise an
    /// upper bound on it.
    pub m2: usize,
    /// A contagious set of size `m2`.
    pub witness: VertexSet,
    /// `true` iff every size below `m2` was enumerated completely without success.
    pub exhaustively_verified: bool,
}

/// Outcome of enumerating the subsets of one size.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Enumeration {
    Found(VertexSet),
    /// Every subset was examined; none percolates.
    Exhausted,
    /// The combination cap was hit before the end.
    Capped,
}

/// Tests `k`-subsets in lexicographic order, at most `cap` of them.
///
/// Also returns how many subsets were run through percolation.
fn enumerate(graph: &CirculantGraph, k: usize, cap: usize) -> (Enumeration, usize) {
    let mut examined = 0;
    for seed in Combinations::new(graph.n(), k).take(cap) {
        examined += 1;
        if percolation::run(graph, &seed) {
            return (Enumeration::Found(seed), examined);
        }
    }
    let outcome = if binomial(graph.n(), k) <= cap as u128 {
        Enumeration::Exhausted
    } else {
        Enumeration::Capped
    };
    (outcome, examined)
}

// ============================================================================
// Public API
// ============================================================================

/// Finds the smallest contagious set the search can reach, with default parameters.
pub fn find_minimum_contagious_set(graph: &CirculantGraph) -> SearchResult {
    find(graph, &SearchConfig::default())
}

/// Runs the size-increasing search.
///
/// One random generator, seeded from `cfg.seed`, is threaded through every size, so repeated
/// calls with the same arguments return identical results. If nothing up to the maximum size
/// percolates, the full vertex set is returned with `m2 = n`.
pub fn find(graph: &CirculantGraph, cfg: &SearchConfig) -> SearchResult {
    let result = search(graph, cfg);
    info!(
        %graph,
        m2 = result.m2,
        witness = %result.witness,
        exact = result.exhaustively_verified,
        "contagious set found"
    );
    result
}

fn search(graph: &CirculantGraph, cfg: &SearchConfig) -> SearchResult {
    let n = graph.n();
    let max_size = cfg.max_size.unwrap_or(n).min(n);
    let mut rng = XorShiftRng::seed_from_u64(cfg.seed);
    // Sizes below 2 never percolate, so the lower bound starts out proven.
    let mut proven = true;

    for size in MIN_CONTAGIOUS_SIZE..=max_size {
        let verified_below = proven;

        if cfg.is_exhaustive(n, size) {
            let (outcome, examined) = enumerate(graph, size, cfg.max_combinations);
            match outcome {
                Enumeration::Found(witness) => {
                    debug!(%graph, size, examined, "exhaustive enumeration found a contagious set");
                    return SearchResult {
                        m2: size,
                        witness,
                        exhaustively_verified: verified_below,
                    };
                }
                Enumeration::Exhausted => {
                    debug!(%graph, size, examined, "no contagious set of this size exists");
                }
                Enumeration::Capped => {
                    debug!(%graph, size, examined, "enumeration cap reached");
                    proven = false;
                }
            }
        } else {
            proven = false;
        }

        let pool = candidates::generate(graph, size, &cfg.candidates, &mut rng);
        let pool_size = pool.len();
        if let Some((i, witness)) = pool
            .into_iter()
            .enumerate()
            .find(|(_, seed)| percolation::run(graph, seed))
        {
            debug!(%graph, size, examined = i + 1, pool_size, "heuristic candidate percolates");
            return SearchResult {
                m2: size,
                witness,
                exhaustively_verified: verified_below,
            };
        }
        debug!(%graph, size, examined = pool_size, "no heuristic candidate percolates");
    }

    debug!(%graph, max_size, "falling back to the full vertex set");
    SearchResult {
        m2: n,
        witness: graph.vertices(),
        exhaustively_verified: proven && max_size + 1 >= n,
    }
}

/// Lists contagious sets of exactly `size` vertices in lexicographic order, stopping after
/// `limit` of them.
///
/// This enumerates all `C(n, size)` subsets in the worst case and is meant for small graphs.
pub fn find_all_contagious_sets(
    graph: &CirculantGraph,
    size: usize,
    limit: usize,
) -> Vec<VertexSet> {
    Combinations::new(graph.n(), size)
        .filter(|seed| percolation::run(graph, seed))
        .take(limit)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, a: i64) -> CirculantGraph {
        CirculantGraph::new(n, a).unwrap()
    }

    #[test]
    fn c5_1_has_infection_number_two() {
        let result = find_minimum_contagious_set(&graph(5, 1));
        assert_eq!(result.m2, 2);
        assert_eq!(result.witness.to_vec(), vec![0, 1]);
        assert!(result.exhaustively_verified);
    }

    #[test]
    fn c12_1_pair_is_first_lexicographic_hit() {
        let result = find_minimum_contagious_set(&graph(12, 1));
        assert_eq!(result.m2, 2);
        assert_eq!(result.witness.to_vec(), vec![0, 2]);
        assert!(result.exhaustively_verified);
    }

    #[test]
    fn c12_2_needs_three_seeds() {
        let result = find_minimum_contagious_set(&graph(12, 2));
        assert_eq!(result.m2, 3);
        assert_eq!(result.witness.to_vec(), vec![0, 1, 2]);
        assert!(result.exhaustively_verified);
    }

    #[test]
    fn witnesses_percolate_and_have_size_m2() {
        for g in crate::graph::valid_graphs(5, 20) {
            let result = find_minimum_contagious_set(&g);
            assert_eq!(result.witness.len(), result.m2, "{g}");
            assert!(percolation::run(&g, &result.witness), "{g}");
            assert!(result.m2 >= MIN_CONTAGIOUS_SIZE);
            let expected = result.m2 == 2 || (g.n() <= 12 && result.m2 <= 5);
            assert_eq!(result.exhaustively_verified, expected, "{g}");
        }
    }

    #[test]
    fn heuristic_regime_is_not_flagged_exact() {
        let g = graph(40, 7);
        let result = find_minimum_contagious_set(&g);
        assert!(percolation::run(&g, &result.witness));
        // Only the trivial lower bound holds without enumeration.
        assert_eq!(result.exhaustively_verified, result.m2 == 2);
    }

    #[test]
    fn repeated_searches_agree() {
        let g = graph(29, 4);
        let first = find_minimum_contagious_set(&g);
        let second = find_minimum_contagious_set(&g);
        assert_eq!(first, second);
    }

    #[test]
    fn size_cap_falls_back_to_all_vertices() {
        let g = graph(12, 2);
        let cfg = SearchConfig {
            max_size: Some(2),
            ..SearchConfig::default()
        };
        let result = find(&g, &cfg);
        assert_eq!(result.m2, 12);
        assert!(result.witness.is_full());
        assert!(!result.exhaustively_verified);
    }

    #[test]
    fn combination_cap_clears_the_exact_flag() {
        let g = graph(12, 2);
        let cfg = SearchConfig {
            max_combinations: 10,
            ..SearchConfig::default()
        };
        let result = find(&g, &cfg);
        assert!(percolation::run(&g, &result.witness));
        assert!(!result.exhaustively_verified);
    }

    #[test]
    fn enumeration_counts_every_subset_it_runs() {
        let g = graph(12, 2);
        // C(12, 2) = 66 pairs, none contagious.
        assert_eq!(enumerate(&g, 2, 5000), (Enumeration::Exhausted, 66));
        assert_eq!(enumerate(&g, 2, 66), (Enumeration::Exhausted, 66));
        assert_eq!(enumerate(&g, 2, 10), (Enumeration::Capped, 10));
        // {0, 1, 2} is the first triple in lexicographic order.
        assert_eq!(
            enumerate(&g, 3, 5000),
            (Enumeration::Found(g.vertex_set([0, 1, 2])), 1)
        );
    }

    #[test]
    fn enumeration_stops_at_the_first_hit() {
        let g = graph(12, 1);
        // {0, 1} stalls, {0, 2} is the first contagious pair.
        assert_eq!(
            enumerate(&g, 2, 5000),
            (Enumeration::Found(g.vertex_set([0, 2])), 2)
        );
    }

    #[test]
    fn all_contagious_pairs_of_c5_1() {
        // K5: every pair is contagious.
        let all = find_all_contagious_sets(&graph(5, 1), 2, usize::MAX);
        assert_eq!(all.len(), 10);
        let limited = find_all_contagious_sets(&graph(5, 1), 2, 3);
        assert_eq!(limited, all[..3].to_vec());
    }

    #[test]
    fn no_contagious_pairs_in_c12_2() {
        assert!(find_all_contagious_sets(&graph(12, 2), 2, usize::MAX).is_empty());
    }
}
