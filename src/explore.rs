//! Batch exploration over many `(n, a)` pairs.
//!
//! Each graph is an independent task with no shared state, so the parallel mode simply maps
//! the search over a rayon pool. Results are collected through an indexed parallel iterator,
//! which keeps them in input order regardless of completion order.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::bitset::VertexSet;
use crate::graph::{scan_steps, CirculantGraph};
use crate::search::{self, SearchConfig};

/// Header matching [`GraphReport::csv_row`].
pub const CSV_HEADER: &str = "n,a,m2,contagious_set,computation_time_seconds";

/// How [`explore`] schedules the per-graph searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExploreMode {
    /// One rayon task per graph.
    #[default]
    Parallel,
    /// One graph after another on the calling thread.
    Sequential,
}

/// Search outcome for one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphReport {
    /// Vertex count.
    pub n: usize,
    /// Secondary step.
    pub a: usize,
    /// Smallest contagious set size found.
    pub m2: usize,
    /// A contagious set of size `m2`.
    pub witness: VertexSet,
    /// Whether `m2` is proven exact.
    pub exhaustively_verified: bool,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

impl GraphReport {
    /// Formats the report as `n,a,m2,"[..]",seconds`.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},\"{}\",{:.6}",
            self.n,
            self.a,
            self.m2,
            self.witness,
            self.elapsed.as_secs_f64()
        )
    }
}

fn report(graph: &CirculantGraph, cfg: &SearchConfig) -> GraphReport {
    let start = Instant::now();
    let result = search::find(graph, cfg);
    let elapsed = start.elapsed();
    debug!(%graph, secs = elapsed.as_secs_f64(), "search timed");
    GraphReport {
        n: graph.n(),
        a: graph.a(),
        m2: result.m2,
        witness: result.witness,
        exhaustively_verified: result.exhaustively_verified,
        elapsed,
    }
}

/// Searches every graph and returns one report per graph, in input order.
pub fn explore(graphs: &[CirculantGraph], cfg: &SearchConfig, mode: ExploreMode) -> Vec<GraphReport> {
    match mode {
        ExploreMode::Parallel => graphs.par_iter().map(|g| report(g, cfg)).collect(),
        ExploreMode::Sequential => graphs.iter().map(|g| report(g, cfg)).collect(),
    }
}

/// Searches every valid graph with `n_min <= n <= n_max`.
///
/// Invalid `(n, a)` pairs are skipped, each with a `debug!` event naming the reason.
pub fn explore_range(
    n_min: usize,
    n_max: usize,
    cfg: &SearchConfig,
    mode: ExploreMode,
) -> Vec<GraphReport> {
    let mut graphs = Vec::new();
    for scanned in (n_min..=n_max).flat_map(scan_steps) {
        match scanned {
            Ok(graph) => graphs.push(graph),
            Err(err) => debug!(n = err.n, a = err.a, kind = ?err.kind, "skipping invalid pair"),
        }
    }
    info!(n_min, n_max, graphs = graphs.len(), ?mode, "exploring range");
    explore(&graphs, cfg, mode)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::valid_graphs;

    fn strip_timing(reports: Vec<GraphReport>) -> Vec<(usize, usize, usize, VertexSet, bool)> {
        reports
            .into_iter()
            .map(|r| (r.n, r.a, r.m2, r.witness, r.exhaustively_verified))
            .collect()
    }

    #[test]
    fn parallel_matches_sequential_order_and_content() {
        let cfg = SearchConfig::default();
        let parallel = explore_range(5, 16, &cfg, ExploreMode::Parallel);
        let sequential = explore_range(5, 16, &cfg, ExploreMode::Sequential);
        assert_eq!(strip_timing(parallel), strip_timing(sequential));
    }

    #[test]
    fn reports_follow_input_order() {
        let graphs = valid_graphs(5, 14);
        let reports = explore(&graphs, &SearchConfig::default(), ExploreMode::Parallel);
        let order: Vec<(usize, usize)> = reports.iter().map(|r| (r.n, r.a)).collect();
        let expected: Vec<(usize, usize)> = graphs.iter().map(|g| (g.n(), g.a())).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn csv_row_layout() {
        let report = GraphReport {
            n: 12,
            a: 2,
            m2: 3,
            witness: VertexSet::from_vertices(12, [2, 0, 1]),
            exhaustively_verified: true,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(report.csv_row(), "12,2,3,\"[0, 1, 2]\",1.500000");
        assert_eq!(CSV_HEADER.split(',').count(), 5);
    }

    #[test]
    fn range_covers_exactly_the_valid_pairs() {
        let reports = explore_range(5, 13, &SearchConfig::default(), ExploreMode::Sequential);
        let pairs: Vec<(usize, usize)> = reports.iter().map(|r| (r.n, r.a)).collect();
        let expected: Vec<(usize, usize)> =
            valid_graphs(5, 13).iter().map(|g| (g.n(), g.a())).collect();
        assert_eq!(pairs, expected);
        // C_12(3,3) and C_10(3,5) are rejected, C_12(3,2) is kept.
        assert!(!pairs.contains(&(12, 3)));
        assert!(!pairs.contains(&(10, 5)));
        assert!(pairs.contains(&(12, 2)));
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert!(explore_range(6, 6, &SearchConfig::default(), ExploreMode::Parallel).is_empty());
    }
}
