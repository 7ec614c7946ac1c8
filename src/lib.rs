//! # Contagion
//!
//! Infection numbers of quartic circulant graphs under 2-neighbor bootstrap percolation.
//!
//! This crate provides:
//! - The circulant graphs \(C_n(3,a) = \mathrm{Cay}(\mathbb{Z}_n, \{\pm 3, \pm a\})\), validated
//!   at construction so every graph is connected and 4-regular.
//! - A synchronous, incremental percolation engine over packed vertex bitsets.
//! - A size-increasing search for a minimum contagious set (exhaustive for small cases,
//!   structured + seeded-random candidates otherwise) and a verifier for claimed values.
//! - A rayon batch driver over ranges of `n`.
//!
//! ## Quick Start
//!
//! ```
//! use contagion::graph::CirculantGraph;
//! use contagion::search::find_minimum_contagious_set;
//! use contagion::verify::verify;
//!
//! let graph = CirculantGraph::new(12, 2).unwrap();
//! let result = find_minimum_contagious_set(&graph);
//! assert_eq!(result.m2, 3);
//! assert!(result.exhaustively_verified);
//! assert!(verify(&graph, result.m2));
//! ```
//!
//! ## Simulating a Seed
//!
//! ```
//! use contagion::graph::CirculantGraph;
//! use contagion::percolation;
//!
//! let graph = CirculantGraph::new(12, 1).unwrap();
//! let seed = graph.vertex_set([0, 2]);
//! assert!(percolation::run(&graph, &seed));
//!
//! let rounds = percolation::trace(&graph, &seed);
//! assert_eq!(rounds[0], seed);
//! assert!(rounds.last().unwrap().is_full());
//! ```
//!
//! ## Modules
//!
//! - [`bitset`]: Fixed-width vertex sets.
//! - [`combinations`]: Lexicographic k-subset enumeration.
//! - [`graph`]: Circulant graph construction and validation.
//! - [`percolation`]: The 2-threshold infection process.
//! - [`candidates`]: Heuristic seed candidates.
//! - [`search`]: Minimum contagious set search.
//! - [`verify`]: Checks for claimed infection numbers.
//! - [`explore`]: Batch runs over many graphs.
//!
//! ## Exactness
//!
//! `m2` is exact only when [`search::SearchResult::exhaustively_verified`] is set, which with
//! default settings means `n <= 12` and `m2 <= 5`, or `m2 = 2`. Elsewhere it is the smallest
//! size at which the heuristics found a contagious set, an upper bound on the true value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs

pub mod bitset;
pub mod candidates;
pub mod combinations;
pub mod explore;
pub mod graph;
pub mod percolation;
pub mod search;
pub mod verify;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::bitset::VertexSet;
    pub use crate::graph::{CirculantGraph, ValidationError, ValidationErrorKind};
    pub use crate::percolation::{run, trace};
    pub use crate::search::{find, find_minimum_contagious_set, SearchConfig, SearchResult};
    pub use crate::verify::{verify, Verdict};
}
