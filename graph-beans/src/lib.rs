//! Sparse random graph generation from the stochastic block model (SBM).
//!
//! Vertices are partitioned into clusters and the probability of an edge
//! depends only on the clusters of its endpoints. Rather than flipping a
//! Bernoulli coin for every vertex pair (quadratic in the number of
//! vertices), each cluster pair draws its realized edge count from a
//! binomial distribution over the candidate-edge space and then places
//! that many distinct edges by sampling candidate ranks, so the work
//! scales with the number of realized edges.
//!
//! # Entry points
//!
//! [`sbm_adjacency`] builds a sparse CSR adjacency matrix from explicit
//! cluster sizes and a k-by-k probability matrix Q; [`ssbm_adjacency`] is
//! the planted-partition shorthand (probability `p` within clusters, `q`
//! across). Both have `_with_rng` variants for reproducible generation
//! with a seeded generator.

#![deny(warnings)]

/// Error kinds distinguishing bad input from internal bugs
pub mod errors;

/// Cluster sizes and prefix-sum base offsets
pub mod partition;

/// Candidate-edge combinatorics: counts and rank-to-pair decoding
pub mod pair_space;

/// Binomial edge-count draws and distinct edge-position draws
pub mod edge_sampler;

/// Driver: cluster-pair iteration and sparse adjacency assembly
pub mod block_model;

/// Buffered gzip-aware readers and writers
pub mod common_io;

/// MatrixMarket output for adjacency matrices
pub mod mtx_io;

pub use block_model::{
    sample_sbm_edges, sbm_adjacency, sbm_adjacency_with_rng, ssbm_adjacency,
    ssbm_adjacency_with_rng, ssbm_cluster_sizes,
};
pub use errors::SbmError;
