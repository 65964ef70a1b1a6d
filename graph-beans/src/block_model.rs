//! SBM driver: validate the inputs, iterate cluster pairs, sample edge
//! counts and positions, and assemble the sparse adjacency matrix.

use crate::edge_sampler::{draw_edge_count, draw_edge_positions};
use crate::errors::SbmError;
use crate::pair_space::PairSpace;
use crate::partition::ClusterPartition;

use log::{debug, info};
use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};
use rand::Rng;

/// Check cluster sizes against the probability matrix before any sampling
/// happens, so invalid input never produces a partial graph.
fn validate(cluster_sizes: &[usize], prob_mat_q: &DMatrix<f64>) -> Result<(), SbmError> {
    if prob_mat_q.nrows() != prob_mat_q.ncols() {
        return Err(SbmError::InvalidParameter(format!(
            "probability matrix is {} x {}, expected square",
            prob_mat_q.nrows(),
            prob_mat_q.ncols()
        )));
    }
    if cluster_sizes.len() != prob_mat_q.nrows() {
        return Err(SbmError::DimensionMismatch(format!(
            "{} cluster sizes vs {} x {} probability matrix",
            cluster_sizes.len(),
            prob_mat_q.nrows(),
            prob_mat_q.ncols()
        )));
    }
    for jj in 0..prob_mat_q.ncols() {
        for ii in 0..prob_mat_q.nrows() {
            let q_ij = prob_mat_q[(ii, jj)];
            if !(0.0..=1.0).contains(&q_ij) {
                return Err(SbmError::InvalidParameter(format!(
                    "Q[{},{}] = {} outside [0, 1]",
                    ii, jj, q_ij
                )));
            }
        }
    }
    Ok(())
}

/// Sample the raw edge list of an SBM graph.
///
/// For `u` in cluster `i` and `v` in cluster `j`, an edge `(u, v)` appears
/// with probability `Q[i, j]`. Undirected mode consults only the upper
/// triangle of Q and emits each edge once, leaving the symmetric mirror to
/// the caller (as [`sbm_adjacency_with_rng`] does when it assembles the
/// matrix); directed mode visits every ordered cluster pair independently.
///
/// * `partition` - cluster sizes with global base offsets
/// * `prob_mat_q` - k x k edge probabilities
/// * `directed` - sample `(u, v)` and `(v, u)` independently
/// * `self_loops` - allow edges from a vertex to itself
pub fn sample_sbm_edges<R: Rng>(
    partition: &ClusterPartition,
    prob_mat_q: &DMatrix<f64>,
    directed: bool,
    self_loops: bool,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>, SbmError> {
    validate(partition.sizes(), prob_mat_q)?;

    let kk = partition.num_clusters();
    let mut edges = Vec::new();

    for c1 in 0..kk {
        let second_clusters = if directed { 0..kk } else { c1..kk };
        for c2 in second_clusters {
            let space = if c1 == c2 {
                PairSpace::within(partition.size(c1), directed, self_loops)
            } else {
                PairSpace::between(partition.size(c1), partition.size(c2))
            };

            let num_edges = draw_edge_count(rng, &space, prob_mat_q[(c1, c2)])?;
            debug!(
                "clusters ({}, {}): {} of {} candidate edges",
                c1,
                c2,
                num_edges,
                space.num_possible_edges()
            );

            let base_1 = partition.offset(c1);
            let base_2 = partition.offset(c2);
            for (uu, vv) in draw_edge_positions(rng, &space, num_edges)? {
                edges.push((base_1 + uu, base_2 + vv));
            }
        }
    }

    info!(
        "{} edges realized over {} vertices in {} clusters",
        edges.len(),
        partition.num_vertices(),
        kk
    );
    Ok(edges)
}

/// Generate the sparse adjacency matrix of an SBM graph.
///
/// In undirected mode each sampled edge is written in both orientations
/// (self-loops once), so the result is exactly symmetric. Values are 1.0
/// at every stored entry.
pub fn sbm_adjacency_with_rng<R: Rng>(
    cluster_sizes: &[usize],
    prob_mat_q: &DMatrix<f64>,
    directed: bool,
    self_loops: bool,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError> {
    let partition = ClusterPartition::new(cluster_sizes);
    let edges = sample_sbm_edges(&partition, prob_mat_q, directed, self_loops, rng)?;

    let nn = partition.num_vertices();
    let mut coo = CooMatrix::new(nn, nn);
    for &(uu, vv) in edges.iter() {
        coo.push(uu, vv, 1.0_f32);
        // a mirrored self-loop would sum to 2 in the CSR compaction
        if !directed && uu != vv {
            coo.push(vv, uu, 1.0_f32);
        }
    }
    Ok(CsrMatrix::from(&coo))
}

/// [`sbm_adjacency_with_rng`] seeded from the thread-local generator.
pub fn sbm_adjacency(
    cluster_sizes: &[usize],
    prob_mat_q: &DMatrix<f64>,
    directed: bool,
    self_loops: bool,
) -> Result<CsrMatrix<f32>, SbmError> {
    sbm_adjacency_with_rng(cluster_sizes, prob_mat_q, directed, self_loops, &mut rand::rng())
}

/// Cluster sizes used by the planted-partition entry points: `k` clusters
/// of `n / k` vertices, with the `n % k` remainder padded onto the last
/// cluster so every vertex appears in the graph.
pub fn ssbm_cluster_sizes(nn: usize, kk: usize) -> Result<Vec<usize>, SbmError> {
    if nn == 0 || kk == 0 {
        return Err(SbmError::InvalidParameter(format!(
            "n = {} and k = {} must both be positive",
            nn, kk
        )));
    }
    let mut cluster_sizes = vec![nn / kk; kk];
    cluster_sizes[kk - 1] += nn % kk;
    Ok(cluster_sizes)
}

/// Generate a planted-partition (symmetric SBM) adjacency matrix.
///
/// Within-cluster edges appear with probability `pp`, cross-cluster edges
/// with probability `qq`; no self-loops. The `directed` flag is forwarded
/// to the general entry point, with `Q[i, j] = Q[j, i]` by construction.
pub fn ssbm_adjacency_with_rng<R: Rng>(
    nn: usize,
    kk: usize,
    pp: f64,
    qq: f64,
    directed: bool,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError> {
    let cluster_sizes = ssbm_cluster_sizes(nn, kk)?;
    let prob_mat_q = DMatrix::from_fn(kk, kk, |ii, jj| if ii == jj { pp } else { qq });
    sbm_adjacency_with_rng(&cluster_sizes, &prob_mat_q, directed, false, rng)
}

/// [`ssbm_adjacency_with_rng`] seeded from the thread-local generator.
pub fn ssbm_adjacency(
    nn: usize,
    kk: usize,
    pp: f64,
    qq: f64,
    directed: bool,
) -> Result<CsrMatrix<f32>, SbmError> {
    ssbm_adjacency_with_rng(nn, kk, pp, qq, directed, &mut rand::rng())
}
