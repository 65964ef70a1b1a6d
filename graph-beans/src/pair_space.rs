//! Combinatorial layout of the candidate edges between two clusters.
//!
//! Every candidate edge of a cluster pair is assigned a unique rank in
//! `[0, num_possible_edges)` and [`PairSpace::pair_at`] inverts that
//! ranking in closed form. The undirected within-cluster cases use
//! triangular indexing; the float-derived triangular root is corrected
//! with exact integer bounds checks before use.

use crate::errors::SbmError;

/// The candidate-edge space of one cluster pair.
///
/// Fully determined by the two cluster sizes and the
/// same-cluster/self-loops/directed flags; recomputed per pair and never
/// stored beyond one driver iteration.
#[derive(Debug, Clone, Copy)]
pub struct PairSpace {
    size_a: usize,
    size_b: usize,
    same_cluster: bool,
    self_loops: bool,
    directed: bool,
}

impl PairSpace {
    pub fn new(
        size_a: usize,
        size_b: usize,
        same_cluster: bool,
        self_loops: bool,
        directed: bool,
    ) -> Self {
        debug_assert!(!same_cluster || size_a == size_b);
        Self {
            size_a,
            size_b,
            same_cluster,
            self_loops,
            directed,
        }
    }

    /// Candidate space between two distinct clusters. The count is
    /// orientation-agnostic: the driver visits each unordered pair once in
    /// undirected mode and each ordered pair once in directed mode.
    pub fn between(size_a: usize, size_b: usize) -> Self {
        Self::new(size_a, size_b, false, false, false)
    }

    /// Candidate space within a single cluster.
    pub fn within(size: usize, directed: bool, self_loops: bool) -> Self {
        Self::new(size, size, true, self_loops, directed)
    }

    /// Number of distinct candidate edges for this pair.
    pub fn num_possible_edges(&self) -> u64 {
        let aa = self.size_a as u64;
        let bb = self.size_b as u64;
        if !self.same_cluster {
            return aa * bb;
        }
        match (self.directed, self.self_loops) {
            (true, true) => aa * aa,
            (true, false) => aa * aa.saturating_sub(1),
            (false, true) => aa * aa.saturating_sub(1) / 2 + aa,
            (false, false) => aa * aa.saturating_sub(1) / 2,
        }
    }

    /// Map a candidate rank back to local vertex indices `(u, v)`.
    ///
    /// A rank at or beyond [`Self::num_possible_edges`] can only come from
    /// a bug in the samplers, so it is reported as an internal invariant
    /// violation rather than a user-facing error.
    pub fn pair_at(&self, rank: u64) -> Result<(usize, usize), SbmError> {
        let total = self.num_possible_edges();
        if rank >= total {
            return Err(SbmError::InternalInvariantViolation(format!(
                "rank {} outside a candidate space of {} edges",
                rank, total
            )));
        }

        // Across clusters, and within a cluster in the directed case with
        // self-loops, ranks form size_a blocks of length size_b.
        if !self.same_cluster || (self.directed && self.self_loops) {
            let bb = self.size_b as u64;
            return Ok(((rank / bb) as usize, (rank % bb) as usize));
        }

        if self.directed {
            // Blocks of length size_a - 1 with the diagonal skipped.
            let bb = (self.size_a - 1) as u64;
            let uu = (rank / bb) as usize;
            let mut vv = (rank % bb) as usize;
            if vv >= uu {
                vv += 1;
            }
            return Ok((uu, vv));
        }

        // Undirected within-cluster ranks are triangular:
        //   with self-loops    (0,0),(1,0),(1,1),(2,0),...
        //   without self-loops (1,0),(2,0),(2,1),(3,0),...
        let tt = triangular_root(rank);
        let vv = (rank - tt * (tt - 1) / 2) as usize;
        if self.self_loops {
            Ok(((tt - 1) as usize, vv))
        } else {
            Ok((tt as usize, vv))
        }
    }
}

/// Largest `t >= 1` with `t(t-1)/2 <= rank`.
///
/// The quadratic-formula root `(1 + sqrt(1 + 8 rank)) / 2` only seeds the
/// search; the result is pinned down with exact integer comparisons so
/// float rounding can never shift a rank across a triangular boundary.
fn triangular_root(rank: u64) -> u64 {
    let root = (1.0 + (1.0 + 8.0 * rank as f64).sqrt()) / 2.0;
    let mut tt = (root.floor() as u64).max(1);
    while tt * (tt - 1) / 2 > rank {
        tt -= 1;
    }
    while (tt + 1) * tt / 2 <= rank {
        tt += 1;
    }
    tt
}
