//! Edge-count and edge-position samplers.
//!
//! For one cluster pair, the number of realized edges is a single
//! binomial draw over the candidate-edge space, replacing per-pair
//! Bernoulli trials while matching their aggregate distribution. The edge
//! positions are then drawn as distinct candidate ranks, either by
//! rejection against a seen-set (sparse draws) or by a
//! without-replacement index sample over the full range (dense draws).
//! Both paths decode ranks through [`PairSpace::pair_at`], so their output
//! distributions coincide.

use crate::errors::SbmError;
use crate::pair_space::PairSpace;
use fnv::FnvHashSet;
use rand::Rng;
use rand_distr::{Binomial, Distribution};

/// Switch to the without-replacement draw once the requested sample covers
/// at least half of the candidate space; rejection redraws dominate beyond
/// that.
const DENSE_DRAW_DENOM: u64 = 2;

/// Draw how many edges to realize between one cluster pair.
///
/// * `space` - candidate-edge space of the pair
/// * `prob` - edge probability from the Q matrix, must be in `[0, 1]`
///
/// The draw is guaranteed to land in `[0, num_possible_edges]` with
/// expectation `num_possible_edges * prob`.
pub fn draw_edge_count<R: Rng>(
    rng: &mut R,
    space: &PairSpace,
    prob: f64,
) -> Result<u64, SbmError> {
    if !(0.0..=1.0).contains(&prob) {
        return Err(SbmError::InvalidParameter(format!(
            "edge probability {} outside [0, 1]",
            prob
        )));
    }
    let total = space.num_possible_edges();
    let binom = Binomial::new(total, prob).map_err(|err| {
        SbmError::InternalInvariantViolation(format!(
            "binomial({}, {}): {}",
            total, prob, err
        ))
    })?;
    Ok(binom.sample(rng))
}

/// Draw `num_edges` distinct candidate ranks and decode them to local
/// `(u, v)` pairs, uniformly over the candidate space.
///
/// Never returns a diagonal pair when the space forbids self-loops.
/// Requesting more edges than the space holds is an internal invariant
/// violation; the count sampler cannot produce such a request.
pub fn draw_edge_positions<R: Rng>(
    rng: &mut R,
    space: &PairSpace,
    num_edges: u64,
) -> Result<Vec<(usize, usize)>, SbmError> {
    let total = space.num_possible_edges();
    if num_edges > total {
        return Err(SbmError::InternalInvariantViolation(format!(
            "requested {} edges from a candidate space of {}",
            num_edges, total
        )));
    }
    if num_edges == 0 {
        return Ok(Vec::new());
    }
    if num_edges >= total / DENSE_DRAW_DENOM {
        sample_positions_dense(rng, space, num_edges)
    } else {
        sample_positions_rejection(rng, space, num_edges)
    }
}

/// Rejection strategy: redraw uniform ranks until `num_edges` distinct
/// ones have been seen.
///
/// Deduplicating on ranks rather than index pairs makes undirected
/// canonicalization automatic (mirrored pairs share one rank) and keeps
/// self-loop candidates exactly as likely as off-diagonal ones. Expected
/// work stays near `num_edges` while the sample is small relative to the
/// space; the seen-set lives only for this call.
pub fn sample_positions_rejection<R: Rng>(
    rng: &mut R,
    space: &PairSpace,
    num_edges: u64,
) -> Result<Vec<(usize, usize)>, SbmError> {
    let total = space.num_possible_edges();
    if num_edges > total {
        return Err(SbmError::InternalInvariantViolation(format!(
            "requested {} edges from a candidate space of {}",
            num_edges, total
        )));
    }
    let mut seen = FnvHashSet::default();
    let mut positions = Vec::with_capacity(num_edges as usize);
    while (positions.len() as u64) < num_edges {
        let rank = rng.random_range(0..total);
        if seen.insert(rank) {
            positions.push(space.pair_at(rank)?);
        }
    }
    Ok(positions)
}

/// Dense strategy: a without-replacement index sample over the full
/// candidate range, then closed-form decoding. No rejection overhead, so
/// a nearly saturated pair costs the same as a sparse one per edge.
pub fn sample_positions_dense<R: Rng>(
    rng: &mut R,
    space: &PairSpace,
    num_edges: u64,
) -> Result<Vec<(usize, usize)>, SbmError> {
    if num_edges > space.num_possible_edges() {
        return Err(SbmError::InternalInvariantViolation(format!(
            "requested {} edges from a candidate space of {}",
            num_edges,
            space.num_possible_edges()
        )));
    }
    let total = usize::try_from(space.num_possible_edges()).map_err(|_| {
        SbmError::InvalidParameter(
            "candidate-edge space exceeds the addressable index range".to_string(),
        )
    })?;
    rand::seq::index::sample(rng, total, num_edges as usize)
        .into_iter()
        .map(|rank| space.pair_at(rank as u64))
        .collect()
}
