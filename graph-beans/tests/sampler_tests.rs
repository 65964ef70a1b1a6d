use approx::assert_relative_eq;
use graph_beans::edge_sampler::*;
use graph_beans::errors::SbmError;
use graph_beans::pair_space::PairSpace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn binomial_count_respects_endpoints() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(1);
    let space = PairSpace::between(10, 10);
    assert_eq!(draw_edge_count(&mut rng, &space, 0.0)?, 0);
    assert_eq!(draw_edge_count(&mut rng, &space, 1.0)?, 100);
    Ok(())
}

#[test]
fn count_probability_is_validated() {
    let mut rng = StdRng::seed_from_u64(1);
    let space = PairSpace::between(10, 10);
    for bad in [1.5, -0.1, f64::NAN] {
        let err = draw_edge_count(&mut rng, &space, bad).unwrap_err();
        assert!(matches!(err, SbmError::InvalidParameter(_)));
    }
}

#[test]
fn count_stays_within_the_candidate_space() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let space = PairSpace::within(12, false, false);
    let total = space.num_possible_edges();
    for _ in 0..200 {
        assert!(draw_edge_count(&mut rng, &space, 0.3)? <= total);
    }
    Ok(())
}

#[test]
fn count_mean_matches_its_expectation() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let space = PairSpace::between(40, 25);
    let rounds = 2000;
    let mut total = 0;
    for _ in 0..rounds {
        total += draw_edge_count(&mut rng, &space, 0.2)?;
    }
    let mean = total as f64 / rounds as f64;
    // E = 1000 * 0.2; the sample mean has sd ~0.3 over 2000 rounds
    assert_relative_eq!(mean, 200.0, max_relative = 0.05);
    Ok(())
}

#[test]
fn positions_are_distinct_and_in_range() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let space = PairSpace::between(7, 4);
    let positions = draw_edge_positions(&mut rng, &space, 10)?;
    assert_eq!(positions.len(), 10);
    let distinct: HashSet<_> = positions.iter().copied().collect();
    assert_eq!(distinct.len(), 10);
    for &(uu, vv) in positions.iter() {
        assert!(uu < 7 && vv < 4);
    }
    Ok(())
}

#[test]
fn forbidden_diagonal_is_never_drawn() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(5);
    for directed in [false, true] {
        let space = PairSpace::within(6, directed, false);
        let total = space.num_possible_edges();
        for num_edges in [1, total / 2, total] {
            let positions = draw_edge_positions(&mut rng, &space, num_edges)?;
            assert_eq!(positions.len() as u64, num_edges);
            assert!(positions.iter().all(|&(uu, vv)| uu != vv));
        }
    }
    Ok(())
}

#[test]
fn exhaustive_draw_covers_the_candidate_space() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(9);
    for (directed, self_loops) in [(false, false), (false, true), (true, false), (true, true)] {
        let space = PairSpace::within(5, directed, self_loops);
        let total = space.num_possible_edges();
        let drawn: HashSet<_> = draw_edge_positions(&mut rng, &space, total)?
            .into_iter()
            .collect();
        let full: HashSet<_> = (0..total).map(|rank| space.pair_at(rank).unwrap()).collect();
        assert_eq!(drawn, full);
    }
    Ok(())
}

#[test]
fn both_strategies_draw_from_the_same_candidate_space() -> anyhow::Result<()> {
    let space = PairSpace::within(8, false, true);
    let total = space.num_possible_edges();
    let mut rng = StdRng::seed_from_u64(13);
    let by_rejection: HashSet<_> = sample_positions_rejection(&mut rng, &space, total)?
        .into_iter()
        .collect();
    let by_dense: HashSet<_> = sample_positions_dense(&mut rng, &space, total)?
        .into_iter()
        .collect();
    assert_eq!(by_rejection, by_dense);
    Ok(())
}

#[test]
fn oversized_request_is_an_internal_error() {
    let mut rng = StdRng::seed_from_u64(17);
    let space = PairSpace::within(4, false, false);
    let err = draw_edge_positions(&mut rng, &space, 7).unwrap_err();
    assert!(matches!(err, SbmError::InternalInvariantViolation(_)));
}

#[test]
fn seeded_draws_are_reproducible() -> anyhow::Result<()> {
    let space = PairSpace::between(20, 20);
    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);
    assert_eq!(
        draw_edge_positions(&mut rng_a, &space, 25)?,
        draw_edge_positions(&mut rng_b, &space, 25)?
    );
    Ok(())
}
