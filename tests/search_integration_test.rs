// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the matching search.
//!
//! These tests drive `MatchingSearch` over pools built from real rosters and
//! validate that it:
//! - Finds a matching whenever a brute-force check says one exists
//! - Reports exhaustion only when none exists
//! - Finds a matching under any participant order
//! - Keeps the claim trail consistent with the decision stack

mod common;

use buddy_pairing::engine::{Counters, MatchingSearch, SearchStatus};
use buddy_pairing::history::HistoryIndex;
use buddy_pairing::pools::CandidatePools;
use buddy_pairing::random::shuffle;
use buddy_pairing::roster::SessionRoster;
use buddy_pairing::SearchFailure;
use common::{has_perfect_matching, history, participants};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_pools(rng: &mut StdRng, n: usize, density: f64) -> Option<CandidatePools> {
    let people = participants(n, "s");
    let pairs: Vec<_> = (1..=n)
        .flat_map(|a| (a + 1..=n).map(move |b| (a, b)))
        .filter(|_| rng.gen_bool(density))
        .collect();
    let roster = SessionRoster::select("s", &people).unwrap();
    let index = HistoryIndex::from_histories(&history(&pairs, "old"));
    CandidatePools::build(&roster, &index).ok()
}

fn allowed(pools: &CandidatePools) -> impl Fn(usize, usize) -> bool + '_ {
    move |a, b| pools.pool(a).contains(&b)
}

#[test]
fn test_search_agrees_with_brute_force() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut feasible = 0;
    let mut infeasible = 0;
    for _ in 0..300 {
        let Some(mut pools) = random_pools(&mut rng, 8, 0.6) else {
            continue;
        };
        pools.shuffle_each(&mut rng);
        let expected = has_perfect_matching(8, &allowed(&pools));

        let mut search = MatchingSearch::new(&pools);
        match search.run(None) {
            Ok(()) => {
                assert!(expected, "search found a matching brute force missed");
                feasible += 1;
                let mut seen = vec![false; 8];
                for (a, b) in search.pairs() {
                    assert!(pools.pool(a).contains(&b));
                    assert!(!seen[a] && !seen[b]);
                    seen[a] = true;
                    seen[b] = true;
                }
                assert!(seen.iter().all(|&s| s));
            }
            Err(failure) => {
                assert_eq!(failure, SearchFailure::Exhausted);
                assert!(!expected, "search gave up on a feasible instance");
                infeasible += 1;
            }
        }
    }
    // The density is chosen so both outcomes occur.
    assert!(feasible > 0 && infeasible > 0);
}

#[test]
fn test_any_order_finds_a_matching() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let Some(pools) = random_pools(&mut rng, 10, 0.4) else {
            continue;
        };
        let feasible = MatchingSearch::new(&pools).run(None).is_ok();

        let mut order: Vec<usize> = (0..10).collect();
        shuffle(&mut order, &mut rng);
        let mut search = MatchingSearch::with_order(&pools, order);
        assert_eq!(search.run(None).is_ok(), feasible);
    }
}

#[test]
fn test_stack_and_claims_stay_in_step() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let Some(pools) = random_pools(&mut rng, 10, 0.5) else {
            continue;
        };
        let mut search = MatchingSearch::new(&pools);
        loop {
            let status = search.step();
            assert_eq!(search.claims().len(), 2 * search.decisions().len());
            let mut claimed: Vec<usize> = search.pairs().flat_map(|(a, b)| [a, b]).collect();
            claimed.sort_unstable();
            let mut on_trail = search.claims().claimed().to_vec();
            on_trail.sort_unstable();
            assert_eq!(claimed, on_trail);
            if status != SearchStatus::Running {
                break;
            }
        }
        let stats = search.statistics();
        assert_eq!(
            stats.get(Counters::Commits) - stats.get(Counters::Backtracks),
            search.decisions().len() as u64
        );
    }
}
