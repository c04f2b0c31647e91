// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use buddy_pairing::history::HistoryIndex;
use buddy_pairing::model::{EmailKey, HistoryEntry, HistoryMap, PairingHistory, PairingList, Participant};
use std::collections::HashSet;

pub fn email(i: usize) -> String {
    format!("participant{i}@email.com")
}

/// Participants `1..=n`, all members of `session`.
pub fn participants(n: usize, session: &str) -> Vec<Participant> {
    (1..=n)
        .map(|i| Participant::new(&format!("Participant {i}"), &email(i)).with_session(session))
        .collect()
}

/// A history in which each `(a, b)` is logged on `a`'s side only.
pub fn one_sided_history(pairs: &[(usize, usize)], session: &str) -> HistoryMap {
    let mut map = HistoryMap::new();
    for &(a, b) in pairs {
        map.entry(email(a))
            .or_insert_with(|| PairingHistory::new(&email(a)))
            .history
            .push(HistoryEntry::new(&email(b), session));
    }
    map
}

/// A history in which each `(a, b)` is logged on both sides.
pub fn history(pairs: &[(usize, usize)], session: &str) -> HistoryMap {
    let both: Vec<_> = pairs.iter().flat_map(|&(a, b)| [(a, b), (b, a)]).collect();
    one_sided_history(&both, session)
}

/// Assert that `list` pairs every member of `members` exactly once and
/// repeats nothing from `histories`.
pub fn assert_valid_pairing(list: &PairingList, members: &[Participant], histories: &HistoryMap) {
    let index = HistoryIndex::from_histories(histories);
    let mut used = HashSet::new();
    for pair in &list.pairings {
        let a = EmailKey::new(&pair.participant1_email);
        let b = EmailKey::new(&pair.participant2_email);
        assert_ne!(a, b, "participant paired with themself");
        assert!(used.insert(a.clone()), "{a} paired twice");
        assert!(used.insert(b.clone()), "{b} paired twice");
        assert!(!index.was_paired_with(&a, &b), "{a} and {b} met before");
    }
    let expected: HashSet<_> = members.iter().map(Participant::key).collect();
    assert_eq!(used, expected);
}

/// The pairs of `list` as sorted email pairs, sorted, for set comparison.
pub fn normalized(list: &PairingList) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = list
        .pairings
        .iter()
        .map(|p| {
            let a = p.participant1_email.to_lowercase();
            let b = p.participant2_email.to_lowercase();
            if a < b { (a, b) } else { (b, a) }
        })
        .collect();
    pairs.sort();
    pairs
}

/// Brute-force check that `0..n` has a perfect matching under `allowed`.
pub fn has_perfect_matching(n: usize, allowed: &dyn Fn(usize, usize) -> bool) -> bool {
    fn solve(free: &mut Vec<bool>, allowed: &dyn Fn(usize, usize) -> bool) -> bool {
        let Some(first) = free.iter().position(|&f| f) else {
            return true;
        };
        free[first] = false;
        for other in first + 1..free.len() {
            if free[other] && allowed(first, other) {
                free[other] = false;
                if solve(free, allowed) {
                    return true;
                }
                free[other] = true;
            }
        }
        free[first] = true;
        false
    }
    solve(&mut vec![true; n], allowed)
}
