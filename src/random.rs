// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place Fisher–Yates shuffle over an injected random source.

use rand::Rng;

/// Uniformly permute `items` in place.
///
/// Walks from the last element down, swapping element `n` with a uniformly
/// chosen element in `0..=n`. The random source is passed in so a seeded
/// generator reproduces the same permutation.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut n = items.len();
    while n > 1 {
        n -= 1;
        let k = rng.gen_range(0..=n);
        items.swap(k, n);
    }
}
