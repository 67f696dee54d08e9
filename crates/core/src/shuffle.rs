//! Shuffle engine - uniform random board layouts
//!
//! Implements the Fisher-Yates shuffle: walk from the last index down to 1,
//! swapping each element with a uniformly chosen element at or before it.
//! Every one of the n! orderings is equally likely.
//!
//! The thread-local generator is used by default. Callers that need
//! reproducible layouts (tests, benchmarks) pass their own `Rng`.

use rand::Rng;

use crate::board::BoardLayout;
use crate::types::{BOARD_SIZE, FIRST_NUMBER};

/// Shuffle a copy of `items` using the thread-local generator.
///
/// The input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Shuffle a copy of `items` using the given generator.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Numbers 0..99 in ascending order.
pub fn ordered_numbers() -> Vec<u8> {
    (FIRST_NUMBER..BOARD_SIZE).collect()
}

/// A freshly shuffled board.
pub fn create_board() -> BoardLayout {
    create_board_with(&mut rand::thread_rng())
}

pub fn create_board_with<R: Rng + ?Sized>(rng: &mut R) -> BoardLayout {
    BoardLayout::from_numbers(shuffle_with(&ordered_numbers(), rng))
}
