//! Injectable randomness for the generator
//!
//! Any `rand` generator works as a source; tests seed one to make
//! generation replayable.

use rand::Rng;

pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Fisher-Yates shuffle
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Uniformly chosen element, `None` for an empty slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.next_index(items.len())])
        }
    }

    /// Fair coin
    fn flip(&mut self) -> bool {
        self.next_index(2) == 1
    }
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}
