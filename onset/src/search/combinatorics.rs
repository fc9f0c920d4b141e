//! Combination and permutation enumeration

use std::cmp::Ordering;

/// k-combinations of `0..n` in lexicographic order
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        indices: (0..k).collect(),
        started: false,
        done: k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost index that can still move right
        let pivot = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i);
        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                Some(self.indices.clone())
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Rearrange `items` into the next lexicographic permutation under `cmp`.
///
/// Returns false (leaving the slice sorted ascending) once the last
/// permutation has been passed. Starting from a sorted slice, equal items are
/// never swapped with each other, so each distinct arrangement appears once.
pub fn next_permutation_by<T, F>(items: &mut [T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return false;
    }

    let mut i = len - 1;
    while i > 0 && cmp(&items[i - 1], &items[i]) != Ordering::Less {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }

    let mut j = len - 1;
    while cmp(&items[j], &items[i - 1]) != Ordering::Greater {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
