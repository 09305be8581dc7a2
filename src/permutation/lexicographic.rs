//! Lexicographic permutation enumeration.
//!
//! # Algorithm
//!
//! Narayana Pandita's next-permutation step: find the longest non-increasing
//! suffix, swap its predecessor with the rightmost element greater than it,
//! then reverse the suffix. Starting from the sorted sequence, repeated steps
//! visit every ordering exactly once in lexicographic order and report
//! `false` after the last one.
//!
//! # Complexity
//!
//! O(n) worst case per step, O(1) amortized. Enumerating everything is
//! O(n!) steps.

use std::iter::FusedIterator;

/// Returns `n!`, or `None` if it does not fit in a `u64` (`n > 20`).
///
/// # Examples
///
/// ```
/// use u_route_exact::permutation::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(10), Some(3_628_800));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Rearranges `items` into the next lexicographic permutation in place.
///
/// Returns `false`, leaving `items` untouched, when it already holds the last
/// (non-increasing) permutation.
///
/// # Examples
///
/// ```
/// use u_route_exact::permutation::next_permutation;
///
/// let mut order = [0, 2, 1];
/// assert!(next_permutation(&mut order));
/// assert_eq!(order, [1, 0, 2]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [2, 1, 0]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Lazy iterator over every ordering of `0..n` in lexicographic order.
///
/// Finite and one-shot: once exhausted it keeps returning `None`. For
/// `n = 0` it yields a single empty ordering.
///
/// # Examples
///
/// ```
/// use u_route_exact::permutation::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<usize>>,
    remaining: Option<u64>,
}

impl Permutations {
    /// Creates an iterator over the `n!` orderings of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            next: Some((0..n).collect()),
            remaining: factorial(n),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.next = Some(successor);
        }
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(r)) => (r, Some(r)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Permutations {}
