//! Recursive, fully materialized permutation construction.
//!
//! For each position pick one remaining element as the head, recurse on the
//! rest, and prepend the head to every sub-permutation. For distinct items
//! given in ascending order, the output order matches
//! [`Permutations`](super::Permutations).
//!
//! # Complexity
//!
//! O(n!·n) time and memory. Only practical for small `n`.

/// Returns every ordering of `items`.
///
/// An empty input yields a single empty ordering.
///
/// # Examples
///
/// ```
/// use u_route_exact::permutation::permutations_of;
///
/// let all = permutations_of(&['a', 'b', 'c']);
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[1], vec!['a', 'c', 'b']);
/// ```
pub fn permutations_of<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }

    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for tail in permutations_of(&rest) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(head.clone());
            perm.extend(tail);
            out.push(perm);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{factorial, Permutations};

    #[test]
    fn test_empty() {
        let all = permutations_of::<u8>(&[]);
        assert_eq!(all, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_single() {
        assert_eq!(permutations_of(&["only"]), vec![vec!["only"]]);
    }

    #[test]
    fn test_count() {
        for n in 0..=6 {
            let items: Vec<usize> = (0..n).collect();
            let expected = factorial(n).expect("small n") as usize;
            assert_eq!(permutations_of(&items).len(), expected);
        }
    }

    #[test]
    fn test_matches_lexicographic_order() {
        let items: Vec<usize> = (0..5).collect();
        let recursive = permutations_of(&items);
        let lazy: Vec<Vec<usize>> = Permutations::new(5).collect();
        assert_eq!(recursive, lazy);
    }
}
