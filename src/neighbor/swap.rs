//! Pairwise-exchange neighborhood for permutations.

use rand::seq::index;
use rand::Rng;

use super::types::NeighborGenerator;

/// Swap neighborhood over sequences (typically permutations).
///
/// Each neighbor exchanges the elements at two distinct positions. Position
/// pairs are drawn without replacement from all `n(n-1)/2` unordered
/// pairs, so a call returns at most `min(count, n(n-1)/2)` neighbors and
/// never repeats a move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swap;

impl<T: Clone> NeighborGenerator<Vec<T>> for Swap {
    fn neighbors<R: Rng>(&self, solution: &Vec<T>, count: usize, rng: &mut R) -> Vec<Vec<T>> {
        let n = solution.len();
        let pairs = n * n.saturating_sub(1) / 2;
        let amount = count.min(pairs);
        if amount == 0 {
            return Vec::new();
        }

        index::sample(rng, pairs, amount)
            .into_iter()
            .map(|k| {
                let (i, j) = decode_pair(k, n);
                let mut neighbor = solution.clone();
                neighbor.swap(i, j);
                neighbor
            })
            .collect()
    }
}

/// Maps a pair index in `0..n(n-1)/2` to `(i, j)` with `i < j`.
fn decode_pair(mut k: usize, n: usize) -> (usize, usize) {
    let mut i = 0;
    let mut row = n - 1;
    while k >= row {
        k -= row;
        i += 1;
        row -= 1;
    }
    (i, i + 1 + k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_decode_pair_covers_all_pairs() {
        let n = 6;
        let pairs: HashSet<(usize, usize)> =
            (0..n * (n - 1) / 2).map(|k| decode_pair(k, n)).collect();
        assert_eq!(pairs.len(), 15);
        assert!(pairs.iter().all(|&(i, j)| i < j && j < n));
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent: Vec<usize> = (1..=12).collect();
        let neighbors = Swap.neighbors(&parent, 10, &mut rng);

        assert_eq!(neighbors.len(), 10);
        for n in &neighbors {
            let mut sorted = n.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, parent);
            let moved = n.iter().zip(&parent).filter(|(a, b)| a != b).count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_swap_distinct_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        let parent = vec![0usize, 1, 2, 3];
        let neighbors = Swap.neighbors(&parent, 100, &mut rng);

        assert_eq!(neighbors.len(), 6);
        let unique: HashSet<Vec<usize>> = neighbors.into_iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_swap_too_short() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Swap.neighbors(&vec![5usize], 10, &mut rng).is_empty());
        assert!(Swap.neighbors(&Vec::<usize>::new(), 10, &mut rng).is_empty());
    }
}
