//! Single-bit-flip neighborhood for binary vectors.

use rand::seq::index;
use rand::Rng;

use super::types::NeighborGenerator;

/// Number of neighbors drawn per step when the caller does not choose one.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 10;

/// Single-bit-flip neighborhood over `Vec<u8>` binary vectors.
///
/// Each neighbor is a copy of the parent with exactly one position
/// complemented (`0 <-> 1`). Positions are drawn uniformly without
/// replacement, so one call never flips the same position twice and
/// returns `min(count, len)` neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitFlip;

impl NeighborGenerator<Vec<u8>> for BitFlip {
    fn neighbors<R: Rng>(&self, solution: &Vec<u8>, count: usize, rng: &mut R) -> Vec<Vec<u8>> {
        bit_flip_neighbors(solution, count, rng)
    }
}

/// Generates up to `count` distinct single-bit-flip neighbors of `solution`.
///
/// Positions come from a partial Fisher–Yates draw over `0..len`, which
/// terminates in `O(count)` draws even when `count` approaches `len`.
/// An empty `solution` yields an empty neighborhood.
///
/// # Examples
///
/// ```
/// use u_hillclimb::neighbor::bit_flip_neighbors;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let neighbors = bit_flip_neighbors(&[1, 1, 0], 10, &mut rng);
/// assert_eq!(neighbors.len(), 3);
/// for n in &neighbors {
///     let diff = n.iter().zip([1u8, 1, 0]).filter(|(a, b)| **a != *b).count();
///     assert_eq!(diff, 1);
/// }
/// ```
pub fn bit_flip_neighbors<R: Rng + ?Sized>(
    solution: &[u8],
    count: usize,
    rng: &mut R,
) -> Vec<Vec<u8>> {
    let amount = count.min(solution.len());
    if amount == 0 {
        return Vec::new();
    }

    index::sample(rng, solution.len(), amount)
        .into_iter()
        .map(|pos| {
            let mut neighbor = solution.to_vec();
            neighbor[pos] = complement(neighbor[pos]);
            neighbor
        })
        .collect()
}

#[inline]
fn complement(bit: u8) -> u8 {
    if bit == 0 {
        1
    } else {
        0
    }
}
