//! Core trait for neighborhood generation.

use rand::{Rng, RngCore};

/// Produces candidate neighbors of a solution.
///
/// # Contract
///
/// - At most `count` neighbors are returned. Returning fewer is allowed
///   (e.g. when the neighborhood is smaller than `count`).
/// - Every neighbor is a fresh value. `solution` must not be modified.
/// - The order of the returned vector is significant: steepest ascent breaks
///   fitness ties in favour of the earliest neighbor.
///
/// # Examples
///
/// ```
/// use u_hillclimb::neighbor::{BitFlip, NeighborGenerator};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let parent = vec![0u8, 1, 0, 1];
/// let neighbors = BitFlip.neighbors(&parent, 3, &mut rng);
/// assert_eq!(neighbors.len(), 3);
/// assert_eq!(parent, vec![0, 1, 0, 1]);
/// ```
pub trait NeighborGenerator<S> {
    /// Generates up to `count` neighbors of `solution`.
    fn neighbors<R: Rng>(&self, solution: &S, count: usize, rng: &mut R) -> Vec<S>;
}

/// Adapts a closure into a [`NeighborGenerator`].
///
/// The closure receives the random source as a trait object, which keeps
/// the engine's generic `Rng` parameter out of the closure type.
///
/// ```
/// use u_hillclimb::neighbor::{FnGenerator, NeighborGenerator};
/// use rand::SeedableRng;
///
/// let increment = FnGenerator(|x: &i64, count: usize, _rng: &mut dyn rand::RngCore| {
///     (1..=count as i64).map(|d| x + d).collect::<Vec<_>>()
/// });
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// assert_eq!(increment.neighbors(&10, 2, &mut rng), vec![11, 12]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnGenerator<F>(pub F);

impl<S, F> NeighborGenerator<S> for FnGenerator<F>
where
    F: Fn(&S, usize, &mut dyn RngCore) -> Vec<S>,
{
    fn neighbors<R: Rng>(&self, solution: &S, count: usize, rng: &mut R) -> Vec<S> {
        (self.0)(solution, count, rng)
    }
}
