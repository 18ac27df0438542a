//! Neighborhood generators.
//!
//! A generator turns one parent solution into a bounded, transient set of
//! candidate solutions, each reachable by a single elementary move. The
//! search engines in [`crate::hc`] are generic over [`NeighborGenerator`],
//! so any finite-neighborhood problem can plug in its own move operator.
//!
//! Two generators ship with the crate:
//!
//! - [`BitFlip`]: single-bit-flip moves over binary vectors (knapsack-style
//!   problems).
//! - [`Swap`]: two-position exchange moves over permutations (routing
//!   problems).

mod bit_flip;
mod swap;
mod types;

pub use bit_flip::{bit_flip_neighbors, BitFlip, DEFAULT_NEIGHBOR_COUNT};
pub use swap::Swap;
pub use types::{FnGenerator, NeighborGenerator};
