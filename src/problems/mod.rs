//! Ready-made objectives.
//!
//! - [`Knapsack`]: 0/1 knapsack over binary vectors, for use with
//!   [`BitFlip`](crate::neighbor::BitFlip).
//! - [`tsp`]: the classic 13-city US instance, for use with
//!   [`Swap`](crate::neighbor::Swap).

mod knapsack;
pub mod tsp;

pub use knapsack::{Knapsack, KnapsackEvaluation};
