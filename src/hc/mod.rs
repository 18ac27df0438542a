//! Hill Climbing (HC).
//!
//! Single-solution local search that only ever accepts strictly improving
//! moves. Two successor rules are provided:
//!
//! - [`HillClimbing`]: steepest ascent, moves to the best improving neighbor.
//! - [`StochasticHillClimbing`]: moves to a uniformly random improving
//!   neighbor.
//!
//! Both stop at the first iteration whose sampled neighborhood holds no
//! improvement, or at the iteration cap. The evaluator is supplied as a
//! [`FitnessFunction`] and the move operator as a
//! [`NeighborGenerator`](crate::neighbor::NeighborGenerator).
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1.1
//! - Talbi (2009), *Metaheuristics: From Design to Implementation*, §2.3

mod config;
mod runner;
mod types;

pub use config::{Direction, HcConfig};
pub use runner::{HcResult, HillClimbing, StochasticHillClimbing, Termination};
pub use types::FitnessFunction;
