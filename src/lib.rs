//! Hill climbing local search over pluggable neighborhoods.
//!
//! Provides the building blocks for single-solution, improvement-only local
//! search:
//!
//! - **Neighborhoods**: [`neighbor::BitFlip`] samples distinct single-bit-flip
//!   moves over binary vectors; [`neighbor::Swap`] samples distinct pairwise
//!   exchanges over permutations. Any [`neighbor::NeighborGenerator`] can be
//!   plugged in.
//! - **Hill Climbing (HC)**: [`hc::HillClimbing`] (steepest ascent) and
//!   [`hc::StochasticHillClimbing`] (random improving move), both stopping at
//!   a local optimum or an iteration cap and recording a fitness history.
//! - **Problems**: a 0/1 [`problems::Knapsack`] objective and the 13-city
//!   US [`problems::tsp`] instance.
//!
//! # Example
//!
//! ```
//! use u_hillclimb::hc::{HcConfig, HillClimbing};
//! use u_hillclimb::neighbor::BitFlip;
//! use u_hillclimb::problems::Knapsack;
//!
//! let knapsack = Knapsack::generate(20, 42).unwrap();
//! let config = HcConfig::default().with_max_iterations(200).with_seed(1);
//! let mut hc = HillClimbing::new(knapsack, BitFlip, config);
//!
//! let result = hc.run(&vec![0u8; 20]);
//! assert!(result.fitness > 0.0);
//! assert_eq!(result.history.len(), result.improvements + 1);
//! ```

pub mod error;
pub mod hc;
pub mod neighbor;
pub mod problems;

pub use error::ProblemError;
