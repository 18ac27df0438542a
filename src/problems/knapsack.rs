//! 0/1 knapsack objective.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ProblemError;
use crate::hc::FitnessFunction;

/// Outcome of packing a binary selection vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackEvaluation {
    /// Sum of selected item values.
    pub value: f64,
    /// Sum of selected item weights.
    pub weight: f64,
    /// Whether `weight` fits within the capacity.
    pub feasible: bool,
}

impl KnapsackEvaluation {
    /// Scalar score used as fitness.
    ///
    /// Feasible packings score their total value (never negative).
    /// Infeasible packings score minus the excess weight, so they always
    /// rank below feasible ones while still pointing back toward feasibility.
    pub fn score(&self, capacity: f64) -> f64 {
        if self.feasible {
            self.value
        } else {
            capacity - self.weight
        }
    }
}

/// A 0/1 knapsack instance.
///
/// Solutions are `Vec<u8>` selection vectors with one entry per item.
/// Maximize the [`FitnessFunction`] score.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::FitnessFunction;
/// use u_hillclimb::problems::Knapsack;
///
/// let ks = Knapsack::new(vec![10.0, 7.0, 4.0], vec![5.0, 4.0, 3.0], 8.0).unwrap();
/// assert_eq!(ks.fitness(&vec![1, 0, 1]), 14.0);
/// assert_eq!(ks.fitness(&vec![1, 1, 0]), -1.0); // 1 over capacity
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
}

impl Knapsack {
    /// Creates an instance from item values, item weights and a capacity.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::EmptyInstance`] if there are no items
    /// - [`ProblemError::DimensionMismatch`] if `values` and `weights` differ in length
    /// - [`ProblemError::InvalidParameter`] for a negative or non-finite
    ///   value, weight or capacity
    pub fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Result<Self, ProblemError> {
        if values.is_empty() {
            return Err(ProblemError::EmptyInstance);
        }
        if values.len() != weights.len() {
            return Err(ProblemError::DimensionMismatch {
                expected: values.len(),
                actual: weights.len(),
            });
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(ProblemError::InvalidParameter(format!(
                "capacity must be finite and non-negative, got {capacity}"
            )));
        }
        if let Some((i, v)) = values
            .iter()
            .chain(&weights)
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            let (kind, item) = if i < values.len() {
                ("value", i)
            } else {
                ("weight", i - values.len())
            };
            return Err(ProblemError::InvalidParameter(format!(
                "{kind} of item {item} must be finite and non-negative, got {v}"
            )));
        }

        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Generates a reproducible random instance with `dim` items.
    ///
    /// Values are drawn from `10..=100`, weights from `5..=40`, and the
    /// capacity is half the total weight.
    pub fn generate(dim: usize, seed: u64) -> Result<Self, ProblemError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<f64> = (0..dim).map(|_| rng.random_range(10..=100) as f64).collect();
        let weights: Vec<f64> = (0..dim).map(|_| rng.random_range(5..=40) as f64).collect();
        let capacity = (weights.iter().sum::<f64>() / 2.0).floor();
        Self::new(values, weights, capacity)
    }

    /// Number of items.
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Item values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Item weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Draws a selection vector where each item is picked with
    /// probability `density`.
    ///
    /// `density` is clamped to `[0, 1]`; a non-finite density selects
    /// nothing.
    pub fn random_solution<R: Rng>(&self, density: f64, rng: &mut R) -> Vec<u8> {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (0..self.dim())
            .map(|_| u8::from(rng.random_bool(density)))
            .collect()
    }

    /// Validates and packs `solution`.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::DimensionMismatch`] if `solution` has the wrong length
    /// - [`ProblemError::NonBinaryGene`] if an entry is not 0 or 1
    pub fn evaluate(&self, solution: &[u8]) -> Result<KnapsackEvaluation, ProblemError> {
        if solution.len() != self.dim() {
            return Err(ProblemError::DimensionMismatch {
                expected: self.dim(),
                actual: solution.len(),
            });
        }
        if let Some((position, &value)) = solution.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(ProblemError::NonBinaryGene { position, value });
        }
        Ok(self.pack(solution))
    }

    fn pack(&self, solution: &[u8]) -> KnapsackEvaluation {
        let (value, weight) = solution
            .iter()
            .zip(self.values.iter().zip(&self.weights))
            .filter(|&(&b, _)| b != 0)
            .fold((0.0, 0.0), |(v, w), (_, (&iv, &iw))| (v + iv, w + iw));
        KnapsackEvaluation {
            value,
            weight,
            feasible: weight <= self.capacity,
        }
    }
}

/// Scores without validation: extra positions are ignored and any non-zero
/// entry counts as selected. Use [`Knapsack::evaluate`] to check a solution.
impl FitnessFunction<Vec<u8>> for Knapsack {
    fn fitness(&self, solution: &Vec<u8>) -> f64 {
        self.pack(solution).score(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hc::{HcConfig, HillClimbing, StochasticHillClimbing};
    use crate::neighbor::BitFlip;

    fn small() -> Knapsack {
        Knapsack::new(vec![10.0, 7.0, 4.0, 3.0], vec![5.0, 4.0, 3.0, 2.0], 9.0).unwrap()
    }

    #[test]
    fn test_knapsack_new_rejects_mismatch() {
        let err = Knapsack::new(vec![1.0, 2.0], vec![1.0], 3.0).unwrap_err();
        assert_eq!(
            err,
            ProblemError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_knapsack_new_rejects_empty() {
        assert_eq!(
            Knapsack::new(vec![], vec![], 1.0).unwrap_err(),
            ProblemError::EmptyInstance
        );
    }

    #[test]
    fn test_knapsack_new_rejects_negative_weight() {
        let err = Knapsack::new(vec![1.0, 2.0], vec![1.0, -2.0], 3.0).unwrap_err();
        assert!(matches!(
            err,
            ProblemError::InvalidParameter(msg) if msg.contains("weight of item 1")
        ));
    }

    #[test]
    fn test_knapsack_evaluate() {
        let ks = small();
        let eval = ks.evaluate(&[1, 1, 0, 0]).unwrap();
        assert_eq!(eval.value, 17.0);
        assert_eq!(eval.weight, 9.0);
        assert!(eval.feasible);
        assert_eq!(eval.score(ks.capacity()), 17.0);

        let eval = ks.evaluate(&[1, 1, 1, 0]).unwrap();
        assert!(!eval.feasible);
        assert_eq!(eval.score(ks.capacity()), -3.0);
    }

    #[test]
    fn test_knapsack_evaluate_rejects_bad_solutions() {
        let ks = small();
        assert!(matches!(
            ks.evaluate(&[1, 0]),
            Err(ProblemError::DimensionMismatch { expected: 4, actual: 2 })
        ));
        assert_eq!(
            ks.evaluate(&[0, 2, 0, 0]).unwrap_err(),
            ProblemError::NonBinaryGene {
                position: 1,
                value: 2
            }
        );
    }

    #[test]
    fn test_knapsack_generate_reproducible() {
        let a = Knapsack::generate(20, 7).unwrap();
        let b = Knapsack::generate(20, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dim(), 20);
        assert!(a.capacity() > 0.0);
        assert!(Knapsack::generate(0, 7).is_err());
    }

    #[test]
    fn test_knapsack_random_solution_density() {
        let ks = Knapsack::generate(50, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(ks.random_solution(0.0, &mut rng).iter().all(|&b| b == 0));
        assert!(ks.random_solution(1.0, &mut rng).iter().all(|&b| b == 1));
        assert_eq!(ks.random_solution(0.5, &mut rng).len(), 50);
    }

    #[test]
    fn test_knapsack_random_solution_out_of_range_density() {
        let ks = Knapsack::generate(30, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        assert!(ks.random_solution(f64::NAN, &mut rng).iter().all(|&b| b == 0));
        assert!(ks.random_solution(f64::INFINITY, &mut rng).iter().all(|&b| b == 0));
        assert!(ks.random_solution(-0.5, &mut rng).iter().all(|&b| b == 0));
        assert!(ks.random_solution(3.0, &mut rng).iter().all(|&b| b == 1));
    }

    #[test]
    fn test_hill_climbing_reaches_feasible_packing() {
        let ks = Knapsack::generate(20, 11).unwrap();
        let config = HcConfig::default()
            .with_max_iterations(200)
            .with_neighbors_per_step(20)
            .with_seed(42);
        let mut hc = HillClimbing::new(ks.clone(), BitFlip, config);

        let result = hc.run(&vec![1u8; 20]);

        let eval = ks.evaluate(&result.solution).unwrap();
        assert!(eval.feasible, "expected a feasible packing, got weight {}", eval.weight);
        assert_eq!(result.fitness, eval.value);
        for window in result.history.windows(2) {
            assert!(window[1] > window[0]);
        }
    }

    #[test]
    fn test_stochastic_hill_climbing_history_increasing() {
        let ks = Knapsack::generate(20, 5).unwrap();
        let config = HcConfig::default().with_max_iterations(200).with_seed(9);
        let mut shc = StochasticHillClimbing::new(ks.clone(), BitFlip, config);
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..10 {
            let initial = ks.random_solution(0.5, &mut rng);
            let result = shc.run(&initial);
            for window in result.history.windows(2) {
                assert!(
                    window[1] > window[0],
                    "history should strictly increase: {} -> {}",
                    window[1],
                    window[0]
                );
            }
        }
    }
}
