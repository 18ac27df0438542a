//! Hill climbing configuration.

use crate::neighbor::DEFAULT_NEIGHBOR_COUNT;

/// Optimization direction.
///
/// Improvement is always strict: a candidate with fitness equal to the
/// incumbent is never an improvement in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher fitness is better.
    #[default]
    Maximize,
    /// Lower fitness is better.
    Minimize,
}

impl Direction {
    /// Builds a direction from a `maximize` flag.
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize {
            Direction::Maximize
        } else {
            Direction::Minimize
        }
    }

    /// Returns `true` if `candidate` strictly improves on `incumbent`.
    ///
    /// ```
    /// use u_hillclimb::hc::Direction;
    ///
    /// assert!(Direction::Maximize.improves(2.0, 1.0));
    /// assert!(!Direction::Maximize.improves(1.0, 1.0));
    /// assert!(Direction::Minimize.improves(1.0, 2.0));
    /// ```
    #[inline]
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Maximize => candidate > incumbent,
            Direction::Minimize => candidate < incumbent,
        }
    }
}

/// Configuration parameters for hill climbing.
///
/// Shared by [`HillClimbing`](super::HillClimbing) and
/// [`StochasticHillClimbing`](super::StochasticHillClimbing).
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::{Direction, HcConfig};
///
/// let config = HcConfig::default()
///     .with_max_iterations(200)
///     .with_neighbors_per_step(10)
///     .with_direction(Direction::Minimize)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of iterations. `0` returns the initial state unchanged.
    pub max_iterations: usize,
    /// Neighbors requested from the generator at each iteration.
    pub neighbors_per_step: usize,
    /// Whether fitness is maximized or minimized.
    pub direction: Direction,
    /// Random seed (None for an entropy-seeded source).
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            neighbors_per_step: DEFAULT_NEIGHBOR_COUNT,
            direction: Direction::Maximize,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets how many neighbors are sampled per iteration.
    pub fn with_neighbors_per_step(mut self, n: usize) -> Self {
        self.neighbors_per_step = n;
        self
    }

    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the optimization direction from a `maximize` flag.
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.direction = Direction::from_maximize(maximize);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hc_config_defaults() {
        let config = HcConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.neighbors_per_step, 10);
        assert_eq!(config.direction, Direction::Maximize);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_hc_config_builder() {
        let config = HcConfig::default()
            .with_max_iterations(50)
            .with_neighbors_per_step(4)
            .with_maximize(false)
            .with_seed(7);

        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.neighbors_per_step, 4);
        assert_eq!(config.direction, Direction::Minimize);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_direction_strict() {
        assert!(Direction::Maximize.improves(1.5, 1.0));
        assert!(!Direction::Maximize.improves(1.0, 1.5));
        assert!(!Direction::Maximize.improves(3.0, 3.0));
        assert!(Direction::Minimize.improves(-2.0, 0.0));
        assert!(!Direction::Minimize.improves(0.0, 0.0));
    }
}
