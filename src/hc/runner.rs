//! Hill climbing execution engines.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial solution and record it as the first history entry
//! 2. At each iteration:
//!    a. Sample a neighborhood of the current solution
//!    b. Score every neighbor and keep the strictly improving ones
//!    c. Pick a successor: the best improver (steepest ascent) or a
//!       uniformly random improver (stochastic ascent)
//!    d. Move to the successor and append its fitness to the history
//! 3. Terminate when no neighbor improves (local optimum) or after
//!    `max_iterations`
//!
//! # Reference
//!
//! Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//! Approach*, 3rd ed., §4.1.1 "Hill-climbing search".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::{Direction, HcConfig};
use super::types::FitnessFunction;
use crate::neighbor::NeighborGenerator;

/// Why a hill climbing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// No sampled neighbor strictly improved on the current solution.
    LocalOptimum,
    /// The iteration cap was reached.
    MaxIterations,
}

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult<S> {
    /// Final current solution.
    pub solution: S,
    /// Fitness of `solution`.
    pub fitness: f64,
    /// Initial fitness followed by the fitness of every accepted move.
    pub history: Vec<f64>,
    /// Iteration counter at exit, including a final non-improving scan.
    pub iterations: usize,
    /// Number of accepted moves (`history.len() - 1`).
    pub improvements: usize,
    /// Total fitness evaluations performed.
    pub evaluations: usize,
    /// Why the run stopped.
    pub termination: Termination,
}

impl<S> HcResult<S> {
    /// Splits the result into `(solution, fitness, history)`.
    pub fn into_parts(self) -> (S, f64, Vec<f64>) {
        (self.solution, self.fitness, self.history)
    }

    /// Returns `true` if the run stopped at a local optimum.
    pub fn converged(&self) -> bool {
        self.termination == Termination::LocalOptimum
    }
}

/// Successor selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ascent {
    Steepest,
    Stochastic,
}

impl Ascent {
    fn name(self) -> &'static str {
        match self {
            Ascent::Steepest => "steepest",
            Ascent::Stochastic => "stochastic",
        }
    }
}

/// State shared by both engines: collaborators, random source and history.
#[derive(Debug)]
struct Climber<F, G> {
    fitness: F,
    generator: G,
    config: HcConfig,
    rng: StdRng,
    history: Vec<f64>,
}

impl<F, G> Climber<F, G> {
    fn new(fitness: F, generator: G, config: HcConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self {
            fitness,
            generator,
            config,
            rng,
            history: Vec::new(),
        }
    }

    fn climb<S>(
        &mut self,
        initial: &S,
        max_iterations: usize,
        direction: Direction,
        ascent: Ascent,
    ) -> HcResult<S>
    where
        S: Clone,
        F: FitnessFunction<S>,
        G: NeighborGenerator<S>,
    {
        let neighbors_per_step = self.config.neighbors_per_step;
        if neighbors_per_step == 0 && max_iterations > 0 {
            warn!("neighbors_per_step is 0; the generator is asked for zero neighbors");
        }

        let mut current = initial.clone();
        let mut current_fitness = self.fitness.fitness(&current);
        let mut evaluations = 1usize;

        self.history.clear();
        self.history.push(current_fitness);

        let mut iteration = 0usize;
        let mut termination = Termination::MaxIterations;

        while iteration < max_iterations {
            iteration += 1;

            let neighbors = self
                .generator
                .neighbors(&current, neighbors_per_step, &mut self.rng);
            evaluations += neighbors.len();

            let next = match ascent {
                Ascent::Steepest => {
                    select_steepest(&self.fitness, neighbors, current_fitness, direction)
                }
                Ascent::Stochastic => select_stochastic(
                    &self.fitness,
                    neighbors,
                    current_fitness,
                    direction,
                    &mut self.rng,
                )
                .map(|solution| {
                    // Re-score the accepted state so the evaluator is always
                    // consulted for the new current solution.
                    evaluations += 1;
                    let fitness = self.fitness.fitness(&solution);
                    (solution, fitness)
                }),
            };

            match next {
                Some((solution, fitness)) => {
                    current = solution;
                    current_fitness = fitness;
                    self.history.push(current_fitness);
                    debug!(
                        strategy = ascent.name(),
                        iteration,
                        fitness = current_fitness,
                        "accepted improving neighbor"
                    );
                }
                None => {
                    termination = Termination::LocalOptimum;
                    break;
                }
            }
        }

        match termination {
            Termination::LocalOptimum => info!(
                strategy = ascent.name(),
                iteration,
                fitness = current_fitness,
                "converged at local optimum"
            ),
            Termination::MaxIterations => info!(
                strategy = ascent.name(),
                iteration,
                fitness = current_fitness,
                "iteration limit reached"
            ),
        }

        HcResult {
            solution: current,
            fitness: current_fitness,
            history: self.history.clone(),
            iterations: iteration,
            improvements: self.history.len() - 1,
            evaluations,
            termination,
        }
    }
}

/// Returns the best strictly improving neighbor with its fitness.
///
/// The running best only changes on a strict improvement, so among
/// neighbors sharing the extreme fitness the earliest one wins.
fn select_steepest<S, F>(
    fitness: &F,
    neighbors: Vec<S>,
    current_fitness: f64,
    direction: Direction,
) -> Option<(S, f64)>
where
    F: FitnessFunction<S>,
{
    let mut best: Option<S> = None;
    let mut best_fitness = current_fitness;

    for neighbor in neighbors {
        let f = fitness.fitness(&neighbor);
        if direction.improves(f, best_fitness) {
            best = Some(neighbor);
            best_fitness = f;
        }
    }

    best.map(|solution| (solution, best_fitness))
}

/// Returns a uniformly random neighbor among those strictly improving on
/// `current_fitness`.
fn select_stochastic<S, F, R>(
    fitness: &F,
    neighbors: Vec<S>,
    current_fitness: f64,
    direction: Direction,
    rng: &mut R,
) -> Option<S>
where
    F: FitnessFunction<S>,
    R: Rng,
{
    let mut improving: Vec<S> = neighbors
        .into_iter()
        .filter(|neighbor| direction.improves(fitness.fitness(neighbor), current_fitness))
        .collect();

    if improving.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..improving.len());
    Some(improving.swap_remove(pick))
}

/// Steepest-ascent hill climbing.
///
/// At every iteration the whole sampled neighborhood is scored and the
/// single best strictly improving neighbor becomes the new current
/// solution. The history is monotone in the improving direction.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::{HcConfig, HillClimbing};
/// use u_hillclimb::neighbor::BitFlip;
///
/// let one_max = |s: &Vec<u8>| s.iter().map(|&b| b as f64).sum::<f64>();
/// let mut hc = HillClimbing::new(one_max, BitFlip, HcConfig::default().with_seed(42));
///
/// let result = hc.run(&vec![0u8, 0, 0, 0]);
/// assert_eq!(result.solution, vec![1, 1, 1, 1]);
/// assert_eq!(result.history, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug)]
pub struct HillClimbing<F, G> {
    inner: Climber<F, G>,
}

impl<F, G> HillClimbing<F, G> {
    /// Creates an engine from an evaluator, a neighbor generator and a
    /// configuration.
    pub fn new(fitness: F, generator: G, config: HcConfig) -> Self {
        Self {
            inner: Climber::new(fitness, generator, config),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &HcConfig {
        &self.inner.config
    }

    /// Fitness history of the most recent run (empty before the first run).
    pub fn history(&self) -> &[f64] {
        &self.inner.history
    }

    /// Runs from `initial` using the configured iteration cap and direction.
    pub fn run<S>(&mut self, initial: &S) -> HcResult<S>
    where
        S: Clone,
        F: FitnessFunction<S>,
        G: NeighborGenerator<S>,
    {
        let max_iterations = self.inner.config.max_iterations;
        let direction = self.inner.config.direction;
        self.run_with(initial, max_iterations, direction)
    }

    /// Runs from `initial` with an explicit iteration cap and direction.
    pub fn run_with<S>(
        &mut self,
        initial: &S,
        max_iterations: usize,
        direction: Direction,
    ) -> HcResult<S>
    where
        S: Clone,
        F: FitnessFunction<S>,
        G: NeighborGenerator<S>,
    {
        self.inner
            .climb(initial, max_iterations, direction, Ascent::Steepest)
    }
}

/// Stochastic hill climbing.
///
/// Collects every strictly improving neighbor and moves to one of them
/// chosen uniformly at random. The accepted solution is re-evaluated
/// instead of reusing its scan fitness, so the recorded fitness always comes
/// from an evaluator call on the new current state.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::{HcConfig, StochasticHillClimbing};
/// use u_hillclimb::neighbor::BitFlip;
///
/// let one_max = |s: &Vec<u8>| s.iter().map(|&b| b as f64).sum::<f64>();
/// let mut shc = StochasticHillClimbing::new(one_max, BitFlip, HcConfig::default().with_seed(7));
///
/// let result = shc.run(&vec![0u8; 8]);
/// assert_eq!(result.fitness, 8.0);
/// assert!(result.converged());
/// ```
#[derive(Debug)]
pub struct StochasticHillClimbing<F, G> {
    inner: Climber<F, G>,
}

impl<F, G> StochasticHillClimbing<F, G> {
    /// Creates an engine from an evaluator, a neighbor generator and a
    /// configuration.
    pub fn new(fitness: F, generator: G, config: HcConfig) -> Self {
        Self {
            inner: Climber::new(fitness, generator, config),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &HcConfig {
        &self.inner.config
    }

    /// Fitness history of the most recent run (empty before the first run).
    pub fn history(&self) -> &[f64] {
        &self.inner.history
    }

    /// Runs from `initial` using the configured iteration cap and direction.
    pub fn run<S>(&mut self, initial: &S) -> HcResult<S>
    where
        S: Clone,
        F: FitnessFunction<S>,
        G: NeighborGenerator<S>,
    {
        let max_iterations = self.inner.config.max_iterations;
        let direction = self.inner.config.direction;
        self.run_with(initial, max_iterations, direction)
    }

    /// Runs from `initial` with an explicit iteration cap and direction.
    pub fn run_with<S>(
        &mut self,
        initial: &S,
        max_iterations: usize,
        direction: Direction,
    ) -> HcResult<S>
    where
        S: Clone,
        F: FitnessFunction<S>,
        G: NeighborGenerator<S>,
    {
        self.inner
            .climb(initial, max_iterations, direction, Ascent::Stochastic)
    }
}
