//! Core trait for fitness evaluation.

/// Maps a candidate solution to a scalar score.
///
/// The engines treat the evaluator as a black box: they call it once for
/// the initial solution and once per generated neighbor, sequentially.
/// Whether higher or lower is better is decided by
/// [`Direction`](super::Direction), not by the evaluator.
///
/// Any `Fn(&S) -> f64` closure is a fitness function:
///
/// ```
/// use u_hillclimb::hc::FitnessFunction;
///
/// let ones = |s: &Vec<u8>| s.iter().map(|&b| b as f64).sum::<f64>();
/// assert_eq!(ones.fitness(&vec![1, 0, 1]), 2.0);
/// ```
///
/// # Failures
///
/// The engines do not catch evaluator panics. A panicking evaluator unwinds
/// straight through `run` to its caller.
pub trait FitnessFunction<S: ?Sized> {
    /// Scores `solution`.
    fn fitness(&self, solution: &S) -> f64;
}

impl<S: ?Sized, F> FitnessFunction<S> for F
where
    F: Fn(&S) -> f64,
{
    fn fitness(&self, solution: &S) -> f64 {
        self(solution)
    }
}
