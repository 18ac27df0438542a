//! Thirteen-city US travelling salesman instance.
//!
//! City 0 (New York) is the fixed depot. A route is a permutation of the
//! remaining twelve cities; its length is the round trip
//! `0 -> route[0] -> ... -> route[11] -> 0` in miles.

use std::collections::HashSet;
use std::iter;

use crate::error::ProblemError;
use crate::hc::FitnessFunction;

/// Number of cities including the depot.
pub const CITY_COUNT: usize = 13;

/// The depot every tour starts and ends at.
pub const DEPOT: usize = 0;

/// City names, indexed like [`USA13`].
pub const CITIES: [&str; CITY_COUNT] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Minneapolis",
    "Denver",
    "Dallas",
    "Seattle",
    "Boston",
    "San Francisco",
    "St. Louis",
    "Houston",
    "Phoenix",
    "Salt Lake City",
];

/// Symmetric distance matrix in miles.
#[rustfmt::skip]
pub const USA13: [[u32; CITY_COUNT]; CITY_COUNT] = [
    [0, 2451, 713, 1018, 1631, 1374, 2408, 213, 2571, 875, 1420, 2145, 1972],
    [2451, 0, 1745, 1524, 831, 1240, 959, 2596, 403, 1589, 1374, 357, 579],
    [713, 1745, 0, 355, 920, 803, 1737, 851, 1858, 262, 940, 1453, 1260],
    [1018, 1524, 355, 0, 700, 862, 1395, 1123, 1584, 466, 1056, 1280, 987],
    [1631, 831, 920, 700, 0, 663, 1021, 1769, 949, 796, 879, 586, 371],
    [1374, 1240, 803, 862, 663, 0, 1681, 1551, 1765, 547, 225, 887, 999],
    [2408, 959, 1737, 1395, 1021, 1681, 0, 2493, 678, 1724, 1891, 1114, 701],
    [213, 2596, 851, 1123, 1769, 1551, 2493, 0, 2699, 1038, 1605, 2300, 2099],
    [2571, 403, 1858, 1584, 949, 1765, 678, 2699, 0, 1744, 1645, 653, 600],
    [875, 1589, 262, 466, 796, 547, 1724, 1038, 1744, 0, 679, 1272, 1162],
    [1420, 1374, 940, 1056, 879, 225, 1891, 1605, 1645, 679, 0, 1017, 1200],
    [2145, 357, 1453, 1280, 586, 887, 1114, 2300, 653, 1272, 1017, 0, 504],
    [1972, 579, 1260, 987, 371, 999, 701, 2099, 600, 1162, 1200, 504, 0],
];

/// The route visiting cities `1..=12` in index order.
pub fn identity_route() -> Vec<usize> {
    (1..CITY_COUNT).collect()
}

/// Returns `true` if `route` visits every non-depot city exactly once.
///
/// ```
/// use u_hillclimb::problems::tsp::{identity_route, is_valid_route};
///
/// assert!(is_valid_route(&identity_route()));
/// assert!(!is_valid_route(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 1]));
/// ```
pub fn is_valid_route(route: &[usize]) -> bool {
    check_route(route).is_ok()
}

/// Round-trip length of a validated route.
///
/// # Errors
///
/// [`ProblemError::InvalidRoute`] if `route` is not a permutation of
/// cities `1..=12`.
pub fn route_distance(route: &[usize]) -> Result<u32, ProblemError> {
    check_route(route)?;
    Ok(legs(route).map(|(from, to)| USA13[from][to]).sum())
}

fn check_route(route: &[usize]) -> Result<(), ProblemError> {
    if route.len() != CITY_COUNT - 1 {
        return Err(ProblemError::InvalidRoute(format!(
            "expected {} cities, got {}",
            CITY_COUNT - 1,
            route.len()
        )));
    }
    let mut seen = HashSet::with_capacity(route.len());
    for &city in route {
        if city == DEPOT || city >= CITY_COUNT {
            return Err(ProblemError::InvalidRoute(format!(
                "city {city} is not a stop (expected 1..={})",
                CITY_COUNT - 1
            )));
        }
        if !seen.insert(city) {
            return Err(ProblemError::InvalidRoute(format!("city {city} visited twice")));
        }
    }
    Ok(())
}

/// Depot-to-depot length without permutation checks; `None` on an unknown
/// city index.
fn tour_length(route: &[usize]) -> Option<u32> {
    legs(route)
        .map(|(from, to)| USA13.get(from).and_then(|row| row.get(to)).copied())
        .sum()
}

/// Consecutive `(from, to)` pairs of the depot-to-depot round trip.
fn legs(route: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let stops = route.iter().copied();
    iter::once(DEPOT)
        .chain(stops.clone())
        .zip(stops.chain(iter::once(DEPOT)))
}

/// Tour length objective over routes; minimize it.
///
/// Routes with an out-of-range city score `f64::INFINITY`. Duplicates are
/// not checked here; the [`Swap`](crate::neighbor::Swap) neighborhood
/// preserves permutations, so starting from a valid route is enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourLength;

impl FitnessFunction<Vec<usize>> for TourLength {
    fn fitness(&self, route: &Vec<usize>) -> f64 {
        tour_length(route).map_or(f64::INFINITY, f64::from)
    }
}
