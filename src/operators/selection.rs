//! # Pair Selection
//!
//! Roulette wheel (fitness proportionate) selection of a breeding pair.
//! Individuals are drawn with probability proportional to their fitness;
//! whenever both draws land on the same individual the whole pair is redrawn,
//! so the returned indices are always distinct. With a population of at least
//! two the redraw terminates with probability one.

use crate::error::{GaError, Result};
use crate::rng::RandomNumberGenerator;

/// Selects two distinct individuals by fitness-proportional sampling and
/// returns their indices into the population.
///
/// Weights must be non-negative. An all-zero fitness vector degrades to a
/// fair uniform draw, since weighted sampling is undefined there.
///
/// # Errors
///
/// Returns [`GaError::DegenerateSelection`] if the population holds fewer
/// than two individuals, or [`GaError::Configuration`] if any fitness value
/// is negative.
pub fn select_pair(fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<(usize, usize)> {
    if fitness.len() < 2 {
        return Err(GaError::DegenerateSelection(fitness.len()));
    }

    let wheel = cumulative_probabilities(fitness)?;

    loop {
        let first = draw(wheel.as_deref(), fitness.len(), rng);
        let second = draw(wheel.as_deref(), fitness.len(), rng);
        if first != second {
            return Ok((first, second));
        }
    }
}

/// Builds the cumulative probability wheel, or `None` when every fitness is
/// zero and the draw should be uniform instead.
fn cumulative_probabilities(fitness: &[f64]) -> Result<Option<Vec<f64>>> {
    if fitness.iter().any(|&f| f < 0.0) {
        return Err(GaError::Configuration(
            "roulette wheel selection requires non-negative fitness values".to_string(),
        ));
    }

    let sum: f64 = fitness.iter().sum();
    if sum == 0.0 {
        return Ok(None);
    }

    let mut probs = Vec::with_capacity(fitness.len());
    let mut cumulative = 0.0;
    for &f in fitness {
        cumulative += f / sum;
        probs.push(cumulative);
    }

    // Pin the last slot to exactly 1.0 to absorb floating-point drift.
    if let Some(last) = probs.last_mut() {
        *last = 1.0;
    }

    Ok(Some(probs))
}

fn draw(wheel: Option<&[f64]>, n: usize, rng: &mut RandomNumberGenerator) -> usize {
    match wheel {
        None => rng.below(n),
        Some(cumulative) => {
            let r = rng.proportion();
            cumulative
                .iter()
                .position(|&p| r <= p)
                .unwrap_or(cumulative.len() - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_pair_returns_distinct_indices() {
        let fitness = vec![1.0, 2.0, 3.0, 4.0];
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..200 {
            let (a, b) = select_pair(&fitness, &mut rng).unwrap();
            assert_ne!(a, b);
            assert!(a < fitness.len() && b < fitness.len());
        }
    }

    #[test]
    fn test_select_pair_degenerate_population() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        assert_eq!(
            select_pair(&[], &mut rng).unwrap_err(),
            GaError::DegenerateSelection(0)
        );
        assert_eq!(
            select_pair(&[1.0], &mut rng).unwrap_err(),
            GaError::DegenerateSelection(1)
        );
    }

    #[test]
    fn test_select_pair_rejects_negative_fitness() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = select_pair(&[1.0, -0.5, 2.0], &mut rng);
        assert!(matches!(result, Err(GaError::Configuration(_))));
    }

    #[test]
    fn test_select_pair_all_zero_fitness_is_uniform() {
        let fitness = vec![0.0; 5];
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut counts = [0usize; 5];
        for _ in 0..2000 {
            let (a, b) = select_pair(&fitness, &mut rng).unwrap();
            counts[a] += 1;
            counts[b] += 1;
        }
        // Every individual should be reachable under the uniform fallback.
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_select_pair_favors_heavier_weights() {
        let fitness = vec![0.01, 0.01, 10.0, 0.01];
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut heavy = 0usize;
        let draws = 1000;
        for _ in 0..draws {
            let (a, b) = select_pair(&fitness, &mut rng).unwrap();
            if a == 2 || b == 2 {
                heavy += 1;
            }
        }
        // Index 2 holds nearly all the weight, so it should appear in almost
        // every pair.
        assert!(heavy > draws * 9 / 10);
    }

    #[test]
    fn test_select_pair_two_individuals_terminates() {
        let fitness = vec![1.0, 5.0];
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..100 {
            let (a, b) = select_pair(&fitness, &mut rng).unwrap();
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_cumulative_probabilities_end_at_one() {
        let wheel = cumulative_probabilities(&[0.5, 0.8, 0.3])
            .unwrap()
            .unwrap();
        assert_eq!(wheel.len(), 3);
        assert!((wheel[2] - 1.0).abs() < f64::EPSILON);
        assert!(wheel.windows(2).all(|w| w[0] <= w[1]));
    }
}
