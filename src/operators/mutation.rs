//! # Bit-Flip Mutation
//!
//! Per-individual single-locus mutation: with probability `rate` one
//! uniformly chosen bit flips, and the chromosome is reassigned through the
//! validating setter so the integer value stays in sync. At most one bit
//! changes per individual per call.

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Mutates each individual in place, independently, with probability `rate`.
pub fn mutate(
    individuals: &mut [Individual],
    rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<()> {
    for individual in individuals.iter_mut() {
        if !rng.flip(rate) {
            continue;
        }
        let locus = rng.below(individual.n_bits());
        let flipped: String = individual
            .chromosome()
            .char_indices()
            .map(|(i, symbol)| match (i == locus, symbol) {
                (true, '1') => '0',
                (true, _) => '1',
                (false, _) => symbol,
            })
            .collect();
        individual.set_chromosome(flipped)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(chromosome: &str) -> Individual {
        Individual::from_chromosome(chromosome.to_string(), chromosome.len(), 0.0, 1.0).unwrap()
    }

    fn hamming(a: &str, b: &str) -> usize {
        a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn test_rate_zero_never_mutates() {
        let mut population = vec![individual("10101010"); 10];
        let mut rng = RandomNumberGenerator::from_seed(42);
        mutate(&mut population, 0.0, &mut rng).unwrap();
        assert!(population.iter().all(|i| i.chromosome() == "10101010"));
    }

    #[test]
    fn test_rate_one_flips_exactly_one_bit() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..100 {
            let mut population = vec![individual("11001100")];
            mutate(&mut population, 1.0, &mut rng).unwrap();
            assert_eq!(hamming(population[0].chromosome(), "11001100"), 1);
        }
    }

    #[test]
    fn test_mutation_keeps_value_in_sync() {
        let mut population = vec![individual("0000000000000000")];
        let mut rng = RandomNumberGenerator::from_seed(7);
        mutate(&mut population, 1.0, &mut rng).unwrap();
        let expected = crate::codec::decode(population[0].chromosome()).unwrap();
        assert_eq!(population[0].value(), expected);
    }

    #[test]
    fn test_empirical_mutation_frequency_matches_rate() {
        let rate = 0.05;
        let trials = 20_000;
        let mut rng = RandomNumberGenerator::from_seed(123);
        let mut mutated = 0usize;
        for _ in 0..trials {
            let mut population = vec![individual("1010101010101010")];
            mutate(&mut population, rate, &mut rng).unwrap();
            if population[0].chromosome() != "1010101010101010" {
                mutated += 1;
            }
        }
        let observed = mutated as f64 / trials as f64;
        assert!(
            (observed - rate).abs() < 0.01,
            "observed mutation frequency {} too far from {}",
            observed,
            rate
        );
    }
}
