//! # Individual
//!
//! An [`Individual`] bundles one candidate solution with the domain bounds
//! and bit width needed to interpret it. The chromosome and its integer
//! value are kept bit-exact inverses of each other at all times: every
//! mutation path goes through a validating setter that recomputes the
//! counterpart representation via the [`codec`](crate::codec) functions.

use crate::codec;
use crate::error::{GaError, Result};
use crate::rng::RandomNumberGenerator;

/// A candidate solution: a fixed-width chromosome, its decoded integer
/// value, and the domain it is interpreted over.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: String,
    value: u64,
    n_bits: usize,
    l_inf: f64,
    l_sup: f64,
}

impl Individual {
    /// Creates an individual from an explicit chromosome.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::InvalidChromosomeLength`] if the chromosome's
    /// length differs from `n_bits`, or
    /// [`GaError::InvalidChromosomeSymbol`] if it contains anything but
    /// `'0'`/`'1'`.
    pub fn from_chromosome(
        chromosome: String,
        n_bits: usize,
        l_inf: f64,
        l_sup: f64,
    ) -> Result<Self> {
        if chromosome.len() != n_bits {
            return Err(GaError::InvalidChromosomeLength {
                expected: n_bits,
                actual: chromosome.len(),
            });
        }
        let value = codec::decode(&chromosome)?;
        Ok(Self {
            chromosome,
            value,
            n_bits,
            l_inf,
            l_sup,
        })
    }

    /// Creates an individual with a uniformly random integer value in
    /// `[0, 2^n_bits - 1]`.
    pub fn random(
        n_bits: usize,
        l_inf: f64,
        l_sup: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if n_bits > codec::MAX_BITS {
            return Err(GaError::Configuration(format!(
                "bit width {} exceeds the supported maximum of {}",
                n_bits,
                codec::MAX_BITS
            )));
        }
        let value = rng.int_in(0, codec::max_value(n_bits));
        let chromosome = codec::encode(value, n_bits)?;
        Ok(Self {
            chromosome,
            value,
            n_bits,
            l_inf,
            l_sup,
        })
    }

    /// The chromosome as a binary string, least significant bit first.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Replaces the chromosome and recomputes the integer value.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`Individual::from_chromosome`]; on
    /// failure the individual is left unchanged.
    pub fn set_chromosome(&mut self, chromosome: String) -> Result<()> {
        if chromosome.len() != self.n_bits {
            return Err(GaError::InvalidChromosomeLength {
                expected: self.n_bits,
                actual: chromosome.len(),
            });
        }
        self.value = codec::decode(&chromosome)?;
        self.chromosome = chromosome;
        Ok(())
    }

    /// The direct numeric decoding of the chromosome.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The decoded real value in `[l_inf, l_sup]`.
    pub fn real(&self) -> f64 {
        codec::to_real(self.value, self.n_bits, self.l_inf, self.l_sup)
    }

    /// Assigns a real value, recomputing the integer value (truncated) and
    /// the chromosome.
    ///
    /// The assignment is lossy: reading the value back yields the nearest
    /// representable point at or below `real`, within one quantization step.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::ValueOutOfBounds`] if `real` lies outside
    /// `[l_inf, l_sup]`.
    pub fn set_real(&mut self, real: f64) -> Result<()> {
        if !(self.l_inf..=self.l_sup).contains(&real) {
            return Err(GaError::ValueOutOfBounds {
                value: real,
                l_inf: self.l_inf,
                l_sup: self.l_sup,
            });
        }
        self.value = codec::to_integer(real, self.n_bits, self.l_inf, self.l_sup);
        self.chromosome = codec::encode(self.value, self.n_bits)?;
        Ok(())
    }

    /// The chromosome bit width.
    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    /// The domain bounds `(l_inf, l_sup)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.l_inf, self.l_sup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn rng() -> RandomNumberGenerator {
        RandomNumberGenerator::from_seed(42)
    }

    #[test]
    fn test_from_chromosome_keeps_representations_consistent() {
        let individual = Individual::from_chromosome("1010".to_string(), 4, 0.0, 1.0).unwrap();
        assert_eq!(individual.value(), 5);
        assert_eq!(individual.chromosome(), "1010");
    }

    #[test]
    fn test_from_chromosome_rejects_wrong_length() {
        let err = Individual::from_chromosome("101".to_string(), 4, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            GaError::InvalidChromosomeLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_set_chromosome_rejects_wrong_length_and_preserves_state() {
        let mut individual = Individual::from_chromosome("1010".to_string(), 4, 0.0, 1.0).unwrap();
        assert!(individual.set_chromosome("10100".to_string()).is_err());
        assert_eq!(individual.chromosome(), "1010");
        assert_eq!(individual.value(), 5);
    }

    #[test]
    fn test_random_individual_is_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let individual = Individual::random(8, 0.0, PI, &mut rng).unwrap();
            assert!(individual.value() <= codec::max_value(8));
            assert!((0.0..=PI).contains(&individual.real()));
            assert_eq!(individual.chromosome().len(), 8);
        }
    }

    #[test]
    fn test_set_real_rejects_out_of_bounds() {
        let mut rng = rng();
        let mut individual = Individual::random(16, 0.0, PI, &mut rng).unwrap();
        let err = individual.set_real(PI + 0.1).unwrap_err();
        assert!(matches!(err, GaError::ValueOutOfBounds { .. }));
        assert!(individual.set_real(-0.1).is_err());
    }

    #[test]
    fn test_set_real_round_trip_within_quantization_step() {
        let mut rng = rng();
        let n_bits = 16;
        let step = PI / codec::max_value(n_bits) as f64;
        let mut individual = Individual::random(n_bits, 0.0, PI, &mut rng).unwrap();
        for target in [0.0, 0.5, 1.0, PI / 2.0, 3.0, PI] {
            individual.set_real(target).unwrap();
            assert!((individual.real() - target).abs() <= step);
        }
    }

    #[test]
    fn test_set_real_resyncs_chromosome() {
        let mut rng = rng();
        let mut individual = Individual::random(16, 0.0, PI, &mut rng).unwrap();
        individual.set_real(1.0).unwrap();
        let decoded = codec::decode(individual.chromosome()).unwrap();
        assert_eq!(decoded, individual.value());
    }
}
