//! # GaOptions
//!
//! The `GaOptions` struct represents the configuration surface of the
//! engine: generation count, population size, crossover and mutation rates,
//! domain bounds, chromosome bit width, initial-population policy, an
//! optional seed, and the per-parameter sweep bounds.
//!
//! All validation happens at construction, through
//! [`GaOptions::new`] or the builder, never inside the generation loop.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::options::{GaOptions, InitPolicy};
//!
//! let options = GaOptions::builder()
//!     .n_generations(100)
//!     .population_size(30)
//!     .crossover_rate(0.6)
//!     .mutation_rate(0.02)
//!     .bounds(0.0, 1.0)
//!     .init_policy(InitPolicy::Uniform)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_population_size(), 30);
//! ```

use std::f64::consts::PI;

use super::sweep::SweepBounds;
use crate::codec::MAX_BITS;
use crate::error::{GaError, Result};

/// How the initial population is placed in the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitPolicy {
    /// Spread initial individuals uniformly over the whole integer range.
    Uniform,
    /// After random generation, force every individual's real value
    /// uniformly into the lowest quarter of the domain. This seeds the run
    /// with a biased, low-diversity population and makes the search harder.
    LowQuarter,
}

/// Validated configuration for one engine instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaOptions {
    n_generations: usize,
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    l_inf: f64,
    l_sup: f64,
    n_bits: usize,
    init_policy: InitPolicy,
    seed: Option<u64>,
    sweep_bounds: SweepBounds,
}

impl GaOptions {
    /// Creates a validated `GaOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::Configuration`] if any constraint is violated:
    /// at least one generation, population of at least two, rates in
    /// `[0, 1]`, finite bounds with `l_inf < l_sup`, and a bit width in
    /// `[2, 63]`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n_generations: usize,
        population_size: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        l_inf: f64,
        l_sup: f64,
        n_bits: usize,
        init_policy: InitPolicy,
        seed: Option<u64>,
    ) -> Result<Self> {
        let options = Self {
            n_generations,
            population_size,
            crossover_rate,
            mutation_rate,
            l_inf,
            l_sup,
            n_bits,
            init_policy,
            seed,
            sweep_bounds: SweepBounds::default(),
        };
        options.validate()?;
        Ok(options)
    }

    /// Returns a builder for creating a `GaOptions` instance, pre-loaded
    /// with the default experiment's values.
    pub fn builder() -> GaOptionsBuilder {
        GaOptionsBuilder::default()
    }

    fn validate(&self) -> Result<()> {
        if self.n_generations == 0 {
            return Err(GaError::Configuration(
                "generation count must be at least 1".to_string(),
            ));
        }
        if self.population_size < 2 {
            return Err(GaError::Configuration(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::Configuration(format!(
                "crossover rate must lie in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::Configuration(format!(
                "mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !self.l_inf.is_finite() || !self.l_sup.is_finite() || self.l_inf >= self.l_sup {
            return Err(GaError::Configuration(format!(
                "domain bounds must be finite with l_inf < l_sup, got [{}, {}]",
                self.l_inf, self.l_sup
            )));
        }
        if self.n_bits < 2 || self.n_bits > MAX_BITS {
            return Err(GaError::Configuration(format!(
                "bit width must lie in [2, {}], got {}",
                MAX_BITS, self.n_bits
            )));
        }
        Ok(())
    }

    pub fn get_n_generations(&self) -> usize {
        self.n_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// The domain bounds `(l_inf, l_sup)`.
    pub fn get_bounds(&self) -> (f64, f64) {
        (self.l_inf, self.l_sup)
    }

    pub fn get_n_bits(&self) -> usize {
        self.n_bits
    }

    pub fn get_init_policy(&self) -> InitPolicy {
        self.init_policy
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_sweep_bounds(&self) -> &SweepBounds {
        &self.sweep_bounds
    }

    /// Sets the mutation rate. The sweep driver keeps samples inside the
    /// validated sweep bounds; external callers are expected to do the same.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the crossover rate.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Replaces the sweep bounds.
    pub fn set_sweep_bounds(&mut self, sweep_bounds: SweepBounds) {
        self.sweep_bounds = sweep_bounds;
    }
}

impl Default for GaOptions {
    /// The reference experiment: 300 generations, 50 individuals, crossover
    /// rate 0.5, mutation rate 0.05, domain `[0, π]`, 32-bit chromosomes,
    /// low-quarter initialization.
    fn default() -> Self {
        Self {
            n_generations: 300,
            population_size: 50,
            crossover_rate: 0.5,
            mutation_rate: 0.05,
            l_inf: 0.0,
            l_sup: PI,
            n_bits: 32,
            init_policy: InitPolicy::LowQuarter,
            seed: None,
            sweep_bounds: SweepBounds::default(),
        }
    }
}

/// Builder for [`GaOptions`].
///
/// Provides a fluent interface for constructing `GaOptions` instances;
/// unset fields fall back to the default experiment's values.
#[derive(Debug, Clone, Default)]
pub struct GaOptionsBuilder {
    n_generations: Option<usize>,
    population_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    bounds: Option<(f64, f64)>,
    n_bits: Option<usize>,
    init_policy: Option<InitPolicy>,
    seed: Option<u64>,
    sweep_bounds: Option<SweepBounds>,
}

impl GaOptionsBuilder {
    /// Sets the number of generations.
    pub fn n_generations(mut self, value: usize) -> Self {
        self.n_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the crossover rate.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the domain bounds.
    pub fn bounds(mut self, l_inf: f64, l_sup: f64) -> Self {
        self.bounds = Some((l_inf, l_sup));
        self
    }

    /// Sets the chromosome bit width.
    pub fn n_bits(mut self, value: usize) -> Self {
        self.n_bits = Some(value);
        self
    }

    /// Sets the initial-population policy.
    pub fn init_policy(mut self, value: InitPolicy) -> Self {
        self.init_policy = Some(value);
        self
    }

    /// Sets the seed for the engine's random source.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Sets the sweep bounds.
    pub fn sweep_bounds(mut self, value: SweepBounds) -> Self {
        self.sweep_bounds = Some(value);
        self
    }

    /// Builds the validated `GaOptions` instance.
    ///
    /// # Errors
    ///
    /// Same constraints as [`GaOptions::new`].
    pub fn build(self) -> Result<GaOptions> {
        let defaults = GaOptions::default();
        let (l_inf, l_sup) = self.bounds.unwrap_or((defaults.l_inf, defaults.l_sup));
        let options = GaOptions {
            n_generations: self.n_generations.unwrap_or(defaults.n_generations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            l_inf,
            l_sup,
            n_bits: self.n_bits.unwrap_or(defaults.n_bits),
            init_policy: self.init_policy.unwrap_or(defaults.init_policy),
            seed: self.seed,
            sweep_bounds: self.sweep_bounds.unwrap_or_default(),
        };
        options.validate()?;
        Ok(options)
    }
}
