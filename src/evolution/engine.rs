//! # Generational Engine
//!
//! Drives the evolution loop over a fixed number of generations:
//! evaluate → record → reproduce → trim. There is no convergence-based early
//! stop; the generation count is the only stopping criterion.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::{Engine, GaOptions};
//! use bitga::objective::sine_ridge;
//!
//! let options = GaOptions::builder()
//!     .n_generations(20)
//!     .population_size(10)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut engine = Engine::new(options, sine_ridge);
//! let report = engine.run().unwrap();
//! assert_eq!(report.metrics.mean.len(), 20);
//! ```

use tracing::{debug, trace};

use super::metrics::{BestRecord, RunMetrics, RunReport};
use super::options::{GaOptions, InitPolicy};
use crate::error::Result;
use crate::individual::Individual;
use crate::objective::Objective;
use crate::operators::{crossover, mutate, select_pair};
use crate::report::{NullSink, ReportSink};
use crate::rng::RandomNumberGenerator;

/// A single evolutionary search over a bounded one-dimensional domain.
///
/// The engine owns its population, its metric bookkeeping, and one seedable
/// random source that every stochastic draw goes through. Calling
/// [`Engine::run`] again starts a fresh run (new random population, cleared
/// records) while continuing the same random stream, so repeated runs on a
/// seeded engine stay reproducible without being identical.
#[derive(Debug)]
pub struct Engine<F: Objective> {
    options: GaOptions,
    objective: F,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    best: BestRecord,
    metrics: RunMetrics,
}

impl<F: Objective> Engine<F> {
    /// Creates an engine from validated options and an objective function.
    ///
    /// The random source is seeded from the options, or from system entropy
    /// when no seed is configured.
    pub fn new(options: GaOptions, objective: F) -> Self {
        let rng = match options.get_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };
        Self {
            options,
            objective,
            rng,
            population: Vec::new(),
            best: BestRecord::default(),
            metrics: RunMetrics::default(),
        }
    }

    /// Executes one full run and returns its report.
    pub fn run(&mut self) -> Result<RunReport> {
        self.run_with_sink(&mut NullSink)
    }

    /// Executes one full run, pushing population snapshots to `sink` at the
    /// reporting cadence (generation 1, every 5th up to 20, every 50th, and
    /// the final generation) and the four fitness series once the run is
    /// done.
    pub fn run_with_sink(&mut self, sink: &mut dyn ReportSink) -> Result<RunReport> {
        self.initialize()?;

        let n_generations = self.options.get_n_generations();
        let population_size = self.options.get_population_size();
        let crossover_rate = self.options.get_crossover_rate();
        let mutation_rate = self.options.get_mutation_rate();

        for generation in 1..=n_generations {
            let fitness: Vec<f64> = self
                .population
                .iter()
                .map(|individual| self.objective.eval(individual.real()))
                .collect();

            let generation_max = fitness.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
            if self.best.observe(generation_max, generation) {
                trace!(generation, fitness = generation_max, "new best individual");
            }
            self.metrics.record(&fitness, self.best.fitness);

            if snapshot_due(generation, n_generations) {
                let points: Vec<(f64, f64)> = self
                    .population
                    .iter()
                    .zip(&fitness)
                    .map(|(individual, &f)| (individual.real(), f))
                    .collect();
                sink.report_snapshot(generation, &points);
            }

            // The buffer grows two at a time, so it may transiently overshoot
            // an odd population size by one.
            let mut next = Vec::with_capacity(population_size + 1);
            while next.len() < population_size {
                let (first, second) = select_pair(&fitness, &mut self.rng)?;
                let (child_a, child_b) = crossover(
                    &self.population[first],
                    &self.population[second],
                    crossover_rate,
                    &mut self.rng,
                )?;
                let mut offspring = [child_a, child_b];
                mutate(&mut offspring, mutation_rate, &mut self.rng)?;
                let [child_a, child_b] = offspring;
                next.push(child_a);
                next.push(child_b);
            }

            while next.len() > population_size {
                let victim = self.rng.below(next.len());
                next.remove(victim);
            }

            self.population = next;
        }

        sink.report_series("mean_fitness", &self.metrics.mean);
        sink.report_series("max_fitness", &self.metrics.max);
        sink.report_series("min_fitness", &self.metrics.min);
        sink.report_series("best_so_far", &self.metrics.best_so_far);

        debug!(
            best = self.best.fitness,
            found_at = self.best.generation,
            generations = n_generations,
            "run complete"
        );

        Ok(RunReport {
            best: self.best,
            metrics: self.metrics.clone(),
        })
    }

    /// Builds a fresh random population and clears the run records.
    fn initialize(&mut self) -> Result<()> {
        self.metrics.clear();
        self.best = BestRecord::default();

        let (l_inf, l_sup) = self.options.get_bounds();
        let n_bits = self.options.get_n_bits();
        let mut population = Vec::with_capacity(self.options.get_population_size());
        for _ in 0..self.options.get_population_size() {
            population.push(Individual::random(n_bits, l_inf, l_sup, &mut self.rng)?);
        }
        self.population = population;

        if self.options.get_init_policy() == InitPolicy::LowQuarter {
            let band = l_inf + (l_sup - l_inf) / 4.0;
            for individual in self.population.iter_mut() {
                let value = self.rng.uniform(l_inf, band);
                individual.set_real(value)?;
            }
        }

        Ok(())
    }

    /// The current population. Exactly `population_size` long after every
    /// completed generation.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// The best record of the most recent run.
    pub fn best(&self) -> BestRecord {
        self.best
    }

    /// The engine's configuration.
    pub fn options(&self) -> &GaOptions {
        &self.options
    }
}

fn snapshot_due(generation: usize, last: usize) -> bool {
    generation == 1
        || (generation <= 20 && generation % 5 == 0)
        || generation % 50 == 0
        || generation == last
}
