//! # Multi-Run / Sweep Driver
//!
//! Repeats the generational engine across independent runs and across 1-D or
//! 2-D hyperparameter grids, averaging run metrics and forwarding them to a
//! reporting sink.
//!
//! Independent runs and grid cells execute in parallel, each with an
//! independently derived seed so no correlation is introduced between them;
//! results are collected in deterministic grid order and pushed to the sink
//! serially.

use std::str::FromStr;

use rayon::prelude::*;
use tracing::{debug, info};

use super::engine::Engine;
use super::metrics::RunReport;
use super::options::GaOptions;
use crate::error::{GaError, Result};
use crate::objective::Objective;
use crate::report::{ReportSink, SweepTable};

/// Default number of samples along a 1-D sweep.
pub const DEFAULT_SAMPLES_1D: usize = 6;
/// Default number of samples along each axis of a 2-D sweep.
pub const DEFAULT_SAMPLES_2D: usize = 11;

/// The hyperparameters that can be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepParameter {
    MutationRate,
    CrossoverRate,
    PopulationSize,
}

impl SweepParameter {
    /// The parameter's name as used in labels and name-based lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MutationRate => "mutation_rate",
            Self::CrossoverRate => "crossover_rate",
            Self::PopulationSize => "population_size",
        }
    }

    fn range(&self, bounds: &SweepBounds) -> (f64, f64) {
        match self {
            Self::MutationRate => bounds.mutation_rate,
            Self::CrossoverRate => bounds.crossover_rate,
            Self::PopulationSize => bounds.population_size,
        }
    }

    fn apply(&self, options: &mut GaOptions, sample: f64) {
        match self {
            Self::MutationRate => options.set_mutation_rate(sample),
            Self::CrossoverRate => options.set_crossover_rate(sample),
            Self::PopulationSize => options.set_population_size(sample.round() as usize),
        }
    }

    fn validate_range(&self, (lo, hi): (f64, f64)) -> Result<()> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(GaError::Configuration(format!(
                "sweep range for {} must be finite with min <= max, got [{}, {}]",
                self.name(),
                lo,
                hi
            )));
        }
        match self {
            Self::MutationRate | Self::CrossoverRate => {
                if lo < 0.0 || hi > 1.0 {
                    return Err(GaError::Configuration(format!(
                        "sweep range for {} must lie within [0, 1], got [{}, {}]",
                        self.name(),
                        lo,
                        hi
                    )));
                }
            }
            Self::PopulationSize => {
                if lo.round() < 2.0 {
                    return Err(GaError::Configuration(format!(
                        "population size sweep must start at 2 or above, got {}",
                        lo
                    )));
                }
            }
        }
        Ok(())
    }
}

impl FromStr for SweepParameter {
    type Err = GaError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "mutation_rate" => Ok(Self::MutationRate),
            "crossover_rate" => Ok(Self::CrossoverRate),
            "population_size" => Ok(Self::PopulationSize),
            other => Err(GaError::InvalidSweepParameter(other.to_string())),
        }
    }
}

/// The `[min, max]` sampling range of each sweepable hyperparameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepBounds {
    pub mutation_rate: (f64, f64),
    pub crossover_rate: (f64, f64),
    pub population_size: (f64, f64),
}

impl Default for SweepBounds {
    /// The reference experiment's sweep ranges.
    fn default() -> Self {
        Self {
            mutation_rate: (0.01, 0.06),
            crossover_rate: (0.05, 0.95),
            population_size: (10.0, 100.0),
        }
    }
}

/// Run metrics averaged over `n` independent runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunAverage {
    /// Average of the best fitness found per run.
    pub best_fitness: f64,
    /// Average of the generation index where each run first found its best.
    pub discovery_generation: f64,
    /// Element-wise average of the per-run mean-fitness series.
    pub mean_series: Vec<f64>,
}

/// Repeats the engine over runs and hyperparameter grids.
pub struct SweepDriver<F>
where
    F: Objective + Clone + Send + Sync,
{
    options: GaOptions,
    objective: F,
    runs_per_sample: usize,
}

impl<F> SweepDriver<F>
where
    F: Objective + Clone + Send + Sync,
{
    /// Creates a driver over a base configuration. Every sweep sample starts
    /// from `options` with only the swept parameter(s) replaced.
    pub fn new(options: GaOptions, objective: F) -> Self {
        Self {
            options,
            objective,
            runs_per_sample: 10,
        }
    }

    /// Sets how many independent runs are averaged per sample point.
    pub fn with_runs_per_sample(mut self, runs: usize) -> Self {
        self.runs_per_sample = runs;
        self
    }

    /// Executes the engine `n` independent times with fresh populations and
    /// averages the results.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::Configuration`] if `n` is zero.
    pub fn run_n(&self, n: usize) -> Result<RunAverage> {
        self.averaged_runs(&self.options, n, 0)
    }

    /// Sweeps one hyperparameter across its configured range, runs
    /// [`Self::run_n`]-style averaging at each of `samples` points, and
    /// forwards each averaged mean-fitness series to the sink labeled with
    /// the sampled value.
    pub fn sweep_1d(
        &self,
        parameter: SweepParameter,
        samples: usize,
        sink: &mut dyn ReportSink,
    ) -> Result<()> {
        if samples == 0 {
            return Err(GaError::Configuration(
                "a sweep needs at least one sample point".to_string(),
            ));
        }
        let range = parameter.range(self.options.get_sweep_bounds());
        parameter.validate_range(range)?;

        let grid = linspace(range.0, range.1, samples);
        let averages: Vec<RunAverage> = grid
            .par_iter()
            .enumerate()
            .map(|(index, &sample)| {
                let mut options = self.options.clone();
                parameter.apply(&mut options, sample);
                let average = self.averaged_runs(&options, self.runs_per_sample, index as u64 + 1);
                debug!(parameter = parameter.name(), sample, "sweep sample complete");
                average
            })
            .collect::<Result<_>>()?;

        for (sample, average) in grid.iter().zip(&averages) {
            let label = format!("{} : {}", parameter.name(), sample);
            sink.report_series(&label, &average.mean_series);
        }

        info!(
            parameter = parameter.name(),
            samples,
            runs_per_sample = self.runs_per_sample,
            "1-D sweep complete"
        );
        Ok(())
    }

    /// Sweeps a pair of hyperparameters over a `samples` × `samples` grid,
    /// averaging terminal metrics per cell, and hands the resulting
    /// `best_fitness` and `discovery_generation` tables to the sink.
    pub fn sweep_2d(
        &self,
        first: SweepParameter,
        second: SweepParameter,
        samples: usize,
        sink: &mut dyn ReportSink,
    ) -> Result<()> {
        if samples == 0 {
            return Err(GaError::Configuration(
                "a sweep needs at least one sample point".to_string(),
            ));
        }
        if first == second {
            return Err(GaError::Configuration(format!(
                "cannot sweep {} on both axes",
                first.name()
            )));
        }
        let first_range = first.range(self.options.get_sweep_bounds());
        first.validate_range(first_range)?;
        let second_range = second.range(self.options.get_sweep_bounds());
        second.validate_range(second_range)?;

        let rows = linspace(first_range.0, first_range.1, samples);
        let cols = linspace(second_range.0, second_range.1, samples);

        let averages: Vec<RunAverage> = (0..rows.len() * cols.len())
            .into_par_iter()
            .map(|cell| {
                let row = cell / cols.len();
                let col = cell % cols.len();
                let mut options = self.options.clone();
                first.apply(&mut options, rows[row]);
                second.apply(&mut options, cols[col]);
                self.averaged_runs(&options, self.runs_per_sample, cell as u64 + 1)
            })
            .collect::<Result<_>>()?;

        let table_of = |metric: fn(&RunAverage) -> f64| SweepTable {
            rows: rows.clone(),
            cols: cols.clone(),
            cells: averages
                .chunks(cols.len())
                .map(|row| row.iter().map(metric).collect())
                .collect(),
        };

        sink.report_table("best_fitness", &table_of(|a| a.best_fitness));
        sink.report_table(
            "discovery_generation",
            &table_of(|a| a.discovery_generation),
        );

        info!(
            first = first.name(),
            second = second.name(),
            samples,
            runs_per_sample = self.runs_per_sample,
            "2-D sweep complete"
        );
        Ok(())
    }

    fn averaged_runs(&self, options: &GaOptions, n: usize, lineage: u64) -> Result<RunAverage> {
        if n == 0 {
            return Err(GaError::Configuration(
                "averaging needs at least one run".to_string(),
            ));
        }

        let base_seed = derive_seed(options.get_seed(), lineage);
        let reports: Vec<RunReport> = (0..n)
            .into_par_iter()
            .map(|run| {
                let mut options = options.clone();
                options.set_seed(derive_seed(base_seed, run as u64));
                let mut engine = Engine::new(options, self.objective.clone());
                engine.run()
            })
            .collect::<Result<_>>()?;

        let n_f = n as f64;
        let best_fitness = reports.iter().map(|r| r.best.fitness).sum::<f64>() / n_f;
        let discovery_generation =
            reports.iter().map(|r| r.best.generation as f64).sum::<f64>() / n_f;

        let series_len = reports[0].metrics.mean.len();
        let mut mean_series = vec![0.0; series_len];
        for report in &reports {
            for (total, value) in mean_series.iter_mut().zip(&report.metrics.mean) {
                *total += value;
            }
        }
        for total in mean_series.iter_mut() {
            *total /= n_f;
        }

        Ok(RunAverage {
            best_fitness,
            discovery_generation,
            mean_series,
        })
    }
}

/// Derives an independent seed for a child random stream. `None` stays
/// `None`: unseeded configurations keep drawing entropy per run.
fn derive_seed(base: Option<u64>, stream: u64) -> Option<u64> {
    base.map(|seed| {
        let mut z = seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z ^ (z >> 27)
    })
}

/// `n` evenly spaced samples over `[lo, hi]`, with both endpoints exact.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_parsing() {
        assert_eq!(
            "mutation_rate".parse::<SweepParameter>().unwrap(),
            SweepParameter::MutationRate
        );
        assert_eq!(
            "population_size".parse::<SweepParameter>().unwrap(),
            SweepParameter::PopulationSize
        );
        assert_eq!(
            "elitism".parse::<SweepParameter>().unwrap_err(),
            GaError::InvalidSweepParameter("elitism".to_string())
        );
    }

    #[test]
    fn test_linspace_includes_endpoints() {
        let grid = linspace(0.0, 1.0, 6);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], 0.0);
        assert!((grid[5] - 1.0).abs() < 1e-12);
        assert!((grid[1] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_single_sample() {
        assert_eq!(linspace(0.3, 0.9, 1), vec![0.3]);
    }

    #[test]
    fn test_derive_seed_decorrelates_streams() {
        let a = derive_seed(Some(42), 0);
        let b = derive_seed(Some(42), 1);
        assert_ne!(a, b);
        assert_eq!(derive_seed(None, 5), None);
    }

    #[test]
    fn test_validate_range_rejects_bad_rate_bounds() {
        assert!(SweepParameter::MutationRate
            .validate_range((0.0, 1.5))
            .is_err());
        assert!(SweepParameter::CrossoverRate
            .validate_range((0.9, 0.1))
            .is_err());
        assert!(SweepParameter::PopulationSize
            .validate_range((1.0, 50.0))
            .is_err());
        assert!(SweepParameter::PopulationSize
            .validate_range((10.0, 100.0))
            .is_ok());
    }
}
