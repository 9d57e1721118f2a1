//! # bitga
//!
//! A binary-encoded genetic algorithm for optimizing a scalar objective
//! function over a bounded one-dimensional domain.
//!
//! Candidate solutions are fixed-width bit strings decoded through an affine
//! map onto the domain. Each generation applies fitness-proportional pair
//! selection, variable-point crossover, and single-bit mutation, then trims
//! the offspring buffer back to the exact population size. The
//! [`evolution::SweepDriver`] repeats runs and sweeps hyperparameter grids,
//! pushing averaged metrics into a [`report::ReportSink`].
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::{Engine, GaOptions};
//! use bitga::objective::sine_ridge;
//!
//! let options = GaOptions::builder()
//!     .n_generations(50)
//!     .population_size(20)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut engine = Engine::new(options, sine_ridge);
//! let report = engine.run().unwrap();
//! assert!(report.best.fitness > 0.0);
//! ```

pub mod codec;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod objective;
pub mod operators;
pub mod report;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{GaError, Result};
pub use evolution::{Engine, GaOptions, InitPolicy, RunReport, SweepDriver, SweepParameter};
pub use individual::Individual;
pub use objective::{sine_ridge, Objective};
pub use report::{MemorySink, NullSink, ReportSink};
