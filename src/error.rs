//! # Error Types
//!
//! This module defines the error type shared by every fallible operation in
//! the crate, from chromosome construction up to hyperparameter sweeps.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GaError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or running the genetic
/// algorithm.
///
/// Every variant is fatal to the operation that produced it: the crate never
/// silently truncates a chromosome, clamps a value, or retries a failed
/// operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// A chromosome's length does not match the configured bit width, either
    /// on construction or assignment.
    #[error("Invalid chromosome length: expected {expected} bits, got {actual}")]
    InvalidChromosomeLength { expected: usize, actual: usize },

    /// A chromosome contains a character other than '0' or '1'.
    #[error("Invalid chromosome symbol {symbol:?} at locus {locus}")]
    InvalidChromosomeSymbol { symbol: char, locus: usize },

    /// A real value was assigned outside the individual's domain bounds.
    #[error("Value {value} is outside the domain [{l_inf}, {l_sup}]")]
    ValueOutOfBounds { value: f64, l_inf: f64, l_sup: f64 },

    /// Pair selection was requested on a population with fewer than two
    /// individuals.
    #[error("Degenerate selection: pair selection needs at least 2 individuals, got {0}")]
    DegenerateSelection(usize),

    /// A sweep was requested on a hyperparameter name outside the recognized
    /// sweep set.
    #[error("Unknown sweep parameter: {0:?}")]
    InvalidSweepParameter(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GaError`.
pub type Result<T> = std::result::Result<T, GaError>;
