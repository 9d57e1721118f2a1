//! Population operators: fitness-proportional pair selection,
//! variable-point crossover, and single-bit mutation.

pub mod crossover;
pub mod mutation;
pub mod selection;

pub use crossover::crossover;
pub use mutation::mutate;
pub use selection::select_pair;
