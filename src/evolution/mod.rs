pub mod engine;
pub mod metrics;
pub mod options;
pub mod sweep;

pub use engine::Engine;
pub use metrics::{BestRecord, RunMetrics, RunReport};
pub use options::{GaOptions, GaOptionsBuilder, InitPolicy};
pub use sweep::{RunAverage, SweepBounds, SweepDriver, SweepParameter};
