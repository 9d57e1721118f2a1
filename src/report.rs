//! # Reporting Sink
//!
//! An abstraction over everything downstream of the search: plotting,
//! image persistence, CSV export. The engine and sweep driver only ever push
//! three payload shapes (a labeled per-generation series, a 2-D metric
//! table keyed by two hyperparameter sample grids, and a generation-tagged
//! population snapshot) and never depend on how (or whether) they are
//! rendered.
//!
//! Implementations receive payloads serially; the sweep driver collects
//! parallel results in deterministic order before forwarding them.

/// A 2-D table of a run-averaged metric, keyed by the sample grids of the
/// two swept hyperparameters. `cells[i][j]` corresponds to
/// `rows[i]` × `cols[j]`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepTable {
    pub rows: Vec<f64>,
    pub cols: Vec<f64>,
    pub cells: Vec<Vec<f64>>,
}

/// Receiver for the metric payloads produced by runs and sweeps.
pub trait ReportSink {
    /// A per-generation numeric series with a human-readable label, for
    /// trend display.
    fn report_series(&mut self, label: &str, values: &[f64]);

    /// A run-averaged metric table from a 2-D hyperparameter sweep, for
    /// heat-map or surface display.
    fn report_table(&mut self, metric: &str, table: &SweepTable);

    /// A snapshot of a population's decoded real values paired with their
    /// objective values, tagged by generation index, for distribution
    /// display.
    fn report_snapshot(&mut self, generation: usize, points: &[(f64, f64)]);
}

/// A sink that discards every payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report_series(&mut self, _label: &str, _values: &[f64]) {}
    fn report_table(&mut self, _metric: &str, _table: &SweepTable) {}
    fn report_snapshot(&mut self, _generation: usize, _points: &[(f64, f64)]) {}
}

/// A sink that records every payload in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub series: Vec<(String, Vec<f64>)>,
    pub tables: Vec<(String, SweepTable)>,
    pub snapshots: Vec<(usize, Vec<(f64, f64)>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn report_series(&mut self, label: &str, values: &[f64]) {
        self.series.push((label.to_string(), values.to_vec()));
    }

    fn report_table(&mut self, metric: &str, table: &SweepTable) {
        self.tables.push((metric.to_string(), table.clone()));
    }

    fn report_snapshot(&mut self, generation: usize, points: &[(f64, f64)]) {
        self.snapshots.push((generation, points.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.report_series("a", &[1.0, 2.0]);
        sink.report_series("b", &[3.0]);
        sink.report_snapshot(5, &[(0.1, 0.2)]);
        assert_eq!(sink.series[0].0, "a");
        assert_eq!(sink.series[1].1, vec![3.0]);
        assert_eq!(sink.snapshots[0].0, 5);
    }
}
