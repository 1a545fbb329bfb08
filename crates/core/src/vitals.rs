//! Vital-sign reading storage for one patient encounter.

use std::collections::BTreeMap;

use crate::metric::Metric;

/// An append-only ordered sequence of readings for one metric, oldest first.
///
/// The first reading is the encounter baseline; insertion order is the
/// observation order the trend analyzer fits against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalSeries(Vec<f64>);

impl VitalSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading taken after all existing ones.
    pub fn record(&mut self, value: f64) {
        self.0.push(value);
    }

    /// The most recent reading, if any exist.
    pub fn latest(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// The first-ever reading of the encounter, if any exist.
    pub fn baseline(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn readings(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for VitalSeries {
    fn from(readings: Vec<f64>) -> Self {
        Self(readings)
    }
}

/// One series per monitored metric for a single encounter.
///
/// Every monitored metric always has a (possibly empty) series, so repeated
/// vitals-capture visits append to the same history.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsHistory {
    series: BTreeMap<Metric, VitalSeries>,
}

impl VitalsHistory {
    /// An empty history covering every monitored metric.
    pub fn new() -> Self {
        let series = Metric::ALL
            .into_iter()
            .map(|metric| (metric, VitalSeries::new()))
            .collect();
        Self { series }
    }

    /// Append a reading to a metric's series.
    pub fn record(&mut self, metric: Metric, value: f64) {
        self.series.entry(metric).or_default().record(value);
    }

    /// Replace a metric's series wholesale. Intended for loading an
    /// externally captured history, e.g. from a collaborator's JSON file.
    pub fn set_series(&mut self, metric: Metric, readings: Vec<f64>) {
        self.series.insert(metric, VitalSeries::from(readings));
    }

    pub fn series(&self, metric: Metric) -> Option<&VitalSeries> {
        self.series.get(&metric)
    }
}

impl Default for VitalsHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_appends_in_order() {
        let mut history = VitalsHistory::new();
        history.record(Metric::HeartRate, 75.0);
        history.record(Metric::HeartRate, 82.0);

        let series = history.series(Metric::HeartRate).expect("series exists");
        assert_eq!(series.readings(), &[75.0, 82.0]);
        assert_eq!(series.baseline(), Some(75.0));
        assert_eq!(series.latest(), Some(82.0));
    }

    #[test]
    fn new_history_has_an_empty_series_per_metric() {
        let history = VitalsHistory::new();
        for metric in Metric::ALL {
            let series = history.series(metric).expect("series exists");
            assert!(series.is_empty());
        }
    }

    #[test]
    fn set_series_replaces_existing_readings() {
        let mut history = VitalsHistory::new();
        history.record(Metric::Spo2, 99.0);
        history.set_series(Metric::Spo2, vec![98.0, 97.0]);
        let series = history.series(Metric::Spo2).expect("series exists");
        assert_eq!(series.readings(), &[98.0, 97.0]);
    }
}
