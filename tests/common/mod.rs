//! Shared fixtures for the folio-dash integration tests.
//!
//! Provides seeded dashboards (in-memory and file-backed), a scripted
//! provider for forcing exact chart values, and a helper asserting the
//! invariants every generated bundle must satisfy.

#![allow(dead_code)]

use folio_dash::models::SeriesValues;
use folio_dash::{Dashboard, FileStore, Period, StatBundle, StatsProvider, TimeSeriesPoint};
use std::cell::Cell;
use std::rc::Rc;

pub const SEED: u64 = 0x5EED;

/// In-memory dashboard with a fixed seed.
pub fn seeded_dashboard() -> Dashboard {
    Dashboard::builder().in_memory().seed(SEED).build().unwrap()
}

/// File-backed dashboard in a fresh temp directory.
///
/// Returns `(Dashboard, tempfile::TempDir)`. The caller must keep the `TempDir`
/// alive for the duration of the test so the store directory is not deleted
/// prematurely.
pub fn file_dashboard() -> (Dashboard, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dash = Dashboard::builder()
        .store_dir(tmp_dir.path())
        .seed(SEED)
        .build()
        .unwrap();
    (dash, tmp_dir)
}

pub fn file_store() -> (FileStore, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(Some(tmp_dir.path().to_path_buf())).unwrap();
    (store, tmp_dir)
}

/// Check the structural invariants of a generated bundle.
pub fn assert_bundle_invariants(bundle: &StatBundle, period: Period) {
    assert_eq!(bundle.period, period);
    assert_eq!(bundle.chart_data.len(), period.point_count());

    for point in &bundle.chart_data {
        assert!(
            point.value.is_finite() && point.value > 0.0,
            "bad chart value {} at {} ({})",
            point.value,
            point.label,
            period
        );
    }
    assert!(bundle.main_value.is_finite() && bundle.main_value > 0.0);

    assert!(bundle.trend_percentage >= 0.0);
    assert!(bundle.trend_percentage.is_finite());
    let first = bundle.first_value().unwrap();
    let last = bundle.last_value().unwrap();
    assert_eq!(bundle.trend_positive, last >= first);

    for (name, series) in &bundle.secondary_series {
        if let SeriesValues::Points(points) = series {
            assert_eq!(points.len(), period.point_count(), "series {}", name);
        }
        for value in series.values() {
            assert!(value.is_finite() && value >= 0.0, "series {} value {}", name, value);
        }
    }
}

/// Provider that replays fixed chart values and counts how often it was called.
///
/// `main_value` includes the call count, so a regenerated bundle is always
/// distinguishable from a cached one.
pub struct ScriptedProvider {
    pub values: Vec<f64>,
    pub calls: Rc<Cell<usize>>,
}

impl ScriptedProvider {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl StatsProvider for ScriptedProvider {
    fn fetch_period_stats(&mut self, period: Period) -> StatBundle {
        self.calls.set(self.calls.get() + 1);
        let chart: Vec<TimeSeriesPoint> = period
            .labels()
            .into_iter()
            .zip(self.values.iter().cycle())
            .map(|(label, value)| TimeSeriesPoint::new(label, *value))
            .collect();
        let main = chart.last().map(|p| p.value).unwrap_or_default() + self.calls.get() as f64;
        StatBundle::new(period, main, chart)
    }
}
