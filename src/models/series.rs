use super::Period;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// TimeSeriesPoint — Single labeled chart value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// SeriesValues — Secondary series, either labeled points or bare scalars
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesValues {
    Points(Vec<TimeSeriesPoint>),
    Scalars(Vec<f64>),
}

impl SeriesValues {
    pub fn len(&self) -> usize {
        match self {
            SeriesValues::Points(points) => points.len(),
            SeriesValues::Scalars(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the raw numeric values regardless of shape.
    pub fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            SeriesValues::Points(points) => Box::new(points.iter().map(|p| p.value)),
            SeriesValues::Scalars(values) => Box::new(values.iter().copied()),
        }
    }

    pub fn sum(&self) -> f64 {
        self.values().sum()
    }
}

// ---------------------------------------------------------------------------
// Trend — Direction and magnitude of change between two values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Absolute percentage change, rounded to two decimals. Never negative.
    pub percentage: f64,
    pub positive: bool,
}

impl Trend {
    /// Trend from `first` to `last`.
    ///
    /// A zero (or non-finite) starting value yields a 0% trend instead of
    /// infinity or NaN. `positive` is decided by comparing the raw values, so
    /// it stays consistent with the series even when the percentage rounds
    /// to zero.
    pub fn between(first: f64, last: f64) -> Trend {
        let positive = last >= first;
        let raw = if first == 0.0 {
            0.0
        } else {
            ((last - first) / first * 100.0).abs()
        };
        let percentage = if raw.is_finite() {
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        };
        Trend {
            percentage,
            positive,
        }
    }

    /// Trend over a chart series, first point to last. Empty series are flat.
    pub fn of_series(points: &[TimeSeriesPoint]) -> Trend {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => Trend::between(first.value, last.value),
            _ => Trend {
                percentage: 0.0,
                positive: true,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// StatBundle — Headline value, trend and series for one period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBundle {
    pub period: Period,
    pub main_value: f64,
    pub trend_percentage: f64,
    pub trend_positive: bool,
    pub comparison_text: String,
    pub chart_data: Vec<TimeSeriesPoint>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secondary_series: BTreeMap<String, SeriesValues>,
}

impl StatBundle {
    /// Assemble a bundle, deriving the trend fields from `chart_data`.
    pub fn new(period: Period, main_value: f64, chart_data: Vec<TimeSeriesPoint>) -> Self {
        let trend = Trend::of_series(&chart_data);
        Self {
            period,
            main_value,
            trend_percentage: trend.percentage,
            trend_positive: trend.positive,
            comparison_text: period.spec().comparison.to_string(),
            chart_data,
            secondary_series: BTreeMap::new(),
        }
    }

    pub fn with_series(mut self, name: impl Into<String>, series: SeriesValues) -> Self {
        self.secondary_series.insert(name.into(), series);
        self
    }

    pub fn trend(&self) -> Trend {
        Trend {
            percentage: self.trend_percentage,
            positive: self.trend_positive,
        }
    }

    pub fn first_value(&self) -> Option<f64> {
        self.chart_data.first().map(|p| p.value)
    }

    pub fn last_value(&self) -> Option<f64> {
        self.chart_data.last().map(|p| p.value)
    }

    pub fn series(&self, name: &str) -> Option<&SeriesValues> {
        self.secondary_series.get(name)
    }
}
