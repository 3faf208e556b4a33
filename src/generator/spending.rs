//! Statistics page: spending against savings over the selected range.

use super::{currency, label_values, spread, StatsProvider};
use crate::config::{BASE_INCOME, BASE_SPENDING};
use crate::models::{Period, SeriesValues, StatBundle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SpendingStats<R = StdRng> {
    rng: R,
}

impl SpendingStats<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SpendingStats<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chart is spending per label and `main_value` is total spending.
    /// Savings are income minus spending, floored at the minimum value.
    pub fn generate(&mut self, period: Period) -> StatBundle {
        let labels = period.labels();
        let spending = spread(&mut self.rng, period, BASE_SPENDING, (0.6, 1.4));
        let income = spread(&mut self.rng, period, BASE_INCOME, (0.8, 1.2));

        let savings: Vec<f64> = income
            .iter()
            .zip(&spending)
            .map(|(inc, spent)| currency(inc - spent))
            .collect();
        let total = currency(spending.iter().sum());

        let chart = label_values(&labels, spending.clone());

        tracing::debug!(surface = "spending", %period, points = chart.len(), "generated stats");

        StatBundle::new(period, total, chart)
            .with_series("spending", SeriesValues::Points(label_values(&labels, spending)))
            .with_series("savings", SeriesValues::Points(label_values(&labels, savings)))
    }
}

impl<R: Rng> StatsProvider for SpendingStats<R> {
    fn fetch_period_stats(&mut self, period: Period) -> StatBundle {
        self.generate(period)
    }
}
