//! Portfolio tab cards: balance history plus income and expenses.

use super::{currency, jitter, label_values, spread, StatsProvider};
use crate::config::{BASE_BALANCE, BASE_INCOME, BASE_SPENDING};
use crate::models::{Period, SeriesValues, StatBundle, TimeSeriesPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-step balance drift, as a fraction of the previous balance.
const DRIFT: (f64, f64) = (-0.04, 0.05);

/// Random-walk balance generator for the portfolio overview cards.
pub struct PortfolioStats<R = StdRng> {
    rng: R,
}

impl PortfolioStats<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PortfolioStats<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a balance walk with one point per period label.
    ///
    /// `main_value` is the closing balance. `income` and `expenses` are
    /// labeled series aligned with the chart.
    pub fn generate(&mut self, period: Period) -> StatBundle {
        let labels = period.labels();

        let mut balance = BASE_BALANCE * jitter(&mut self.rng, 0.9, 1.1);
        let mut chart = Vec::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                balance *= 1.0 + jitter(&mut self.rng, DRIFT.0, DRIFT.1);
            }
            balance = currency(balance);
            chart.push(TimeSeriesPoint::new(label.clone(), balance));
        }

        let income = spread(&mut self.rng, period, BASE_INCOME, (0.7, 1.3));
        let expenses = spread(&mut self.rng, period, BASE_SPENDING, (0.6, 1.4));

        tracing::debug!(surface = "portfolio", %period, points = chart.len(), "generated stats");

        StatBundle::new(period, balance, chart)
            .with_series("income", SeriesValues::Points(label_values(&labels, income)))
            .with_series("expenses", SeriesValues::Points(label_values(&labels, expenses)))
    }
}

impl<R: Rng> StatsProvider for PortfolioStats<R> {
    fn fetch_period_stats(&mut self, period: Period) -> StatBundle {
        self.generate(period)
    }
}
