//! P2P page: trade volume and per-coin trade counts.

use super::{currency, label_values, spread, StatsProvider};
use crate::config::{self, BASE_VOLUME, P2P_COINS};
use crate::models::{Period, SeriesValues, StatBundle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Name of the scalar series holding per-coin totals, in [`P2P_COINS`] order.
pub const TRADES_SERIES: &str = "trades";

pub struct P2pStats<R = StdRng> {
    rng: R,
}

impl P2pStats<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> P2pStats<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chart is volume per label and `main_value` is total volume.
    ///
    /// Each tracked coin gets a scalar series of trade counts, one per label,
    /// drawn from [`config::count_bounds`] for the period.
    pub fn generate(&mut self, period: Period) -> StatBundle {
        let labels = period.labels();
        let volume = spread(&mut self.rng, period, BASE_VOLUME, (0.5, 1.5));
        let total = currency(volume.iter().sum());
        let bounds = config::count_bounds(period);

        let mut bundle = StatBundle::new(period, total, label_values(&labels, volume));

        let mut totals: Vec<f64> = Vec::with_capacity(P2P_COINS.len());
        for coin in P2P_COINS {
            let counts: Vec<f64> = (0..labels.len())
                .map(|_| {
                    let count: u32 = self.rng.gen_range(bounds.min..=bounds.max);
                    f64::from(count)
                })
                .collect();
            totals.push(counts.iter().sum::<f64>());
            bundle = bundle.with_series(coin.as_str(), SeriesValues::Scalars(counts));
        }

        tracing::debug!(surface = "p2p", %period, points = labels.len(), "generated stats");

        bundle.with_series(TRADES_SERIES, SeriesValues::Scalars(totals))
    }
}

impl<R: Rng> StatsProvider for P2pStats<R> {
    fn fetch_period_stats(&mut self, period: Period) -> StatBundle {
        self.generate(period)
    }
}
