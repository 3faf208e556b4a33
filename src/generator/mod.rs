//! Period-parameterized mock statistics.
//!
//! Each dashboard surface has a generator that turns a [`Period`] into a
//! [`StatBundle`]: a headline value, a trend and one or more chart series.
//! Generators own their random source so a seeded rng reproduces the same
//! numbers, and all of them sit behind [`StatsProvider`] so a live data
//! source can replace them without touching consumers.

pub mod p2p;
pub mod portfolio;
pub mod spending;

pub use p2p::P2pStats;
pub use portfolio::PortfolioStats;
pub use spending::SpendingStats;

use crate::config::MIN_VALUE;
use crate::models::{Period, StatBundle, TimeSeriesPoint};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of period statistics for one dashboard surface.
pub trait StatsProvider {
    fn fetch_period_stats(&mut self, period: Period) -> StatBundle;
}

impl<P: StatsProvider + ?Sized> StatsProvider for Box<P> {
    fn fetch_period_stats(&mut self, period: Period) -> StatBundle {
        (**self).fetch_period_stats(period)
    }
}

/// Dashboard page a generator feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Portfolio,
    Spending,
    P2p,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Portfolio, Surface::Spending, Surface::P2p];

    /// Offset mixed into a shared seed so surfaces don't mirror each other.
    pub(crate) fn seed_offset(&self) -> u64 {
        match self {
            Surface::Portfolio => 0x9E37_79B9,
            Surface::Spending => 0x85EB_CA6B,
            Surface::P2p => 0xC2B2_AE35,
        }
    }

    /// Build this surface's generator over `rng`.
    pub fn provider<R>(&self, rng: R) -> Box<dyn StatsProvider + Send>
    where
        R: Rng + Send + 'static,
    {
        match self {
            Surface::Portfolio => Box::new(PortfolioStats::with_rng(rng)),
            Surface::Spending => Box::new(SpendingStats::with_rng(rng)),
            Surface::P2p => Box::new(P2pStats::with_rng(rng)),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Surface::Portfolio => "portfolio",
            Surface::Spending => "spending",
            Surface::P2p => "p2p",
        };
        f.write_str(name)
    }
}

/// Generate portfolio statistics for `period` from a fresh entropy-seeded rng.
pub fn generate(period: Period) -> StatBundle {
    PortfolioStats::from_entropy().generate(period)
}

/// Like [`generate`], but takes a raw period key. Unknown keys map to weekly.
pub fn generate_for_key(key: &str) -> StatBundle {
    generate(Period::parse_or_default(key))
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// Round to cents and clamp to the positive floor.
///
/// Non-finite inputs collapse to the floor so a bad multiplier can never leak
/// NaN into a chart.
pub(crate) fn currency(value: f64) -> f64 {
    if !value.is_finite() {
        return MIN_VALUE;
    }
    let rounded = (value * 100.0).round() / 100.0;
    rounded.max(MIN_VALUE)
}

/// Uniform sample in `[lo, hi)`.
pub(crate) fn jitter<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    rng.gen_range(lo..hi)
}

/// Evenly split a period total across its points, with per-point noise.
pub(crate) fn spread<R: Rng>(
    rng: &mut R,
    period: Period,
    daily_base: f64,
    noise: (f64, f64),
) -> Vec<f64> {
    let spec = period.spec();
    let per_point = daily_base * spec.multiplier / spec.points as f64;
    (0..spec.points)
        .map(|_| currency(per_point * jitter(rng, noise.0, noise.1)))
        .collect()
}

/// Pair each label with its value, in order.
pub(crate) fn label_values(labels: &[String], values: Vec<f64>) -> Vec<TimeSeriesPoint> {
    labels
        .iter()
        .zip(values)
        .map(|(label, value)| TimeSeriesPoint::new(label.clone(), value))
        .collect()
}
