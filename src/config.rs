use crate::models::{CoinId, Period};
use std::path::PathBuf;

pub const STORE_FILE: &str = "settings.json";
pub const SETTINGS_KEY: &str = "settings";
pub const READ_STATE_KEY: &str = "readState";

/// Starting portfolio balance for a single day, in display currency.
pub const BASE_BALANCE: f64 = 24_500.0;
/// Daily spending baseline before the period multiplier is applied.
pub const BASE_SPENDING: f64 = 180.0;
/// Daily income baseline before the period multiplier is applied.
pub const BASE_INCOME: f64 = 260.0;
/// Daily P2P trade volume baseline.
pub const BASE_VOLUME: f64 = 1_250.0;
/// Floor applied to every currency-denominated value.
pub const MIN_VALUE: f64 = 0.01;

/// Coins shown on the P2P page, in display order.
pub const P2P_COINS: [CoinId; 4] = [
    CoinId::Bitcoin,
    CoinId::Ethereum,
    CoinId::Solana,
    CoinId::Cardano,
];

/// Static description of a period: point count, magnitude and copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodSpec {
    pub points: usize,
    pub multiplier: f64,
    pub comparison: &'static str,
}

/// Inclusive range for random per-coin trade counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    pub min: u32,
    pub max: u32,
}

pub fn period_spec(period: Period) -> PeriodSpec {
    match period {
        Period::Daily => PeriodSpec {
            points: 24,
            multiplier: 1.0,
            comparison: "vs yesterday",
        },
        Period::Weekly => PeriodSpec {
            points: 7,
            multiplier: 7.0,
            comparison: "vs last week",
        },
        Period::Monthly => PeriodSpec {
            points: 30,
            multiplier: 30.0,
            comparison: "vs last month",
        },
        Period::Yearly => PeriodSpec {
            points: 12,
            multiplier: 365.0,
            comparison: "vs last year",
        },
    }
}

/// Bounds grow with the period tier so longer periods show larger counts.
pub fn count_bounds(period: Period) -> CountBounds {
    match period {
        Period::Daily => CountBounds { min: 1, max: 12 },
        Period::Weekly => CountBounds { min: 5, max: 45 },
        Period::Monthly => CountBounds { min: 20, max: 160 },
        Period::Yearly => CountBounds { min: 150, max: 1_400 },
    }
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Time-axis labels for a period, oldest first.
pub fn period_labels(period: Period) -> Vec<String> {
    match period {
        Period::Daily => (0..24).map(|h| format!("{:02}:00", h)).collect(),
        Period::Weekly => WEEKDAYS.iter().map(|d| d.to_string()).collect(),
        Period::Monthly => (1..=30).map(|d| d.to_string()).collect(),
        Period::Yearly => MONTHS.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn default_store_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("folio-dash")
    } else {
        PathBuf::from(".folio-dash")
    }
}
