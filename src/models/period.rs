use crate::config::{self, PeriodSpec};
use crate::error::DashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Period — Coarse time bucket selecting chart granularity and magnitude
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    /// All periods, shortest first.
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];

    /// Parse a period key, falling back to [`Period::Weekly`] for anything
    /// unrecognized.
    ///
    /// Accepts the canonical names (`"daily"`, `"weekly"`, ...) as well as
    /// the range keys used by the chart toolbars (`"24H"`, `"7D"`, `"30D"`,
    /// `"1Y"`, ...).
    pub fn parse_or_default(key: &str) -> Period {
        match key.parse() {
            Ok(period) => period,
            Err(_) => {
                tracing::warn!(key, "unrecognized period, using weekly");
                Period::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    /// Number of chart points generated for this period.
    pub fn point_count(&self) -> usize {
        self.spec().points
    }

    pub fn spec(&self) -> PeriodSpec {
        config::period_spec(*self)
    }

    /// Time-axis labels, oldest first. Length always equals [`point_count`](Self::point_count).
    pub fn labels(&self) -> Vec<String> {
        config::period_labels(*self)
    }
}

impl FromStr for Period {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" | "24h" | "1d" => Ok(Period::Daily),
            "weekly" | "week" | "7d" | "1w" => Ok(Period::Weekly),
            "monthly" | "month" | "30d" | "1m" => Ok(Period::Monthly),
            "yearly" | "year" | "1y" | "12m" | "365d" => Ok(Period::Yearly),
            other => Err(DashError::InvalidArgument(format!(
                "Unknown period: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
