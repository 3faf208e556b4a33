//! Minimal view-model for a stats card with a notification panel.
//!
//! Holds the UI state that can trigger a re-render and produces a
//! [`PanelView`] snapshot per render. Stats come from a [`MemoizedStats`], so
//! only a period change alters the numbers shown.

use crate::generator::StatsProvider;
use crate::memo::MemoizedStats;
use crate::models::{Period, StatBundle};
use std::sync::Arc;

/// What a single render of the panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub period: Period,
    pub main_value: f64,
    pub trend_percentage: f64,
    pub trend_positive: bool,
    pub comparison_text: String,
    pub notifications_open: bool,
    pub stats: Arc<StatBundle>,
}

pub struct StatsPanel<P> {
    period: Period,
    notifications_open: bool,
    stats: MemoizedStats<P>,
}

impl<P: StatsProvider> StatsPanel<P> {
    pub fn new(provider: P, period: Period) -> Self {
        Self {
            period,
            notifications_open: false,
            stats: MemoizedStats::new(provider),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Select a period by toolbar key; unknown keys fall back to weekly.
    pub fn select(&mut self, key: &str) {
        self.period = Period::parse_or_default(key);
    }

    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_open = !self.notifications_open;
        self.notifications_open
    }

    pub fn render(&mut self) -> PanelView {
        let stats = self.stats.get(self.period);
        PanelView {
            period: self.period,
            main_value: stats.main_value,
            trend_percentage: stats.trend_percentage,
            trend_positive: stats.trend_positive,
            comparison_text: stats.comparison_text.clone(),
            notifications_open: self.notifications_open,
            stats,
        }
    }

    pub fn stats(&self) -> &MemoizedStats<P> {
        &self.stats
    }
}
