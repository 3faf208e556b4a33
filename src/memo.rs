//! Period-keyed memoization of generated statistics.
//!
//! Views re-render for many reasons that have nothing to do with the selected
//! period (opening a notification panel, hovering a card). Calling the
//! generator on every render would make the displayed numbers change on
//! every one of those. [`MemoizedStats`] keeps the last bundle and only
//! regenerates when the period actually changes.

use crate::generator::StatsProvider;
use crate::models::{Period, StatBundle};
use std::sync::Arc;

/// Single-slot cache in front of a [`StatsProvider`].
pub struct MemoizedStats<P> {
    provider: P,
    slot: Option<(Period, Arc<StatBundle>)>,
    misses: usize,
}

impl<P: StatsProvider> MemoizedStats<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            slot: None,
            misses: 0,
        }
    }

    /// Return the bundle for `period`, generating it only if the cached one
    /// belongs to a different period (or nothing is cached yet).
    pub fn get(&mut self, period: Period) -> Arc<StatBundle> {
        if let Some((cached, bundle)) = &self.slot {
            if *cached == period {
                tracing::debug!(%period, "stats memo hit");
                return Arc::clone(bundle);
            }
        }

        tracing::debug!(%period, "stats memo miss");
        self.misses += 1;
        let bundle = Arc::new(self.provider.fetch_period_stats(period));
        self.slot = Some((period, Arc::clone(&bundle)));
        bundle
    }

    /// The cached bundle, if any, without generating.
    pub fn peek(&self) -> Option<&Arc<StatBundle>> {
        self.slot.as_ref().map(|(_, bundle)| bundle)
    }

    /// Drop the cached bundle so the next [`get`](Self::get) regenerates.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Number of times the underlying provider has been called.
    pub fn generations(&self) -> usize {
        self.misses
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_inner(self) -> P {
        self.provider
    }
}
