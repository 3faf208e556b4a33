//! Portfolio dashboard SDK for Rust.
//!
//! Produces the figures a crypto portfolio dashboard displays: per-period
//! statistics for the portfolio, spending and P2P pages, a canonical coin
//! registry, and persisted user settings. All statistics are generated
//! in-process behind the [`StatsProvider`] trait, so a live data source can
//! be dropped in later without changing consumers.
//!
//! # Quick start
//!
//! ```no_run
//! use folio_dash::{Dashboard, Period};
//!
//! let mut dash = Dashboard::builder().in_memory().seed(7).build().unwrap();
//!
//! // Period stats, memoized per surface
//! let mut portfolio = dash.portfolio();
//! let weekly = portfolio.get(Period::Weekly);
//! assert_eq!(weekly.chart_data.len(), 7);
//!
//! // Persisted settings
//! let mut settings = dash.settings().unwrap();
//! settings.default_period = Period::Monthly;
//! dash.save_settings(&settings).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod coins;
pub mod config;
pub mod error;
pub mod generator;
pub mod memo;
pub mod models;
pub mod store;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncDashboard;
pub use coins::CoinRegistry;
pub use error::{DashError, Result};
pub use generator::{generate, StatsProvider, Surface};
pub use memo::MemoizedStats;
pub use models::{CoinId, Period, ReadState, Settings, StatBundle, TimeSeriesPoint, Trend};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use view::{PanelView, StatsPanel};

use generator::{P2pStats, PortfolioStats, SpendingStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Dashboard`] instance.
///
/// Use [`Dashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardBuilder::build) to create it.
#[derive(Default)]
pub struct DashboardBuilder {
    store_dir: Option<PathBuf>,
    in_memory: bool,
    seed: Option<u64>,
}

impl DashboardBuilder {
    /// Set a custom directory for the settings file.
    ///
    /// If not set, the platform config directory is used (e.g.
    /// `~/.config/folio-dash` on Linux).
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep settings in memory only. Nothing is written to disk.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Seed every generator so the same seed reproduces the same numbers.
    ///
    /// Without a seed each generator draws from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Dashboard> {
        let store: Box<dyn KeyValueStore + Send> = if self.in_memory {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::open(self.store_dir)?)
        };
        Ok(Dashboard::with_store(store, self.seed))
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The main entry point: owns the settings store and coin registry and hands
/// out memoized generators for each surface.
///
/// Created via [`Dashboard::builder()`] or [`Dashboard::with_store()`].
pub struct Dashboard {
    store: Box<dyn KeyValueStore + Send>,
    registry: CoinRegistry,
    seed: Option<u64>,
}

impl Dashboard {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// Build a dashboard over an already constructed store.
    pub fn with_store(store: Box<dyn KeyValueStore + Send>, seed: Option<u64>) -> Self {
        Self {
            store,
            registry: CoinRegistry::default(),
            seed,
        }
    }

    fn rng_for(&self, surface: Surface) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ surface.seed_offset()),
            None => StdRng::from_entropy(),
        }
    }

    // -- Stats accessors ---------------------------------------------------

    /// Memoized portfolio balance stats (tab cards).
    pub fn portfolio(&self) -> MemoizedStats<PortfolioStats> {
        MemoizedStats::new(PortfolioStats::with_rng(self.rng_for(Surface::Portfolio)))
    }

    /// Memoized spending/savings stats (statistics page).
    pub fn spending(&self) -> MemoizedStats<SpendingStats> {
        MemoizedStats::new(SpendingStats::with_rng(self.rng_for(Surface::Spending)))
    }

    /// Memoized P2P volume and per-coin trade counts.
    pub fn p2p(&self) -> MemoizedStats<P2pStats> {
        MemoizedStats::new(P2pStats::with_rng(self.rng_for(Surface::P2p)))
    }

    /// Type-erased provider for `surface`.
    pub fn provider(&self, surface: Surface) -> Box<dyn StatsProvider + Send> {
        surface.provider(self.rng_for(surface))
    }

    /// One-off stats for `surface`, bypassing memoization.
    pub fn fetch(&self, surface: Surface, period: Period) -> StatBundle {
        self.provider(surface).fetch_period_stats(period)
    }

    /// Portfolio stats panel starting at the user's saved default period.
    pub fn panel(&self) -> Result<StatsPanel<PortfolioStats>> {
        let settings = self.settings()?;
        Ok(StatsPanel::new(
            PortfolioStats::with_rng(self.rng_for(Surface::Portfolio)),
            settings.default_period,
        ))
    }

    pub fn coins(&self) -> &CoinRegistry {
        &self.registry
    }

    // -- Persisted state ---------------------------------------------------

    pub fn settings(&self) -> Result<Settings> {
        Settings::load_from(&*self.store)
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        settings.save_to(&mut *self.store)
    }

    pub fn read_state(&self) -> Result<ReadState> {
        ReadState::load_from(&*self.store)
    }

    pub fn save_read_state(&mut self, state: &ReadState) -> Result<()> {
        state.save_to(&mut *self.store)
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        &mut *self.store
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seed = match self.seed {
            Some(seed) => seed.to_string(),
            None => "entropy".to_string(),
        };
        write!(
            f,
            "Dashboard(store={}, seed={}, coins={})",
            self.store.kind(),
            seed,
            self.registry.len()
        )
    }
}
