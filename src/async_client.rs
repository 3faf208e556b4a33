//! Async wrapper around [`Dashboard`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all dashboard operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free of
//! file IO from the settings store.
//!
//! # Example
//!
//! ```no_run
//! use folio_dash::{AsyncDashboard, Period, Surface};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dash = AsyncDashboard::builder().in_memory().build().await.unwrap();
//!
//!     let stats = dash.fetch(Surface::P2p, Period::Monthly).await.unwrap();
//!     let settings = dash.run(|d| d.settings()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{DashError, Result};
use crate::generator::Surface;
use crate::models::{Period, ReadState, Settings, StatBundle};
use crate::Dashboard;

// ---------------------------------------------------------------------------
// AsyncDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDashboard`] instance.
#[derive(Default)]
pub struct AsyncDashboardBuilder {
    store_dir: Option<PathBuf>,
    in_memory: bool,
    seed: Option<u64>,
}

impl AsyncDashboardBuilder {
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the async dashboard.
    ///
    /// Opening a file store touches the filesystem, so this runs on the
    /// blocking thread pool.
    pub async fn build(self) -> Result<AsyncDashboard> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Dashboard::builder();
            if let Some(dir) = self.store_dir {
                builder = builder.store_dir(dir);
            }
            if self.in_memory {
                builder = builder.in_memory();
            }
            if let Some(seed) = self.seed {
                builder = builder.seed(seed);
            }
            let dash = builder.build()?;
            Ok(AsyncDashboard {
                inner: Arc::new(Mutex::new(dash)),
            })
        })
        .await
        .map_err(|e| DashError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDashboard
// ---------------------------------------------------------------------------

/// Async wrapper around [`Dashboard`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`Dashboard`] is
/// protected by a [`Mutex`].
#[derive(Clone)]
pub struct AsyncDashboard {
    inner: Arc<Mutex<Dashboard>>,
}

impl AsyncDashboard {
    pub fn builder() -> AsyncDashboardBuilder {
        AsyncDashboardBuilder::default()
    }

    /// Run a sync dashboard operation on the blocking thread pool.
    ///
    /// The closure receives `&mut Dashboard` and should return a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Dashboard) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dash = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = dash
                .lock()
                .map_err(|_| DashError::InvalidArgument("Dashboard lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| DashError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// One-off stats for `surface`, bypassing memoization.
    pub async fn fetch(&self, surface: Surface, period: Period) -> Result<StatBundle> {
        self.run(move |d| Ok(d.fetch(surface, period))).await
    }

    pub async fn settings(&self) -> Result<Settings> {
        self.run(|d| d.settings()).await
    }

    pub async fn save_settings(&self, settings: Settings) -> Result<()> {
        self.run(move |d| d.save_settings(&settings)).await
    }

    pub async fn read_state(&self) -> Result<ReadState> {
        self.run(|d| d.read_state()).await
    }

    pub async fn save_read_state(&self, state: ReadState) -> Result<()> {
        self.run(move |d| d.save_read_state(&state)).await
    }
}
