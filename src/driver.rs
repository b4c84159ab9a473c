//! The driver loop.
//!
//! ```text
//! load settings ──► first_load? ──yes──► seed reference data + entities
//!                        │no
//!                        ▼
//!                 load identifiers
//!                        │
//!                        ▼
//!        ┌──► continous_loading && !shutdown? ──no──► done
//!        │               │yes
//!        │               ▼
//!        │         run one batch
//!        │               │
//!        │        pause (interruptible)
//!        │               │
//!        └──────── reload settings
//! ```

use crate::config::load_settings;
use crate::error::DatagenError;
use crate::pipeline::{run_batch, BatchMetrics};
use crate::seed::{load_identifiers, seed_all};
use datagen_core::{AccountsStore, LogisticsStore, RetailStore, Stores};
use datagen_generator::DataGenerator;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::time::Instant;
use tracing::info;

/// What a finished run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether this run performed the first-load seeding.
    pub seeded: bool,
    /// Batches completed.
    pub batches: u64,
    /// Counters summed over all batches.
    pub totals: BatchMetrics,
    /// Whether the loop ended because of a shutdown signal.
    pub interrupted: bool,
}

/// Runs seeding and the generation loop against one set of stores.
pub struct Driver {
    generator: DataGenerator,
    shutdown: Option<broadcast::Receiver<()>>,
    stop_requested: bool,
}

impl Driver {
    pub fn new(generator: DataGenerator) -> Self {
        Self {
            generator,
            shutdown: None,
            stop_requested: false,
        }
    }

    /// Stop the loop once a message arrives on `shutdown`.
    ///
    /// A batch in progress is finished first; a pause is cut short.
    pub fn with_shutdown(mut self, shutdown: broadcast::Receiver<()>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    /// Seed or load identifiers, then run batches until the settings
    /// table turns `continous_loading` off or a shutdown is requested.
    pub async fn run<R, L, A>(
        &mut self,
        stores: &mut Stores<R, L, A>,
    ) -> Result<RunSummary, DatagenError>
    where
        R: RetailStore,
        L: LogisticsStore,
        A: AccountsStore,
    {
        let mut summary = RunSummary::default();
        let mut settings = load_settings(&mut stores.retail).await?;

        let ids = if settings.first_load() {
            info!("First load: seeding reference data, warehouses and customers");
            summary.seeded = true;
            seed_all(stores, &mut self.generator).await?
        } else {
            load_identifiers(stores).await?
        };

        while settings.continuous_loading() {
            if self.shutdown_requested() {
                break;
            }

            let batch_size = settings.batch_size()?;
            let metrics = run_batch(stores, &mut self.generator, &ids, batch_size).await?;
            summary.batches += 1;
            summary.totals.merge(&metrics);

            let pause = settings.pause()?;
            if self.pause(pause).await {
                break;
            }
            settings = load_settings(&mut stores.retail).await?;
        }

        summary.interrupted = self.stop_requested;
        info!(
            "Generation finished after {} batches ({} orders, {} shipments, {} transactions)",
            summary.batches,
            summary.totals.orders,
            summary.totals.shipments,
            summary.totals.transactions
        );
        Ok(summary)
    }

    /// Check for a pending shutdown message without waiting.
    fn shutdown_requested(&mut self) -> bool {
        if let Some(shutdown) = self.shutdown.as_mut() {
            match shutdown.try_recv() {
                Ok(()) | Err(TryRecvError::Lagged(_)) => self.stop_requested = true,
                Err(TryRecvError::Closed) => self.shutdown = None,
                Err(TryRecvError::Empty) => {}
            }
        }
        if self.stop_requested {
            info!("Shutdown requested, stopping before the next batch");
        }
        self.stop_requested
    }

    /// Sleep for `pause`. Returns true when a shutdown cut it short.
    async fn pause(&mut self, pause: Duration) -> bool {
        let deadline = Instant::now() + pause;

        let received = match self.shutdown.as_mut() {
            Some(shutdown) => tokio::select! {
                result = shutdown.recv() => Some(result),
                _ = tokio::time::sleep_until(deadline) => None,
            },
            None => {
                tokio::time::sleep_until(deadline).await;
                None
            }
        };

        match received {
            None => false,
            Some(Ok(())) | Some(Err(RecvError::Lagged(_))) => {
                info!("Shutdown requested during pause");
                self.stop_requested = true;
                true
            }
            Some(Err(RecvError::Closed)) => {
                // Nobody can signal any more; finish the pause normally.
                self.shutdown = None;
                tokio::time::sleep_until(deadline).await;
                false
            }
        }
    }
}
