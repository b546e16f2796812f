//! Expiration Evictor Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{current_timestamp_secs, StatsRecorder, Store};
use crate::logger::Logger;

/// Removes every entry expired at `now`, holding the write lock for the whole scan.
///
/// Each evicted key is reported through `logger`. Returns the number removed.
pub fn sweep<V>(store: &RwLock<Store<V>>, logger: &dyn Logger, now: u64) -> usize {
    let mut guard = store.write();
    let evicted = guard.evict_expired(now);

    for key in &evicted {
        logger.printf(format_args!("Evicting {}", key));
    }

    evicted.len()
}

/// Spawns the task that sweeps expired entries once per `period`.
///
/// The first sweep runs one full period after spawning. The task exits when
/// `shutdown` changes or its sender is dropped; a sweep already running
/// completes first.
///
/// # Returns
/// A JoinHandle for the spawned task.
pub fn spawn_evictor<V>(
    store: Arc<RwLock<Store<V>>>,
    stats: Arc<StatsRecorder>,
    logger: Arc<dyn Logger>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting eviction task with interval of {} seconds",
            period.as_secs()
        );

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    let removed = sweep(&*store, logger.as_ref(), current_timestamp_secs());
                    stats.record_evictions(removed);

                    if removed > 0 {
                        debug!("Eviction sweep: removed {} expired entries", removed);
                    }
                }
            }
        }

        debug!("Eviction task stopped");
    })
}
