//! Periodic tick trigger for the roll monitor.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::RollMonitor;

/// Owns the ticker task. Dropping the handle also stops the ticker.
#[derive(Debug)]
pub struct TickerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Detach the trigger and wait for the task to exit.
    ///
    /// A tick already running finishes first; none start after this returns.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            tracing::warn!(error = %e, "Roll monitor ticker ended abnormally");
        }
    }
}

impl RollMonitor {
    /// Start ticking every `process_frequency_ms` on the current tokio runtime.
    ///
    /// The period is read once here; restart the ticker to apply a new one.
    pub fn spawn(self: &Arc<Self>) -> TickerHandle {
        let period = self.host.config().process_frequency();
        let monitor = Arc::clone(self);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            tracing::info!(period_ms = period.as_millis() as u64, "Roll monitor ticker started");

            loop {
                tokio::select! {
                    biased;
                    // Fires on an explicit stop or when the handle is dropped
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        monitor.on_tick();
                    }
                }
            }

            tracing::info!("Roll monitor ticker stopped");
        });

        TickerHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}
