//! The generic poll-transform-publish loop. Every source binary is one
//! instantiation of this with a different adapter and field mapping.

use std::time::Duration;

use log::{info, warn};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::shared::error::PollError;
use crate::shared::traits::{FieldMapper, MetricSink, SourceAdapter};

/// Runs fetch -> map -> write on a fixed interval. One cycle completes or
/// fails before the next begins; there is no queueing and no batching
/// across cycles. A failed cycle is logged and the loop continues after
/// its normal interval.
pub struct Poller<A, M, S> {
    adapter: A,
    mapper: M,
    sink: S,
    interval: Duration,
}

impl<A, M, S> Poller<A, M, S>
where
    A: SourceAdapter + Send,
    M: FieldMapper<A::Raw>,
    S: MetricSink,
{
    pub fn new(adapter: A, mapper: M, sink: S, interval: Duration) -> Self {
        Self {
            adapter,
            mapper,
            sink,
            interval,
        }
    }

    async fn cycle(&mut self) -> Result<usize, PollError> {
        let raw = self.adapter.fetch().await?;
        let points = self.mapper.map(&raw)?;
        self.sink.write(&points).await?;
        Ok(points.len())
    }

    /// Runs until the shutdown signal flips to true. The first cycle runs
    /// immediately; subsequent cycles are one interval apart.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "{}: polling every {:?}",
            self.adapter.name(),
            self.interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                changed = shutdown.changed() => {
                    // A closed channel means the signal task is gone; stop.
                    if changed.is_err() || *shutdown.borrow() {
                        info!("{}: shutting down", self.adapter.name());
                        break;
                    }
                    continue;
                }
            }

            match self.cycle().await {
                Ok(count) => info!("{}: wrote {} point(s)", self.adapter.name(), count),
                Err(e) => warn!(
                    "{}: cycle failed, retrying next interval: {}",
                    self.adapter.name(),
                    e
                ),
            }
        }
    }
}

/// Shutdown signal wired to ctrl-c, for the source binaries.
pub fn shutdown_on_ctrl_c() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(true);
        }
    });
    rx
}
