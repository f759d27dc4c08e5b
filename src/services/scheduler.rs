use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

pub const MIN_INTERVAL_SECS: u64 = 15;
pub const MAX_INTERVAL_SECS: u64 = 3600;

/// Clamp a requested auto-check interval to the allowed range.
pub fn clamp_interval(secs: u64) -> u64 {
    secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SchedulerState {
    Idle,
    Running { interval_secs: u64 },
}

/// Timer driving periodic checks.
///
/// Each tick sends one trigger on the channel; the receiving side owns the
/// check routine (and its overlap guard). Stopping only cancels future
/// ticks — a check already in flight still completes.
pub struct RefreshScheduler {
    tick_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
    interval_secs: Option<u64>,
}

impl RefreshScheduler {
    pub fn new(tick_tx: mpsc::Sender<()>) -> Self {
        Self {
            tick_tx,
            handle: None,
            interval_secs: None,
        }
    }

    /// Arm the timer, clamping the interval to `[15, 3600]` seconds.
    /// Starting while already running replaces the old timer. Returns the
    /// interval actually armed.
    pub fn start(&mut self, interval_secs: u64) -> u64 {
        self.stop();

        let secs = clamp_interval(interval_secs);
        if secs != interval_secs {
            tracing::info!(
                requested = interval_secs,
                armed = secs,
                "Auto-check interval clamped"
            );
        }

        let tx = self.tick_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(secs));
            // interval() fires immediately; the first real tick comes after
            // one full period.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(()).await.is_err() {
                    tracing::warn!("Check trigger channel closed — scheduler exiting");
                    break;
                }
            }
        });

        self.handle = Some(handle);
        self.interval_secs = Some(secs);
        tracing::info!(interval_secs = secs, "Auto-check scheduler armed");
        secs
    }

    /// Cancel future ticks. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::info!("Auto-check scheduler stopped");
        }
        self.interval_secs = None;
    }

    pub fn state(&self) -> SchedulerState {
        match self.interval_secs {
            Some(interval_secs) => SchedulerState::Running { interval_secs },
            None => SchedulerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval_secs.is_some()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
