//! Tokio driver for [`InactivityTimer`].
//!
//! Responsibilities:
//! - Own the timer on a background task fed by a one-second interval
//! - Accept activity and prompt decisions over a bounded channel
//! - Publish every state change on a `watch` channel
//!
//! # Invariants
//! - The interval is only armed while the timer is active
//! - Dropping the monitor aborts the task, releasing the interval and the
//!   command channel
//! - Ticks are logical: missed ticks are delayed, never burst

use std::time::Duration;

use preeval_config::InactivityConfig;
use preeval_config::constants::INACTIVITY_CHANNEL_CAPACITY;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use crate::error::MonitorError;
use crate::inactivity::timer::{
    ActivityKind, Decision, InactivityCallbacks, InactivityTimer, TickOutcome, TimerState,
};

#[derive(Debug)]
enum Command {
    Activity(ActivityKind),
    Decide(Decision),
    Reset,
    Shutdown,
}

/// Handle to a running inactivity countdown.
pub struct InactivityMonitor {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<TimerState>,
    full_duration: u32,
    task: Option<JoinHandle<()>>,
}

impl InactivityMonitor {
    /// Start the countdown on the current tokio runtime.
    pub fn spawn<C>(config: InactivityConfig, callbacks: C) -> Self
    where
        C: InactivityCallbacks + Send + 'static,
    {
        let timer = InactivityTimer::with_callbacks(config.timeout_minutes, callbacks);
        let full_duration = timer.full_duration();
        let (state_tx, state_rx) = watch::channel(timer.state());
        let (command_tx, command_rx) = mpsc::channel(INACTIVITY_CHANNEL_CAPACITY);

        debug!(
            timeout_minutes = config.timeout_minutes,
            "Starting inactivity monitor"
        );
        // First deadline is one period after spawn.
        let ticker = arm(config.tick);
        let task = tokio::spawn(run(timer, ticker, config.tick, command_rx, state_tx));

        Self {
            commands: command_tx,
            state: state_rx,
            full_duration,
            task: Some(task),
        }
    }

    /// Latest published state.
    pub fn state(&self) -> TimerState {
        *self.state.borrow()
    }

    /// Length of a full countdown in seconds.
    pub fn full_duration(&self) -> u32 {
        self.full_duration
    }

    /// A receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state.clone()
    }

    /// Report user activity.
    ///
    /// Never blocks: when the channel is full the signal is dropped, since a
    /// pending activity already restarts the countdown.
    pub fn record_activity(&self, kind: ActivityKind) -> Result<(), MonitorError> {
        match self.commands.try_send(Command::Activity(kind)) {
            Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => Ok(()),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(MonitorError::Stopped),
        }
    }

    /// Answer the expiry prompt.
    pub async fn decide(&self, decision: Decision) -> Result<(), MonitorError> {
        self.send(Command::Decide(decision)).await
    }

    /// Restart a full countdown, also after an abort.
    pub async fn reset(&self) -> Result<(), MonitorError> {
        self.send(Command::Reset).await
    }

    /// Wait until the countdown expires.
    pub async fn expired(&self) -> Result<TimerState, MonitorError> {
        let mut state = self.state.clone();
        let current = state
            .wait_for(|s| s.expired)
            .await
            .map_err(|_| MonitorError::Stopped)?;
        Ok(*current)
    }

    /// Stop the task and wait for it to finish. Later calls return `Stopped`.
    pub async fn shutdown(&mut self) -> Result<(), MonitorError> {
        let Some(task) = self.task.take() else {
            return Err(MonitorError::Stopped);
        };
        let _ = self.commands.send(Command::Shutdown).await;
        task.await
            .map_err(|e| MonitorError::TaskFailed(e.to_string()))
    }

    async fn send(&self, command: Command) -> Result<(), MonitorError> {
        if self.task.is_none() {
            return Err(MonitorError::Stopped);
        }
        self.commands
            .send(command)
            .await
            .map_err(|_| MonitorError::Stopped)
    }
}

impl Drop for InactivityMonitor {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn arm(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

async fn run<C: InactivityCallbacks>(
    mut timer: InactivityTimer<C>,
    ticker: Interval,
    period: Duration,
    mut commands: mpsc::Receiver<Command>,
    state: watch::Sender<TimerState>,
) {
    let mut ticker = Some(ticker);

    loop {
        tokio::select! {
            _ = next_tick(&mut ticker) => {
                if timer.tick() == TickOutcome::Expired {
                    info!("Inactivity timeout reached, awaiting decision");
                    ticker = None;
                }
            }
            command = commands.recv() => match command {
                Some(Command::Activity(kind)) => {
                    if timer.record_activity(kind) {
                        if let Some(ticker) = ticker.as_mut() {
                            ticker.reset();
                        }
                    }
                }
                Some(Command::Decide(decision)) => {
                    if timer.resolve(decision) {
                        info!(?decision, "Inactivity prompt answered");
                        if timer.is_active() {
                            ticker = Some(arm(period));
                        }
                    }
                }
                Some(Command::Reset) => {
                    timer.reset();
                    ticker = Some(arm(period));
                }
                Some(Command::Shutdown) | None => break,
            },
        }
        state.send_replace(timer.state());
    }

    debug!("Inactivity monitor stopped");
}
