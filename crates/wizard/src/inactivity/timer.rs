//! Inactivity countdown state machine.
//!
//! Pure and clock-free: every call to [`InactivityTimer::tick`] is one
//! logical second. The [`monitor`](super::monitor) module drives it from a
//! tokio interval.

use serde::Serialize;

/// User activity that restarts the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    PointerDown,
    PointerMove,
    KeyPress,
    Scroll,
    TouchStart,
}

/// Answer to the expiry prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Continue,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Active { remaining: u32 },
    Expired,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still active with this many seconds left.
    Counting(u32),
    /// The countdown just reached zero. Reported once per expiry.
    Expired,
    /// Already expired; nothing changed.
    Idle,
}

/// How close the countdown is to expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// More than half the time left.
    Calm,
    /// More than a quarter left.
    Warning,
    Critical,
}

/// Published view of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub is_active: bool,
    pub expired: bool,
}

/// Hooks invoked when the expiry prompt is answered.
pub trait InactivityCallbacks {
    /// The user chose to keep going.
    fn on_continue(&mut self) {}

    /// The user chose to end the session.
    fn on_timeout(&mut self) {}
}

impl InactivityCallbacks for () {}

/// Callbacks built from two closures.
pub struct FnCallbacks<C, T> {
    on_continue: C,
    on_timeout: T,
}

impl<C, T> FnCallbacks<C, T>
where
    C: FnMut(),
    T: FnMut(),
{
    pub fn new(on_continue: C, on_timeout: T) -> Self {
        Self {
            on_continue,
            on_timeout,
        }
    }
}

impl<C, T> InactivityCallbacks for FnCallbacks<C, T>
where
    C: FnMut(),
    T: FnMut(),
{
    fn on_continue(&mut self) {
        (self.on_continue)()
    }

    fn on_timeout(&mut self) {
        (self.on_timeout)()
    }
}

pub struct InactivityTimer<C = ()> {
    full_duration: u32,
    phase: TimerPhase,
    /// Expired and waiting for a decision.
    prompt_open: bool,
    callbacks: C,
}

impl InactivityTimer {
    /// A timer without callbacks.
    pub fn new(timeout_minutes: u32) -> Self {
        Self::with_callbacks(timeout_minutes, ())
    }
}

impl<C: InactivityCallbacks> InactivityTimer<C> {
    pub fn with_callbacks(timeout_minutes: u32, callbacks: C) -> Self {
        let full_duration = timeout_minutes.saturating_mul(60);
        Self {
            full_duration,
            phase: TimerPhase::Active {
                remaining: full_duration,
            },
            prompt_open: false,
            callbacks,
        }
    }

    /// Countdown length in seconds.
    pub fn full_duration(&self) -> u32 {
        self.full_duration
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, TimerPhase::Active { .. })
    }

    /// Expired with the continue/abort prompt still unanswered.
    pub fn awaiting_decision(&self) -> bool {
        self.prompt_open
    }

    pub fn remaining_seconds(&self) -> u32 {
        match self.phase {
            TimerPhase::Active { remaining } => remaining,
            TimerPhase::Expired => 0,
        }
    }

    pub fn state(&self) -> TimerState {
        TimerState {
            remaining_seconds: self.remaining_seconds(),
            is_active: self.is_active(),
            expired: !self.is_active(),
        }
    }

    /// Restart the countdown. Ignored once expired; returns whether it applied.
    pub fn record_activity(&mut self, _kind: ActivityKind) -> bool {
        match self.phase {
            TimerPhase::Active { .. } => {
                self.phase = TimerPhase::Active {
                    remaining: self.full_duration,
                };
                true
            }
            TimerPhase::Expired => false,
        }
    }

    /// Advance one logical second.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            TimerPhase::Active { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.phase = TimerPhase::Expired;
                    self.prompt_open = true;
                    TickOutcome::Expired
                } else {
                    self.phase = TimerPhase::Active { remaining };
                    TickOutcome::Counting(remaining)
                }
            }
            TimerPhase::Expired => TickOutcome::Idle,
        }
    }

    /// Answer the expiry prompt.
    ///
    /// `Continue` calls `on_continue` and restarts the countdown; `Abort`
    /// calls `on_timeout` and stays expired. Returns `false` (and calls
    /// nothing) when no prompt is open.
    pub fn resolve(&mut self, decision: Decision) -> bool {
        if !self.prompt_open {
            return false;
        }
        self.prompt_open = false;
        match decision {
            Decision::Continue => {
                self.callbacks.on_continue();
                self.phase = TimerPhase::Active {
                    remaining: self.full_duration,
                };
            }
            Decision::Abort => self.callbacks.on_timeout(),
        }
        true
    }

    /// Back to a full, active countdown regardless of phase.
    pub fn reset(&mut self) {
        self.prompt_open = false;
        self.phase = TimerPhase::Active {
            remaining: self.full_duration,
        };
    }

    /// Remaining time as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format_seconds(self.remaining_seconds())
    }
}

/// `MM:SS`, minutes zero-padded to at least two digits.
pub fn format_seconds(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Urgency band for `remaining` out of `full` seconds.
pub fn urgency_for(remaining: u32, full: u32) -> Urgency {
    let remaining = u64::from(remaining) * 100;
    let full = u64::from(full);
    if remaining > full * 50 {
        Urgency::Calm
    } else if remaining > full * 25 {
        Urgency::Warning
    } else {
        Urgency::Critical
    }
}
