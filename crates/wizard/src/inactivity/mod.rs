//! Inactivity countdown with a continue/abort prompt on expiry.

pub mod monitor;
pub mod timer;

pub use monitor::InactivityMonitor;
pub use timer::{
    ActivityKind, Decision, FnCallbacks, InactivityCallbacks, InactivityTimer, TickOutcome,
    TimerPhase, TimerState, Urgency, format_seconds, urgency_for,
};
