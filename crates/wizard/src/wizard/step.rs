//! Wizard step sequence.
//!
//! The four form steps advance linearly; `Result` is terminal and only
//! reachable through a successful submission.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of form steps (excluding `Result`).
pub const FORM_STEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Name and age.
    #[default]
    Personal,
    /// Employment type and experience.
    Employment,
    /// Income, debt, credit score and defaults.
    Financial,
    /// Requested amount and term.
    Credit,
    /// Evaluation outcome.
    Result,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        Self::Personal,
        Self::Employment,
        Self::Financial,
        Self::Credit,
        Self::Result,
    ];

    /// Next form step. `None` from `Credit` (submission is the only way
    /// forward) and from `Result`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Employment),
            Self::Employment => Some(Self::Financial),
            Self::Financial => Some(Self::Credit),
            Self::Credit | Self::Result => None,
        }
    }

    /// Previous form step. `None` from `Personal` and from `Result`.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal | Self::Result => None,
            Self::Employment => Some(Self::Personal),
            Self::Financial => Some(Self::Employment),
            Self::Credit => Some(Self::Financial),
        }
    }

    pub fn is_form_step(self) -> bool {
        self != Self::Result
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Employment => "employment",
            Self::Financial => "financial",
            Self::Credit => "credit",
            Self::Result => "result",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Employment => "Employment Information",
            Self::Financial => "Financial Information",
            Self::Credit => "Credit Details",
            Self::Result => "Evaluation Result",
        }
    }

    /// 1-indexed position for progress display; `None` for `Result`.
    pub fn step_number(&self) -> Option<usize> {
        match self {
            Self::Personal => Some(1),
            Self::Employment => Some(2),
            Self::Financial => Some(3),
            Self::Credit => Some(4),
            Self::Result => None,
        }
    }

    /// Completion percentage (0-100).
    pub fn progress_percent(&self) -> u8 {
        match self.step_number() {
            Some(num) => ((num - 1) * 100 / FORM_STEPS) as u8,
            None => 100,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
