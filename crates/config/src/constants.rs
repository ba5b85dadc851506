//! Centralized constants for the pre-evaluator workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default base URL of the evaluation backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path appended to the API URL when no explicit advanced URL is configured.
pub const DEFAULT_ADVANCED_PATH: &str = "/advanced";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Inactivity Timer Defaults
// =============================================================================

/// Default inactivity timeout in minutes.
pub const DEFAULT_INACTIVITY_MINUTES: u32 = 10;

/// Maximum allowed inactivity timeout in minutes (4 hours).
pub const MAX_INACTIVITY_MINUTES: u32 = 240;

/// Length of one logical countdown tick in milliseconds.
pub const INACTIVITY_TICK_MS: u64 = 1000;

/// Capacity of the activity/decision channel feeding the inactivity monitor.
pub const INACTIVITY_CHANNEL_CAPACITY: usize = 64;

// =============================================================================
// Application Input Bounds
// =============================================================================

/// Minimum applicant age accepted by the personal step.
pub const MIN_AGE: u32 = 18;

/// Maximum applicant age accepted by the personal step.
pub const MAX_AGE: u32 = 120;

/// Minimum credit score accepted by the financial step.
pub const MIN_CREDIT_SCORE: u32 = 300;

/// Maximum credit score accepted by the financial step.
pub const MAX_CREDIT_SCORE: u32 = 850;

/// Minimum months of experience for salaried employees.
pub const EMPLOYEE_MIN_MONTHS: u32 = 6;

/// Minimum months of experience for self-employed applicants.
pub const SELF_EMPLOYED_MIN_MONTHS: u32 = 12;

/// Maximum loan term in months accepted by the credit step.
pub const MAX_TERM_MONTHS: u32 = 360;

// =============================================================================
// Advanced API Input Bounds
// =============================================================================

/// Minimum user name length accepted by the login endpoints.
pub const MIN_USER_NAME_LEN: usize = 2;

/// Maximum user name length accepted by the login endpoints.
pub const MAX_USER_NAME_LEN: usize = 20;

/// Earliest year accepted by the date configuration endpoint.
pub const MIN_CONFIG_YEAR: u16 = 2020;

/// Latest year accepted by the date configuration endpoint.
pub const MAX_CONFIG_YEAR: u16 = 2030;
