//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and `WizardError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use preeval_client::ClientError;
use preeval_wizard::WizardError;

/// Structured exit codes for `preeval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Network, timeout, DNS or URL failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The requested file, report or user does not exist.
    NotFound = 4,

    /// Input rejected locally or by the service (missing fields, bad arguments, HTTP 400/422).
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ConnectionRefused(_) => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::ApiError {
                status: 400 | 422, ..
            } => ExitCode::ValidationError,

            ClientError::ApiError {
                status: 502 | 503 | 504,
                ..
            } => ExitCode::ServiceUnavailable,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { .. }
            | ClientError::Unsuccessful(_)
            | ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&WizardError> for ExitCode {
    fn from(err: &WizardError) -> Self {
        match err {
            WizardError::MissingFields(_) => ExitCode::ValidationError,
            WizardError::Evaluation { source, .. } => ExitCode::from(source),
            WizardError::SubmissionInFlight | WizardError::StepUnavailable(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `GeneralError` when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        // Wizard errors wrap client errors, so they are checked first.
        for cause in self.chain() {
            if let Some(wizard_err) = cause.downcast_ref::<WizardError>() {
                return ExitCode::from(wizard_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}
