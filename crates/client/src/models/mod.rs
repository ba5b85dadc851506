//! Data models for the evaluation service and the advanced API.

mod advanced;
mod common;
mod credit;

pub use advanced::{
    ChangeUserRequest, ContentStats, DateComponents, DateConfig, DateConfigRequest, FileContent,
    FileCreateRequest, FileInfo, FileListing, FileMetadata, FileOrigin, FileReadRequest,
    FileWriteRequest, GeneratedReport, LoadingStatus, LoginRequest, ReportRequest, SavedReport,
    SystemDate, SystemStatus, UserInfo, UserList, UserSession,
};
pub use common::ApiResponse;
pub use credit::{
    AgeLimits, CreditApplication, CreditScoreLimits, Decision, DtiLimits, EmploymentExperience,
    EmploymentType, EvaluationResult, HealthStatus, IncomeRequirements, LoanLimits, PolicyInfo,
};

/// Error body returned by the service on non-2xx responses.
///
/// `detail` is a string for handled errors and a list of validation entries
/// for schema failures.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationEntry>),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ValidationEntry {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl ErrorDetail {
    /// Flatten the detail into one display string.
    pub fn into_message(self) -> String {
        match self {
            Self::Message(msg) => msg,
            Self::Validation(entries) => entries
                .into_iter()
                .map(|entry| {
                    let field = entry
                        .loc
                        .last()
                        .map(|loc| match loc {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .unwrap_or_default();
                    if field.is_empty() {
                        entry.msg
                    } else {
                        format!("{field}: {}", entry.msg)
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
