//! JSON formatter implementation.

use anyhow::Result;
use preeval_client::models::{
    DateConfig, FileContent, FileListing, GeneratedReport, LoadingStatus, SystemStatus,
    UserList, UserSession,
};
use preeval_client::{EvaluationResult, HealthStatus, PolicyInfo};
use serde::Serialize;

use crate::formatters::Formatter;

pub struct JsonFormatter;

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

impl Formatter for JsonFormatter {
    fn format_evaluation(&self, result: &EvaluationResult) -> Result<String> {
        pretty(result)
    }

    fn format_policy(&self, policy: &PolicyInfo) -> Result<String> {
        pretty(policy)
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        pretty(health)
    }

    fn format_session(&self, session: &UserSession) -> Result<String> {
        pretty(session)
    }

    fn format_users(&self, users: &UserList) -> Result<String> {
        pretty(users)
    }

    fn format_date(&self, date: &DateConfig) -> Result<String> {
        pretty(date)
    }

    fn format_files(&self, listing: &FileListing) -> Result<String> {
        pretty(listing)
    }

    fn format_file_content(&self, file: &FileContent) -> Result<String> {
        pretty(file)
    }

    fn format_loading(&self, status: &LoadingStatus) -> Result<String> {
        pretty(status)
    }

    fn format_system_status(&self, status: &SystemStatus) -> Result<String> {
        pretty(status)
    }

    fn format_report(&self, report: &GeneratedReport) -> Result<String> {
        pretty(report)
    }

    fn format_value(&self, value: &serde_json::Value) -> Result<String> {
        pretty(value)
    }
}
