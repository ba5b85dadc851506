//! Human-readable text formatter.
//!
//! Responsibilities:
//! - Render each response as labelled lines for a terminal.
//! - Render untyped payloads as indented `key: value` lines.
//!
//! Invariants:
//! - Empty collections print a human message, never an empty string.

use std::fmt::Write as _;

use anyhow::Result;
use preeval_client::models::{
    DateConfig, FileContent, FileListing, GeneratedReport, LoadingStatus, SystemStatus,
    UserList, UserSession,
};
use preeval_client::{EvaluationResult, HealthStatus, PolicyInfo};
use serde_json::Value;

use crate::formatters::Formatter;

pub struct TextFormatter;

/// Render a JSON scalar without quotes.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) if map.is_empty() => {
            let _ = writeln!(out, "{pad}(empty)");
        }
        Value::Object(map) => {
            for (key, value) in map {
                match value {
                    Value::Object(_) | Value::Array(_) => {
                        let _ = writeln!(out, "{pad}{key}:");
                        write_value(out, value, indent + 1);
                    }
                    scalar_value => {
                        let _ = writeln!(out, "{pad}{key}: {}", scalar(scalar_value));
                    }
                }
            }
        }
        Value::Array(items) if items.is_empty() => {
            let _ = writeln!(out, "{pad}(none)");
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        let _ = writeln!(out, "{pad}-");
                        write_value(out, item, indent + 1);
                    }
                    scalar_value => {
                        let _ = writeln!(out, "{pad}- {}", scalar(scalar_value));
                    }
                }
            }
        }
        scalar_value => {
            let _ = writeln!(out, "{pad}{}", scalar(scalar_value));
        }
    }
}

impl Formatter for TextFormatter {
    fn format_evaluation(&self, result: &EvaluationResult) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Decision: {}", result.decision)?;
        writeln!(out, "Reference: {}", result.reference)?;
        if !result.reasons.is_empty() {
            writeln!(out, "Reasons:")?;
            for reason in &result.reasons {
                writeln!(out, "  - {reason}")?;
            }
        }
        if !result.details.is_empty() {
            writeln!(out, "Details:")?;
            for (key, value) in &result.details {
                writeln!(out, "  {key}: {}", scalar(value))?;
            }
        }
        Ok(out)
    }

    fn format_policy(&self, policy: &PolicyInfo) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Credit policy")?;
        writeln!(
            out,
            "  Age: {} to {}",
            policy.age_limits.min, policy.age_limits.max
        )?;
        writeln!(
            out,
            "  Minimum monthly income: {:.2}",
            policy.income_requirements.min_monthly_income
        )?;
        writeln!(
            out,
            "  Amount: {:.2} to {:.2}",
            policy.loan_limits.min_amount, policy.loan_limits.max_amount
        )?;
        writeln!(
            out,
            "  Term: {} to {} months",
            policy.loan_limits.min_term, policy.loan_limits.max_term
        )?;
        writeln!(
            out,
            "  DTI: current <= {:.2}, total <= {:.2}, payment <= {:.2}",
            policy.dti_limits.current_dti_max,
            policy.dti_limits.total_dti_max,
            policy.dti_limits.max_payment_affectation
        )?;
        writeln!(
            out,
            "  Experience: employee >= {} months, self-employed >= {} months",
            policy.employment_experience.employee_min_months,
            policy.employment_experience.self_employed_min_months
        )?;
        writeln!(
            out,
            "  Credit score: {} to {}",
            policy.credit_score_limits.min_score, policy.credit_score_limits.max_score
        )?;
        Ok(out)
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Status: {}", health.status)?;
        if !health.message.is_empty() {
            writeln!(out, "Message: {}", health.message)?;
        }
        Ok(out)
    }

    fn format_session(&self, session: &UserSession) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", session.welcome)?;
        writeln!(out, "  Session: {}", session.session_id)?;
        writeln!(out, "  User: {} ({})", session.user.full_name, session.user.kind)?;
        writeln!(out, "  Sessions: {}", session.user.total_sessions)?;
        if !session.user.last_seen.is_empty() {
            writeln!(out, "  Last seen: {}", session.user.last_seen)?;
        }
        Ok(out)
    }

    fn format_users(&self, users: &UserList) -> Result<String> {
        if users.users.is_empty() {
            return Ok("No users found.\n".to_string());
        }
        let mut out = String::new();
        writeln!(out, "Found {} users:", users.users.len())?;
        write_value(&mut out, &Value::Array(users.users.clone()), 1);
        Ok(out)
    }

    fn format_date(&self, date: &DateConfig) -> Result<String> {
        Ok(format!("System date: {}\n", date.date))
    }

    fn format_files(&self, listing: &FileListing) -> Result<String> {
        if listing.files.is_empty() {
            return Ok("No files found.\n".to_string());
        }
        let mut out = String::new();
        writeln!(
            out,
            "Found {} files ({} predefined, {} user):",
            listing.total, listing.predefined, listing.user_created
        )?;
        for file in &listing.files {
            let lock = if file.read_only { " [read-only]" } else { "" };
            writeln!(
                out,
                "  {}\t{} bytes\t{}\tmodified {}\t{}{}",
                file.name, file.size_bytes, file.author, file.modified, file.origin, lock
            )?;
        }
        Ok(out)
    }

    fn format_file_content(&self, file: &FileContent) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "File: {}", file.name)?;
        writeln!(
            out,
            "Author: {}  Modified: {}  Lines: {}  Bytes: {}",
            file.metadata.author, file.metadata.modified, file.stats.lines, file.stats.size_bytes
        )?;
        writeln!(out)?;
        out.push_str(&file.content);
        if !file.content.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    fn format_loading(&self, status: &LoadingStatus) -> Result<String> {
        let mut out = String::new();
        for message in &status.messages {
            writeln!(out, "{message}")?;
        }
        let ready = if status.ready { "ready" } else { "not ready" };
        if status.load_time.is_empty() {
            writeln!(out, "System {ready}")?;
        } else {
            writeln!(out, "System {ready} ({})", status.load_time)?;
        }
        Ok(out)
    }

    fn format_system_status(&self, status: &SystemStatus) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Version: {}", status.version)?;
        writeln!(out, "Timestamp: {}", status.timestamp)?;
        writeln!(out, "System date: {}", status.system_date)?;
        writeln!(out, "Modules: {}", status.loaded_modules.join(", "))?;
        writeln!(out, "Current user:")?;
        write_value(&mut out, &status.current_user, 1);
        writeln!(out, "User stats:")?;
        write_value(&mut out, &status.user_stats, 1);
        writeln!(out, "File stats:")?;
        write_value(&mut out, &status.file_stats, 1);
        Ok(out)
    }

    fn format_report(&self, report: &GeneratedReport) -> Result<String> {
        let mut out = String::new();
        if !report.succeeded {
            let reason = report.error.as_deref().unwrap_or("unknown error");
            writeln!(out, "Report generation failed: {reason}")?;
            return Ok(out);
        }
        match &report.saved {
            Some(saved) => writeln!(
                out,
                "Report saved: {} ({} bytes)",
                saved.file_name, saved.size_bytes
            )?,
            None => writeln!(out, "Report generated")?,
        }
        if let Some(generated_at) = &report.generated_at {
            writeln!(out, "Generated at: {generated_at}")?;
        }
        if let Some(preview) = &report.preview {
            writeln!(out)?;
            writeln!(out, "{preview}")?;
        }
        Ok(out)
    }

    fn format_value(&self, value: &Value) -> Result<String> {
        let mut out = String::new();
        write_value(&mut out, value, 0);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preeval_client::Decision;
    use std::collections::BTreeMap;

    #[test]
    fn test_evaluation_text_lists_reasons_and_details() {
        let mut details = BTreeMap::new();
        details.insert("monthly_payment".to_string(), serde_json::json!(1808.93));
        let result = EvaluationResult {
            reference: "EVAL-1".to_string(),
            decision: Decision::Rejected,
            reasons: vec!["DTI too high".to_string(), "Score below minimum".to_string()],
            details,
        };

        let output = TextFormatter.format_evaluation(&result).unwrap();

        assert!(output.starts_with("Decision: REJECTED\n"));
        assert!(output.contains("  - DTI too high\n  - Score below minimum\n"));
        assert!(output.contains("  monthly_payment: 1808.93\n"));
    }

    #[test]
    fn test_evaluation_text_omits_empty_sections() {
        let result = EvaluationResult {
            reference: "EVAL-2".to_string(),
            decision: Decision::Approved,
            reasons: Vec::new(),
            details: BTreeMap::new(),
        };

        let output = TextFormatter.format_evaluation(&result).unwrap();

        assert_eq!(output, "Decision: APPROVED\nReference: EVAL-2\n");
    }

    #[test]
    fn test_value_renders_nested_objects() {
        let value = serde_json::json!({
            "total_usuarios": 2,
            "usuarios": ["ana", "luis"],
            "ultimo": null
        });

        let output = TextFormatter.format_value(&value).unwrap();

        assert!(output.contains("total_usuarios: 2\n"));
        assert!(output.contains("usuarios:\n  - ana\n  - luis\n"));
        assert!(output.contains("ultimo: N/A\n"));
    }

    #[test]
    fn test_empty_users_prints_message() {
        let users = UserList { users: Vec::new() };
        assert_eq!(
            TextFormatter.format_users(&users).unwrap(),
            "No users found.\n"
        );
    }
}
