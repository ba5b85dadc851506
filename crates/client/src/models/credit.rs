//! Credit evaluation models.
//!
//! Wire names follow the evaluation service's JSON schema; field names are
//! kept as-is because the service uses English snake_case.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Employment category of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    Employee,
    SelfEmployed,
}

impl EmploymentType {
    /// Wire representation (`EMPLOYEE` / `SELF_EMPLOYED`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::SelfEmployed => "SELF_EMPLOYED",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully populated credit application, as sent to `POST /api/v1/evaluate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub name: String,
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_debt: f64,
    pub employment_type: EmploymentType,
    pub months_of_experience: u32,
    pub credit_score: u32,
    pub amount: f64,
    pub term: u32,
    pub active_defaults: bool,
}

/// Outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    Counteroffer,
    Rejected,
}

impl Decision {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Counteroffer => "COUNTEROFFER",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluation returned by the service. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Service-generated reference for the evaluation.
    pub reference: String,
    pub decision: Decision,
    /// Ordered reasons for the decision.
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Scalar details (rates, payments, ratios) keyed by name.
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Credit policy limits published by `GET /api/v1/policy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInfo {
    pub age_limits: AgeLimits,
    pub income_requirements: IncomeRequirements,
    pub loan_limits: LoanLimits,
    pub dti_limits: DtiLimits,
    pub employment_experience: EmploymentExperience,
    pub credit_score_limits: CreditScoreLimits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeLimits {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeRequirements {
    pub min_monthly_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanLimits {
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_term: u32,
    pub max_term: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DtiLimits {
    pub current_dti_max: f64,
    pub total_dti_max: f64,
    pub max_payment_affectation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentExperience {
    pub employee_min_months: u32,
    pub self_employed_min_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScoreLimits {
    pub min_score: u32,
    pub max_score: u32,
}
