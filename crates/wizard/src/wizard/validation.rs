//! Per-step input rules.
//!
//! The controller never validates; front ends call [`validate_step`] before
//! `next_step` and [`validate_all`] before `submit_application`.

use preeval_client::EmploymentType;
use preeval_config::constants::{
    EMPLOYEE_MIN_MONTHS, MAX_AGE, MAX_CREDIT_SCORE, MAX_TERM_MONTHS, MIN_AGE, MIN_CREDIT_SCORE,
    SELF_EMPLOYED_MIN_MONTHS,
};

use crate::wizard::{ApplicationDraft, DraftField, WizardStep};

/// A rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: DraftField,
    pub message: String,
}

impl FieldIssue {
    fn new(field: DraftField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn required(field: DraftField) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

/// Minimum months of experience for an employment type.
pub fn min_experience_months(employment_type: EmploymentType) -> u32 {
    match employment_type {
        EmploymentType::Employee => EMPLOYEE_MIN_MONTHS,
        EmploymentType::SelfEmployed => SELF_EMPLOYED_MIN_MONTHS,
    }
}

/// Check the fields collected by `step`. Empty when the step may advance.
pub fn validate_step(step: WizardStep, draft: &ApplicationDraft) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    match step {
        WizardStep::Personal => {
            match draft.name.as_deref() {
                Some(name) if !name.trim().is_empty() => {}
                Some(_) => issues.push(FieldIssue::new(DraftField::Name, "name must not be blank")),
                None => issues.push(FieldIssue::required(DraftField::Name)),
            }
            match draft.age {
                Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
                Some(age) => issues.push(FieldIssue::new(
                    DraftField::Age,
                    format!("age must be between {MIN_AGE} and {MAX_AGE}, got {age}"),
                )),
                None => issues.push(FieldIssue::required(DraftField::Age)),
            }
        }
        WizardStep::Employment => match (draft.employment_type, draft.months_of_experience) {
            (None, months) => {
                issues.push(FieldIssue::required(DraftField::EmploymentType));
                if months.is_none() {
                    issues.push(FieldIssue::required(DraftField::MonthsOfExperience));
                }
            }
            (Some(_), None) => issues.push(FieldIssue::required(DraftField::MonthsOfExperience)),
            (Some(kind), Some(months)) => {
                let min = min_experience_months(kind);
                if months < min {
                    issues.push(FieldIssue::new(
                        DraftField::MonthsOfExperience,
                        format!("at least {min} months of experience are required for {kind}"),
                    ));
                }
            }
        },
        WizardStep::Financial => {
            match draft.monthly_income {
                Some(income) if income > 0.0 => {}
                Some(_) => issues.push(FieldIssue::new(
                    DraftField::MonthlyIncome,
                    "monthly income must be greater than 0",
                )),
                None => issues.push(FieldIssue::required(DraftField::MonthlyIncome)),
            }
            match draft.monthly_debt {
                Some(debt) if debt >= 0.0 => {}
                Some(_) => issues.push(FieldIssue::new(
                    DraftField::MonthlyDebt,
                    "monthly debt must not be negative",
                )),
                None => issues.push(FieldIssue::required(DraftField::MonthlyDebt)),
            }
            match draft.credit_score {
                Some(score) if (MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&score) => {}
                Some(score) => issues.push(FieldIssue::new(
                    DraftField::CreditScore,
                    format!(
                        "credit score must be between {MIN_CREDIT_SCORE} and {MAX_CREDIT_SCORE}, got {score}"
                    ),
                )),
                None => issues.push(FieldIssue::required(DraftField::CreditScore)),
            }
            if draft.active_defaults.is_none() {
                issues.push(FieldIssue::required(DraftField::ActiveDefaults));
            }
        }
        WizardStep::Credit => {
            match draft.amount {
                Some(amount) if amount > 0.0 => {}
                Some(_) => issues.push(FieldIssue::new(
                    DraftField::Amount,
                    "amount must be greater than 0",
                )),
                None => issues.push(FieldIssue::required(DraftField::Amount)),
            }
            match draft.term {
                Some(term) if (1..=MAX_TERM_MONTHS).contains(&term) => {}
                Some(term) => issues.push(FieldIssue::new(
                    DraftField::Term,
                    format!("term must be between 1 and {MAX_TERM_MONTHS} months, got {term}"),
                )),
                None => issues.push(FieldIssue::required(DraftField::Term)),
            }
        }
        WizardStep::Result => {}
    }
    issues
}

/// Check every form step in order.
pub fn validate_all(draft: &ApplicationDraft) -> Vec<FieldIssue> {
    WizardStep::ALL
        .into_iter()
        .flat_map(|step| validate_step(step, draft))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ApplicationDraft {
        ApplicationDraft {
            name: Some("Ana".to_string()),
            age: Some(30),
            employment_type: Some(EmploymentType::Employee),
            months_of_experience: Some(6),
            monthly_income: Some(20_000.0),
            monthly_debt: Some(0.0),
            credit_score: Some(700),
            active_defaults: Some(false),
            amount: Some(50_000.0),
            term: Some(360),
        }
    }

    #[test]
    fn test_complete_draft_passes_every_step() {
        assert!(validate_all(&complete_draft()).is_empty());
    }

    #[test]
    fn test_age_bounds() {
        let mut draft = complete_draft();
        draft.age = Some(17);
        let issues = validate_step(WizardStep::Personal, &draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, DraftField::Age);

        draft.age = Some(120);
        assert!(validate_step(WizardStep::Personal, &draft).is_empty());
        draft.age = Some(121);
        assert!(!validate_step(WizardStep::Personal, &draft).is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut draft = complete_draft();
        draft.name = Some("   ".to_string());
        assert_eq!(
            validate_step(WizardStep::Personal, &draft)[0].field,
            DraftField::Name
        );
    }

    #[test]
    fn test_experience_threshold_depends_on_employment_type() {
        let mut draft = complete_draft();
        draft.months_of_experience = Some(6);
        assert!(validate_step(WizardStep::Employment, &draft).is_empty());

        draft.employment_type = Some(EmploymentType::SelfEmployed);
        let issues = validate_step(WizardStep::Employment, &draft);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("12"));

        draft.months_of_experience = Some(12);
        assert!(validate_step(WizardStep::Employment, &draft).is_empty());
    }

    #[test]
    fn test_credit_score_bounds() {
        let mut draft = complete_draft();
        for score in [300, 850] {
            draft.credit_score = Some(score);
            assert!(validate_step(WizardStep::Financial, &draft).is_empty());
        }
        for score in [299, 851] {
            draft.credit_score = Some(score);
            assert_eq!(validate_step(WizardStep::Financial, &draft).len(), 1);
        }
    }

    #[test]
    fn test_financial_step_requires_defaults_answer() {
        let mut draft = complete_draft();
        draft.active_defaults = None;
        let issues = validate_step(WizardStep::Financial, &draft);
        assert_eq!(issues[0].field, DraftField::ActiveDefaults);
    }

    #[test]
    fn test_credit_step_bounds() {
        let mut draft = complete_draft();
        draft.amount = Some(0.0);
        draft.term = Some(361);
        let fields: Vec<_> = validate_step(WizardStep::Credit, &draft)
            .into_iter()
            .map(|issue| issue.field)
            .collect();
        assert_eq!(fields, vec![DraftField::Amount, DraftField::Term]);
    }

    #[test]
    fn test_empty_draft_reports_each_required_field_once() {
        let issues = validate_all(&ApplicationDraft::default());
        let fields: Vec<_> = issues.iter().map(|issue| issue.field).collect();
        assert_eq!(fields, DraftField::ALL.to_vec());
    }
}
