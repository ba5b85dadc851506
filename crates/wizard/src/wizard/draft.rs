//! Partial application data accumulated across the wizard steps.

use std::fmt;

use preeval_client::{CreditApplication, EmploymentType};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
use crate::wizard::WizardStep;

/// One application field, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Age,
    EmploymentType,
    MonthsOfExperience,
    MonthlyIncome,
    MonthlyDebt,
    CreditScore,
    ActiveDefaults,
    Amount,
    Term,
}

impl DraftField {
    /// Canonical order used when reporting missing fields.
    pub const ALL: [DraftField; 10] = [
        Self::Name,
        Self::Age,
        Self::EmploymentType,
        Self::MonthsOfExperience,
        Self::MonthlyIncome,
        Self::MonthlyDebt,
        Self::CreditScore,
        Self::ActiveDefaults,
        Self::Amount,
        Self::Term,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::EmploymentType => "employment_type",
            Self::MonthsOfExperience => "months_of_experience",
            Self::MonthlyIncome => "monthly_income",
            Self::MonthlyDebt => "monthly_debt",
            Self::CreditScore => "credit_score",
            Self::ActiveDefaults => "active_defaults",
            Self::Amount => "amount",
            Self::Term => "term",
        }
    }

    /// The form step that collects this field.
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::Name | Self::Age => WizardStep::Personal,
            Self::EmploymentType | Self::MonthsOfExperience => WizardStep::Employment,
            Self::MonthlyIncome | Self::MonthlyDebt | Self::CreditScore | Self::ActiveDefaults => {
                WizardStep::Financial
            }
            Self::Amount | Self::Term => WizardStep::Credit,
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application fields collected so far. A field once set is only cleared by
/// a full reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDraft {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub employment_type: Option<EmploymentType>,
    pub months_of_experience: Option<u32>,
    pub monthly_income: Option<f64>,
    pub monthly_debt: Option<f64>,
    pub credit_score: Option<u32>,
    pub active_defaults: Option<bool>,
    pub amount: Option<f64>,
    pub term: Option<u32>,
}

/// A shallow patch for [`ApplicationDraft`]: `Some` overwrites, `None` leaves
/// the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub employment_type: Option<EmploymentType>,
    pub months_of_experience: Option<u32>,
    pub monthly_income: Option<f64>,
    pub monthly_debt: Option<f64>,
    pub credit_score: Option<u32>,
    pub active_defaults: Option<bool>,
    pub amount: Option<f64>,
    pub term: Option<u32>,
}

impl DraftUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ApplicationDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge `update` into the draft.
    pub fn merge(&mut self, update: DraftUpdate) {
        fn set<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut self.name, update.name);
        set(&mut self.age, update.age);
        set(&mut self.employment_type, update.employment_type);
        set(&mut self.months_of_experience, update.months_of_experience);
        set(&mut self.monthly_income, update.monthly_income);
        set(&mut self.monthly_debt, update.monthly_debt);
        set(&mut self.credit_score, update.credit_score);
        set(&mut self.active_defaults, update.active_defaults);
        set(&mut self.amount, update.amount);
        set(&mut self.term, update.term);
    }

    pub fn has(&self, field: DraftField) -> bool {
        match field {
            DraftField::Name => self.name.is_some(),
            DraftField::Age => self.age.is_some(),
            DraftField::EmploymentType => self.employment_type.is_some(),
            DraftField::MonthsOfExperience => self.months_of_experience.is_some(),
            DraftField::MonthlyIncome => self.monthly_income.is_some(),
            DraftField::MonthlyDebt => self.monthly_debt.is_some(),
            DraftField::CreditScore => self.credit_score.is_some(),
            DraftField::ActiveDefaults => self.active_defaults.is_some(),
            DraftField::Amount => self.amount.is_some(),
            DraftField::Term => self.term.is_some(),
        }
    }

    /// Absent fields, in canonical order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// Build the complete application, or list every missing field.
    pub fn to_application(&self) -> Result<CreditApplication> {
        match (
            self.name.clone(),
            self.age,
            self.employment_type,
            self.months_of_experience,
            self.monthly_income,
            self.monthly_debt,
            self.credit_score,
            self.active_defaults,
            self.amount,
            self.term,
        ) {
            (
                Some(name),
                Some(age),
                Some(employment_type),
                Some(months_of_experience),
                Some(monthly_income),
                Some(monthly_debt),
                Some(credit_score),
                Some(active_defaults),
                Some(amount),
                Some(term),
            ) => Ok(CreditApplication {
                name,
                age,
                monthly_income,
                monthly_debt,
                employment_type,
                months_of_experience,
                credit_score,
                amount,
                term,
                active_defaults,
            }),
            _ => Err(WizardError::MissingFields(self.missing_fields())),
        }
    }
}
