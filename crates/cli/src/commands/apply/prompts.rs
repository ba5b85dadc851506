//! Blocking terminal prompts for the application steps.
//!
//! Every field prompt accepts `back` to return to the previous step. Values
//! already in the draft are offered as defaults. These functions block on
//! stdin and must run on a blocking thread.

use anyhow::{Result, anyhow};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use preeval_client::EmploymentType;
use preeval_wizard::{ApplicationDraft, DraftUpdate, WizardStep};
use std::fmt::Display;
use std::str::FromStr;

/// Typed at any field prompt to go back one step.
pub const BACK: &str = "back";

/// What the user did on a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAnswer {
    Back,
    Update(DraftUpdate),
}

/// Choice offered after a failed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureChoice {
    Retry,
    Edit,
    StartOver,
    Quit,
}

enum Field<T> {
    Value(T),
    Back,
}

fn is_back(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(BACK)
}

/// Unwrap a field answer, returning `StepAnswer::Back` from the caller on `back`.
macro_rules! take {
    ($field:expr) => {
        match $field? {
            Field::Value(value) => value,
            Field::Back => return Ok(StepAnswer::Back),
        }
    };
}

fn field<T>(theme: &ColorfulTheme, label: &str, current: Option<&T>) -> Result<Field<T>>
where
    T: FromStr + Display,
{
    let mut input = Input::<String>::with_theme(theme).with_prompt(label);
    if let Some(value) = current {
        input = input.default(value.to_string());
    }
    let raw = input
        .validate_with(|raw: &String| -> Result<(), String> {
            if is_back(raw) || raw.trim().parse::<T>().is_ok() {
                Ok(())
            } else {
                Err(format!("enter a valid value, or '{BACK}' for the previous step"))
            }
        })
        .interact_text()?;

    if is_back(&raw) {
        return Ok(Field::Back);
    }
    raw.trim()
        .parse()
        .map(Field::Value)
        .map_err(|_| anyhow!("invalid value for {label}"))
}

/// Ask for the fields of one form step.
pub fn ask_step(step: WizardStep, draft: &ApplicationDraft) -> Result<StepAnswer> {
    let theme = ColorfulTheme::default();
    match step {
        WizardStep::Personal => personal(&theme, draft),
        WizardStep::Employment => employment(&theme, draft),
        WizardStep::Financial => financial(&theme, draft),
        WizardStep::Credit => credit(&theme, draft),
        WizardStep::Result => Err(anyhow!("the result step has no fields")),
    }
}

fn personal(theme: &ColorfulTheme, draft: &ApplicationDraft) -> Result<StepAnswer> {
    let name: String = take!(field(theme, "Full name", draft.name.as_ref()));
    let age: u32 = take!(field(theme, "Age", draft.age.as_ref()));
    Ok(StepAnswer::Update(DraftUpdate {
        name: Some(name),
        age: Some(age),
        ..DraftUpdate::default()
    }))
}

fn employment(theme: &ColorfulTheme, draft: &ApplicationDraft) -> Result<StepAnswer> {
    const ITEMS: [&str; 3] = ["Employee", "Self-employed", "Back"];
    let default = match draft.employment_type {
        Some(EmploymentType::SelfEmployed) => 1,
        _ => 0,
    };
    let employment_type = match Select::with_theme(theme)
        .with_prompt("Employment type")
        .items(&ITEMS)
        .default(default)
        .interact()?
    {
        0 => EmploymentType::Employee,
        1 => EmploymentType::SelfEmployed,
        _ => return Ok(StepAnswer::Back),
    };
    let months: u32 = take!(field(
        theme,
        "Months of experience",
        draft.months_of_experience.as_ref()
    ));
    Ok(StepAnswer::Update(DraftUpdate {
        employment_type: Some(employment_type),
        months_of_experience: Some(months),
        ..DraftUpdate::default()
    }))
}

fn financial(theme: &ColorfulTheme, draft: &ApplicationDraft) -> Result<StepAnswer> {
    let income: f64 = take!(field(theme, "Monthly income", draft.monthly_income.as_ref()));
    let debt: f64 = take!(field(theme, "Monthly debt", draft.monthly_debt.as_ref()));
    let score: u32 = take!(field(theme, "Credit score", draft.credit_score.as_ref()));
    let active_defaults = Confirm::with_theme(theme)
        .with_prompt("Any active defaults?")
        .default(draft.active_defaults.unwrap_or(false))
        .interact()?;
    Ok(StepAnswer::Update(DraftUpdate {
        monthly_income: Some(income),
        monthly_debt: Some(debt),
        credit_score: Some(score),
        active_defaults: Some(active_defaults),
        ..DraftUpdate::default()
    }))
}

fn credit(theme: &ColorfulTheme, draft: &ApplicationDraft) -> Result<StepAnswer> {
    let amount: f64 = take!(field(theme, "Requested amount", draft.amount.as_ref()));
    let term: u32 = take!(field(theme, "Term in months", draft.term.as_ref()));
    Ok(StepAnswer::Update(DraftUpdate {
        amount: Some(amount),
        term: Some(term),
        ..DraftUpdate::default()
    }))
}

pub fn ask_failure_choice(message: &str) -> Result<FailureChoice> {
    const ITEMS: [&str; 4] = ["Retry", "Edit application", "Start over", "Quit"];
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Evaluation failed: {message}"))
        .items(&ITEMS)
        .default(0)
        .interact()?;
    Ok(match index {
        0 => FailureChoice::Retry,
        1 => FailureChoice::Edit,
        2 => FailureChoice::StartOver,
        _ => FailureChoice::Quit,
    })
}

/// Ask whether to start another application. `true` means start over.
pub fn ask_start_over() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Start a new application?")
        .default(false)
        .interact()?)
}

/// Ask whether to keep an expired session. `true` means continue.
pub fn ask_continue(minutes: u32) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "No activity for {minutes} minutes. Continue with this application?"
        ))
        .default(true)
        .interact()?)
}
