//! Interactive application wizard.
//!
//! Responsibilities:
//! - Walk the user through the form steps, gating each step on its input rules.
//! - Submit through the `WizardController` and offer retry or start over on failure.
//! - Run an `InactivityMonitor` for the session; on expiry ask whether to continue
//!   and discard the application on abort.
//!
//! Does NOT handle:
//! - Prompt rendering (see `prompts`).
//!
//! Invariants:
//! - Prompts run on blocking threads so the monitor keeps ticking.
//! - An answer given after expiry is only applied when the user chooses to continue.

mod prompts;

use anyhow::{Context, Result};
use preeval_client::PreevalClient;
use preeval_config::InactivityConfig;
use preeval_wizard::inactivity::{
    Decision as SessionDecision, FnCallbacks, Urgency, format_seconds, urgency_for,
};
use preeval_wizard::wizard::{FORM_STEPS, validate_all, validate_step};
use preeval_wizard::{
    ActivityKind, FieldIssue, InactivityMonitor, WizardController, WizardError, WizardStep,
};
use tracing::{debug, info, warn};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::context::CommandContext;
use crate::progress::Spinner;
use prompts::{FailureChoice, StepAnswer};

type Controller = WizardController<PreevalClient>;

/// Run a blocking prompt while watching for Ctrl+C and session expiry.
///
/// Expiry cannot interrupt a terminal read, so it is announced once and
/// handled after the answer arrives. The last quarter of the countdown is
/// announced once too.
async fn ask<T, F>(cancel: &CancellationToken, monitor: &InactivityMonitor, prompt: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let mut task = tokio::task::spawn_blocking(prompt);
    let mut announced = monitor.state().expired;
    let mut warned = announced;
    let full = monitor.full_duration();
    let mut state = monitor.subscribe();
    loop {
        tokio::select! {
            res = &mut task => return res.context("prompt task failed")?,
            _ = cancel.cancelled() => return Err(Cancelled.into()),
            Ok(_) = monitor.expired(), if !announced => {
                announced = true;
                eprintln!("\nSession inactive. Your next answer will ask whether to continue.");
            }
            Ok(current) = state.wait_for(|s| {
                s.is_active && urgency_for(s.remaining_seconds, full) == Urgency::Critical
            }), if !warned => {
                warned = true;
                let remaining = format_seconds(current.remaining_seconds);
                eprintln!("\nSession expires in {remaining} without activity.");
            }
        }
    }
}

/// Wait until the monitor publishes an active countdown again.
async fn wait_until_active(monitor: &InactivityMonitor) {
    let mut state = monitor.subscribe();
    let _ = state.wait_for(|s| !s.expired).await;
}

/// Handle an expired session after the user answered a prompt.
///
/// Returns `true` when the session continues.
async fn resolve_expiry(
    cancel: &CancellationToken,
    monitor: &InactivityMonitor,
    controller: &Controller,
    minutes: u32,
) -> Result<bool> {
    let keep = ask(cancel, monitor, move || prompts::ask_continue(minutes)).await?;
    if keep {
        monitor.decide(SessionDecision::Continue).await?;
    } else {
        monitor.decide(SessionDecision::Abort).await?;
        controller.reset();
        monitor.reset().await?;
        eprintln!("Application discarded. Starting over.");
    }
    wait_until_active(monitor).await;
    Ok(keep)
}

/// Called after every answer: resolve an expiry or restart the countdown.
async fn after_answer(
    cancel: &CancellationToken,
    monitor: &InactivityMonitor,
    controller: &Controller,
    minutes: u32,
) -> Result<bool> {
    if monitor.state().expired {
        return resolve_expiry(cancel, monitor, controller, minutes).await;
    }
    monitor.record_activity(ActivityKind::KeyPress)?;
    Ok(true)
}

fn print_issues(issues: &[FieldIssue]) {
    for issue in issues {
        eprintln!("  ! {}", issue.message);
    }
}

fn print_step_header(step: WizardStep) {
    if let Some(number) = step.step_number() {
        eprintln!(
            "\nStep {number} of {FORM_STEPS}: {} ({}%)",
            step.title(),
            step.progress_percent()
        );
    }
}

pub async fn run(
    ctx: &CommandContext,
    inactivity: InactivityConfig,
    cancel: &CancellationToken,
) -> Result<()> {
    let minutes = inactivity.timeout_minutes;
    info!(timeout_minutes = minutes, "Starting application wizard");

    let controller = WizardController::new(ctx.client()?);
    let callbacks = FnCallbacks::new(
        || debug!("Session continued after inactivity"),
        || info!("Session ended after inactivity"),
    );
    let mut monitor = InactivityMonitor::spawn(inactivity, callbacks);

    eprintln!("Credit pre-evaluation. Type '{}' at any field to go back.", prompts::BACK);
    let outcome = drive(ctx, &controller, &monitor, minutes, cancel).await;

    if let Err(e) = monitor.shutdown().await {
        warn!(error = %e, "Inactivity monitor did not shut down cleanly");
    }
    outcome
}

async fn drive(
    ctx: &CommandContext,
    controller: &Controller,
    monitor: &InactivityMonitor,
    minutes: u32,
    cancel: &CancellationToken,
) -> Result<()> {
    loop {
        let state = controller.snapshot();
        let step = state.current_step;

        if step == WizardStep::Result {
            if let Some(result) = &state.result {
                let output = ctx.formatter().format_evaluation(result)?;
                ctx.emit(&output)?;
            }
            let again = ask(cancel, monitor, prompts::ask_start_over).await?;
            if !again {
                return Ok(());
            }
            controller.reset();
            monitor.reset().await?;
            continue;
        }

        print_step_header(step);
        let draft = state.draft.clone();
        let answer = ask(cancel, monitor, move || prompts::ask_step(step, &draft)).await?;
        if !after_answer(cancel, monitor, controller, minutes).await? {
            continue;
        }

        match answer {
            StepAnswer::Back => {
                if controller.prev_step() == step {
                    eprintln!("Already at the first step.");
                }
            }
            StepAnswer::Update(update) => {
                controller.update_data(update);
                let issues = validate_step(step, &controller.snapshot().draft);
                if !issues.is_empty() {
                    print_issues(&issues);
                    continue;
                }
                if step == WizardStep::Credit {
                    submit(ctx, controller, monitor, minutes, cancel).await?;
                } else {
                    controller.next_step();
                }
            }
        }
    }
}

/// Submit until the wizard reaches `Result` or the user leaves the submit loop.
async fn submit(
    ctx: &CommandContext,
    controller: &Controller,
    monitor: &InactivityMonitor,
    minutes: u32,
    cancel: &CancellationToken,
) -> Result<()> {
    let issues = validate_all(&controller.snapshot().draft);
    if let Some(first) = issues.first() {
        print_issues(&issues);
        controller.go_to_step(first.field.step())?;
        return Ok(());
    }

    loop {
        let spinner = Spinner::new(ctx.progress_enabled(), "Evaluating application");
        let outcome = tokio::select! {
            res = controller.submit_application() => res,
            _ = cancel.cancelled() => return Err(Cancelled.into()),
        };
        drop(spinner);

        let err = match outcome {
            Ok(result) => {
                info!(decision = %result.decision, "Application evaluated");
                return Ok(());
            }
            Err(err) => err,
        };

        if let WizardError::MissingFields(fields) = &err {
            eprintln!("  ! {err}");
            controller.dismiss_error();
            if let Some(field) = fields.first() {
                controller.go_to_step(field.step())?;
            }
            return Ok(());
        }
        let message = err.to_string();

        let choice = ask(cancel, monitor, move || prompts::ask_failure_choice(&message)).await?;
        if !after_answer(cancel, monitor, controller, minutes).await? {
            return Ok(());
        }
        match choice {
            FailureChoice::Retry => continue,
            FailureChoice::Edit => {
                controller.dismiss_error();
                controller.go_to_step(WizardStep::Personal)?;
                return Ok(());
            }
            FailureChoice::StartOver => {
                controller.reset();
                monitor.reset().await?;
                return Ok(());
            }
            FailureChoice::Quit => return Err(err).context("Evaluation failed"),
        }
    }
}
