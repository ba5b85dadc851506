//! WizardController behaviour against fake evaluation services.
//!
//! # Invariants
//! - The service is called exactly once per accepted submission
//! - `result` is set only at the `Result` step
//! - `is_loading` never outlives the submission

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use preeval_wizard::{DraftField, DraftUpdate, WizardController, WizardError, WizardState, WizardStep};
use tokio::sync::Notify;

fn at_credit_step<S: preeval_client::EvaluationService>(controller: &WizardController<S>) {
    for _ in 0..3 {
        controller.next_step();
    }
    assert_eq!(controller.current_step(), WizardStep::Credit);
}

#[tokio::test]
async fn test_successful_submission_moves_to_result() {
    let controller = WizardController::new(FakeService::new(Reply::Result(approved())));
    controller.update_data(full_update());
    at_credit_step(&controller);

    let result = controller.submit_application().await.unwrap();

    let state = controller.snapshot();
    assert_eq!(result, approved());
    assert_eq!(state.current_step, WizardStep::Result);
    assert_eq!(state.result, Some(approved()));
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(controller.service().calls(), 1);
    assert_eq!(
        controller.service().last_application().unwrap().name,
        "Ana Torres"
    );
}

#[tokio::test]
async fn test_failed_submission_stays_on_credit_with_error() {
    let controller = WizardController::new(FakeService::new(Reply::Fail("timeout".to_string())));
    controller.update_data(full_update());
    at_credit_step(&controller);

    let err = controller.submit_application().await.unwrap_err();

    assert!(matches!(err, WizardError::Evaluation { ref message, .. } if message == "timeout"));
    let state = controller.snapshot();
    assert_eq!(state.current_step, WizardStep::Credit);
    assert_eq!(state.error.as_deref(), Some("timeout"));
    assert!(!state.is_loading);
    assert_eq!(state.result, None);
}

#[tokio::test]
async fn test_blank_failure_message_uses_fallback() {
    let controller = WizardController::new(FakeService::new(Reply::Fail("  ".to_string())));
    controller.update_data(full_update());

    controller.submit_application().await.unwrap_err();

    let error = controller.snapshot().error.unwrap();
    assert!(!error.trim().is_empty());
}

#[tokio::test]
async fn test_missing_credit_score_never_calls_service() {
    let controller = WizardController::new(FakeService::new(Reply::Result(approved())));
    controller.update_data(DraftUpdate {
        credit_score: None,
        ..full_update()
    });

    let err = controller.submit_application().await.unwrap_err();

    match err {
        WizardError::MissingFields(fields) => assert_eq!(fields, vec![DraftField::CreditScore]),
        other => panic!("expected MissingFields, got {other:?}"),
    }
    assert_eq!(controller.service().calls(), 0);
    let state = controller.snapshot();
    assert!(state.error.unwrap().contains("credit_score"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_empty_draft_lists_every_field() {
    let controller = WizardController::new(FakeService::new(Reply::Result(approved())));

    let err = controller.submit_application().await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required fields: name, age, employment_type, months_of_experience, \
         monthly_income, monthly_debt, credit_score, active_defaults, amount, term"
    );
}

#[tokio::test]
async fn test_second_submission_while_in_flight_is_rejected() {
    let gate = Arc::new(Notify::new());
    let controller = Arc::new(WizardController::new(FakeService::gated(
        Reply::Result(approved()),
        Arc::clone(&gate),
    )));
    controller.update_data(full_update());

    let first = tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.submit_application().await }
    });
    while controller.service().calls() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(controller.is_loading());

    let second = controller.submit_application().await;
    assert!(matches!(second, Err(WizardError::SubmissionInFlight)));
    assert!(controller.is_loading());
    assert_eq!(controller.service().calls(), 1);

    gate.notify_one();
    first.await.unwrap().unwrap();

    let state = controller.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.current_step, WizardStep::Result);
    assert_eq!(controller.service().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_submission_clears_loading() {
    let controller = WizardController::new(FakeService::new(Reply::Hang));
    controller.update_data(full_update());

    let outcome =
        tokio::time::timeout(Duration::from_secs(1), controller.submit_application()).await;

    assert!(outcome.is_err());
    let state = controller.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.current_step, WizardStep::Personal);
    assert_eq!(state.result, None);
}

#[tokio::test]
async fn test_reset_returns_initial_state() {
    let controller = WizardController::new(FakeService::new(Reply::Result(approved())));
    controller.update_data(full_update());
    controller.submit_application().await.unwrap();

    controller.reset();

    assert_eq!(controller.snapshot(), WizardState::initial());
    assert!(controller.snapshot().draft.is_empty());
}

#[tokio::test]
async fn test_dismiss_error_keeps_draft_and_step() {
    let controller = WizardController::new(FakeService::new(Reply::Fail("timeout".to_string())));
    controller.update_data(full_update());
    at_credit_step(&controller);
    controller.submit_application().await.unwrap_err();

    controller.dismiss_error();

    let state = controller.snapshot();
    assert_eq!(state.error, None);
    assert_eq!(state.current_step, WizardStep::Credit);
    assert_eq!(state.draft.credit_score, Some(720));
}

#[tokio::test]
async fn test_result_step_is_terminal_until_reset() {
    let controller = WizardController::new(FakeService::new(Reply::Result(approved())));
    controller.update_data(full_update());
    controller.submit_application().await.unwrap();

    assert_eq!(controller.prev_step(), WizardStep::Result);
    assert_eq!(controller.next_step(), WizardStep::Result);
    assert!(matches!(
        controller.go_to_step(WizardStep::Personal),
        Err(WizardError::StepUnavailable(WizardStep::Personal))
    ));
}

#[tokio::test]
async fn test_go_to_step_between_form_steps() {
    let controller = WizardController::new(FakeService::new(Reply::Result(approved())));

    controller.go_to_step(WizardStep::Financial).unwrap();
    assert_eq!(controller.current_step(), WizardStep::Financial);

    assert!(controller.go_to_step(WizardStep::Result).is_err());
    assert_eq!(controller.current_step(), WizardStep::Financial);
}
