//! Shared fakes for wizard integration tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use preeval_client::{
    ClientError, CreditApplication, Decision, EmploymentType, EvaluationResult, EvaluationService,
};
use preeval_wizard::DraftUpdate;
use tokio::sync::Notify;

/// What the fake service answers.
#[allow(dead_code)]
#[derive(Clone)]
pub enum Reply {
    Result(EvaluationResult),
    Fail(String),
    /// Never completes.
    Hang,
}

/// In-memory evaluation service that counts calls and can be held open.
pub struct FakeService {
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<CreditApplication>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl FakeService {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Block each call until `gate` is notified.
    pub fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(reply)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_application(&self) -> Option<CreditApplication> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl EvaluationService for FakeService {
    async fn evaluate(
        &self,
        application: &CreditApplication,
    ) -> preeval_client::Result<EvaluationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(application.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.reply {
            Reply::Result(result) => Ok(result.clone()),
            Reply::Fail(message) => Err(ClientError::ApiError {
                status: 503,
                url: "http://fake/api/v1/evaluate".to_string(),
                message: message.clone(),
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

#[allow(dead_code)]
pub fn approved() -> EvaluationResult {
    EvaluationResult {
        reference: "REF1".to_string(),
        decision: Decision::Approved,
        reasons: vec!["ok".to_string()],
        details: Default::default(),
    }
}

/// Every field populated with values that pass the step rules.
#[allow(dead_code)]
pub fn full_update() -> DraftUpdate {
    DraftUpdate {
        name: Some("Ana Torres".to_string()),
        age: Some(34),
        employment_type: Some(EmploymentType::Employee),
        months_of_experience: Some(48),
        monthly_income: Some(25_000.0),
        monthly_debt: Some(3_000.0),
        credit_score: Some(720),
        active_defaults: Some(false),
        amount: Some(100_000.0),
        term: Some(36),
    }
}
